use thiserror::Error;

/// Application-level error type for the CLI command paths.
///
/// Library layers stay more precise (`LlmError` in `llm_client`; `layout`
/// and `render` are infallible); this enum is where the fallible ones meet
/// the exit code.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
