// Enhancement flow: directive prompts, the single-flight request state
// machine, and the backend trait the Gemini client plugs into.
// All HTTP traffic goes through llm_client; nothing here hits the API
// directly.

pub mod controller;
pub mod prompts;

pub use controller::{
    run_enhancement, EnhanceAction, EnhanceOutcome, TextEnhancer, ENHANCE_FAILURE_MESSAGE,
};
