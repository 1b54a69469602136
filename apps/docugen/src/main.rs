//! DocuGen CLI - paginate text files into PDFs and rewrite them with Gemini.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use docugen::config::Config;
use docugen::llm_client::{GeminiClient, MODEL};
use docugen::{
    export_pdf, layout_document, run_enhancement, EditorState, EngineError, EnhanceAction,
    EnhanceOutcome, EnhanceStatus, FontFamily, Orientation, PageConfig, PaperSize,
    EXPORT_FILE_NAME,
};

#[derive(Parser)]
#[command(name = "docugen")]
#[command(version)]
#[command(about = "Plain-text documents to paginated PDFs, with optional AI rewriting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Paginate a text file and save it as a PDF
    Export {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Directory the PDF is written into
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Rewrite a text file with Gemini and print (or save) the result
    Enhance {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Rewrite mode
        #[arg(long, value_enum, default_value = "polish")]
        action: ActionArg,

        /// Write the rewritten text back to the input file
        #[arg(long)]
        write: bool,
    },

    /// Show character, word, line, and page counts for a text file
    Stats {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        page: PageArgs,
    },
}

/// Page geometry flags shared by `export` and `stats`.
#[derive(Args)]
struct PageArgs {
    /// Font size in points (clamped to 8-36)
    #[arg(long, default_value = "12.0")]
    font_size: f32,

    /// Line height multiplier (clamped to 1.0-3.0)
    #[arg(long, default_value = "1.5")]
    line_height: f32,

    /// Page margin in millimeters (clamped to 5-60)
    #[arg(long, default_value = "20.0")]
    margin: f32,

    /// Paper size
    #[arg(long, value_enum, default_value = "a4")]
    paper: PaperArg,

    /// Rotate the page to landscape
    #[arg(long)]
    landscape: bool,

    /// Typeface
    #[arg(long, value_enum, default_value = "helvetica")]
    font: FontArg,
}

impl PageArgs {
    fn to_config(&self) -> PageConfig {
        PageConfig {
            font_family: self.font.into(),
            font_size_pt: self.font_size,
            line_height: self.line_height,
            margin_mm: self.margin,
            paper_size: self.paper.into(),
            orientation: if self.landscape {
                Orientation::Landscape
            } else {
                Orientation::Portrait
            },
        }
        .clamped()
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PaperArg {
    A4,
    Letter,
    Legal,
}

impl From<PaperArg> for PaperSize {
    fn from(paper: PaperArg) -> Self {
        match paper {
            PaperArg::A4 => PaperSize::A4,
            PaperArg::Letter => PaperSize::Letter,
            PaperArg::Legal => PaperSize::Legal,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FontArg {
    Helvetica,
    Times,
    Courier,
}

impl From<FontArg> for FontFamily {
    fn from(font: FontArg) -> Self {
        match font {
            FontArg::Helvetica => FontFamily::Helvetica,
            FontArg::Times => FontFamily::Times,
            FontArg::Courier => FontFamily::Courier,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ActionArg {
    /// Fix grammar and improve clarity
    Polish,
    /// Condense into a short summary
    Summarize,
    /// Reformat with headings and bullet points
    Structure,
}

impl From<ActionArg> for EnhanceAction {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::Polish => EnhanceAction::Polish,
            ActionArg::Summarize => EnhanceAction::Summarize,
            ActionArg::Structure => EnhanceAction::Structure,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export {
            input,
            out_dir,
            page,
        } => cmd_export(&input, &out_dir, page.to_config()),
        Commands::Enhance {
            input,
            action,
            write,
        } => cmd_enhance(&input, action.into(), write).await,
        Commands::Stats { input, page } => cmd_stats(&input, page.to_config()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_export(input: &Path, out_dir: &Path, config: PageConfig) -> Result<(), EngineError> {
    let text = fs::read_to_string(input)?;

    let mut state = EditorState::with_document(text);
    state.config = config;

    match export_pdf(&state) {
        Some(artifact) => {
            fs::create_dir_all(out_dir)?;
            let path = out_dir.join(EXPORT_FILE_NAME);
            fs::write(&path, &artifact.bytes)?;
            println!(
                "Wrote {} ({} pages, {} lines)",
                path.display(),
                artifact.page_count,
                artifact.line_count
            );
        }
        None => println!("Nothing to export: document is empty"),
    }

    Ok(())
}

async fn cmd_enhance(input: &Path, action: EnhanceAction, write: bool) -> Result<(), EngineError> {
    let text = fs::read_to_string(input)?;
    let mut state = EditorState::with_document(text);

    let config = Config::from_env()?;
    let client = GeminiClient::new(config.gemini_api_key);
    info!("LLM client initialized (model: {MODEL})");

    match run_enhancement(&mut state, action, &client).await {
        EnhanceOutcome::Applied => {
            if write {
                fs::write(input, &state.document)?;
                println!("Rewrote {}", input.display());
            } else {
                println!("{}", state.document);
            }
            Ok(())
        }
        EnhanceOutcome::EmptyInput => {
            println!("Nothing to enhance: document is empty");
            Ok(())
        }
        EnhanceOutcome::AlreadyRunning => Err(EngineError::Llm(
            "an enhancement is already running".to_string(),
        )),
        EnhanceOutcome::ServiceFailed => {
            let message = match &state.enhance {
                EnhanceStatus::Failed(message) => message.clone(),
                _ => "enhancement failed".to_string(),
            };
            Err(EngineError::Llm(message))
        }
    }
}

fn cmd_stats(input: &Path, config: PageConfig) -> Result<(), EngineError> {
    let text = fs::read_to_string(input)?;

    let mut state = EditorState::with_document(text);
    state.config = config;

    let stats = state.stats();
    let layout = layout_document(&state.document, &state.config);

    println!("Characters: {}", stats.characters);
    println!("Words:      {}", stats.words);
    println!("Lines:      {}", layout.lines.len());
    println!("Pages:      {}", layout.page_count);

    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
