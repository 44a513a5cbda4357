//! CLI application that extracts text from a fixed-location PDF and
//! reports a JSON status line for the invoking workflow tool.

use std::path::Path;
use std::time::Instant;

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use pdftext_core::{extract_file, ExtractionResult};

/// Location the invoking workflow drops the PDF before each run.
const INPUT_PATH: &str = "/tmp/temp_file.pdf";

/// Extract text from the staged PDF and report the result as JSON
#[derive(Parser)]
#[command(name = "pdftext")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity. All of it goes to stderr:
    // stdout carries exactly one JSON line per run.
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let start = Instant::now();

    // An extraction failure is part of the stdout contract, not a process
    // failure: the workflow tool reads the status field, never the exit
    // code.
    let result = match extract_file(Path::new(INPUT_PATH)) {
        Ok(text) => ExtractionResult::success(text),
        Err(e) => {
            eprintln!("Error processing PDF: {}", e);
            ExtractionResult::failure(e.to_string())
        }
    };

    debug!("processed {} in {:?}", INPUT_PATH, start.elapsed());

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
