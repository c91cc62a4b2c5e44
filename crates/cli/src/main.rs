//! # rubric-cli
//!
//! Extract the tables on selected pages of a PDF into an Excel workbook.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rubric_core::{
    extract_file, parse_page_numbers, Artifact, PdfOptions, TableStrategy, DEFAULT_PAGES,
    OUTPUT_FILE_NAME,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// rubric - extract PDF tables into a formatted spreadsheet
#[derive(Parser, Debug)]
#[command(name = "rubric")]
#[command(author, version, about = "Extract PDF tables into an Excel workbook", long_about = None)]
struct Cli {
    /// PDF file to read
    #[arg(value_name = "PDF")]
    file: PathBuf,

    /// Page numbers, comma-separated (non-numeric entries are ignored)
    #[arg(short, long, default_value = DEFAULT_PAGES)]
    pages: String,

    /// Where to write the workbook
    #[arg(short, long, default_value = OUTPUT_FILE_NAME)]
    output: PathBuf,

    /// Table finding strategy: lattice (ruled cells) or stream (aligned text)
    #[arg(long, default_value_t = TableStrategy::Lattice)]
    strategy: TableStrategy,

    /// Tolerance for snapping nearly aligned ruling lines
    #[arg(long, default_value_t = 3.0)]
    snap_tolerance: f64,

    /// Tolerance for assigning text to cells
    #[arg(long, default_value_t = 3.0)]
    text_tolerance: f64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn pdf_options(&self) -> PdfOptions {
        PdfOptions {
            strategy: self.strategy,
            snap_tolerance: self.snap_tolerance,
            text_tolerance: self.text_tolerance,
            ..PdfOptions::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let pages = parse_page_numbers(&cli.pages);
    tracing::debug!("Requested pages: {:?}", pages);

    let artifact = extract_file(&cli.file, &pages, &cli.pdf_options())
        .with_context(|| format!("Failed to extract tables from {}", cli.file.display()))?;

    print_notices(&artifact);

    std::fs::write(&cli.output, &artifact.bytes)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    println!("{} {}", "Wrote".green().bold(), cli.output.display());

    Ok(())
}

fn print_notices(artifact: &Artifact) {
    for notice in &artifact.notices {
        if notice.is_warning() {
            eprintln!("{} {}", "Warning:".yellow().bold(), notice);
        } else {
            eprintln!("{} {}", "Info:".cyan(), notice);
        }
    }
}
