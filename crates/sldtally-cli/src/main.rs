mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "sldtally",
    version,
    about = "Count circuit breakers on a single-line diagram PDF"
)]
struct Cli {
    /// Log pipeline steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the breaker inventory of a drawing (PDF or pre-extracted .txt)
    Summarize {
        /// Path to PDF, or text with form-feed page breaks
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Also write the inventory to an xlsx workbook
        #[arg(long, value_name = "FILE")]
        xlsx: Option<PathBuf>,

        /// Worksheet name for --xlsx
        #[arg(long, default_value = sldtally_core::export::DEFAULT_SHEET_NAME)]
        sheet: String,

        /// Extract with pdftotext -layout
        #[arg(long)]
        layout: bool,
    },
    /// Print the abbreviation legend found in a drawing
    Abbreviations {
        /// Path to PDF, or text with form-feed page breaks
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Extract with pdftotext -layout
        #[arg(long)]
        layout: bool,
    },
    /// Print the built-in text corrections and rating overrides
    Rules,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Summarize {
            input_file,
            output,
            xlsx,
            sheet,
            layout,
        } => commands::summarize::run(input_file, &output, xlsx, &sheet, layout, cli.verbose),
        Commands::Abbreviations {
            input_file,
            output,
            layout,
        } => commands::abbreviations::run(input_file, &output, layout),
        Commands::Rules => commands::rules::list(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
