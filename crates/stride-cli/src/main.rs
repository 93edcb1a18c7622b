mod commands;
mod input;
mod output;
mod progress;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "stride",
    version,
    about = "Search documents for equidistant letter sequences"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a document (PDF, XLSX or plain text) for hidden phrases
    Scan {
        /// Path to the document
        input_file: PathBuf,

        /// Phrase to search for (repeatable)
        #[arg(short, long = "phrase", value_name = "PHRASE")]
        phrase: Vec<String>,

        /// Phrase file: JSON phrase set or one phrase per line (repeatable)
        #[arg(long = "phrases", value_name = "FILE")]
        phrases: Vec<PathBuf>,

        /// Predefined phrase set(s): classic, cipher (default: classic if nothing else given)
        #[arg(long = "preset", value_name = "NAME")]
        preset: Vec<String>,

        /// JSON file with search parameters
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Smallest stride to scan
        #[arg(long, value_name = "N")]
        min_distance: Option<usize>,

        /// Largest stride to scan
        #[arg(long, value_name = "N")]
        max_distance: Option<usize>,

        /// Length of the hidden paragraph shown around each match
        #[arg(long, value_name = "N")]
        paragraph_length: Option<usize>,

        /// Characters of original text shown around each matched letter
        #[arg(long, value_name = "N")]
        context_radius: Option<usize>,

        /// Give up after this many seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Keep PDF column layout when extracting text
        #[arg(long)]
        layout: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the report to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Show hidden paragraphs and literal context for every match
        #[arg(long)]
        details: bool,
    },
    /// Print a document's normalized text (without searching)
    Normalize {
        /// Path to the document
        input_file: PathBuf,

        /// Print the letter grid used for scanning
        #[arg(long)]
        grid: bool,

        /// Keep PDF column layout when extracting text
        #[arg(long)]
        layout: bool,
    },
    /// Manage and inspect phrase sets
    Phrases {
        #[command(subcommand)]
        action: PhrasesAction,
    },
}

#[derive(Subcommand)]
enum PhrasesAction {
    /// List predefined phrase sets
    List,
    /// Show the phrases of a predefined set
    Show {
        /// Preset name (e.g., "classic")
        preset: String,
    },
    /// Validate a phrase file
    Validate {
        /// Path to JSON or plain text phrase file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Scan {
            input_file,
            phrase,
            phrases,
            preset,
            config,
            min_distance,
            max_distance,
            paragraph_length,
            context_radius,
            timeout,
            layout,
            output,
            out,
            details,
        } => commands::scan::run(commands::scan::ScanArgs {
            input_file,
            phrases: phrase,
            phrase_files: phrases,
            presets: preset,
            config,
            min_distance,
            max_distance,
            paragraph_length,
            context_radius,
            timeout,
            layout,
            output_format: output,
            output_file: out,
            details,
        }),
        Commands::Normalize {
            input_file,
            grid,
            layout,
        } => commands::normalize::run(input_file, grid, layout),
        Commands::Phrases { action } => match action {
            PhrasesAction::List => commands::phrases::list(),
            PhrasesAction::Show { preset } => commands::phrases::show(&preset),
            PhrasesAction::Validate { file } => commands::phrases::validate(&file),
        },
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
