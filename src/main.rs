//! CLI front end: collects two drug names, renders interactions.
//!
//! Everything here is argument handling and rendering; classification and
//! lookup live in the library.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rxcheck::{config, load_rows, DataFormatError, InteractionIndex};

/// Rxcheck — check two drugs for known interactions and their severity.
#[derive(Parser, Debug)]
#[command(name = "rxcheck", version, about)]
struct Cli {
    /// Path to the interaction dataset CSV.
    /// Falls back to RXCHECK_DATA, then to the default data directory.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up documented interactions between two drugs.
    Check {
        /// First drug name (case and surrounding whitespace ignored).
        drug1: String,
        /// Second drug name.
        drug2: String,
    },

    /// List every drug name in the dataset.
    Drugs,
}

fn dataset_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.data {
        return path.clone();
    }
    if let Ok(path) = std::env::var("RXCHECK_DATA") {
        return PathBuf::from(path);
    }
    config::default_dataset_path()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), DataFormatError> {
    let path = dataset_path(cli);
    let index = InteractionIndex::build(load_rows(&path)?)?;

    match &cli.command {
        Commands::Check { drug1, drug2 } => check(&index, drug1, drug2, cli.json),
        Commands::Drugs => drugs(&index, cli.json),
    }
    Ok(())
}

fn check(index: &InteractionIndex, drug1: &str, drug2: &str, json: bool) {
    let records = index.lookup(drug1, drug2);

    if json {
        println!("{}", serde_json::to_string_pretty(&records).expect("serialize records"));
        return;
    }

    if records.is_empty() {
        println!("No known interaction between the selected drugs.");
        return;
    }

    println!("Interaction(s) found:");
    for record in records {
        println!("- {} [{}]", record.description, record.severity);
    }
    let worst = records.iter().map(|r| r.severity).max().expect("non-empty records");
    println!("Worst severity: {worst}");
}

fn drugs(index: &InteractionIndex, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(index.drug_names()).expect("serialize names")
        );
        return;
    }
    for name in index.drug_names() {
        println!("{name}");
    }
}
