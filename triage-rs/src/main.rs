//! CLI for triage-rs
//!
//! # Usage
//!
//! ```bash
//! # Categorize a directory of .txt emails and print the report
//! triage-rs run data/sample_emails
//!
//! # Also write a CSV report and copy emails into category folders
//! triage-rs run data/sample_emails --csv reports --organize categorized
//!
//! # Classify one snippet
//! triage-rs classify "I want to foster a dog"
//!
//! # Start the web interface
//! triage-rs serve --listen 127.0.0.1:5000
//! ```

use clap::{Parser, Subcommand};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use triage_rs::api::ApiServer;
use triage_rs::batch::BatchRunner;
use triage_rs::classifier::Classifier;
use triage_rs::config::{Config, RulesConfig};
use triage_rs::export::{organize_emails, render_table, save_csv};
use triage_rs::ingest::load_directory;
use triage_rs::report::Aggregator;
use triage_rs::rules::RuleSet;

#[derive(Parser)]
#[command(name = "triage-rs")]
#[command(about = "Categorize volunteer application emails", long_about = None)]
struct Cli {
    /// TOML rules file (defaults to the rules in config.toml, then builtin)
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Categorize all .txt emails in a directory and print a report
    Run {
        /// Directory containing .txt email files
        dir: PathBuf,
        /// Write a CSV report into this directory
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Copy emails into per-category folders under this directory
        #[arg(long)]
        organize: Option<PathBuf>,
    },
    /// Classify a single piece of text
    Classify {
        /// Email text
        text: String,
    },
    /// Start the HTTP interface
    Serve {
        /// Listen address (overrides config)
        #[arg(long)]
        listen: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None if Path::new("config.toml").exists() => Config::from_file("config.toml")?,
        None => Config::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Rule problems surface here, before any batch runs.
    let rules = match &cli.rules {
        Some(path) => RulesConfig::from_file(path)?.to_rule_set()?,
        None => config.rule_set()?,
    };
    info!("Loaded {} categories", rules.len());

    match cli.command {
        Commands::Run { dir, csv, organize } => run_batch(&rules, &dir, csv, organize)?,
        Commands::Classify { text } => {
            let classification = Classifier::new(&rules).classify(&text);
            if classification.matched_terms.is_empty() {
                println!("{}", classification.category);
            } else {
                println!(
                    "{} (matched: {})",
                    classification.category,
                    classification.matched_terms.join(", ")
                );
            }
        }
        Commands::Serve { listen } => {
            let addr = listen.unwrap_or_else(|| config.server.listen_addr.clone());
            let server = ApiServer::new(rules, config, addr);
            server.run().await?;
        }
    }

    Ok(())
}

fn run_batch(
    rules: &RuleSet,
    dir: &Path,
    csv: Option<PathBuf>,
    organize: Option<PathBuf>,
) -> anyhow::Result<()> {
    let files = load_directory(dir)?;
    if files.is_empty() {
        println!("No .txt files found in {}", dir.display());
        return Ok(());
    }
    println!("Found {} email files in {}", files.len(), dir.display());

    let records: Vec<_> = files.iter().map(|f| f.record.clone()).collect();
    let results = BatchRunner::new(rules).run(&records);

    for (file, result) in files.iter().zip(&results) {
        println!("  {:<24} -> {}", file.file_name, result.category);
    }

    let batch_id = Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let report = Aggregator::new(rules).aggregate(&results, &batch_id);
    println!("\n{}", render_table(&report));

    if let Some(csv_dir) = csv {
        let path = save_csv(&report, &csv_dir)?;
        println!("CSV report written to {}", path.display());
    }

    if let Some(out_dir) = organize {
        let placed = organize_emails(&files, &results, &out_dir)?;
        println!("Organized {} emails into {}", placed, out_dir.display());
    }

    Ok(())
}
