// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for user interaction, parsed with clap.
// All work is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `ingest` — fetch, snapshot and split (the default when
//                 no subcommand is given)
//   2. `config` — print or save the resolved configuration
//
// Reference: Rust Book §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ConfigArgs, IngestArgs};

use crate::application::ingest_use_case::DataIngestion;
use crate::infra::config_store::ConfigStore;

#[derive(Parser, Debug)]
#[command(
    name = "performance-ingest",
    version,
    about = "Fetch a document collection, snapshot it to CSV and split it into train/test files."
)]
pub struct Cli {
    /// The subcommand to run (defaults to `ingest`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Dispatch to the selected subcommand.
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Ingest(args)) => run_ingest(args),
            Some(Commands::Config(args)) => run_config(args),
            None                         => run_ingest(IngestArgs::default()),
        }
    }
}

fn run_ingest(args: IngestArgs) -> Result<()> {
    let cfg = args.resolve()?;
    tracing::info!(
        "Ingesting {}.{} into '{}'",
        cfg.store.database,
        cfg.store.collection,
        cfg.paths.raw.display()
    );

    let artifacts = DataIngestion::new(cfg).run()?;

    println!("Raw rows:   {}", artifacts.raw_rows);
    println!("Train data: {} ({} rows)", artifacts.train_path.display(), artifacts.train_rows);
    println!("Test data:  {} ({} rows)", artifacts.test_path.display(), artifacts.test_rows);
    Ok(())
}

fn run_config(args: ConfigArgs) -> Result<()> {
    let cfg = args.ingest.resolve()?;
    match args.output {
        Some(path) => {
            ConfigStore::new(&path).save(&cfg)?;
            println!("Configuration written to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&cfg)?),
    }
    Ok(())
}
