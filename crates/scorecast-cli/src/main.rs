//! scorecast CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "scorecast", version, about = "Student reading-score prediction client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict reading scores for one record or a directory of records
    Predict {
        /// Path to a student record .toml file, or a directory of records
        #[arg(long)]
        record: Option<PathBuf>,

        /// Set or override a field, e.g. --set gender=female (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// Write a JSON report of the run to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate student record files
    Validate {
        /// Path to a record file or directory
        #[arg(long)]
        record: PathBuf,
    },

    /// Check prediction service health
    Health {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show metadata about the model behind the service
    ModelInfo {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and example student record
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scorecast=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Predict {
            record,
            set,
            output,
            config,
        } => commands::predict::execute(record, set, output, config).await,
        Commands::Validate { record } => commands::validate::execute(record),
        Commands::Health { config } => commands::health::execute(config).await,
        Commands::ModelInfo { config } => commands::model_info::execute(config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
