//! Wiring & CLI. Entry point: load config, bootstrap the repository, run a command.
//! No schema logic here; it lives in the domain and use cases.

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use zwerm_schema::adapters::persistence::JsonlRepo;
use zwerm_schema::domain::RecordKind;
use zwerm_schema::ports::RecordRepo;
use zwerm_schema::shared::config::AppConfig;
use zwerm_schema::usecases::{MigrationService, ValidationService};

#[derive(Parser, Debug)]
#[command(name = "zwerm-schema", version, about = "Validate and migrate Zwerm records")]
struct Cli {
    /// Directory of JSONL collections (overrides ZWERM_SCHEMA_DATA_DIR).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the record kinds that can be validated.
    Kinds,
    /// Validate every record of a collection.
    Validate {
        /// Collection name ({data_dir}/{collection}.jsonl).
        collection: String,
        /// Record kind, e.g. user-entry or bot-info.
        #[arg(long)]
        kind: RecordKind,
        /// Reject keys the record kind does not declare.
        #[arg(long)]
        strict: bool,
    },
    /// Convert legacy channel maps into the current channel shape.
    MigrateChannels { source: String, target: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    let cli = Cli::parse();
    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("config: {}", e))?;
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(cfg.data_dir_or_default()));
    info!(path = %data_dir.display(), "data directory");
    let repo: Arc<dyn RecordRepo> = Arc::new(JsonlRepo::new(&data_dir));

    match cli.command {
        Command::Kinds => {
            for kind in RecordKind::ALL {
                if kind.is_deprecated() {
                    println!("{} (deprecated)", kind);
                } else {
                    println!("{}", kind);
                }
            }
        }
        Command::Validate {
            collection,
            kind,
            strict,
        } => {
            let service = ValidationService::new(repo, cfg.strictness(strict));
            let report = service
                .validate_collection(&collection, kind)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            for failure in &report.failures {
                println!("{}:{}: {}", collection, failure.line, failure.error);
            }
            println!(
                "{} checked, {} invalid",
                report.checked,
                report.failures.len()
            );
            if !report.is_valid() {
                error!(collection, %kind, "collection has invalid records");
                std::process::exit(1);
            }
        }
        Command::MigrateChannels { source, target } => {
            let service = MigrationService::new(repo);
            let count = service
                .migrate_channels(&source, &target)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            println!("migrated {} records from {} to {}", count, source, target);
        }
    }

    Ok(())
}
