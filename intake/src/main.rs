use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use intake::config::IntakeConfig;
use intake::integrations::{EmlDirectorySource, ImapSource};
use intake::storage::CsvRecordStore;
use intake::{IntakePipeline, RunSummary};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process every message of the configured IMAP folder
    Fetch,
    /// Process the .eml files of a directory
    Import {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
    /// Print the stored candidate records
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_tracing(args.log_file_path.as_deref());

    let (config, config_path) =
        IntakeConfig::load(args.config.as_deref()).context("Failed to load intake config")?;
    tracing::info!("Using config at {:?}", config_path);

    match args.command {
        Command::Fetch => {
            let imap = config
                .imap
                .clone()
                .ok_or_else(|| anyhow::anyhow!("Missing [imap] section in config at {:?}", config_path))?;

            let summary = tokio::task::spawn_blocking(move || -> Result<RunSummary> {
                let pipeline = IntakePipeline::from_config(&config);
                let mut source = ImapSource::connect(&imap).context("Failed to open IMAP source")?;
                tracing::info!("Processing {} messages from {}", source.remaining(), imap.folder);

                let summary = pipeline.run(&mut source);
                if let Err(e) = source.logout() {
                    tracing::warn!("{}", e);
                }
                Ok(summary?)
            })
            .await??;

            report(summary)
        }
        Command::Import { dir } => {
            let summary = tokio::task::spawn_blocking(move || -> Result<RunSummary> {
                let pipeline = IntakePipeline::from_config(&config);
                let mut source = EmlDirectorySource::open(&dir)
                    .with_context(|| format!("Failed to read {:?}", dir))?;
                Ok(pipeline.run(&mut source)?)
            })
            .await??;

            report(summary)
        }
        Command::List => {
            let store = CsvRecordStore::new(&config.storage.output_path);
            let records = store
                .load_all()
                .with_context(|| format!("Failed to read {:?}", store.path()))?;

            for record in &records {
                println!(
                    "{} | {} | {} | {} | {} | {}",
                    record.source_email_date,
                    record.name,
                    record.email,
                    record.applied_position,
                    record.years_experience,
                    record.rating
                );
            }
            println!("{} records in {:?}", records.len(), store.path());
            Ok(())
        }
    }
}

fn report(summary: RunSummary) -> Result<()> {
    println!(
        "Done processing emails: {} seen, {} recorded, {} skipped, {} failed",
        summary.seen, summary.recorded, summary.skipped, summary.failed
    );

    if summary.failed > 0 {
        anyhow::bail!("{} message(s) could not be recorded", summary.failed);
    }
    Ok(())
}

/// Console output always; a plain-text copy goes to `log_file_path` when given.
/// The returned guard flushes the file writer and must live until exit.
fn init_tracing(log_file_path: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match log_file_path {
        Some(path) => {
            let directory = path.parent().unwrap_or(Path::new("."));
            let file_name = path.file_name().unwrap_or(OsStr::new("intake.log"));
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .init();

    guard
}
