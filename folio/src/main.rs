use std::fs::{self, File};
use std::process::ExitCode;

use clap::Parser;
use folio::cli::Cli;
use folio::config::Config;
use folio::error::FolioError;
use folio::{paths, runtime};
use log::{LevelFilter, error, info};
use simplelog::WriteLogger;

fn init_logging(level: LevelFilter) -> Result<(), FolioError> {
    paths::rotate_logs();
    let Some(log_path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = File::create(&log_path)?;
    WriteLogger::init(level, simplelog::Config::default(), log_file)?;
    Ok(())
}

async fn run(cli: Cli) -> Result<(), FolioError> {
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.reduced_motion {
        config.motion.reduced = true;
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        config.log_level.filter()
    };
    init_logging(level)?;
    info!("folio {} starting", env!("CARGO_PKG_VERSION"));

    runtime::run(config).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
