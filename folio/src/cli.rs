use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file; defaults to folio.toml in the platform config directory
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Skip transitions and entrance animations
    #[arg(long)]
    pub reduced_motion: bool,

    /// Log at debug level regardless of the config
    #[arg(short, long)]
    pub verbose: bool,
}
