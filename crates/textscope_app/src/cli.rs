use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use engine_logging::LogDestination;

/// Interactive text-corpus inspection: statistics, keyword filters and
/// head/tail slices over files, directories and Wikipedia articles.
#[derive(Parser, Debug)]
#[command(name = "textscope", version, about)]
pub struct Cli {
    /// Configuration file (`key = value` lines, or JSON when it ends in `.json`)
    #[arg(long, default_value = "config.txt")]
    pub config: PathBuf,

    /// Where log records go; the terminal is shared with the menu prompts
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log file used by `--log file` and `--log both` [default: ./textscope.log]
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Overrides the configured output directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Log debug records as well
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Off,
    Terminal,
    File,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Off => LogDestination::Off,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}
