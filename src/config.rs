//! Command-line configuration

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::engine::Algorithm;
use crate::error::{DiffError, Result};
use crate::input::Source;
use crate::render::ViewMode;

/// Environment variable holding the tracing filter
pub const LOG_FILTER_ENV: &str = "LINEDIFF_LOG";

/// Environment variable naming the log file
pub const LOG_FILE_ENV: &str = "LINEDIFF_LOG_FILE";

/// Line-by-line comparison of two text documents
#[derive(Parser, Debug)]
#[command(name = "linediff")]
#[command(version)]
#[command(about = "Line-by-line comparison of two text documents", long_about = None)]
pub struct Cli {
    /// Original document ("-" reads stdin)
    pub original: PathBuf,

    /// Modified document ("-" reads stdin)
    pub modified: PathBuf,

    /// Initial view mode (side-by-side, unified)
    #[arg(short, long, default_value = "side-by-side")]
    pub mode: ViewMode,

    /// Line matching algorithm (greedy, myers)
    #[arg(short, long, default_value = "greedy")]
    pub algorithm: Algorithm,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tui)]
    pub output: OutputFormat,

    /// Write structured logs to this file
    #[arg(long, env = LOG_FILE_ENV)]
    pub log_file: Option<PathBuf>,

    /// Disable colors in plain output
    #[arg(long)]
    pub no_color: bool,
}

/// How the comparison is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Interactive terminal viewer
    #[default]
    Tui,
    /// Unified text on stdout
    Plain,
    /// Change summary with a histogram
    Stat,
    /// The diff result as JSON
    Json,
}

/// Validated run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub original: Source,
    pub modified: Source,
    pub mode: ViewMode,
    pub algorithm: Algorithm,
    pub output: OutputFormat,
    pub log_file: Option<PathBuf>,
    pub color: bool,
}

impl Cli {
    /// Validate arguments and resolve input sources
    pub fn into_config(self) -> Result<Config> {
        let original = Source::from_arg(&self.original);
        let modified = Source::from_arg(&self.modified);

        if original == Source::Stdin && modified == Source::Stdin {
            return Err(DiffError::InvalidArgument(
                "stdin (-) can be used for only one side".to_string(),
            ));
        }

        Ok(Config {
            original,
            modified,
            mode: self.mode,
            algorithm: self.algorithm,
            output: self.output,
            log_file: self.log_file,
            color: !self.no_color,
        })
    }
}
