use crate::types::{CsvLayoutArg, ExportFormat, LogLevel, OutputFormat, UnitsArg};
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trv")]
#[command(
    about = "Parse, summarize, query and export typhoon residual vortex track records",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Config file (default: $TRV_CONFIG, then <config dir>/trv/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Coordinate encoding of the input file (overrides config)
    #[arg(long, global = true)]
    pub units: Option<UnitsArg>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dataset summary: counts, durations, yearly distribution, stop reasons
    Stats { file: PathBuf },

    /// List records matching a name and/or a start year
    #[command(group(
        ArgGroup::new("filter")
            .required(true)
            .multiple(true)
            .args(["name", "year"])
    ))]
    Find {
        file: PathBuf,

        /// Case-insensitive exact name
        #[arg(long)]
        name: Option<String>,

        /// Start-date year
        #[arg(long)]
        year: Option<i32>,
    },

    /// Detail view of one record
    Show {
        file: PathBuf,

        /// 0-based position in file order
        #[arg(long, default_value = "0")]
        index: usize,
    },

    /// Export all or filtered records as JSON or CSV
    Export {
        file: PathBuf,

        #[arg(long)]
        to: ExportFormat,

        /// CSV layout (default from config)
        #[arg(long)]
        layout: Option<CsvLayoutArg>,

        /// Destination file; stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        year: Option<i32>,
    },

    /// Parse the file and report counts and range warnings
    Validate { file: PathBuf },
}
