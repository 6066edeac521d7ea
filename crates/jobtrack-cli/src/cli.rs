//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "jobtrack")]
#[command(about = "Job application analytics: spreadsheet counts, time series and chart data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to JOBTRACK_CONFIG_PATH, then ./jobtrack.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive overriding the configured level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Analyze a CSV or workbook spreadsheet into an analysis record
    Analyze {
        #[arg(long)]
        csv: PathBuf,
        /// Write the record here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Project an analysis record JSON file into chart data
    Project {
        #[arg(long)]
        record: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Number of role titles to rank
        #[arg(long)]
        top: Option<usize>,
    },
    /// Analyze a CSV or workbook spreadsheet and project it in one step
    Report {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Number of role titles to rank
        #[arg(long)]
        top: Option<usize>,
    },
}

/// How projected data is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Plain-text tables
    Table,
}
