use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "quadlint")]
#[command(about = "Quadratic-complexity linter for JavaScript and TypeScript", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze files for quadratic-complexity hazards
    Check {
        /// File or directory to analyze
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to quadlint.toml in the analyzed root)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Run only the named rules
        #[arg(long, value_delimiter = ',')]
        rules: Option<Vec<String>>,

        /// Analyze files sequentially instead of in parallel
        #[arg(long)]
        no_parallel: bool,
    },

    /// Write a default quadlint.toml to the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// List available rules
    Rules,
}
