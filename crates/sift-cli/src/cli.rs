//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sift: semantic column classification and field decomposition
#[derive(Parser)]
#[command(name = "sift")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify the semantic type of one column in a data file
    Predict {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Name of the column to classify
        #[arg(short, long)]
        column: String,

        /// Emit the full classification as JSON
        #[arg(long)]
        json: bool,

        /// Path to the country reference file
        #[arg(long, value_name = "FILE")]
        countries: Option<PathBuf>,

        /// Path to the legal-suffix reference file
        #[arg(long, value_name = "FILE")]
        legal: Option<PathBuf>,
    },

    /// Classify all columns, decompose the phone and company winners,
    /// and write the augmented table
    Parse {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: output.csv beside the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to the country reference file
        #[arg(long, value_name = "FILE")]
        countries: Option<PathBuf>,

        /// Path to the legal-suffix reference file
        #[arg(long, value_name = "FILE")]
        legal: Option<PathBuf>,
    },

    /// Write demo datasets and reference files for a quick walkthrough
    Sample {
        /// Directory for the demo files (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Start the HTTP tool server
    Serve {
        /// Port for the server
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Directory listed by the files endpoint
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Path to the country reference file
        #[arg(long, value_name = "FILE")]
        countries: Option<PathBuf>,

        /// Path to the legal-suffix reference file
        #[arg(long, value_name = "FILE")]
        legal: Option<PathBuf>,
    },
}
