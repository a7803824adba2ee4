//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pharmadir")]
#[command(about = "Pharmacy directory with live opening status", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Evaluate opening hours at this local time (e.g., "2025-01-17 13:00")
    #[arg(long, global = true, value_name = "DATETIME")]
    pub at: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new pharmacy directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Display language (fr, en)
        #[arg(short, long, default_value = "fr")]
        language: String,

        /// Also write the sample pharmacy record
        #[arg(long)]
        demo: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// List pharmacies with their current status
    List {
        /// Search by name or address
        query: Option<String>,

        /// Only pharmacies with opening hours on this day (lun, mar, ..., dim)
        #[arg(short, long)]
        day: Option<String>,
    },

    /// List pharmacies open right now
    Open {
        /// Search by name or address
        query: Option<String>,
    },

    /// Show details and weekly hours of one pharmacy
    Show {
        /// Pharmacy id, name or slug
        pharmacy: String,
    },

    /// Validate every pharmacy record
    Check,
}
