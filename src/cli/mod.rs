//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_check_report, format_counts, format_demo_banner, format_open_summary,
    format_pharmacy_detail, format_pharmacy_list,
};
