//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory to scan
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Exclude files whose relative path matches this regex
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Only report variable names matching this regex
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Print variable names only, skipping set/use detail
    #[arg(short, long)]
    pub simple: bool,

    /// Drop `_`-prefixed temporary variables from the report
    #[arg(long)]
    pub ignore_temp: bool,

    /// Emit the report as JSON instead of the colorized listing
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
