use anyhow::{Context, Result};
use colored::Colorize;
use regex::Regex;

use crate::config;
use crate::core::engine::{self, EngineOptions};
use crate::reporter::{self, RenderOptions};
use crate::scanner;

pub mod args;
mod exit_status;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<()> {
    let load = config::load_config(&args.directory)?;
    let config = load.config;

    // CLI flags take precedence over the config file
    let exclude = args
        .exclude
        .or(config.exclude)
        .map(|pattern| {
            Regex::new(&pattern).with_context(|| format!("Invalid exclude regex: \"{}\"", pattern))
        })
        .transpose()?;
    let filter = args
        .filter
        .map(|pattern| {
            Regex::new(&pattern).with_context(|| format!("Invalid filter regex: \"{}\"", pattern))
        })
        .transpose()?;

    if !args.json {
        println!("Parsing {}...", args.directory.display());
    }

    let scan = scanner::scan_files(&args.directory, &config.ignores, exclude.as_ref(), args.verbose);
    if args.verbose {
        eprintln!(
            "{} {} file(s) found, {} path(s) inaccessible",
            "info:".bold().blue(),
            scan.files.len(),
            scan.skipped_count
        );
    }

    let options = EngineOptions {
        ignore_temporaries: args.ignore_temp || config.ignore_temp,
        name_filter: filter,
    };
    let report = engine::run(&args.directory, &scan.files, &options)?;

    if args.json {
        reporter::print_json(&report, options.name_filter.as_ref())?;
    } else {
        reporter::print_report(
            &report,
            &RenderOptions {
                simple: args.simple,
                filter: options.name_filter.as_ref(),
            },
        );
    }

    Ok(())
}
