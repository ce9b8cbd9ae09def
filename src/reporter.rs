//! Report formatting and printing utilities.
//!
//! This module is separate from the core engine to keep the engine free of
//! printing side effects. The completed [`Report`] is traversed read-only:
//! categories in fixed order, names in first-declaration order.

use anyhow::Result;
use colored::{ColoredString, Colorize};
use regex::Regex;
use serde_json::json;

use crate::core::classify::Category;
use crate::core::report::Report;

const BANNER_WIDTH: usize = 72;

/// Rendering options consumed by the text reporter.
#[derive(Debug, Default)]
pub struct RenderOptions<'a> {
    /// Print variable names only, no per-site set/use detail.
    pub simple: bool,
    /// Restrict output to matching names.
    pub filter: Option<&'a Regex>,
}

/// Warm palette for plain variables.
fn warm(n: usize, text: &str) -> ColoredString {
    match n % 3 {
        0 => text.bright_red(),
        1 => text.bright_magenta(),
        _ => text.bright_yellow(),
    }
}

/// Cool palette for options.
fn cool(n: usize, text: &str) -> ColoredString {
    match n % 3 {
        0 => text.bright_blue(),
        1 => text.bright_cyan(),
        _ => text.bright_green(),
    }
}

/// Background palette for built-ins, so they stand out from project code.
fn block(n: usize, text: &str) -> ColoredString {
    match n % 3 {
        0 => text.on_bright_blue(),
        1 => text.on_bright_cyan(),
        _ => text.on_bright_green(),
    }
}

fn paint(category: Category, n: usize, text: &str) -> ColoredString {
    match category {
        Category::BuiltIn => block(n, text),
        Category::Temporary => text.white(),
        Category::Variable => warm(n, text),
        Category::Option => cool(n, text),
    }
}

/// Splits a raw declaration value into (head, detail) for coloring.
///
/// For options the head is the leading quoted description; for everything
/// else it is the first quoted string or whitespace-delimited token.
fn split_value(value: &str, is_option: bool) -> (&str, &str) {
    let stripped = value.strip_prefix('"');
    if let Some(rest) = stripped {
        match rest.find('"') {
            Some(end) => value.split_at(end + 2),
            None => (value, ""),
        }
    } else if is_option {
        (value, "")
    } else {
        match value.find(' ') {
            Some(at) => value.split_at(at),
            None => (value, ""),
        }
    }
}

fn format_value(value: &str, is_option: bool) -> String {
    let (head, detail) = split_value(value, is_option);
    if is_option {
        // options lead with their description, the interesting part follows
        format!("{}{}", head.dimmed(), detail.cyan())
    } else {
        format!("{}{}", head.cyan(), detail.dimmed())
    }
}

/// Print the colorized per-category listing.
pub fn print_report(report: &Report, options: &RenderOptions) {
    let banner = "-".repeat(BANNER_WIDTH);
    let mut n = 0;

    for category in Category::ALL {
        println!();
        println!("{}", paint(category, n, &banner));
        println!(
            "{}",
            paint(category, n, &format!("------------------------------- {}:", category))
        );
        println!("{}", paint(category, n, &banner));
        println!();

        for name in report.names(category) {
            if let Some(filter) = options.filter
                && !filter.is_match(name)
            {
                continue;
            }
            n += 1;

            let header = format!("--- {}:", name);
            if category == Category::Temporary {
                println!("{}", header.white());
            } else {
                println!("{}", paint(category, n, &header));
            }

            if options.simple {
                continue;
            }
            let Some(entry) = report.entry(category, name) else {
                continue;
            };

            println!("{}", "----- sets:".dimmed());
            for site in &entry.declarations {
                println!(
                    "{} {}",
                    paint(category, n, &format!("------< {}:", site.file)),
                    format_value(&site.value, category == Category::Option)
                );
            }

            println!("{}", "----- uses:".dimmed());
            for site in &entry.usages {
                println!(
                    "{} {}{}{}",
                    paint(category, n, &format!("------> {}:", site.file)),
                    "used ".dimmed(),
                    site.count.to_string().cyan(),
                    " times".dimmed()
                );
            }
        }
    }
}

/// Print the report as pretty JSON, category order and first-declaration
/// name order preserved (arrays, not maps).
pub fn print_json(report: &Report, filter: Option<&Regex>) -> Result<()> {
    let categories: Vec<_> = Category::ALL
        .iter()
        .map(|&category| {
            let variables: Vec<_> = report
                .names(category)
                .filter(|name| filter.is_none_or(|f| f.is_match(name)))
                .map(|name| {
                    let entry = report.entry(category, name);
                    json!({
                        "name": name,
                        "declarations": entry.map(|e| &e.declarations),
                        "usages": entry.map(|e| &e.usages),
                    })
                })
                .collect();
            json!({
                "category": category.to_string(),
                "variables": variables,
            })
        })
        .collect();

    let value = json!({ "categories": categories });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
