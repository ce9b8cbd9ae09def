//! Two-pass orchestration over the scanned file set.
//!
//! Usage counting needs the complete universe of declared names before it
//! can search for references (a variable declared in one file may be used in
//! a file that traversal visited earlier), so the engine always runs a full
//! declaration pass before the usage pass.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::classify::classify;
use crate::core::extract::extract;
use crate::core::report::Report;
use crate::core::usage::count_usages;

/// Options consumed by the core engine.
#[derive(Debug, Default)]
pub struct EngineOptions {
    /// Drop private-marker names instead of recording them as temporaries.
    pub ignore_temporaries: bool,
    /// Restrict the usage pass (and the rendered report) to matching names.
    /// The declaration pass always sees the full universe.
    pub name_filter: Option<Regex>,
}

impl EngineOptions {
    /// True when `name` should appear in the usage pass and the report.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name_filter.as_ref().is_none_or(|f| f.is_match(name))
    }
}

/// Runs both passes over `files` (paths relative to `root`, in traversal
/// order) and returns the completed report.
///
/// Any unreadable or non-UTF-8 file fails the whole run; the scanner is
/// responsible for excluding paths upstream if partial tolerance is wanted.
pub fn run(root: &Path, files: &[String], options: &EngineOptions) -> Result<Report> {
    let mut report = Report::new();

    // Pass 1: declarations. Populates the full (category, name) universe.
    for file in files {
        let text = read_file(root, file)?;
        for decl in extract(&text) {
            if let Some(category) = classify(decl.kind, decl.name, options.ignore_temporaries) {
                report.record_declaration(category, decl.name, file, decl.value);
            }
        }
    }

    // Pass 2: usages. One record_usage call per (name, file), so the
    // model's no-dedup contract holds.
    let known = report.declared_names();
    for file in files {
        let text = read_file(root, file)?;
        for (category, name) in &known {
            if !options.name_matches(name) {
                continue;
            }
            let count = count_usages(&text, name);
            report.record_usage(*category, name, file, count);
        }
    }

    Ok(report)
}

fn read_file(root: &Path, file: &str) -> Result<String> {
    let path = root.join(file);
    fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}
