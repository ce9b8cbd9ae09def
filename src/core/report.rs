//! The aggregated report model.
//!
//! Built incrementally by the engine's two passes, then handed to the
//! reporter read-only. Category order is fixed; within a category, names
//! keep first-declaration order.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::classify::Category;

/// Where a name was declared: the file and the verbatim value text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclarationSite {
    pub file: String,
    pub value: String,
}

/// Non-declaring references to a name in one file. `count` is always ≥ 1;
/// zero-count sites are never recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageSite {
    pub file: String,
    pub count: usize,
}

/// Everything known about one variable name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariableEntry {
    /// All declaration sites, in file-processing order. Redeclaration is
    /// legal and every site is retained.
    pub declarations: Vec<DeclarationSite>,
    pub usages: Vec<UsageSite>,
}

/// One category's variables, keyed by name, preserving first-declaration
/// order.
#[derive(Debug, Default)]
struct Group {
    order: Vec<String>,
    entries: HashMap<String, VariableEntry>,
}

impl Group {
    fn entry_mut(&mut self, name: &str) -> &mut VariableEntry {
        if !self.entries.contains_key(name) {
            self.order.push(name.to_owned());
        }
        self.entries.entry(name.to_owned()).or_default()
    }
}

/// Mapping from category to variable name to [`VariableEntry`].
///
/// Write-only during the engine's passes, read-only during rendering. The
/// model does not deduplicate: recording the same declaration twice yields
/// two sites, and keeping usage recording to one call per (name, file) is
/// the orchestrator's job.
#[derive(Debug, Default)]
pub struct Report {
    groups: [Group; 4],
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    fn group(&self, category: Category) -> &Group {
        &self.groups[category as usize]
    }

    /// Appends a declaration site, creating the entry on first sight.
    pub fn record_declaration(&mut self, category: Category, name: &str, file: &str, value: &str) {
        self.groups[category as usize]
            .entry_mut(name)
            .declarations
            .push(DeclarationSite {
                file: file.to_owned(),
                value: value.to_owned(),
            });
    }

    /// Appends a usage site when `count` is nonzero. Zero counts are
    /// silently dropped so files without real references never appear.
    pub fn record_usage(&mut self, category: Category, name: &str, file: &str, count: usize) {
        if count == 0 {
            return;
        }
        self.groups[category as usize]
            .entry_mut(name)
            .usages
            .push(UsageSite {
                file: file.to_owned(),
                count,
            });
    }

    /// Names in `category`, in first-declaration order.
    pub fn names(&self, category: Category) -> impl Iterator<Item = &str> {
        self.group(category).order.iter().map(String::as_str)
    }

    pub fn entry(&self, category: Category, name: &str) -> Option<&VariableEntry> {
        self.group(category).entries.get(name)
    }

    /// Every known (category, name) pair, categories in report order. This
    /// is the universe the usage pass walks per file.
    pub fn declared_names(&self) -> Vec<(Category, String)> {
        Category::ALL
            .iter()
            .flat_map(|&category| {
                self.names(category)
                    .map(move |name| (category, name.to_owned()))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.order.is_empty())
    }

    /// Total number of distinct variable names across all categories.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.order.len()).sum()
    }
}
