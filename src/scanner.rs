//! CMake file discovery.
//!
//! Walks the project tree and returns the root-relative paths of every
//! `CMakeLists.txt` and `*.cmake` file, minus vendored/build-output
//! directories, configured ignore patterns and the optional exclude regex.
//! The returned list is sorted so traversal order (and with it declaration
//! order in the report) is deterministic.

use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use regex::Regex;
use walkdir::WalkDir;

/// Directory names that never contain project-owned configuration.
pub const VENDORED_DIR_NAMES: &[&str] = &["build", "_3rdParty", "thirdparty"];

/// Result of scanning files.
pub struct ScanResult {
    pub files: Vec<String>,
    /// Paths the walker could not access (warned about, not fatal).
    pub skipped_count: usize,
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal path prefixes.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

pub fn scan_files(
    base_dir: &Path,
    ignore_patterns: &[String],
    exclude: Option<&Regex>,
    verbose: bool,
) -> ScanResult {
    let mut files: Vec<String> = Vec::new();
    let mut skipped_count = 0;

    // Separate ignore patterns into literal prefixes and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    for entry in WalkDir::new(base_dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if !entry.file_type().is_file() || !is_cmake_file(path) {
            continue;
        }

        let Ok(relative) = path.strip_prefix(base_dir) else {
            continue;
        };
        let relative_str = relative.to_string_lossy().replace('\\', "/");

        if relative
            .components()
            .any(|c| VENDORED_DIR_NAMES.contains(&c.as_os_str().to_string_lossy().as_ref()))
        {
            continue;
        }

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        if glob_patterns.iter().any(|p| p.matches(&relative_str)) {
            continue;
        }

        if let Some(exclude) = exclude
            && exclude.is_match(&relative_str)
        {
            continue;
        }

        files.push(relative_str);
    }

    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_cmake_file(path: &Path) -> bool {
    if path.file_name().is_some_and(|n| n == "CMakeLists.txt") {
        return true;
    }
    matches!(path.extension().and_then(|e| e.to_str()), Some("cmake"))
}
