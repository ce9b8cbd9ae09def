//! Cmvar - CMake variable auditor
//!
//! Cmvar scans a CMake project tree, extracts `set(...)` and `option(...)`
//! declarations, groups every declared name by category (built-in,
//! temporary, variable, option) and cross-references where each name is
//! used across the whole tree.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Core extraction/grouping/cross-reference engine
//! - `reporter`: Colorized and JSON report rendering
//! - `scanner`: CMake file discovery

pub mod cli;
pub mod config;
pub mod core;
pub mod reporter;
pub mod scanner;
