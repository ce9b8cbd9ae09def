//! Declaration extraction from CMake script text.
//!
//! This is statement-level pattern matching, not a CMake parser. A
//! declaration is anything shaped like `set(NAME ...)` or `option(NAME ...)`
//! on a single line. Values containing nested parentheses may be over- or
//! under-captured; that is an accepted limitation of the line-level match.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `set(NAME rest)` / `option(NAME rest)` statements. `.` does not
/// cross newlines, so the match is bounded to one line and the value runs to
/// the last `)` on that line.
static DECLARATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(set|option)\((\w*)\s(.*)\)").unwrap());

/// How a variable was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// Declared via `set(...)`.
    Set,
    /// Declared via `option(...)`.
    Option,
}

/// A single declaration statement found in a file, borrowing from the
/// scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub kind: DeclarationKind,
    pub name: &'a str,
    /// Everything between the name and the closing paren, verbatim.
    pub value: &'a str,
}

/// Yields every declaration statement in `text`, lazily, in document order.
///
/// Statements with an empty name capture are skipped. Anything that does not
/// match the expected bracketed shape is simply not a declaration; there is
/// no error reporting at this level.
pub fn extract(text: &str) -> impl Iterator<Item = Declaration<'_>> {
    DECLARATION_REGEX.captures_iter(text).filter_map(|caps| {
        let name = caps.get(2)?.as_str();
        if name.is_empty() {
            return None;
        }
        let kind = match caps.get(1)?.as_str() {
            "set" => DeclarationKind::Set,
            _ => DeclarationKind::Option,
        };
        Some(Declaration {
            kind,
            name,
            value: caps.get(3)?.as_str(),
        })
    })
}
