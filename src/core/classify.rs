//! Category assignment for declared variable names.

use std::fmt;

use crate::core::extract::DeclarationKind;

/// Names with this literal, case-sensitive prefix belong to the build system
/// itself (`CMAKE_BUILD_TYPE`, `CMAKE_CXX_FLAGS`, ...).
pub const RESERVED_PREFIX: &str = "CMAKE";

/// Leading-underscore names are treated as file-local temporaries by
/// convention.
pub const PRIVATE_MARKER: char = '_';

/// The category a declared name is reported under. Every name lands in
/// exactly one category, determined by its lexical form and declaration kind
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Reserved-prefix names owned by CMake itself.
    BuiltIn,
    /// Private-marker (`_`-prefixed) names.
    Temporary,
    /// Plain project variables.
    Variable,
    /// Names declared via `option(...)`.
    Option,
}

impl Category {
    /// Fixed report order. Declaration recording and rendering both follow
    /// this order, which keeps the report deterministic.
    pub const ALL: [Category; 4] = [
        Category::BuiltIn,
        Category::Temporary,
        Category::Variable,
        Category::Option,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::BuiltIn => "cmake",
            Category::Temporary => "temp",
            Category::Variable => "variables",
            Category::Option => "options",
        };
        write!(f, "{}", label)
    }
}

/// Assigns a category to a declared name, first match wins:
///
/// 1. reserved prefix → [`Category::BuiltIn`]
/// 2. private marker → [`Category::Temporary`], or dropped entirely
///    (`None`) when `ignore_temporaries` is set
/// 3. declared via `option(...)` → [`Category::Option`]
/// 4. everything else → [`Category::Variable`]
///
/// The order matters: a `CMAKE`-prefixed option is a built-in, and a
/// `_`-prefixed option never reaches the option rule.
pub fn classify(kind: DeclarationKind, name: &str, ignore_temporaries: bool) -> Option<Category> {
    if name.starts_with(RESERVED_PREFIX) {
        Some(Category::BuiltIn)
    } else if name.starts_with(PRIVATE_MARKER) {
        if ignore_temporaries {
            None
        } else {
            Some(Category::Temporary)
        }
    } else if kind == DeclarationKind::Option {
        Some(Category::Option)
    } else {
        Some(Category::Variable)
    }
}
