//! Usage counting for declared variable names.

use crate::core::extract;

/// Counts non-declaring references to `name` in `text`.
///
/// The total is a verbatim substring count, so `FOO` also matches inside
/// `FOO_BAR`; that over-count is accepted, matching the statement-level
/// nature of the rest of the engine. Occurrences where `name` is itself the
/// target of a `set(...)`/`option(...)` statement are subtracted, clamped at
/// zero.
pub fn count_usages(text: &str, name: &str) -> usize {
    if name.is_empty() {
        return 0;
    }
    let total = text.matches(name).count();
    let declared = extract::extract(text).filter(|d| d.name == name).count();
    total.saturating_sub(declared)
}
