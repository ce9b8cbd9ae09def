//! Core scanning engine.
//!
//! A pure in-process transform from (file set, options) to a [`Report`]:
//! extraction finds `set(...)`/`option(...)` statements, classification
//! assigns each name a category, usage counting cross-references every
//! declared name against every file, and the engine drives the two passes.
//! All I/O stays at the edges; everything here is synchronous,
//! single-threaded and deterministic.

pub mod classify;
pub mod engine;
pub mod extract;
pub mod report;
pub mod usage;

pub use classify::{Category, classify};
pub use engine::{EngineOptions, run};
pub use extract::{Declaration, DeclarationKind, extract};
pub use report::{DeclarationSite, Report, UsageSite, VariableEntry};
pub use usage::count_usages;
