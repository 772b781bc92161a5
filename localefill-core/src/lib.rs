//! Core library for Localefill — a glossary-driven pre-fill tool for nested
//! JSON locale catalogs.
//!
//! Given a reference-language [`Catalog`] and a partially-translated target,
//! [`fill_missing`] finds every key the target lacks, derives a best-effort
//! value from the static glossary, and rebuilds the nested catalog. Values
//! the glossary cannot translate are wrapped as `[TODO: …]` markers for
//! manual review; nothing is ever silently dropped.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    catalog::Catalog,
    error::{LocalefillError, Result},
    flatten::{flatten, unflatten, SEPARATOR, VALUE_KEY},
    glossary,
    pipeline::{fill_missing, FillReport},
    translate::{needs_review, translate_text, translate_value, REVIEW_PREFIX},
};
