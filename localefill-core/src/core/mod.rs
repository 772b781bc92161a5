//! Internal domain modules for the Localefill core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod catalog;
pub mod error;
pub mod flatten;
pub mod glossary;
pub mod pipeline;
pub mod translate;

#[doc(inline)]
pub use catalog::Catalog;
#[doc(inline)]
pub use error::{LocalefillError, Result};
#[doc(inline)]
pub use flatten::{flatten, unflatten, SEPARATOR, VALUE_KEY};
#[doc(inline)]
pub use pipeline::{fill_missing, FillReport};
#[doc(inline)]
pub use translate::{needs_review, translate_text, translate_value, REVIEW_PREFIX};
