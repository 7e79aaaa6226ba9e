//! Page extractors.
//!
//! Each extractor is a pure function from a parsed page to the records found
//! on it. Missing sub-elements degrade to empty fields instead of errors.

pub mod args;
pub mod essay;
pub mod qa;
pub mod terms;
pub mod toc;

pub use args::extract_arg_cards;
pub use essay::extract_essay;
pub use qa::extract_qa;
pub use terms::extract_terms;
pub use toc::extract_toc;

use scraper::Selector;

/// Compile a selector known at build time
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}
