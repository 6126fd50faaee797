//! Text rendered from selected records: the generation context and the
//! quick-reference citation list appended to answers.

pub mod citations;
pub mod context_builder;

pub use citations::format_quick_reference;
pub use context_builder::{format_context, preview, CONTEXT_HEADER};
