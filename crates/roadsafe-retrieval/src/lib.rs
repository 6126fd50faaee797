//! # roadsafe-retrieval
//!
//! The matching engine. Scores a free-text problem description against the
//! catalog, then bounds the result into a generation context and a short
//! citation list.
//!
//! ## Architecture
//!
//! ```text
//! RetrievalEngine
//! ├── Scorer          (field-in-query containment, weighted sum)
//! ├── ContextSelector (top-k context / fallback / citations)
//! └── generation
//!     ├── ContextBuilder (prompt context text)
//!     └── Citations      (quick reference list)
//! ```

pub mod engine;
pub mod generation;
pub mod ranking;
pub mod selection;

pub use engine::{DebugView, Resolution, RetrievalEngine};
pub use ranking::{ScoredMatch, ScorerWeights};
pub use selection::{ContextSelector, Selection};
