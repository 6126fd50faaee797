//! # roadsafe-catalog
//!
//! The intervention catalog: built once at startup, never mutated, shared
//! read-only by the scorer and the context selector.
//!
//! ## Architecture
//!
//! ```text
//! Catalog
//! ├── loader   (processed JSON → validated Catalog, fail fast)
//! └── ingest   (raw sheet rows → records with inferred keywords,
//!               road types, environments)
//! ```

pub mod catalog;
pub mod ingest;
pub mod loader;

pub use catalog::Catalog;
pub use loader::{load_catalog, parse_catalog};
