//! Relevance ranking: weighted containment scoring + stable ordering.

pub mod scorer;

pub use scorer::{score, score_record, ScoredMatch, ScorerWeights};
