//! Context and citation selection.
//!
//! - Context: the top `top_k` matches, or the first `fallback_k` catalog
//!   records when nothing matched.
//! - Citations: the top `cite_k` matches. Never drawn from the fallback.

use roadsafe_catalog::Catalog;
use roadsafe_core::config::SelectionConfig;
use roadsafe_core::InterventionRecord;

use crate::ranking::ScoredMatch;

/// Bounds applied to a ranked match list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextSelector {
    pub top_k: usize,
    pub fallback_k: usize,
    pub cite_k: usize,
}

/// Records chosen for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection<'a> {
    pub context: Vec<&'a InterventionRecord>,
    pub citations: Vec<&'a InterventionRecord>,
    /// True when `context` came from the catalog head instead of matches.
    pub used_fallback: bool,
}

impl ContextSelector {
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            top_k: config.top_k,
            fallback_k: config.fallback_k,
            cite_k: config.cite_k,
        }
    }

    /// Apply the selection rules to `matches`, which must already be ranked.
    pub fn select<'a>(&self, matches: &[ScoredMatch<'a>], catalog: &'a Catalog) -> Selection<'a> {
        if matches.is_empty() {
            return Selection {
                context: catalog.head(self.fallback_k).iter().collect(),
                citations: Vec::new(),
                used_fallback: true,
            };
        }

        Selection {
            context: matches.iter().take(self.top_k).map(|m| m.record).collect(),
            citations: matches.iter().take(self.cite_k).map(|m| m.record).collect(),
            used_fallback: false,
        }
    }
}

impl Default for ContextSelector {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}
