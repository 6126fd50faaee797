//! RetrievalEngine: scorer + selector over a shared, read-only catalog.

use std::sync::Arc;

use roadsafe_catalog::Catalog;
use roadsafe_core::config::SelectionConfig;
use roadsafe_core::constants::{DEBUG_PREVIEW_CHARS, DEBUG_SAMPLE_SIZE};
use roadsafe_core::models::MatchCitation;
use roadsafe_core::InterventionRecord;
use serde::Serialize;
use tracing::debug;

use crate::generation::{format_context, format_quick_reference, preview};
use crate::ranking::{self, ScoredMatch, ScorerWeights};
use crate::selection::{ContextSelector, Selection};

/// Stateless matching over an immutable catalog. Cheap to share across threads.
#[derive(Debug, Clone)]
pub struct RetrievalEngine {
    catalog: Arc<Catalog>,
    weights: ScorerWeights,
    selector: ContextSelector,
}

/// Everything derived from one query.
#[derive(Debug, Clone)]
pub struct Resolution<'a> {
    pub matches: Vec<ScoredMatch<'a>>,
    pub selection: Selection<'a>,
}

/// Diagnostic view of how a query resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugView {
    pub query: String,
    pub context_preview: String,
    pub match_count: usize,
    pub sample_matches: Vec<String>,
}

impl RetrievalEngine {
    pub fn new(catalog: Arc<Catalog>, selection: SelectionConfig) -> Self {
        Self {
            catalog,
            weights: ScorerWeights::default(),
            selector: ContextSelector::new(selection),
        }
    }

    pub fn with_weights(mut self, weights: ScorerWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selector(&self) -> &ContextSelector {
        &self.selector
    }

    /// Ranked matches only, no selection.
    pub fn search(&self, query: &str) -> Vec<ScoredMatch<'_>> {
        ranking::score(query, self.catalog.records(), &self.weights)
    }

    /// Score and select in one step.
    pub fn resolve(&self, query: &str) -> Resolution<'_> {
        let matches = self.search(query);
        let selection = self.selector.select(&matches, &self.catalog);
        debug!(
            matched = matches.len(),
            context = selection.context.len(),
            citations = selection.citations.len(),
            fallback = selection.used_fallback,
            "query resolved"
        );
        Resolution { matches, selection }
    }

    pub fn debug_view(&self, query: &str) -> DebugView {
        let resolution = self.resolve(query);
        DebugView {
            query: query.to_string(),
            context_preview: preview(&resolution.context_text(), DEBUG_PREVIEW_CHARS),
            match_count: resolution.match_count(),
            sample_matches: resolution
                .matches
                .iter()
                .take(DEBUG_SAMPLE_SIZE)
                .map(|m| m.record.name.clone())
                .collect(),
        }
    }
}

impl<'a> Resolution<'a> {
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn context(&self) -> &[&'a InterventionRecord] {
        &self.selection.context
    }

    pub fn citations(&self) -> &[&'a InterventionRecord] {
        &self.selection.citations
    }

    pub fn used_fallback(&self) -> bool {
        self.selection.used_fallback
    }

    pub fn context_text(&self) -> String {
        format_context(&self.selection.context)
    }

    pub fn quick_reference(&self) -> Option<String> {
        format_quick_reference(&self.selection.citations)
    }

    /// Citation details as recorded in a usage event.
    pub fn citation_details(&self) -> Vec<MatchCitation> {
        self.selection
            .citations
            .iter()
            .map(|r| MatchCitation::from(*r))
            .collect()
    }
}
