//! Advisor: the wired-up matcher.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use roadsafe_analytics::{
    build_report, compliance_checklist, priority_ranking, AnalyticsAggregator, ComplianceChecklist,
    DashboardSnapshot, InterventionUsage, PriorityRanking, ReportSummary,
};
use roadsafe_catalog::{load_catalog, Catalog};
use roadsafe_core::constants::{INTERVENTION_USAGE_LIMIT, PRIORITY_RANKING_LIMIT};
use roadsafe_core::errors::{GenerationError, RoadSafeError, RoadSafeResult};
use roadsafe_core::models::{EventId, MatchCitation, StoredUsageEvent, UsageEvent};
use roadsafe_core::traits::{IAdvisoryGenerator, IUsageStorage};
use roadsafe_core::{InterventionRecord, RoadSafeConfig};
use roadsafe_generation::{load_system_prompt, OllamaGenerator};
use roadsafe_observability::tracing_setup::events;
use roadsafe_observability::{dashboard_span, generation_span, resolve_span};
use roadsafe_retrieval::{DebugView, Resolution, RetrievalEngine};
use roadsafe_storage::StorageEngine;

use crate::recorder::UsageRecorder;

pub struct Advisor {
    retrieval: RetrievalEngine,
    generator: Arc<dyn IAdvisoryGenerator>,
    recorder: UsageRecorder,
    analytics: AnalyticsAggregator,
    system_prompt: String,
}

/// Answer to one `ask`.
#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    /// Generated advice (or a failure notice) followed by the quick reference.
    pub response: String,
    pub citations: Vec<MatchCitation>,
    pub match_count: usize,
    pub used_fallback: bool,
    pub generation_failed: bool,
    pub latency: Duration,
    /// Id of the logged usage event; `None` when logging failed.
    pub event_id: Option<EventId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub catalog_loaded: bool,
    pub intervention_count: usize,
    pub generator: String,
    pub generator_available: bool,
    pub usage_log_failures: usize,
}

impl Advisor {
    /// Load the catalog, open the usage store and connect the generator.
    ///
    /// Catalog and store failures abort startup. An unreachable generator
    /// does not; `ask` reports it per request.
    pub fn from_config(config: &RoadSafeConfig) -> RoadSafeResult<Self> {
        let catalog = load_catalog(Path::new(&config.catalog.path), config.catalog.allow_empty)?;
        let storage = StorageEngine::from_config(&config.storage)?;

        let generator = OllamaGenerator::new(&config.generation);
        if !generator.health_check() {
            warn!(
                url = %generator.base_url(),
                model = %generator.model(),
                "generation backend not ready, answers will carry an error notice"
            );
        }
        let system_prompt = load_system_prompt(Path::new(&config.generation.system_prompt_path));

        Ok(Self::with_parts(
            config,
            Arc::new(catalog),
            Arc::new(storage),
            Arc::new(generator),
            system_prompt,
        ))
    }

    /// Assemble from already-built parts.
    pub fn with_parts(
        config: &RoadSafeConfig,
        catalog: Arc<Catalog>,
        storage: Arc<dyn IUsageStorage>,
        generator: Arc<dyn IAdvisoryGenerator>,
        system_prompt: String,
    ) -> Self {
        info!(
            interventions = catalog.len(),
            generator = generator.name(),
            "advisor ready"
        );
        Self {
            retrieval: RetrievalEngine::new(catalog, config.selection),
            generator,
            recorder: UsageRecorder::new(storage.clone()),
            analytics: AnalyticsAggregator::new(storage, config.analytics),
            system_prompt,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.retrieval.catalog()
    }

    pub fn recorder(&self) -> &UsageRecorder {
        &self.recorder
    }

    pub fn analytics(&self) -> &AnalyticsAggregator {
        &self.analytics
    }

    /// Score and select. Blank or unmatched queries fall back to the catalog head.
    pub fn resolve(&self, query: &str) -> Resolution<'_> {
        let span = resolve_span!(query);
        let _guard = span.enter();

        let resolution = self.retrieval.resolve(query);
        if resolution.used_fallback() {
            events::fallback_context_used(resolution.context().len());
        }
        resolution
    }

    /// Log a resolved query. Never fails; see [`UsageRecorder::record`].
    pub fn record_usage(
        &self,
        query: &str,
        citations: &[&InterventionRecord],
        latency: Duration,
    ) -> Option<EventId> {
        let event = UsageEvent::from_records(query, latency, citations.iter().copied());
        self.recorder.record(&event)
    }

    /// Resolve, generate, append the quick reference, and log usage.
    pub fn ask(&self, query: &str) -> Advisory {
        let started = Instant::now();
        let resolution = self.resolve(query);

        let (mut response, generation_failed) = {
            let span = generation_span!(self.generator.name());
            let _guard = span.enter();
            match self
                .generator
                .generate(query, &resolution.context_text(), &self.system_prompt)
            {
                Ok(text) => (text, false),
                Err(e) => {
                    events::generation_failed(self.generator.name(), &e.to_string());
                    (failure_notice(&e), true)
                }
            }
        };

        if let Some(quick_reference) = resolution.quick_reference() {
            response.push_str(&quick_reference);
        }

        let latency = started.elapsed();
        let event_id = self.record_usage(query, resolution.citations(), latency);
        events::advisory_answered(resolution.match_count(), resolution.citations().len(), latency.as_millis());

        Advisory {
            response,
            citations: resolution.citation_details(),
            match_count: resolution.match_count(),
            used_fallback: resolution.used_fallback(),
            generation_failed,
            latency,
            event_id,
        }
    }

    pub fn dashboard(&self) -> RoadSafeResult<DashboardSnapshot> {
        let span = dashboard_span!();
        let _guard = span.enter();
        self.analytics.dashboard(self.catalog())
    }

    pub fn intervention_usage(&self) -> RoadSafeResult<Vec<InterventionUsage>> {
        self.analytics
            .intervention_usage(self.catalog(), INTERVENTION_USAGE_LIMIT)
    }

    pub fn report(&self) -> RoadSafeResult<ReportSummary> {
        build_report(&self.analytics)
    }

    /// Checklist for the given catalog ids, in the order given.
    pub fn compliance_checklist(&self, ids: &[&str]) -> RoadSafeResult<ComplianceChecklist> {
        let records = ids
            .iter()
            .map(|id| {
                self.catalog()
                    .get(id)
                    .ok_or_else(|| RoadSafeError::InterventionNotFound { id: id.to_string() })
            })
            .collect::<RoadSafeResult<Vec<_>>>()?;
        Ok(compliance_checklist(records, Utc::now().date_naive()))
    }

    pub fn priority_ranking(&self) -> Vec<PriorityRanking> {
        priority_ranking(self.catalog(), PRIORITY_RANKING_LIMIT)
    }

    pub fn debug_query(&self, query: &str) -> DebugView {
        self.retrieval.debug_view(query)
    }

    pub fn get_event(&self, id: EventId) -> RoadSafeResult<Option<StoredUsageEvent>> {
        self.recorder.storage().get_event(id)
    }

    pub fn recent_events(&self, limit: usize) -> RoadSafeResult<Vec<StoredUsageEvent>> {
        self.recorder.storage().recent_events(limit)
    }

    pub fn status(&self) -> Status {
        Status {
            catalog_loaded: !self.catalog().is_empty(),
            intervention_count: self.catalog().len(),
            generator: self.generator.name().to_string(),
            generator_available: self.generator.is_available(),
            usage_log_failures: self.recorder.failure_count(),
        }
    }
}

/// Advisory text shown in place of generated advice when generation fails.
fn failure_notice(err: &RoadSafeError) -> String {
    match err {
        RoadSafeError::GenerationError(GenerationError::BadStatus { status, body }) => {
            format!("Error: {status} - {body}")
        }
        RoadSafeError::GenerationError(GenerationError::BackendUnavailable { backend }) => {
            format!("Error: Cannot connect to {backend}. Please make sure it is running.")
        }
        other => format!("Error: {other}"),
    }
}
