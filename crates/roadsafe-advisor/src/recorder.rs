//! Best-effort usage recording. Write failures are logged and tracked as
//! degradations; they never reach the caller.

use std::sync::{Arc, Mutex};

use roadsafe_core::models::{EventId, UsageEvent};
use roadsafe_core::traits::IUsageStorage;
use roadsafe_observability::tracing_setup::events;
use roadsafe_observability::{usage_span, DegradationEvent, DegradationTracker};

/// Component name under which usage-log failures are tracked.
pub const USAGE_LOG_COMPONENT: &str = "usage_log";

#[derive(Clone)]
pub struct UsageRecorder {
    storage: Arc<dyn IUsageStorage>,
    degradation: Arc<Mutex<DegradationTracker>>,
}

impl UsageRecorder {
    pub fn new(storage: Arc<dyn IUsageStorage>) -> Self {
        Self {
            storage,
            degradation: Arc::new(Mutex::new(DegradationTracker::new())),
        }
    }

    /// Append `event`, returning its id, or `None` when the write failed.
    pub fn record(&self, event: &UsageEvent) -> Option<EventId> {
        let span = usage_span!(event.citations.len());
        let _guard = span.enter();

        match self.storage.append(event) {
            Ok(id) => {
                events::usage_recorded(id, event.citations.len(), event.response_latency.as_millis());
                if let Ok(mut tracker) = self.degradation.lock() {
                    tracker.mark_recovered(USAGE_LOG_COMPONENT);
                }
                Some(id)
            }
            Err(e) => {
                let failure = e.to_string();
                events::usage_write_failed(&failure);
                if let Ok(mut tracker) = self.degradation.lock() {
                    tracker.record(DegradationEvent::now(USAGE_LOG_COMPONENT, failure, "event dropped"));
                }
                None
            }
        }
    }

    /// Record on tokio's blocking pool. Must be called from within a runtime.
    pub fn record_in_background(&self, event: UsageEvent) -> tokio::task::JoinHandle<Option<EventId>> {
        let recorder = self.clone();
        tokio::task::spawn_blocking(move || recorder.record(&event))
    }

    /// Usage-log failures absorbed so far.
    pub fn failure_count(&self) -> usize {
        self.degradation
            .lock()
            .map(|t| t.count_for(USAGE_LOG_COMPONENT))
            .unwrap_or(0)
    }

    pub fn storage(&self) -> &Arc<dyn IUsageStorage> {
        &self.storage
    }
}
