//! # roadsafe-advisor
//!
//! Entry point for embedding the matcher: build an [`Advisor`] from a
//! [`RoadSafeConfig`](roadsafe_core::RoadSafeConfig), then `resolve`, `ask`,
//! and read the `dashboard`.
//!
//! ## Architecture
//!
//! ```text
//! Advisor
//! ├── RetrievalEngine     (roadsafe-retrieval, immutable catalog)
//! ├── IAdvisoryGenerator  (roadsafe-generation, Ollama)
//! ├── UsageRecorder       (best-effort writes to IUsageStorage)
//! └── AnalyticsAggregator (roadsafe-analytics, read side)
//! ```

pub mod advisor;
pub mod recorder;

pub use advisor::{Advisor, Advisory, Status};
pub use recorder::UsageRecorder;

/// Install the JSON log subscriber at the configured level.
/// `ROADSAFE_LOG` overrides the config when set.
pub fn init_logging(config: &roadsafe_core::RoadSafeConfig) -> bool {
    roadsafe_observability::tracing_setup::init_tracing(&config.observability.log_level)
}
