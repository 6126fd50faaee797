use crate::errors::RoadSafeResult;

/// Backend that turns a query plus grounding context into advice text.
pub trait IAdvisoryGenerator: Send + Sync {
    /// Generate advice for `query`, grounded on `context`, steered by `system_prompt`.
    fn generate(&self, query: &str, context: &str, system_prompt: &str) -> RoadSafeResult<String>;

    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Whether the backend is currently reachable.
    fn is_available(&self) -> bool;
}
