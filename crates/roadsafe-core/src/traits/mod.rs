mod generator;
mod usage_storage;

pub use generator::IAdvisoryGenerator;
pub use usage_storage::IUsageStorage;
