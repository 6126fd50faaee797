mod catalog_error;
mod config_error;
mod generation_error;
mod storage_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use generation_error::GenerationError;
pub use storage_error::StorageError;

/// Top-level error type. Each subsystem error folds in via `#[from]`.
#[derive(Debug, thiserror::Error)]
pub enum RoadSafeError {
    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("generation error: {0}")]
    GenerationError(#[from] GenerationError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("intervention not found: {id}")]
    InterventionNotFound { id: String },
}

pub type RoadSafeResult<T> = Result<T, RoadSafeError>;
