/// Catalog load and validation errors. Any of these is fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to parse catalog {path}: {reason}")]
    ParseFailed { path: String, reason: String },

    #[error("failed to write catalog {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("duplicate intervention id {id} at position {position}")]
    DuplicateId { id: String, position: usize },

    #[error("intervention at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("catalog {path} contains no interventions")]
    Empty { path: String },
}
