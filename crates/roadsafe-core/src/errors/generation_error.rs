/// Advisory generation backend errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation backend unavailable: {backend}")]
    BackendUnavailable { backend: String },

    #[error("generation request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("generation backend returned {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("malformed generation response: {reason}")]
    MalformedResponse { reason: String },
}
