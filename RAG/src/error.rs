use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Failures surfaced to request handlers.
///
/// `Validation` means the caller sent something unusable and no collaborator
/// was contacted. `Upstream` means retrieval, the LLM or the transcriber failed.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Upstream(String),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "validation",
            ServiceError::Upstream(_) => "upstream",
        }
    }
}
