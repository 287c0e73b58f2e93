use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, IftaError>;

#[derive(Debug, Error)]
pub enum IftaError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid credentials")]
    CredentialMismatch,

    #[error("already exists: {0}")]
    DuplicateKey(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
    pub trace_id: String,
}

impl IftaError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::CredentialMismatch => "CREDENTIAL_MISMATCH",
            Self::DuplicateKey(_) => "DUPLICATE_KEY",
            Self::NotFound(_) => "NOT_FOUND",
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::InvalidCategory(_) => "INVALID_CATEGORY",
            Self::Http(_) => "HTTP_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub(crate) fn lock_poisoned(label: &str) -> Self {
        Self::Internal(format!("{label} lock poisoned"))
    }

    pub fn to_payload(&self, operation: impl Into<String>) -> ErrorPayload {
        ErrorPayload {
            code: self.code().to_string(),
            message: self.to_string(),
            operation: operation.into(),
            trace_id: Uuid::new_v4().to_string(),
        }
    }
}
