use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use darulifta_core::IftaError;

#[expect(
    clippy::needless_pass_by_value,
    reason = "handlers naturally own error values from `Result` and pass them through"
)]
pub fn ifta_error_response(err: IftaError, operation: &str) -> Response {
    let status = status_for_ifta_error(&err);
    let payload = err.to_payload(operation.to_string());
    (status, Json(payload)).into_response()
}

/// A panicked or cancelled blocking task; surfaces as a plain internal
/// error rather than poisoning the connection.
pub fn join_error_response(operation: &str) -> Response {
    ifta_error_response(
        IftaError::Internal("background task failed".to_string()),
        operation,
    )
}

fn status_for_ifta_error(err: &IftaError) -> StatusCode {
    match err {
        IftaError::Validation(_) | IftaError::InvalidCategory(_) => StatusCode::BAD_REQUEST,
        IftaError::CredentialMismatch => StatusCode::UNAUTHORIZED,
        IftaError::PermissionDenied(_) => StatusCode::FORBIDDEN,
        IftaError::NotFound(_) => StatusCode::NOT_FOUND,
        IftaError::DuplicateKey(_) => StatusCode::CONFLICT,
        IftaError::Http(_) | IftaError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
