//! Validation Utilities

use validator::ValidationErrors;

use super::error::AppError;

/// Flatten validation errors into `field: message` pairs for logging.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();
    parts.sort();

    if parts.is_empty() {
        "Validation failed".into()
    } else {
        parts.join(", ")
    }
}

/// Convert validation errors to a generic `AppError::BadRequest`.
///
/// Field detail is logged, never returned to the client.
pub fn validation_error(errors: ValidationErrors, message: &str) -> AppError {
    tracing::debug!(fields = %describe(&errors), "Request body failed validation");
    AppError::bad_request(message)
}
