//! Request and response DTOs.

pub mod request;
pub mod response;

use taskhub_core::error::AppError;
use validator::ValidationErrors;

/// Converts `validator` output into a `Validation` error carrying the
/// first violation's message.
pub(crate) fn validation_error(errors: ValidationErrors) -> AppError {
    let message = errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .filter_map(|e| e.message.as_ref().map(ToString::to_string))
        .next()
        .unwrap_or_else(|| "Invalid request".to_string());
    AppError::validation(message)
}
