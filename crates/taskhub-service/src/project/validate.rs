//! Field validation for project entries.

use taskhub_core::error::AppError;

/// Minimum title length in characters.
pub const TITLE_MIN_CHARS: usize = 3;
/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 500;
/// Maximum description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;
/// Maximum base64-encoded image size in bytes (~2 MB decoded).
pub const IMAGE_MAX_ENCODED_BYTES: usize = 2_700_000;

/// Validates the user-supplied fields shared by create and update.
///
/// Lengths are counted in characters for text fields and bytes for the
/// base64 payload. The priority field is absent here on purpose: an
/// unrecognized priority is coerced, never rejected.
pub fn validate_fields(
    title: &str,
    description: &str,
    image: Option<&str>,
) -> Result<(), AppError> {
    let title_len = title.chars().count();
    if title_len < TITLE_MIN_CHARS {
        return Err(AppError::validation(format!(
            "Title must be at least {TITLE_MIN_CHARS} characters"
        )));
    }
    if title_len > TITLE_MAX_CHARS {
        return Err(AppError::validation(format!(
            "Title cannot exceed {TITLE_MAX_CHARS} characters"
        )));
    }

    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(AppError::validation(format!(
            "Description cannot exceed {DESCRIPTION_MAX_CHARS} characters"
        )));
    }

    if let Some(image) = image {
        if image.len() > IMAGE_MAX_ENCODED_BYTES {
            return Err(AppError::validation("Image is too large (max 2MB)"));
        }
    }

    Ok(())
}
