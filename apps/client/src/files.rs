use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::errors::ApiError;

/// Maximum accepted CV size. Matches the backend's upload limit.
pub const MAX_CV_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Validates a CV file before any network call is made.
///
/// Only `.pdf` (case-insensitive) up to 10 MB is accepted; violations are
/// reported synchronously with the fixed user-facing messages.
pub fn validate_cv_file(filename: &str, size_bytes: u64) -> Result<(), ApiError> {
    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(ApiError::InvalidFile(
            "Solo se permiten archivos PDF".to_string(),
        ));
    }
    if size_bytes > MAX_CV_SIZE_BYTES {
        return Err(ApiError::InvalidFile(
            "El archivo excede el tamano maximo de 10MB".to_string(),
        ));
    }
    Ok(())
}

/// Encodes CV bytes for embedding in a JSON body (the `/api/ml/*` convention).
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_rejected_with_fixed_message() {
        let err = validate_cv_file("foto.png", 1024).unwrap_err();
        assert_eq!(err.detail_message(), "Solo se permiten archivos PDF");
    }

    #[test]
    fn test_uppercase_extension_accepted() {
        assert!(validate_cv_file("Curriculum.PDF", 1024).is_ok());
    }

    #[test]
    fn test_oversize_rejected() {
        let err = validate_cv_file("cv.pdf", MAX_CV_SIZE_BYTES + 1).unwrap_err();
        assert_eq!(
            err.detail_message(),
            "El archivo excede el tamano maximo de 10MB"
        );
    }

    #[test]
    fn test_valid_pdf_passes() {
        assert!(validate_cv_file("cv.pdf", MAX_CV_SIZE_BYTES).is_ok());
    }

    #[test]
    fn test_encode_base64() {
        assert_eq!(encode_base64(b"%PDF-1.4"), "JVBERi0xLjQ=");
    }
}
