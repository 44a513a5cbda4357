//! Error types for the pdftext-core library.

use thiserror::Error;

/// Failure anywhere in the read-parse-extract pipeline.
///
/// File I/O problems and malformed-PDF conditions are not distinguished:
/// the invoking workflow only ever sees one failure kind carrying a
/// free-text description, so the library keeps a single bucket too.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ExtractionError {
    message: String,
}

impl ExtractionError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ExtractionError {
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {err}"))
    }
}

impl From<lopdf::Error> for ExtractionError {
    fn from(err: lopdf::Error) -> Self {
        Self::new(format!("failed to parse PDF: {err}"))
    }
}

/// Result type for the pdftext library.
pub type Result<T> = std::result::Result<T, ExtractionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_raw_message() {
        let err = ExtractionError::new("something went sideways");
        assert_eq!(err.to_string(), "something went sideways");
    }

    #[test]
    fn io_errors_fold_into_the_bucket() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ExtractionError::from(io);
        assert!(err.to_string().starts_with("I/O error:"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn pdf_errors_fold_into_the_bucket() {
        let parse_err = lopdf::Document::load_mem(b"definitely not a pdf").unwrap_err();
        let err = ExtractionError::from(parse_err);
        assert!(err.to_string().starts_with("failed to parse PDF:"));
    }
}
