//! The status record reported to the invoking workflow tool.

use serde::{Deserialize, Serialize};

/// Outcome of one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStatus {
    /// Every page's text was recovered and concatenated.
    ExtractionSuccess,
    /// The pipeline failed before a full text could be produced.
    ExtractionFailed,
}

/// JSON record written to standard output, exactly once per run.
///
/// `extracted_text` is populated iff the run succeeded and stays in the
/// payload as an explicit `null` on failure; `error_message` is populated
/// iff the run failed and is omitted from the payload otherwise. The
/// constructors below are the only way the rest of the workspace builds
/// this record, so no other field combination can appear on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Concatenated per-page text, one trailing newline per page.
    pub extracted_text: Option<String>,
    /// Success or failure marker.
    pub status: ExtractionStatus,
    /// Free-text description of the failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ExtractionResult {
    /// Build the success-shaped record.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            extracted_text: Some(text.into()),
            status: ExtractionStatus::ExtractionSuccess,
            error_message: None,
        }
    }

    /// Build the failure-shaped record.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            extracted_text: None,
            status: ExtractionStatus::ExtractionFailed,
            error_message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_payload_has_two_fields() {
        let result = ExtractionResult::success("Hello\nWorld\n");
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"extracted_text":"Hello\nWorld\n","status":"extraction_success"}"#
        );
    }

    #[test]
    fn failure_payload_keeps_text_as_explicit_null() {
        let result = ExtractionResult::failure("I/O error: boom");
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"extracted_text":null,"status":"extraction_failed","error_message":"I/O error: boom"}"#
        );
    }

    #[test]
    fn empty_document_is_still_a_success() {
        let result = ExtractionResult::success("");
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"extracted_text":"","status":"extraction_success"}"#
        );
    }

    #[test]
    fn failure_payload_parses_back() {
        let json = r#"{"extracted_text":null,"status":"extraction_failed","error_message":"bad"}"#;
        let result: ExtractionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result, ExtractionResult::failure("bad"));
    }
}
