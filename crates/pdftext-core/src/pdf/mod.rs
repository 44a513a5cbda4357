//! PDF processing module.

mod extractor;

pub use extractor::PdfExtractor;

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Read a PDF from disk and extract its full text, page by page.
///
/// The file handle is closed as soon as the bytes are in memory; parsing
/// and extraction run entirely on the buffer.
pub fn extract_file(path: &Path) -> Result<String> {
    let data = fs::read(path)?;
    extract_bytes(&data)
}

/// Extract full text from an in-memory PDF byte buffer.
pub fn extract_bytes(data: &[u8]) -> Result<String> {
    Ok(PdfExtractor::from_bytes(data)?.extract_text())
}
