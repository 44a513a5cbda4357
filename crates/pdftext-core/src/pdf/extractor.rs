//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use crate::error::{ExtractionError, Result};

/// Page-ordered text extractor over an in-memory PDF.
///
/// The document is parsed once, up front, with lopdf; text recovery goes
/// through pdf-extract (which handles CID fonts and ToUnicode CMaps),
/// with a per-page lopdf fallback when pdf-extract cannot process the
/// document as a whole. Both views need their own copy of the input: the
/// parsed document for structure, the raw buffer for pdf-extract.
pub struct PdfExtractor {
    document: Document,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Parse a PDF from bytes.
    ///
    /// Documents encrypted with an empty user password are decrypted
    /// transparently, matching what desktop viewers do; any other
    /// encryption is reported as a plain extraction failure.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut document = Document::load_mem(data)?;

        let raw_data = if document.is_encrypted() {
            document
                .decrypt("")
                .map_err(|e| ExtractionError::new(format!("encrypted PDF: {}", e)))?;
            debug!("decrypted PDF with empty user password");

            // pdf-extract parses the buffer itself, so it needs the
            // decrypted bytes rather than the original input.
            let mut decrypted = Vec::new();
            document.save_to(&mut decrypted)?;
            decrypted
        } else {
            data.to_vec()
        };

        debug!("loaded PDF with {} pages", document.get_pages().len());
        Ok(Self { document, raw_data })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Text of every page, in document order.
    ///
    /// A page with no recoverable text contributes an empty string; a
    /// single undecodable page never fails the rest of the document.
    pub fn page_texts(&self) -> Vec<String> {
        match pdf_extract::extract_text_from_mem_by_pages(&self.raw_data) {
            Ok(pages) => pages,
            Err(e) => {
                debug!("pdf-extract failed ({}), falling back to lopdf", e);
                self.page_texts_lopdf()
            }
        }
    }

    /// Full document text: each page's text followed by a newline, the
    /// last page included. A document with zero pages yields the empty
    /// string.
    pub fn extract_text(&self) -> String {
        join_pages(&self.page_texts())
    }

    fn page_texts_lopdf(&self) -> Vec<String> {
        // get_pages is keyed by page number, so iteration order is
        // document order.
        self.document
            .get_pages()
            .into_keys()
            .map(|page| self.document.extract_text(&[page]).unwrap_or_default())
            .collect()
    }
}

fn join_pages(pages: &[String]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }
    text
}
