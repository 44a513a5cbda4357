//! Core library for fixed-path PDF text extraction.
//!
//! This crate provides:
//! - PDF parsing and page-ordered text recovery (lopdf + pdf-extract)
//! - The single failure bucket every pipeline error collapses into
//! - The JSON result record consumed by the invoking workflow tool

pub mod error;
pub mod models;
pub mod pdf;

pub use error::{ExtractionError, Result};
pub use models::{ExtractionResult, ExtractionStatus};
pub use pdf::{extract_bytes, extract_file, PdfExtractor};
