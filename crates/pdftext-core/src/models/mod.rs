//! Data records shared between extraction and reporting.

pub mod result;

pub use result::{ExtractionResult, ExtractionStatus};
