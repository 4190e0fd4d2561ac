//! Error types for the PDF stamper library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the PDF stamper library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Template file not found
    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// Document has no pages
    #[error("Document has no pages")]
    EmptyDocument,

    /// Page is missing a resolvable MediaBox
    #[error("Page {0} has no MediaBox")]
    MissingMediaBox(u32),
}
