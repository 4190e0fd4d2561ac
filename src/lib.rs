//! PDF Stamper Library
//!
//! A library for stamping runtime-provided text onto a fixed PDF template.
//! This library provides functionality to:
//! - Overwrite the name/roll fields on a template's first page
//! - Trim a footer strip off every page and stamp a centered footer
//! - Run the whole pipeline in memory and serve it over HTTP
//!
//! # Example
//!
//! ```no_run
//! use pdf_stamper::pdf::process_document;
//! use std::path::Path;
//!
//! let bytes = process_document(Path::new("private.pdf"), "Manish Prasad", "41523056")
//!     .expect("Failed to process template");
//! std::fs::write("stamped.pdf", bytes).unwrap();
//! ```

pub mod error;
pub mod pdf;
pub mod server;

// Re-export commonly used items
pub use error::{Error, Result};
