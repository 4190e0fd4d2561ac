//! Per-request stamping pipeline
//!
//! Loads the template fresh for every request and keeps every intermediate
//! in memory; concurrent requests share nothing but the read-only template
//! path.

use std::path::Path;

use lopdf::Document;

use crate::error::{Error, Result};
use crate::pdf::{stamp_first_page, stamp_footer};

/// Run the full pipeline against the template at `template`:
/// overwrite the first-page fields, then trim and footer-stamp every page.
///
/// The footer line is `"<name> <roll_no>"`.
pub fn process_document(template: &Path, name: &str, roll_no: &str) -> Result<Vec<u8>> {
    if !template.exists() {
        return Err(Error::TemplateNotFound(template.to_path_buf()));
    }

    let mut doc = Document::load(template)?;

    stamp_first_page(&mut doc, name, roll_no)?;

    let footer = format!("{} {}", name, roll_no);
    stamp_footer(&mut doc, &footer)?;

    doc.compress();
    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    Ok(out)
}

/// Download filename for a processed document.
///
/// Spaces in the name become underscores so the filename stays a single
/// token.
pub fn attachment_filename(name: &str, roll_no: &str) -> String {
    format!("RFile_{}_{}.pdf", name.replace(' ', "_"), roll_no)
}
