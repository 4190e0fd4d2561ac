//! Footer trim-and-stamp
//!
//! Every page loses a 25 pt strip off the bottom (MediaBox and CropBox lower
//! edge move up to y=25) and gains a centered footer line just above the new
//! bottom edge, drawn over a white backing rectangle.

use lopdf::{Document, Object};

use crate::error::{Error, Result};
use crate::pdf::{metrics, overlay};

/// Height of the strip trimmed off the bottom of every page, in points
pub const FOOTER_TRIM: f32 = 25.0;

/// Font size for the footer line, in points
pub const FOOTER_FONT_SIZE: f32 = 14.0;

/// Footer baseline, 3 pt above the trimmed bottom edge
const FOOTER_BASELINE: f32 = 28.0;

/// Horizontal/vertical bleed of the white backing behind the footer text
const BACKING_MARGIN: f32 = 2.0;

/// Trim the bottom strip off every page and stamp `text` centered above the
/// new bottom edge.
///
/// Applies to all pages, including one already stamped by
/// [`stamp_first_page`](crate::pdf::stamp_first_page). Page order and count
/// are preserved; every output page is `FOOTER_TRIM` shorter than its input.
pub fn stamp_footer(doc: &mut Document, text: &str) -> Result<()> {
    doc.decompress();

    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(Error::EmptyDocument);
    }

    let text = overlay::sanitize_text(text);
    let font_id = overlay::helvetica_bold(doc);

    for (&page_num, &page_id) in pages.iter() {
        let [x0, _y0, x1, y1] = overlay::media_box(doc, page_id, page_num)?;
        let width = x1 - x0;

        // Move the visible lower edge up to FOOTER_TRIM on both boxes
        let trimmed: Vec<Object> = [x0, FOOTER_TRIM, x1, y1]
            .iter()
            .map(|&v| Object::Real(v))
            .collect();
        {
            let page_obj = doc.get_object_mut(page_id)?;
            if let Object::Dictionary(ref mut page_dict) = page_obj {
                page_dict.set("MediaBox", Object::Array(trimmed.clone()));
                page_dict.set("CropBox", Object::Array(trimmed));
            }
        }

        let x = centered_x(&text, x0, width);
        let content = footer_content(&text, x);

        overlay::isolate_page_content(doc, page_id)?;
        overlay::append_overlay(
            doc,
            page_id,
            "FooterStamp",
            content,
            [x0, FOOTER_TRIM, x1, y1],
            font_id,
        )?;
    }

    Ok(())
}

/// Horizontal position that centers `text` on a page of the given width
fn centered_x(text: &str, x0: f32, width: f32) -> f32 {
    let text_width = metrics::text_width(text, FOOTER_FONT_SIZE);
    x0 + (width - text_width) / 2.0
}

/// White backing rectangle plus the footer line at the given x position
fn footer_content(text: &str, x: f32) -> String {
    let text_width = metrics::text_width(text, FOOTER_FONT_SIZE);

    let mut content = String::new();
    content.push_str("1 1 1 rg\n");
    content.push_str(&format!(
        "{} {} {} {} re\nf\n",
        x - BACKING_MARGIN,
        FOOTER_BASELINE - BACKING_MARGIN,
        text_width + 2.0 * BACKING_MARGIN,
        FOOTER_FONT_SIZE + 2.0 * BACKING_MARGIN,
    ));

    content.push_str("0 g\n");
    content.push_str("BT\n");
    content.push_str(&format!("/F1 {} Tf\n", FOOTER_FONT_SIZE));
    content.push_str(&format!("1 0 0 1 {} {} Tm\n", x, FOOTER_BASELINE));
    content.push_str(&format!("({}) Tj\n", overlay::escape_pdf_string(text)));
    content.push_str("ET\n");

    content
}
