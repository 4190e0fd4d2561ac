//! First-page field overlay
//!
//! The template's first page carries a pre-printed name and roll number at
//! fixed positions. Each field is erased with an opaque white rectangle and
//! redrawn with the request-supplied value.

use lopdf::Document;

use crate::error::{Error, Result};
use crate::pdf::overlay;

/// An erase-and-redraw region on the first page.
///
/// Coordinates are hand-tuned for one specific template layout; a template
/// with a different layout will have overlays land in the wrong place.
#[derive(Debug, Clone, Copy)]
pub struct FieldRegion {
    /// Lower-left corner of the erasure rectangle
    pub erase_x: f32,
    pub erase_y: f32,
    /// Erasure rectangle size
    pub erase_w: f32,
    pub erase_h: f32,
    /// Text baseline origin
    pub text_x: f32,
    pub text_y: f32,
}

/// Region holding the template's name field
pub const NAME_REGION: FieldRegion = FieldRegion {
    erase_x: 175.0,
    erase_y: 158.0,
    erase_w: 80.0,
    erase_h: 20.0,
    text_x: 180.0,
    text_y: 163.0,
};

/// Region holding the template's roll number field
pub const ROLL_REGION: FieldRegion = FieldRegion {
    erase_x: 175.0,
    erase_y: 142.0,
    erase_w: 60.0,
    erase_h: 20.0,
    text_x: 180.0,
    text_y: 147.0,
};

/// Font size for the field values, in points
pub const FIELD_FONT_SIZE: f32 = 12.0;

/// Overwrite the name and roll number fields on the first page.
///
/// Pages after the first pass through untouched; the page count is
/// preserved.
pub fn stamp_first_page(doc: &mut Document, name: &str, roll_no: &str) -> Result<()> {
    doc.decompress();

    let pages = doc.get_pages();
    let (&page_num, &page_id) = pages.iter().next().ok_or(Error::EmptyDocument)?;

    let bbox = overlay::media_box(doc, page_id, page_num)?;
    let font_id = overlay::helvetica_bold(doc);

    let mut content = String::new();
    draw_field(&mut content, &NAME_REGION, name);
    draw_field(&mut content, &ROLL_REGION, roll_no);

    overlay::isolate_page_content(doc, page_id)?;
    overlay::append_overlay(doc, page_id, "FieldStamp", content, bbox, font_id)
}

/// Emit the erase rectangle and replacement text for one region
fn draw_field(content: &mut String, region: &FieldRegion, text: &str) {
    let text = overlay::sanitize_text(text);

    content.push_str("1 1 1 rg\n");
    content.push_str(&format!(
        "{} {} {} {} re\nf\n",
        region.erase_x, region.erase_y, region.erase_w, region.erase_h
    ));

    content.push_str("0 g\n");
    content.push_str("BT\n");
    content.push_str(&format!("/F1 {} Tf\n", FIELD_FONT_SIZE));
    content.push_str(&format!("1 0 0 1 {} {} Tm\n", region.text_x, region.text_y));
    content.push_str(&format!("({}) Tj\n", overlay::escape_pdf_string(&text)));
    content.push_str("ET\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_field_erases_then_draws() {
        let mut content = String::new();
        draw_field(&mut content, &NAME_REGION, "Manish Prasad");

        let erase = content.find("175 158 80 20 re").expect("erase rect missing");
        let text = content.find("(Manish Prasad) Tj").expect("text missing");
        assert!(erase < text, "erasure must precede the text");
    }

    #[test]
    fn test_draw_field_text_position() {
        let mut content = String::new();
        draw_field(&mut content, &ROLL_REGION, "41523056");

        assert!(content.contains("1 0 0 1 180 147 Tm"));
        assert!(content.contains("/F1 12 Tf"));
    }

    #[test]
    fn test_regions_cover_text_origins() {
        for region in [NAME_REGION, ROLL_REGION] {
            assert!(region.erase_x <= region.text_x);
            assert!(region.erase_y <= region.text_y);
            assert!(region.text_y < region.erase_y + region.erase_h);
        }
    }
}
