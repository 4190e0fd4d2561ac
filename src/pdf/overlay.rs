//! Shared overlay plumbing for page stamping
//!
//! Overlays are Form XObjects appended after a page's existing content so
//! they render on top. Before appending, the existing content is wrapped in
//! q/Q so an unbalanced transformation matrix in the original stream cannot
//! displace the overlay.

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::error::{Error, Result};

/// Resolve a page's MediaBox, walking the Parent chain for inherited boxes.
///
/// Returns [x0, y0, x1, y1] in points.
pub(crate) fn media_box(doc: &Document, page_id: ObjectId, page_num: u32) -> Result<[f32; 4]> {
    let mut current = page_id;
    loop {
        let dict = doc.get_dictionary(current)?;

        if let Ok(obj) = dict.get(b"MediaBox") {
            let arr = match obj {
                Object::Array(arr) => arr.clone(),
                Object::Reference(id) => match doc.get_object(*id)? {
                    Object::Array(arr) => arr.clone(),
                    _ => return Err(Error::MissingMediaBox(page_num)),
                },
                _ => return Err(Error::MissingMediaBox(page_num)),
            };

            if arr.len() != 4 {
                return Err(Error::MissingMediaBox(page_num));
            }

            let mut rect = [0.0f32; 4];
            for (slot, obj) in rect.iter_mut().zip(arr.iter()) {
                *slot = number(obj).ok_or(Error::MissingMediaBox(page_num))?;
            }
            return Ok(rect);
        }

        match dict.get(b"Parent") {
            Ok(Object::Reference(id)) => current = *id,
            _ => return Err(Error::MissingMediaBox(page_num)),
        }
    }
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Add a Helvetica-Bold font dictionary to the document.
///
/// Helvetica-Bold is one of the 14 standard PDF fonts, so no font data needs
/// to be embedded. WinAnsiEncoding lets overlay text use single-byte strings.
pub(crate) fn helvetica_bold(doc: &mut Document) -> ObjectId {
    let mut font = Dictionary::new();
    font.set("Type", Object::Name(b"Font".to_vec()));
    font.set("Subtype", Object::Name(b"Type1".to_vec()));
    font.set("BaseFont", Object::Name(b"Helvetica-Bold".to_vec()));
    font.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    doc.add_object(Object::Dictionary(font))
}

/// Wrap a page's existing content streams in q/Q.
///
/// The combined stream replaces the page's Contents. Content must already be
/// decompressed.
pub(crate) fn isolate_page_content(doc: &mut Document, page_id: ObjectId) -> Result<()> {
    let content_ids: Vec<ObjectId> = {
        let dict = doc.get_dictionary(page_id)?;
        match dict.get(b"Contents") {
            Ok(Object::Reference(id)) => vec![*id],
            Ok(Object::Array(arr)) => arr
                .iter()
                .filter_map(|obj| match obj {
                    Object::Reference(id) => Some(*id),
                    _ => None,
                })
                .collect(),
            _ => return Ok(()),
        }
    };

    if content_ids.is_empty() {
        return Ok(());
    }

    let mut wrapped = b"q\n".to_vec();
    for id in content_ids {
        if let Ok(Object::Stream(stream)) = doc.get_object(id) {
            wrapped.extend_from_slice(&stream.content);
            wrapped.push(b'\n');
        }
    }
    wrapped.extend_from_slice(b"Q\n");

    let wrapped_id = doc.add_object(Stream::new(Dictionary::new(), wrapped));

    let page_obj = doc.get_object_mut(page_id)?;
    if let Object::Dictionary(ref mut page_dict) = page_obj {
        page_dict.set("Contents", Object::Reference(wrapped_id));
    }

    Ok(())
}

/// Append an overlay to a page as a Form XObject.
///
/// The XObject carries its own Font resources (/F1) so the page's resources
/// only gain the XObject entry itself.
pub(crate) fn append_overlay(
    doc: &mut Document,
    page_id: ObjectId,
    stamp_name: &str,
    content: String,
    bbox: [f32; 4],
    font_id: ObjectId,
) -> Result<()> {
    let mut fonts = Dictionary::new();
    fonts.set("F1", Object::Reference(font_id));
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("FormType", Object::Integer(1));
    xobject_dict.set(
        "BBox",
        Object::Array(bbox.iter().map(|&v| Object::Real(v)).collect()),
    );
    xobject_dict.set("Resources", Object::Dictionary(resources));

    let xobject_id = doc.add_object(Object::Stream(Stream::new(
        xobject_dict,
        content.into_bytes(),
    )));

    add_xobject_to_page_resources(doc, page_id, stamp_name, xobject_id)?;

    let invoke = format!("q\n/{} Do\nQ\n", stamp_name);
    let invoke_id = doc.add_object(Stream::new(Dictionary::new(), invoke.into_bytes()));
    append_page_content(doc, page_id, invoke_id)
}

/// Add an XObject reference to a page's Resources dictionary under `name`
fn add_xobject_to_page_resources(
    doc: &mut Document,
    page_id: ObjectId,
    name: &str,
    xobject_id: ObjectId,
) -> Result<()> {
    // Resources may be inherited or indirect; resolve to a concrete dictionary
    let resources_dict = {
        let page_dict = doc.get_dictionary(page_id)?;
        match page_dict.get(b"Resources") {
            Ok(Object::Dictionary(dict)) => dict.clone(),
            Ok(Object::Reference(res_id)) => match doc.get_object(*res_id) {
                Ok(Object::Dictionary(dict)) => dict.clone(),
                _ => Dictionary::new(),
            },
            _ => Dictionary::new(),
        }
    };

    let page_obj = doc.get_object_mut(page_id)?;
    if let Object::Dictionary(ref mut page_dict) = page_obj {
        let mut new_resources = resources_dict;

        let mut xobjects = match new_resources.get(b"XObject") {
            Ok(Object::Dictionary(xo)) => xo.clone(),
            _ => Dictionary::new(),
        };
        xobjects.set(name, Object::Reference(xobject_id));
        new_resources.set("XObject", Object::Dictionary(xobjects));

        // Set directly on the page so it owns its own copy
        page_dict.set("Resources", Object::Dictionary(new_resources));
    }

    Ok(())
}

/// Append a content stream to a page's Contents
fn append_page_content(doc: &mut Document, page_id: ObjectId, new_content_id: ObjectId) -> Result<()> {
    let page_obj = doc.get_object_mut(page_id)?;

    if let Object::Dictionary(ref mut page_dict) = page_obj {
        let existing = page_dict.get(b"Contents").ok().cloned();

        match existing {
            Some(Object::Reference(content_id)) => {
                page_dict.set(
                    "Contents",
                    Object::Array(vec![
                        Object::Reference(content_id),
                        Object::Reference(new_content_id),
                    ]),
                );
            }
            Some(Object::Array(mut content_array)) => {
                content_array.push(Object::Reference(new_content_id));
                page_dict.set("Contents", Object::Array(content_array));
            }
            _ => {
                page_dict.set(
                    "Contents",
                    Object::Array(vec![Object::Reference(new_content_id)]),
                );
            }
        }
    }

    Ok(())
}

/// Replace anything outside printable ASCII with '?'.
///
/// Overlay text is drawn with WinAnsiEncoding and measured against a widths
/// table covering chars 32-126; everything else is substituted rather than
/// rendered wrong.
pub(crate) fn sanitize_text(text: &str) -> String {
    text.chars()
        .map(|c| if (' '..='~').contains(&c) { c } else { '?' })
        .collect()
}

/// Escape special characters in PDF literal strings
pub(crate) fn escape_pdf_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}
