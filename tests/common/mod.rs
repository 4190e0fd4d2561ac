//! Shared test fixtures

use lopdf::{Dictionary, Document, Object, Stream};

/// Build a minimal template PDF: US Letter pages, each carrying placeholder
/// field text at the first-page stamp coordinates.
pub fn template_bytes(page_count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut font = Dictionary::new();
    font.set("Type", Object::Name(b"Font".to_vec()));
    font.set("Subtype", Object::Name(b"Type1".to_vec()));
    font.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    let font_id = doc.add_object(Object::Dictionary(font));

    let mut kids = Vec::new();
    for _ in 0..page_count {
        let content = concat!(
            "BT\n/F1 12 Tf\n1 0 0 1 180 163 Tm\n(Default Name) Tj\nET\n",
            "BT\n/F1 12 Tf\n1 0 0 1 180 147 Tm\n(00000000) Tj\nET\n",
        );
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            content.as_bytes().to_vec(),
        ));

        let mut fonts = Dictionary::new();
        fonts.set("F1", Object::Reference(font_id));
        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(fonts));

        let mut page = Dictionary::new();
        page.set("Type", Object::Name(b"Page".to_vec()));
        page.set("Parent", Object::Reference(pages_id));
        page.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ]),
        );
        page.set("Contents", Object::Reference(content_id));
        page.set("Resources", Object::Dictionary(resources));

        kids.push(Object::Reference(doc.add_object(Object::Dictionary(page))));
    }

    let mut pages = Dictionary::new();
    pages.set("Type", Object::Name(b"Pages".to_vec()));
    pages.set("Count", Object::Integer(page_count as i64));
    pages.set("Kids", Object::Array(kids));
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    doc.objects.insert(catalog_id, Object::Dictionary(catalog));

    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut out = Vec::new();
    doc.save_to(&mut out).expect("failed to serialize template");
    out
}

/// Read a rectangle entry (MediaBox/CropBox) off a page dictionary
pub fn page_rect(doc: &Document, page_id: lopdf::ObjectId, key: &[u8]) -> Option<[f32; 4]> {
    let dict = doc.get_dictionary(page_id).ok()?;
    let arr = match dict.get(key).ok()? {
        Object::Array(arr) => arr.clone(),
        Object::Reference(id) => match doc.get_object(*id).ok()? {
            Object::Array(arr) => arr.clone(),
            _ => return None,
        },
        _ => return None,
    };
    if arr.len() != 4 {
        return None;
    }
    let mut rect = [0.0f32; 4];
    for (slot, obj) in rect.iter_mut().zip(arr.iter()) {
        *slot = match obj {
            Object::Integer(i) => *i as f32,
            Object::Real(r) => *r,
            _ => return None,
        };
    }
    Some(rect)
}

/// Collect the content of every stream object in the document
pub fn stream_contents(doc: &Document) -> Vec<Vec<u8>> {
    doc.objects
        .values()
        .filter_map(|obj| match obj {
            Object::Stream(s) => Some(s.content.clone()),
            _ => None,
        })
        .collect()
}

/// True if `haystack` contains `needle` as a byte substring
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
