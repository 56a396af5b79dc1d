//! PDF post-processing
//!
//! printpdf writes uncompressed streams and a random trailer `/ID`. Every
//! finished PDF is reloaded with lopdf, given an `/ID` derived from its own
//! content, and optionally stream-compressed before it is saved again.

use std::io::Cursor;

use lopdf::{Document, Object, StringFormat};
use md5::{Digest, Md5};

use crate::error::RenderError;

fn save(doc: &mut Document) -> Result<Vec<u8>, RenderError> {
    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output)
        .map_err(|e| RenderError::BackendFailure(format!("Failed to save PDF: {}", e)))?;
    Ok(output.into_inner())
}

/// Replace the trailer `/ID` with the MD5 of the document saved without one.
/// Both halves are equal, as for a file that was never incrementally updated.
fn pin_document_id(doc: &mut Document) -> Result<(), RenderError> {
    doc.trailer.remove(b"ID");
    let digest = Md5::digest(save(doc)?).to_vec();
    let id = Object::String(digest, StringFormat::Hexadecimal);
    doc.trailer.set("ID", Object::Array(vec![id.clone(), id]));
    Ok(())
}

/// Make printpdf output repeatable and, if asked, compress its streams.
pub fn finish_pdf(raw: &[u8], compress: bool) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::load_mem(raw).map_err(|e| {
        RenderError::BackendFailure(format!("Failed to parse PDF for post-processing: {}", e))
    })?;

    if compress {
        doc.compress();
    }
    pin_document_id(&mut doc)?;
    save(&mut doc)
}
