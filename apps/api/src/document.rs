//! Text extraction from uploaded resume PDFs.

use bytes::Bytes;
use lopdf::Document;
use tracing::{debug, warn};

use crate::errors::AppError;

/// Extracts the text of every page, in page order, concatenated with no separator.
///
/// A page that fails to decode is skipped. If no page yields any text the whole
/// document is run through `pdf-extract`, which copes with more font encodings.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let doc = Document::load_mem(bytes).map_err(|e| AppError::DocumentParse(e.to_string()))?;

    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(AppError::DocumentParse("document has no pages".to_string()));
    }

    // BTreeMap keys are page numbers, so iteration is already in page order.
    let mut content = String::new();
    for &page_number in pages.keys() {
        match doc.extract_text(&[page_number]) {
            Ok(text) => content.push_str(&text),
            Err(e) => warn!(page = page_number, "Skipping unreadable page: {e}"),
        }
    }

    if content.trim().is_empty() {
        debug!("No text found page by page, falling back to pdf-extract");
        match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => content = text,
            Err(e) => warn!("pdf-extract fallback failed: {e}"),
        }
    }

    debug!(
        pages = pages.len(),
        chars = content.chars().count(),
        "Extracted resume text"
    );
    Ok(content)
}

/// Runs [`extract_text`] on the blocking pool; PDF decoding is CPU-bound.
pub async fn extract_text_blocking(bytes: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))?
}

/// Returns true if the content type or the leading bytes identify a PDF.
pub fn is_pdf(content_type: Option<&str>, head: &[u8]) -> bool {
    let ct = content_type.unwrap_or("").to_ascii_lowercase();
    ct.contains("application/pdf") || head.starts_with(b"%PDF-")
}

/// Builds an in-memory PDF with one page per entry, each showing its text.
#[cfg(test)]
pub(crate) fn sample_pdf(pages: &[&str]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("write sample pdf");
    buf
}
