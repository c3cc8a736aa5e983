use std::path::Path;

use lopdf::Document;
use tracing::{debug, warn};

use crate::error::ExtractError;
use crate::types::PageText;

/// Decode every page of the document at `path`, in page order.
///
/// Nothing is written here: a decode error on any page fails the whole document, so callers
/// never end up with a partial page set.
pub(crate) fn extract_pages(path: &Path) -> Result<Vec<PageText>, ExtractError> {
    let doc = Document::load(path)?;
    let pages = doc.get_pages();
    debug!(pages = pages.len(), path = %path.display(), "loaded document");

    if pages.is_empty() {
        warn!(path = %path.display(), "document has no pages");
    }

    let mut out = Vec::with_capacity(pages.len());
    for &page_num in pages.keys() {
        let text = doc.extract_text(&[page_num])?;
        debug!(page = page_num, chars = text.chars().count(), "extracted page");
        out.push(PageText {
            number: page_num,
            text,
        });
    }

    Ok(out)
}
