use scraper::Html;

use crate::decode;
use crate::entry::Entry;
use crate::parser::{self, ExtractError};

/// Per-page chain: decode → parse → extract. Linear, no suspension
/// points, owns everything it touches.
pub fn extract_page(raw: &[u8], content_type: &str, page: u8) -> Result<Vec<Entry>, ExtractError> {
    let declared = decode::declared_content_type(content_type, raw);
    let text = decode::decode(raw, &declared);
    let doc = Html::parse_document(&text);
    parser::extract_records(&doc, page)
}

/// Flatten per-page results into the final list. Pages are sorted by
/// index first; completion order of the concurrent fetches carries no
/// meaning here.
pub fn collate(mut pages: Vec<(u8, Vec<Entry>)>) -> Vec<Entry> {
    pages.sort_by_key(|(page, _)| *page);
    pages.into_iter().flat_map(|(_, entries)| entries).collect()
}
