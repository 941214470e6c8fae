pub mod layout;
pub mod path;

use scraper::{ElementRef, Html};
use thiserror::Error;

use crate::entry::Entry;
use layout::PageLayout;
use path::Step;

/// A required element missing from a page aborts the whole run; the pages
/// are assumed structurally stable apart from the one main-block fallback.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("page {page}: document has no <body>")]
    NoBody { page: u8 },

    #[error(
        "page {page} entry {entry}: no main table body at <center> position {position} or {}",
        .position - 1
    )]
    MainBlockMissing { page: u8, entry: usize, position: usize },

    #[error("page {page} entry {entry}: missing {what} under <center> position {position}")]
    ElementMissing {
        page: u8,
        entry: usize,
        position: usize,
        what: &'static str,
    },

    #[error("page {page} entry {entry}: extracted an empty {field}")]
    EmptyField { page: u8, entry: usize, field: &'static str },
}

/// Extract every vocabulary entry from one page, in document order.
pub fn extract_records(doc: &Html, page: u8) -> Result<Vec<Entry>, ExtractError> {
    let body = body_of(doc).ok_or(ExtractError::NoBody { page })?;
    let layout = PageLayout::for_page(page);

    let mut entries = Vec::with_capacity(layout.entry_count);
    for index in 0..layout.entry_count {
        entries.push(extract_entry(body, page, &layout, index)?);
    }
    Ok(entries)
}

fn extract_entry(
    body: ElementRef<'_>,
    page: u8,
    layout: &PageLayout,
    entry: usize,
) -> Result<Entry, ExtractError> {
    let nominal = layout.main_block_position(entry);
    let (main, example_position) =
        locate_main_block(body, nominal).ok_or(ExtractError::MainBlockMissing {
            page,
            entry,
            position: nominal,
        })?;

    let missing = |position: usize, what: &'static str| ExtractError::ElementMissing {
        page,
        entry,
        position,
        what,
    };

    let word_img = path::resolve(main, layout::WORD_IMG)
        .ok_or_else(|| missing(nominal, "word image (tr 1 > td 2 > img)"))?;
    let word = alt_text(word_img).ok_or_else(|| missing(nominal, "alt text on word image"))?;

    let hint_el = path::resolve(main, layout::HINT_TEXT).ok_or_else(|| {
        missing(nominal, "hint element (tr 1 > td 3 > table > tbody > tr > td 2 > b)")
    })?;
    let hint = path::text_excluding(hint_el, layout::DECORATIVE_TAG);

    let meaning_img = path::resolve(main, layout::MEANING_IMG)
        .ok_or_else(|| missing(nominal, "meaning image (tr 2 > td > img)"))?;
    let meaning =
        alt_text(meaning_img).ok_or_else(|| missing(nominal, "alt text on meaning image"))?;

    let example_center = center_at(body, example_position)
        .ok_or_else(|| missing(example_position, "example block (center)"))?;
    let example_cell = path::resolve(example_center, layout::EXAMPLE_CELL)
        .ok_or_else(|| missing(example_position, "example cell (table > tbody > tr > td)"))?;
    let example = path::text_excluding(example_cell, layout::DECORATIVE_TAG);

    let record = Entry { word, meaning, hint, example };
    check_non_empty(&record, page, entry)?;
    Ok(record)
}

/// Probe the nominal position for a main table body; fall back one
/// position when it is absent, which pushes the example block from +2 out
/// to +3.
fn locate_main_block(body: ElementRef<'_>, nominal: usize) -> Option<(ElementRef<'_>, usize)> {
    if let Some(tbody) =
        center_at(body, nominal).and_then(|c| path::resolve(c, layout::MAIN_TBODY))
    {
        return Some((tbody, nominal + layout::EXAMPLE_OFFSET));
    }
    let tbody = center_at(body, nominal - 1).and_then(|c| path::resolve(c, layout::MAIN_TBODY))?;
    Some((tbody, nominal + layout::EXAMPLE_OFFSET_SHIFTED))
}

pub(crate) fn body_of(doc: &Html) -> Option<ElementRef<'_>> {
    path::child_at(doc.root_element(), Step::tag("body"))
}

fn center_at(body: ElementRef<'_>, position: usize) -> Option<ElementRef<'_>> {
    path::child_at(body, Step::nth("center", position))
}

fn alt_text(img: ElementRef<'_>) -> Option<String> {
    img.value()
        .attr("alt")
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .map(str::to_string)
}

fn check_non_empty(record: &Entry, page: u8, entry: usize) -> Result<(), ExtractError> {
    let fields = [
        ("word", &record.word),
        ("meaning", &record.meaning),
        ("hint", &record.hint),
        ("example", &record.example),
    ];
    for (field, value) in fields {
        if value.is_empty() {
            return Err(ExtractError::EmptyField { page, entry, field });
        }
    }
    Ok(())
}

// ── Tests ──
