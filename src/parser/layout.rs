//! Layout constants for the two page classes.
//!
//! The pages carry no ids or classes; every field is addressed by the
//! position of `<center>` blocks under `<body>` and fixed paths inside
//! them. All positional knowledge lives here.

use super::path::Step;

pub const PAGE_COUNT: u8 = 9;

/// Spacing, in top-level block positions, between consecutive entries'
/// main blocks.
pub const BLOCK_STRIDE: usize = 7;

/// Offset from an entry's main block to its example block.
pub const EXAMPLE_OFFSET: usize = 2;

/// Example offset when the nominal main block is absent and the entry
/// shifted back one position.
pub const EXAMPLE_OFFSET_SHIFTED: usize = 3;

/// Tag of the inline-styling element excluded from extracted text.
pub const DECORATIVE_TAG: &str = "font";

/// Per-page-class parameters: where entries start and how many there are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub first_block: usize,
    pub entry_count: usize,
}

impl PageLayout {
    pub fn for_page(page: u8) -> Self {
        if page == 1 {
            Self { first_block: 7, entry_count: 6 }
        } else {
            Self { first_block: 5, entry_count: 10 }
        }
    }

    /// Nominal top-level position of entry `i`'s main block.
    pub fn main_block_position(&self, entry: usize) -> usize {
        self.first_block + entry * BLOCK_STRIDE
    }
}

/// Probe path identifying a main block: the `<center>` must wrap a table
/// body.
pub const MAIN_TBODY: &[Step] = &[Step::tag("table"), Step::tag("tbody")];

/// Word image, relative to the main table body.
pub const WORD_IMG: &[Step] = &[Step::nth("tr", 1), Step::nth("td", 2), Step::tag("img")];

/// Hint text element, relative to the main table body.
pub const HINT_TEXT: &[Step] = &[
    Step::nth("tr", 1),
    Step::nth("td", 3),
    Step::tag("table"),
    Step::tag("tbody"),
    Step::tag("tr"),
    Step::nth("td", 2),
    Step::tag("b"),
];

/// Meaning image, relative to the main table body.
pub const MEANING_IMG: &[Step] = &[Step::nth("tr", 2), Step::tag("td"), Step::tag("img")];

/// Example cell, relative to the example `<center>` block.
pub const EXAMPLE_CELL: &[Step] = &[
    Step::tag("table"),
    Step::tag("tbody"),
    Step::tag("tr"),
    Step::tag("td"),
];
