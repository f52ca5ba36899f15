//! HTML parsing for both the live table and saved project-card pages
//!
//! Everything in here is a pure function over a parsed [`scraper::Html`] document:
//! - [`table`]: turns a results table's markup into aligned rows
//! - [`cards`]: pulls labeled fields out of `.card.project-card` blocks

pub mod cards;
pub mod table;

pub use cards::{ProjectCard, extract_projects_from_file, label_value, parse_cards};
pub use table::{ScrapedTable, TableRow, parse_table};

use scraper::ElementRef;

/// Compile a CSS selector once and hand out a `&'static` reference to it
#[macro_export]
macro_rules! selector {
    ($e: expr) => {{
        use ::once_cell::sync::Lazy;
        use ::scraper::Selector;
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($e).unwrap());
        &*SELECTOR
    }};
}

/// Text of an element with every text node trimmed and empty ones dropped
pub fn stripped_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
