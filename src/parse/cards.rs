use crate::error::Result;
use crate::parse::stripped_text;
use scraper::{ElementRef, Html};
use serde::Serialize;
use std::path::Path;

/// One project listing from a saved RERA search page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    #[serde(rename = "Project Name")]
    pub project_name: String,

    #[serde(rename = "Promoter Name")]
    pub promoter_name: String,

    #[serde(rename = "Rera Regd. No")]
    pub rera_regd_no: String,

    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "Project Type")]
    pub project_type: String,

    #[serde(rename = "Started From")]
    pub started_from: String,

    #[serde(rename = "Possession by")]
    pub possession_by: String,
}

impl ProjectCard {
    /// Read every field out of a `.card.project-card` element
    pub fn from_element(card: ElementRef) -> Self {
        Self {
            project_name: first_text(card, crate::selector!(".card-title")),
            promoter_name: first_text(card, crate::selector!("small")),
            rera_regd_no: first_text(card, crate::selector!(".fw-bold.me-2")),
            address: label_value(card, "Address").unwrap_or_default(),
            project_type: label_value(card, "Project Type").unwrap_or_default(),
            started_from: label_value(card, "Started From").unwrap_or_default(),
            possession_by: label_value(card, "Possession by").unwrap_or_default(),
        }
    }
}

fn first_text(card: ElementRef, selector: &scraper::Selector) -> String {
    card.select(selector).next().map(stripped_text).unwrap_or_default()
}

/// Value shown next to a label inside a card.
///
/// Finds the first `.label-control` whose text contains `label`, then reads the next
/// `strong` element after it in document order. Only the first matching label is
/// considered, even when no `strong` follows it.
pub fn label_value(card: ElementRef, label: &str) -> Option<String> {
    let label_el = card
        .select(crate::selector!(".label-control"))
        .find(|el| el.text().collect::<String>().contains(label))?;

    next_strong(label_el).map(stripped_text)
}

/// First `strong` element after `from` in document order, its own descendants included.
///
/// The search runs over the whole document and is not limited to the enclosing card.
fn next_strong(from: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let node = *from;

    node.descendants()
        .skip(1)
        .chain(
            std::iter::once(node)
                .chain(node.ancestors())
                .flat_map(|n| n.next_siblings())
                .flat_map(|sibling| sibling.descendants()),
        )
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "strong")
}

/// Extract up to `limit` project cards from a saved listing page
pub fn parse_cards(html: &str, limit: usize) -> Vec<ProjectCard> {
    let document = Html::parse_document(html);

    document
        .select(crate::selector!(".card.project-card"))
        .take(limit)
        .map(ProjectCard::from_element)
        .collect()
}

/// Read a saved listing page from disk and extract up to `limit` cards
pub fn extract_projects_from_file(path: impl AsRef<Path>, limit: usize) -> Result<Vec<ProjectCard>> {
    let html = std::fs::read_to_string(path.as_ref())?;
    log::debug!("Read {} bytes from {}", html.len(), path.as_ref().display());

    Ok(parse_cards(&html, limit))
}
