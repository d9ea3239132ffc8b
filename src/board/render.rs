use std::fmt::Write as _;

use serde::Serialize;

use super::domain::ApplicationCard;
use super::markup::{CARD_CLASS, ID_PREFIX, SKILL_LIST_CLASS};

/// Literal placeholder shown when no card matches the current filter.
pub const EMPTY_PLACEHOLDER: &str = "No applications match your criteria.";
/// CSS class on the placeholder paragraph.
pub const EMPTY_PLACEHOLDER_CLASS: &str = "empty-placeholder";

/// The two observable display states of the board: one rendered card per
/// record, or the "no results" placeholder. Which one applies is a pure
/// function of the record count handed to [`view`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    Populated { cards: Vec<ApplicationCard> },
    Empty,
}

impl ViewState {
    pub const fn label(&self) -> &'static str {
        match self {
            ViewState::Populated { .. } => "populated",
            ViewState::Empty => "empty",
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            ViewState::Populated { cards } => cards.len(),
            ViewState::Empty => 0,
        }
    }

    pub fn cards(&self) -> &[ApplicationCard] {
        match self {
            ViewState::Populated { cards } => cards,
            ViewState::Empty => &[],
        }
    }
}

/// Compute the view for a card sequence. Empty input maps to the placeholder
/// state, never to an empty populated list.
pub fn view(cards: &[ApplicationCard]) -> ViewState {
    if cards.is_empty() {
        ViewState::Empty
    } else {
        ViewState::Populated {
            cards: cards.to_vec(),
        }
    }
}

/// Render a view as the list container's inner HTML.
///
/// The output replaces the container's previous children wholesale; callers
/// never patch it incrementally. The card structure matches what
/// [`super::markup::cards_from_markup`] expects, so re-scraping rendered
/// markup reproduces the card data exactly.
pub fn to_html(state: &ViewState) -> String {
    match state {
        ViewState::Empty => format!(
            "<p class=\"{EMPTY_PLACEHOLDER_CLASS}\">{EMPTY_PLACEHOLDER}</p>\n"
        ),
        ViewState::Populated { cards } => {
            let mut html = String::new();
            for card in cards {
                let _ = write!(
                    html,
                    "<div class=\"{CARD_CLASS}\">\n\
                     <h3>{ID_PREFIX}{id}</h3>\n\
                     <p>{organization}</p>\n\
                     <p>{solution}</p>\n\
                     <p class=\"{SKILL_LIST_CLASS}\">{skills}</p>\n\
                     </div>\n",
                    id = escape(&card.id.0),
                    organization = escape(&card.organization_name),
                    solution = escape(&card.solution_name),
                    skills = escape(&card.skills_text),
                );
            }
            html
        }
    }
}

/// Minimal HTML text escaping for card fields.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
