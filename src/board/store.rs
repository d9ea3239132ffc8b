use super::domain::ApplicationCard;
use super::filter::{filter_cards, SkillFilter};
use super::markup::{cards_from_markup, MarkupError};
use super::render::{view, ViewState};

/// In-memory board state: the canonical card list loaded once, plus the
/// currently rendered view.
///
/// The card list is a read-only snapshot; applying a filter only changes
/// which subset the current view shows.
#[derive(Debug, Clone)]
pub struct ApplicationStore {
    cards: Vec<ApplicationCard>,
    current: ViewState,
}

impl ApplicationStore {
    pub fn new(cards: Vec<ApplicationCard>) -> Self {
        let current = view(&cards);
        Self { cards, current }
    }

    /// Build the store by scraping existing board markup. The only boundary
    /// between rendered state and the in-memory model.
    pub fn from_markup(html: &str) -> Result<Self, MarkupError> {
        Ok(Self::new(cards_from_markup(html)?))
    }

    pub fn cards(&self) -> &[ApplicationCard] {
        &self.cards
    }

    pub fn current_view(&self) -> &ViewState {
        &self.current
    }

    /// Apply a free-text skill filter and re-render. A blank filter shows
    /// the full list.
    pub fn apply_filter(&mut self, filter_text: &str) -> &ViewState {
        let filter = SkillFilter::parse(filter_text);
        let matched = filter_cards(&self.cards, &filter);
        self.current = view(&matched);
        &self.current
    }

    /// Clear the filter and show the full list again.
    pub fn reset_filter(&mut self) -> &ViewState {
        self.apply_filter("")
    }
}
