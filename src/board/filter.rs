use super::domain::ApplicationCard;

/// Split free text on commas into lower-cased, trimmed skill tokens.
///
/// Total over any input: whitespace-only or comma-only text yields an empty
/// token list rather than an error. Idempotent when re-applied to its own
/// comma-joined output.
pub fn normalize_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// A parsed skill query. An empty query matches every card by definition;
/// a non-empty query matches a card when at least one requested token equals
/// one of the card's normalized skills (OR semantics, exact token equality).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFilter {
    tokens: Vec<String>,
}

impl SkillFilter {
    pub fn parse(text: &str) -> Self {
        Self {
            tokens: normalize_skills(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn matches(&self, card: &ApplicationCard) -> bool {
        if self.tokens.is_empty() {
            return true;
        }
        let skills = card.skill_tokens();
        self.tokens.iter().any(|requested| skills.contains(requested))
    }
}

/// Select the cards matching `filter`, preserving the original order.
///
/// An empty filter returns the full list unchanged: the board treats a blank
/// query as "show everything", not "show nothing".
pub fn filter_cards(cards: &[ApplicationCard], filter: &SkillFilter) -> Vec<ApplicationCard> {
    if filter.is_empty() {
        return cards.to_vec();
    }

    cards
        .iter()
        .filter(|card| filter.matches(card))
        .cloned()
        .collect()
}
