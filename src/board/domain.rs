use serde::{Deserialize, Serialize};

use super::filter::normalize_skills;

/// Identifier wrapper for application cards.
///
/// The value is a display label taken from the card heading; it is not
/// guaranteed to be numeric or unique across a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    /// Sentinel shown when a card carries no id heading.
    pub const NOT_AVAILABLE: &'static str = "N/A";

    pub fn not_available() -> Self {
        Self(Self::NOT_AVAILABLE.to_string())
    }
}

/// One application entry on the board: who submitted it, what they propose,
/// and the raw comma-separated skill text the filter operates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationCard {
    pub id: ApplicationId,
    #[serde(default)]
    pub organization_name: String,
    #[serde(default)]
    pub solution_name: String,
    #[serde(default)]
    pub skills_text: String,
}

impl ApplicationCard {
    /// Normalized skill tokens derived from `skills_text`. Deterministic:
    /// lower-cased, trimmed, empty tokens dropped, source order preserved.
    pub fn skill_tokens(&self) -> Vec<String> {
        normalize_skills(&self.skills_text)
    }
}
