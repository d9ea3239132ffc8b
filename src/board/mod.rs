//! Skill-based filtration over application cards.
//!
//! The board core is a small pipeline: scrape server-rendered markup (or an
//! export) into [`ApplicationCard`] records, select a subset with a
//! [`SkillFilter`], and render the result as a [`ViewState`] plus the list
//! container's replacement HTML. Everything below the router is synchronous
//! and free of shared mutable state.

pub mod domain;
pub mod filter;
pub mod import;
pub mod markup;
pub mod render;
pub mod router;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{ApplicationCard, ApplicationId};
pub use filter::{filter_cards, normalize_skills, SkillFilter};
pub use import::{cards_from_csv, cards_from_json, ImportError};
pub use markup::{cards_from_markup, MarkupError};
pub use render::{to_html, view, ViewState, EMPTY_PLACEHOLDER};
pub use router::{board_router, FilterBoardRequest, FilterBoardResponse};
pub use store::ApplicationStore;
