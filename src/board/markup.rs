use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::domain::{ApplicationCard, ApplicationId};

/// CSS class of the list container the board owns.
pub const LIST_CLASS: &str = "application-list";
/// CSS class of a single application card.
pub const CARD_CLASS: &str = "application-card";
/// CSS class marking the skills paragraph inside a card.
pub const SKILL_LIST_CLASS: &str = "skill-list";
/// Literal prefix in front of the id inside the card heading.
pub const ID_PREFIX: &str = "Application # ";

/// Errors raised while reading board markup.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    /// The list container is absent. Recoverable: the page may legitimately
    /// omit the board region, so callers log this and disable the feature.
    #[error("application list container '.{class}' not found in markup")]
    MissingContainer { class: &'static str },
}

/// Scrape the canonical card list out of server-rendered board markup.
///
/// Pure read, run once per load: cards come back in source order, and a
/// malformed card degrades to empty strings or the "N/A" id sentinel rather
/// than aborting the scrape.
pub fn cards_from_markup(html: &str) -> Result<Vec<ApplicationCard>, MarkupError> {
    let document = Html::parse_document(html);

    let list_selector = selector(&format!(".{LIST_CLASS}"));
    let container = document
        .select(&list_selector)
        .next()
        .ok_or(MarkupError::MissingContainer { class: LIST_CLASS })?;

    let card_selector = selector(&format!(".{CARD_CLASS}"));
    let cards = container
        .select(&card_selector)
        .map(card_from_element)
        .collect();

    Ok(cards)
}

fn card_from_element(element: ElementRef<'_>) -> ApplicationCard {
    let heading_selector = selector("h3");
    let id = match element.select(&heading_selector).next() {
        Some(heading) => ApplicationId(
            text_of(heading).replacen(ID_PREFIX, "", 1).trim().to_string(),
        ),
        None => {
            debug!("card without id heading, using sentinel");
            ApplicationId::not_available()
        }
    };

    let paragraph_selector = selector("p");
    let mut skills_text: Option<String> = None;
    let mut free_text: Vec<String> = Vec::new();

    for paragraph in element.select(&paragraph_selector) {
        let is_skill_list = paragraph
            .value()
            .classes()
            .any(|class| class == SKILL_LIST_CLASS);

        if is_skill_list {
            // Only the first skills paragraph counts.
            if skills_text.is_none() {
                skills_text = Some(text_of(paragraph).trim().to_string());
            }
        } else {
            free_text.push(text_of(paragraph).trim().to_string());
        }
    }

    let mut free_text = free_text.into_iter();
    let organization_name = free_text.next().unwrap_or_default();
    let solution_name = free_text.next().unwrap_or_default();

    ApplicationCard {
        id,
        organization_name,
        solution_name,
        skills_text: skills_text.unwrap_or_default(),
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector parses")
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}
