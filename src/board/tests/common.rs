use axum::response::Response;
use serde_json::Value;

use crate::board::domain::{ApplicationCard, ApplicationId};

pub(super) fn card(
    id: &str,
    organization: &str,
    solution: &str,
    skills: &str,
) -> ApplicationCard {
    ApplicationCard {
        id: ApplicationId(id.to_string()),
        organization_name: organization.to_string(),
        solution_name: solution.to_string(),
        skills_text: skills.to_string(),
    }
}

/// The two-card board used across the suite: one Go/Rust entry, one Python
/// entry.
pub(super) fn sample_cards() -> Vec<ApplicationCard> {
    vec![
        card("1", "Acme", "X", "Go, Rust"),
        card("2", "Beta", "Y", "Python"),
    ]
}

pub(super) fn card_markup(id: &str, organization: &str, solution: &str, skills: &str) -> String {
    format!(
        "<div class=\"application-card\">\
         <h3>Application # {id}</h3>\
         <p>{organization}</p>\
         <p>{solution}</p>\
         <p class=\"skill-list\">{skills}</p>\
         </div>"
    )
}

pub(super) fn board_markup(cards_html: &str) -> String {
    format!(
        "<html><body><div class=\"application-list\">{cards_html}</div></body></html>"
    )
}

pub(super) fn sample_markup() -> String {
    let cards = format!(
        "{}{}",
        card_markup("1", "Acme", "X", "Go, Rust"),
        card_markup("2", "Beta", "Y", "Python")
    );
    board_markup(&cards)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
