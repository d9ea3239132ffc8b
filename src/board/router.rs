use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::domain::ApplicationCard;
use super::markup::cards_from_markup;
use super::render::to_html;
use super::store::ApplicationStore;

/// Router builder exposing the board filtration endpoint.
pub fn board_router() -> Router {
    Router::new().route("/api/v1/board/filter", post(filter_handler))
}

/// Request payload: cards arrive either as raw board markup or as an already
/// structured list, plus the free-text skill query.
#[derive(Debug, Deserialize)]
pub struct FilterBoardRequest {
    #[serde(default)]
    pub markup: Option<String>,
    #[serde(default)]
    pub cards: Option<Vec<ApplicationCard>>,
    #[serde(default)]
    pub skills: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FilterBoardResponse {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub matched: usize,
    pub state: &'static str,
    pub cards: Vec<ApplicationCard>,
    pub html: String,
}

pub(crate) async fn filter_handler(Json(request): Json<FilterBoardRequest>) -> Response {
    let cards = match (request.markup, request.cards) {
        (Some(markup), _) => match cards_from_markup(&markup) {
            Ok(cards) => cards,
            Err(error) => {
                warn!(%error, "board markup rejected");
                let payload = json!({ "error": error.to_string() });
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
            }
        },
        (None, Some(cards)) => cards,
        (None, None) => {
            let payload = json!({ "error": "either 'markup' or 'cards' must be provided" });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };

    let mut store = ApplicationStore::new(cards);
    let skills = request.skills.unwrap_or_default();
    let view = store.apply_filter(&skills).clone();

    let response = FilterBoardResponse {
        generated_at: Utc::now(),
        total: store.cards().len(),
        matched: view.card_count(),
        state: view.label(),
        html: to_html(&view),
        cards: view.cards().to_vec(),
    };

    (StatusCode::OK, Json(response)).into_response()
}
