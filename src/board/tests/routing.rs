use super::common::*;
use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::board::router::{board_router, filter_handler, FilterBoardRequest};

#[tokio::test]
async fn filter_handler_scrapes_markup_and_applies_the_query() {
    let request = FilterBoardRequest {
        markup: Some(sample_markup()),
        cards: None,
        skills: Some("rust".to_string()),
    };

    let response = filter_handler(axum::Json(request)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("total"), Some(&json!(2)));
    assert_eq!(payload.get("matched"), Some(&json!(1)));
    assert_eq!(payload.get("state"), Some(&json!("populated")));
    assert_eq!(
        payload
            .pointer("/cards/0/id")
            .and_then(Value::as_str),
        Some("1")
    );
}

#[tokio::test]
async fn filter_handler_accepts_structured_cards() {
    let request = FilterBoardRequest {
        markup: None,
        cards: Some(sample_cards()),
        skills: Some("RUST, python".to_string()),
    };

    let response = filter_handler(axum::Json(request)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("matched"), Some(&json!(2)), "OR semantics");
}

#[tokio::test]
async fn filter_handler_defaults_to_the_full_board_without_a_query() {
    let request = FilterBoardRequest {
        markup: Some(sample_markup()),
        cards: None,
        skills: None,
    };

    let response = filter_handler(axum::Json(request)).await;
    let payload = read_json_body(response).await;

    assert_eq!(payload.get("matched"), Some(&json!(2)));
    let html = payload
        .get("html")
        .and_then(Value::as_str)
        .expect("html rendered");
    assert_eq!(html.matches("application-card").count(), 2);
}

#[tokio::test]
async fn filter_handler_reports_the_placeholder_state() {
    let request = FilterBoardRequest {
        markup: Some(sample_markup()),
        cards: None,
        skills: Some("cobol".to_string()),
    };

    let response = filter_handler(axum::Json(request)).await;
    let payload = read_json_body(response).await;

    assert_eq!(payload.get("state"), Some(&json!("empty")));
    assert_eq!(payload.get("matched"), Some(&json!(0)));
    assert!(payload
        .get("html")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("No applications match your criteria."));
}

#[tokio::test]
async fn filter_handler_rejects_markup_without_the_container() {
    let request = FilterBoardRequest {
        markup: Some("<div class=\"unrelated\"></div>".to_string()),
        cards: None,
        skills: None,
    };

    let response = filter_handler(axum::Json(request)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("application-list"));
}

#[tokio::test]
async fn filter_handler_requires_a_card_source() {
    let request = FilterBoardRequest {
        markup: None,
        cards: None,
        skills: Some("rust".to_string()),
    };

    let response = filter_handler(axum::Json(request)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn filter_route_accepts_json_payloads() {
    let router = board_router();

    let body = json!({
        "cards": sample_cards(),
        "skills": "python"
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/board/filter")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&body).expect("serializable body"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("matched"), Some(&json!(1)));
    assert_eq!(
        payload.pointer("/cards/0/organization_name").and_then(Value::as_str),
        Some("Beta")
    );
}
