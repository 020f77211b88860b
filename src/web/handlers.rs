//! HTTP request handlers

use super::state::AppState;
use crate::error::SearchError;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tera::Context;

/// Query parameters for autocomplete
#[derive(Debug, Deserialize)]
pub struct AutocompleteParams {
    /// Prefix typed by the user
    pub q: Option<String>,
}

/// Map a service error to a response; engine details stay in the log
fn error_response(err: SearchError, public_message: &'static str) -> Response {
    if err.is_client_error() {
        return (StatusCode::BAD_REQUEST, err_message(&err)).into_response();
    }
    tracing::error!("{}: {}", public_message, err);
    (StatusCode::INTERNAL_SERVER_ERROR, public_message).into_response()
}

fn err_message(err: &SearchError) -> String {
    match err {
        SearchError::InvalidInput(msg) => msg.clone(),
        other => other.to_string(),
    }
}

/// Demo page handler
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("field", state.autocomplete.field());

    match state.templates.render_with_context("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Autocomplete handler
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> Response {
    let prefix = params.q.unwrap_or_default();

    match state.autocomplete.suggest(&prefix).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => error_response(e, "failed to fetch suggestions"),
    }
}

/// Mapping check handler
pub async fn check_mapping(State(state): State<AppState>) -> Response {
    match state.autocomplete.check_mapping().await {
        Ok(result) => Json(result).into_response(),
        Err(e) => error_response(e, "failed to check mapping"),
    }
}

/// Index creation handler
pub async fn create_index(State(state): State<AppState>) -> Response {
    match state.autocomplete.create_index().await {
        Ok(outcome) => Json(serde_json::json!({ "status": outcome.as_str() })).into_response(),
        Err(e) => error_response(e, "failed to create index"),
    }
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
