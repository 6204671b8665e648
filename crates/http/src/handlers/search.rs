use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use folio_lookup_service::SearchOutcome;

use crate::AppState;
use crate::query_types::SearchQuery;

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> (StatusCode, Json<SearchOutcome>) {
    let outcome = state.lookup.search(query.location.as_deref(), &query.q).await;
    tracing::debug!(location = ?query.location, state = outcome.state(), "search request");
    let status = match outcome {
        SearchOutcome::UnknownLocation { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };
    (status, Json(outcome))
}
