use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use folio_lookup_barcode::OutputFormat;
use folio_lookup_core::Symbology;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::BarcodeQuery;

pub async fn barcode(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BarcodeQuery>,
) -> Result<Response, ApiError> {
    if query.folio.trim().is_empty() {
        return Err(ApiError::BadRequest("missing folio parameter".to_owned()));
    }
    let format: OutputFormat = match query.format.as_deref() {
        Some(raw) => raw.parse().map_err(|e| ApiError::BadRequest(format!("{e}")))?,
        None => OutputFormat::default(),
    };
    let symbology = match query.symbology.as_deref() {
        Some(raw) => raw.parse::<Symbology>().map_err(|e| ApiError::BadRequest(e.to_string()))?,
        None => state.lookup.symbology(),
    };

    let bytes = state.lookup.barcode_with(symbology, &query.folio, format)?;
    Ok(([(header::CONTENT_TYPE, format.content_type())], bytes).into_response())
}
