use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::{BrandingResponse, LocationsResponse};

pub async fn list_locations(State(state): State<Arc<AppState>>) -> Json<LocationsResponse> {
    let lookup = &state.lookup;
    Json(LocationsResponse {
        locations: lookup.locations().to_vec(),
        default: lookup.config().locations.default_location().name.clone(),
        symbology: lookup.symbology(),
        cached: lookup.cached_locations().await,
    })
}

pub async fn branding(State(state): State<Arc<AppState>>) -> Json<BrandingResponse> {
    Json(BrandingResponse {
        logo: state.branding.logo().is_some(),
        warning: state.branding.warning().map(str::to_owned),
    })
}

pub async fn logo(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let bytes = state
        .branding
        .logo()
        .ok_or_else(|| ApiError::NotFound("no logo configured".to_owned()))?;
    Ok(([(header::CONTENT_TYPE, state.branding.content_type())], bytes.to_vec()).into_response())
}
