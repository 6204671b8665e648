use axum::{
    Json,
    extract::{ConnectInfo, Query, State},
};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::InvalidateRequest;
use crate::response_types::InvalidateResponse;

fn is_localhost(addr: &SocketAddr) -> bool {
    addr.ip().is_loopback()
}

pub async fn invalidate(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(state): State<Arc<AppState>>,
    Query(req): Query<InvalidateRequest>,
) -> Result<Json<InvalidateResponse>, ApiError> {
    if !is_localhost(&addr) {
        tracing::warn!(%addr, "rejected cache invalidation from remote caller");
        return Err(ApiError::Forbidden("cache invalidation is only allowed from localhost".to_owned()));
    }
    let removed = state.lookup.invalidate(req.location.as_deref()).await?;
    tracing::info!(location = ?req.location, removed, "cache invalidated via API");
    Ok(Json(InvalidateResponse { removed }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_addresses_are_local() {
        assert!(is_localhost(&"127.0.0.1:8501".parse().expect("v4")));
        assert!(is_localhost(&"[::1]:8501".parse().expect("v6")));
        assert!(!is_localhost(&"192.168.1.20:8501".parse().expect("lan")));
    }
}
