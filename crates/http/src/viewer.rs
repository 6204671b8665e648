//! Lookup page - embedded HTML/CSS/JS
//!
//! Serves a single page at `/` with the location selector, the search box,
//! and one card per matching row with its barcode.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

/// Embedded HTML for the lookup page
pub const VIEWER_HTML: &str = include_str!("viewer.html");

/// Serve the lookup page
pub async fn serve_viewer() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(VIEWER_HTML))
        .into_response()
}
