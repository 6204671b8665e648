use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use folio_lookup_core::{LocationRegistry, LookupConfig, Row};
use folio_lookup_http::{AppState, Branding, create_router};
use folio_lookup_service::LookupService;
use folio_lookup_sheets::{SheetError, Table, TableSource};

struct StaticSheets;

#[async_trait]
impl TableSource for StaticSheets {
    async fn load(&self, gid: &str) -> Result<Table, SheetError> {
        match gid {
            "1" => Ok(Table::new(
                gid,
                vec![
                    Row::new(
                        "12345".to_owned(),
                        "Motor de partida 12V".to_owned(),
                        "A1".to_owned(),
                        "S-1".to_owned(),
                        Some("Planta Norte".to_owned()),
                    ),
                    Row::new(
                        "67890".to_owned(),
                        "Bomba de agua".to_owned(),
                        "A2".to_owned(),
                        "S-2".to_owned(),
                        None,
                    ),
                ],
            )),
            _ => Err(SheetError::HttpStatus { code: 500, url: format!("test://{gid}") }),
        }
    }
}

fn app(branding: Branding) -> axum::Router {
    let locations = LocationRegistry::parse("Norte=1,Roto=2").unwrap();
    let config = LookupConfig { locations, ..LookupConfig::default() };
    let lookup = LookupService::new(config, Arc::new(StaticSheets));
    create_router(Arc::new(AppState { lookup: Arc::new(lookup), branding }))
}

fn default_app() -> axum::Router {
    app(Branding::default())
}

async fn send(app: axum::Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    send_from(app, method, uri, SocketAddr::from(([127, 0, 0, 1], 40000))).await
}

async fn send_from(
    app: axum::Router,
    method: &str,
    uri: &str,
    peer: SocketAddr,
) -> (StatusCode, Vec<u8>) {
    let mut request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
    request.extensions_mut().insert(ConnectInfo(peer));
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(app, "GET", uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = send(default_app(), "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn root_serves_lookup_page() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = default_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn locations_lists_registry_with_default() {
    let (status, json) = get_json(default_app(), "/api/locations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["default"], "Norte");
    assert_eq!(json["symbology"], "code128");
    assert_eq!(json["locations"].as_array().unwrap().len(), 2);
    assert_eq!(json["locations"][1]["gid"], "2");
}

#[tokio::test]
async fn search_without_query_awaits_input() {
    let (status, json) = get_json(default_app(), "/api/search?location=Norte").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"], "awaiting_input");
    assert_eq!(json["rows_loaded"], 2);
}

#[tokio::test]
async fn search_returns_matching_rows_with_barcodes() {
    let (status, json) = get_json(default_app(), "/api/search?location=norte&q=PARTIDA%20motor").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"], "matches");
    assert_eq!(json["total"], 1);
    let row = &json["rows"][0];
    assert_eq!(row["folio"], "12345");
    assert_eq!(row["heading"], "Folio: 12345 - Planta Norte");
    assert!(row["barcode_svg"].as_str().unwrap().starts_with("<svg"));
}

#[tokio::test]
async fn search_unknown_location_is_not_found() {
    let (status, json) = get_json(default_app(), "/api/search?location=Atlantis&q=motor").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["state"], "unknown_location");
    assert_eq!(json["name"], "Atlantis");
}

#[tokio::test]
async fn search_on_broken_sheet_reports_unavailable() {
    let (status, json) = get_json(default_app(), "/api/search?location=Roto&q=motor").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"], "unavailable");
    assert!(json["message"].as_str().unwrap().contains("Roto"));
}

#[tokio::test]
async fn barcode_png_has_image_content_type() {
    let request =
        Request::builder().uri("/api/barcode?folio=12345&format=png").body(Body::empty()).unwrap();
    let response = default_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "image/png");
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[tokio::test]
async fn barcode_svg_embeds_folio_text() {
    let (status, body) = send(default_app(), "GET", "/api/barcode?folio=AB-12&format=svg").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("AB-12"));
}

#[tokio::test]
async fn barcode_rejects_unencodable_folio() {
    let (status, json) =
        get_json(default_app(), "/api/barcode?folio=ABC&format=svg&symbology=ean13").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn barcode_rejects_unknown_format() {
    let (status, _) = get_json(default_app(), "/api/barcode?folio=123&format=gif").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logo_missing_is_not_found_and_branding_warns() {
    let branding = Branding::load(std::path::Path::new("/nonexistent/folio-lookup/logo.png"));
    let (status, _) = send(app(branding.clone()), "GET", "/logo").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = get_json(app(branding), "/api/branding").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["logo"], false);
    assert!(json["warning"].as_str().unwrap().contains("logo.png"));
}

#[tokio::test]
async fn logo_is_served_when_configured() {
    let branding = Branding::from_bytes(vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    let request = Request::builder().uri("/logo").body(Body::empty()).unwrap();
    let response = app(branding).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "image/png");
}

#[tokio::test]
async fn invalidate_drops_cached_location() {
    let app = default_app();
    let (status, _) = send(app.clone(), "GET", "/api/search?location=Norte&q=motor").await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = get_json(app.clone(), "/api/locations").await;
    assert_eq!(json["cached"], serde_json::json!(["Norte"]));

    let (status, body) = send(app.clone(), "POST", "/api/cache/invalidate?location=Norte").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["removed"], 1);

    let (_, json) = get_json(app, "/api/locations").await;
    assert_eq!(json["cached"], serde_json::json!([]));
}

#[tokio::test]
async fn invalidate_unknown_location_is_not_found() {
    let (status, _) = send(default_app(), "POST", "/api/cache/invalidate?location=Atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalidate_from_remote_caller_is_forbidden() {
    let app = default_app();
    let (status, _) = send(app.clone(), "GET", "/api/search?location=Norte&q=motor").await;
    assert_eq!(status, StatusCode::OK);

    let remote = SocketAddr::from(([203, 0, 113, 7], 51000));
    let (status, body) = send_from(app.clone(), "POST", "/api/cache/invalidate", remote).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("localhost"));

    let (_, json) = get_json(app, "/api/locations").await;
    assert_eq!(json["cached"], serde_json::json!(["Norte"]));
}

#[tokio::test]
async fn barcode_without_folio_is_json_bad_request() {
    let (status, json) = get_json(default_app(), "/api/barcode?format=png").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("folio"));

    let (status, json) = get_json(default_app(), "/api/barcode?folio=%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn barcode_rejects_overlong_folio() {
    let uri = format!("/api/barcode?folio={}&format=png", "9".repeat(500));
    let (status, json) = get_json(default_app(), &uri).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].is_string());
}
