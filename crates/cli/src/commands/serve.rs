use anyhow::Result;
use folio_lookup_core::LookupConfig;
use folio_lookup_http::{AppState, Branding, create_router};
use folio_lookup_service::LookupService;
use std::net::SocketAddr;
use std::sync::Arc;

pub(crate) async fn run(config: LookupConfig, port: u16, host: String) -> Result<()> {
    let branding = Branding::load(&config.logo_path);
    tracing::info!(
        symbology = %config.symbology,
        locations = config.locations.all().len(),
        cache_ttl = ?config.cache_ttl,
        "lookup configured"
    );
    let lookup = Arc::new(LookupService::from_config(config)?);

    let state = Arc::new(AppState { lookup, branding });
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
