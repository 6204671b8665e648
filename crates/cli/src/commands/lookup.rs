use anyhow::{Result, bail};
use folio_lookup_core::LookupConfig;
use folio_lookup_service::{LoadOutcome, LookupService};

pub(crate) async fn run_search(
    config: LookupConfig,
    location: Option<String>,
    query: &str,
) -> Result<()> {
    let lookup = LookupService::from_config(config)?;
    let outcome = lookup.search(location.as_deref(), query).await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

pub(crate) fn run_locations(config: &LookupConfig) -> Result<()> {
    let default = &config.locations.default_location().name;
    for location in config.locations.all() {
        let marker = if &location.name == default { " (default)" } else { "" };
        println!("{}\tgid={}{}", location.name, location.gid, marker);
    }
    Ok(())
}

pub(crate) async fn run_fetch(
    config: LookupConfig,
    location: Option<String>,
    refresh: bool,
) -> Result<()> {
    let lookup = LookupService::from_config(config)?;
    let location = lookup.resolve_location(location.as_deref())?.clone();
    if refresh {
        lookup.invalidate(Some(&location.name)).await?;
    }

    match lookup.load(&location).await {
        LoadOutcome::Ready(table) => {
            let summary = serde_json::json!({
                "location": location.name,
                "gid": table.gid,
                "rows": table.len(),
                "fetched_at": table.fetched_at,
                "url": lookup.config().export_url(&location.gid),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        },
        LoadOutcome::Failed { message } => bail!(message),
    }
}
