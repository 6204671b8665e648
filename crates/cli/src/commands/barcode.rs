use anyhow::{Context, Result};
use folio_lookup_barcode::OutputFormat;
use folio_lookup_core::LookupConfig;
use folio_lookup_service::LookupService;
use std::path::PathBuf;

pub(crate) fn run(
    config: LookupConfig,
    folio: &str,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let symbology = config.symbology;
    let lookup = LookupService::from_config(config)?;
    let bytes = lookup.barcode(folio, format).map_err(|e| {
        tracing::warn!(folio, %symbology, error = %e, "barcode not generated");
        e
    })?;

    let path = output.unwrap_or_else(|| default_output(folio, format));
    std::fs::write(&path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(folio, %symbology, path = %path.display(), bytes = bytes.len(), "barcode written");
    println!("{}", path.display());
    Ok(())
}

fn default_output(folio: &str, format: OutputFormat) -> PathBuf {
    let stem: String = folio
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    PathBuf::from(format!("{stem}.{}", format.extension()))
}
