use std::sync::Arc;

use folio_lookup_barcode::{Barcode, OutputFormat, RenderOptions, generate_svg};
use folio_lookup_core::{KeywordQuery, Location, LookupConfig, Row, Symbology};
use folio_lookup_sheets::{SheetClient, TableCache, TableSource};

use crate::ServiceError;
use crate::outcome::{
    DisplayField, LoadOutcome, MSG_AWAITING_INPUT, MSG_BARCODE_FAILED, MSG_NO_RESULTS,
    RenderedRow, SearchOutcome,
};

/// Load → filter → render pipeline behind every lookup request.
pub struct LookupService {
    config: LookupConfig,
    cache: TableCache,
    render: RenderOptions,
}

impl LookupService {
    #[must_use]
    pub fn new(config: LookupConfig, source: Arc<dyn TableSource>) -> Self {
        let cache = TableCache::new(source, config.cache_ttl);
        Self { config, cache, render: RenderOptions::default() }
    }

    /// Builds the service with the HTTP export client described by `config`.
    pub fn from_config(config: LookupConfig) -> Result<Self, ServiceError> {
        let client = SheetClient::new(&config)?;
        Ok(Self::new(config, Arc::new(client)))
    }

    #[must_use]
    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &LookupConfig {
        &self.config
    }

    #[must_use]
    pub const fn symbology(&self) -> Symbology {
        self.config.symbology
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        self.config.locations.all()
    }

    /// Resolves a location by name; `None` or blank picks the default.
    pub fn resolve_location(&self, name: Option<&str>) -> Result<&Location, ServiceError> {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            None => Ok(self.config.locations.default_location()),
            Some(name) => self
                .config
                .locations
                .get(name)
                .ok_or_else(|| ServiceError::UnknownLocation(name.to_owned())),
        }
    }

    /// Loads (or reuses) the location's table. Never fails: errors become
    /// a user-facing message and an empty row set.
    pub async fn load(&self, location: &Location) -> LoadOutcome {
        match self.cache.get_or_load(&location.gid).await {
            Ok(table) => LoadOutcome::Ready(table),
            Err(e) => {
                let transient = e.is_transient();
                tracing::warn!(location = %location.name, gid = %location.gid, error = %e, transient, "sheet load failed");
                let message = if transient {
                    format!(
                        "The spreadsheet for {} is temporarily unavailable ({e}). Try again in a \
                         moment.",
                        location.name
                    )
                } else {
                    format!(
                        "Could not load data from the spreadsheet for {}: {e}. Check that the \
                         sheet link is correct and public, and that the headers are on row {}.",
                        location.name,
                        self.config.header_row + 1
                    )
                };
                LoadOutcome::Failed { message }
            },
        }
    }

    /// Runs one lookup for the named location.
    pub async fn search(&self, location_name: Option<&str>, query: &str) -> SearchOutcome {
        let location = match self.resolve_location(location_name) {
            Ok(location) => location,
            Err(_) => {
                return SearchOutcome::UnknownLocation {
                    name: location_name.unwrap_or_default().trim().to_owned(),
                };
            },
        };

        let loaded = self.load(location).await;
        if let Some(message) = loaded.message() {
            return SearchOutcome::Unavailable {
                location: location.name.clone(),
                message: message.to_owned(),
            };
        }
        let rows = loaded.rows();
        if rows.is_empty() {
            return SearchOutcome::Unavailable {
                location: location.name.clone(),
                message: format!(
                    "Could not load data for distribution center '{}'.",
                    location.name
                ),
            };
        }

        let keywords = KeywordQuery::parse(query);
        if keywords.is_empty() {
            return SearchOutcome::AwaitingInput {
                location: location.name.clone(),
                rows_loaded: rows.len(),
                message: MSG_AWAITING_INPUT,
            };
        }

        let rendered: Vec<RenderedRow> =
            keywords.filter(rows).map(|row| self.render_row(row)).collect();
        tracing::debug!(
            location = %location.name,
            tokens = keywords.tokens().len(),
            matches = rendered.len(),
            "lookup complete"
        );
        SearchOutcome::Matches {
            location: location.name.clone(),
            query: query.trim().to_owned(),
            total: rendered.len(),
            message: rendered.is_empty().then_some(MSG_NO_RESULTS),
            rows: rendered,
        }
    }

    /// Fields plus barcode for one row. A folio the symbology rejects gets
    /// a warning instead of an image.
    #[must_use]
    pub fn render_row(&self, row: &Row) -> RenderedRow {
        let (barcode_svg, barcode_warning) =
            match generate_svg(self.config.symbology, &row.folio, &self.render) {
                Ok(svg) => (Some(svg), None),
                Err(e) => (None, Some(format!("{MSG_BARCODE_FAILED} ({e})"))),
            };
        RenderedRow {
            heading: row.heading(),
            folio: row.folio.clone(),
            fields: row
                .display_fields()
                .into_iter()
                .map(|(label, value)| DisplayField { label, value: value.to_owned() })
                .collect(),
            caption: format!("Code for {}", row.folio),
            barcode_svg,
            barcode_warning,
        }
    }

    /// Standalone barcode image for a folio in the configured symbology.
    pub fn barcode(&self, folio: &str, format: OutputFormat) -> Result<Vec<u8>, ServiceError> {
        self.barcode_with(self.config.symbology, folio, format)
    }

    pub fn barcode_with(
        &self,
        symbology: Symbology,
        folio: &str,
        format: OutputFormat,
    ) -> Result<Vec<u8>, ServiceError> {
        let barcode = Barcode::encode(symbology, folio)?;
        Ok(barcode.render(format, &self.render)?)
    }

    /// Drops the cached table of one location, or of all when `location` is `None`.
    /// Returns the number of entries removed.
    pub async fn invalidate(&self, location: Option<&str>) -> Result<usize, ServiceError> {
        match location.map(str::trim).filter(|n| !n.is_empty()) {
            None => Ok(self.cache.invalidate_all().await),
            Some(name) => {
                let location = self
                    .config
                    .locations
                    .get(name)
                    .ok_or_else(|| ServiceError::UnknownLocation(name.to_owned()))?;
                Ok(usize::from(self.cache.invalidate(&location.gid).await))
            },
        }
    }

    /// Location names whose tables are currently cached.
    pub async fn cached_locations(&self) -> Vec<String> {
        self.cache
            .cached_gids()
            .await
            .iter()
            .filter_map(|gid| self.config.locations.by_gid(gid))
            .map(|loc| loc.name.clone())
            .collect()
    }
}
