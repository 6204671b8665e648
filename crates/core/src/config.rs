//! Runtime configuration assembled from `FOLIO_LOOKUP_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_EXPORT_BASE_URL, DEFAULT_FETCH_TIMEOUT_SECS,
    DEFAULT_HEADER_ROW, DEFAULT_LOGO_PATH, DEFAULT_SHEET_ID,
};
use crate::env_config::{env_non_empty, parse_with_default};
use crate::error::Result;
use crate::location::LocationRegistry;
use crate::row::ColumnSet;
use crate::symbology::Symbology;

pub const ENV_SHEET_ID: &str = "FOLIO_LOOKUP_SHEET_ID";
pub const ENV_EXPORT_BASE_URL: &str = "FOLIO_LOOKUP_EXPORT_BASE_URL";
pub const ENV_LOCATIONS: &str = "FOLIO_LOOKUP_LOCATIONS";
pub const ENV_SYMBOLOGY: &str = "FOLIO_LOOKUP_SYMBOLOGY";
pub const ENV_HEADER_ROW: &str = "FOLIO_LOOKUP_HEADER_ROW";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "FOLIO_LOOKUP_FETCH_TIMEOUT_SECS";
pub const ENV_CACHE_TTL_SECS: &str = "FOLIO_LOOKUP_CACHE_TTL_SECS";
pub const ENV_LOGO: &str = "FOLIO_LOOKUP_LOGO";

#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub sheet_id: String,
    /// Export base without trailing slash.
    pub export_base_url: String,
    pub locations: LocationRegistry,
    pub symbology: Symbology,
    /// Zero-based index of the header row in the CSV export.
    pub header_row: usize,
    pub fetch_timeout: Duration,
    /// `None` keeps cached tables until they are invalidated.
    pub cache_ttl: Option<Duration>,
    pub logo_path: PathBuf,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            sheet_id: DEFAULT_SHEET_ID.to_owned(),
            export_base_url: DEFAULT_EXPORT_BASE_URL.to_owned(),
            locations: LocationRegistry::default(),
            symbology: Symbology::default(),
            header_row: DEFAULT_HEADER_ROW,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            cache_ttl: None,
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
        }
    }
}

impl LookupConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    /// Returns an error if the locations list or symbology is malformed.
    /// Malformed numbers fall back to their defaults with a warning.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_non_empty)
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let locations = match get(ENV_LOCATIONS) {
            Some(raw) => LocationRegistry::parse(&raw)?,
            None => defaults.locations,
        };
        let symbology = match get(ENV_SYMBOLOGY) {
            Some(raw) => raw.parse()?,
            None => defaults.symbology,
        };
        let header_row =
            parse_with_default(ENV_HEADER_ROW, get(ENV_HEADER_ROW).as_deref(), DEFAULT_HEADER_ROW);
        let timeout_secs = parse_with_default(
            ENV_FETCH_TIMEOUT_SECS,
            get(ENV_FETCH_TIMEOUT_SECS).as_deref(),
            DEFAULT_FETCH_TIMEOUT_SECS,
        );
        let ttl_secs = parse_with_default(
            ENV_CACHE_TTL_SECS,
            get(ENV_CACHE_TTL_SECS).as_deref(),
            DEFAULT_CACHE_TTL_SECS,
        );

        Ok(Self {
            sheet_id: get(ENV_SHEET_ID).map_or(defaults.sheet_id, |v| v.trim().to_owned()),
            export_base_url: get(ENV_EXPORT_BASE_URL)
                .map_or(defaults.export_base_url, |v| v.trim().trim_end_matches('/').to_owned()),
            locations,
            symbology,
            header_row,
            fetch_timeout: Duration::from_secs(timeout_secs.max(1)),
            cache_ttl: (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs)),
            logo_path: get(ENV_LOGO).map_or(defaults.logo_path, PathBuf::from),
        })
    }

    #[must_use]
    pub fn with_symbology(mut self, symbology: Symbology) -> Self {
        self.symbology = symbology;
        self
    }

    /// CSV export URL for one sub-sheet.
    #[must_use]
    pub fn export_url(&self, gid: &str) -> String {
        format!("{}/{}/export?format=csv&gid={}", self.export_base_url, self.sheet_id, gid)
    }

    #[must_use]
    pub const fn columns(&self) -> ColumnSet {
        ColumnSet::for_symbology(self.symbology)
    }
}
