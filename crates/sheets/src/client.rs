use std::time::Duration;

use async_trait::async_trait;
use folio_lookup_core::{ColumnSet, LookupConfig};

use crate::error::SheetError;
use crate::parse::parse_rows;
use crate::table::Table;

/// Anything that can produce the table for a sub-sheet id.
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn load(&self, gid: &str) -> Result<Table, SheetError>;
}

/// Client for the spreadsheet CSV export endpoint.
pub struct SheetClient {
    client: reqwest::Client,
    export_base_url: String,
    sheet_id: String,
    header_row: usize,
    columns: ColumnSet,
}

impl std::fmt::Debug for SheetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetClient")
            .field("export_base_url", &self.export_base_url)
            .field("sheet_id", &self.sheet_id)
            .field("header_row", &self.header_row)
            .finish_non_exhaustive()
    }
}

impl SheetClient {
    /// Creates a client for the sheet, header row and columns in `config`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: &LookupConfig) -> Result<Self, SheetError> {
        Self::with_timeout(config, config.fetch_timeout)
    }

    /// Same as [`SheetClient::new`] with an explicit request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(config: &LookupConfig, timeout: Duration) -> Result<Self, SheetError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SheetError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            export_base_url: config.export_base_url.trim_end_matches('/').to_owned(),
            sheet_id: config.sheet_id.clone(),
            header_row: config.header_row,
            columns: config.columns(),
        })
    }

    #[must_use]
    pub fn export_url(&self, gid: &str) -> String {
        format!("{}/{}/export?format=csv&gid={}", self.export_base_url, self.sheet_id, gid)
    }

    /// Downloads the raw CSV text of one sub-sheet.
    ///
    /// # Errors
    /// Returns an error on transport failure, timeout, or a non-success status.
    pub async fn fetch_csv(&self, gid: &str) -> Result<String, SheetError> {
        let url = self.export_url(gid);
        tracing::debug!(%url, "fetching sheet export");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::HttpStatus { code: status.as_u16(), url });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl TableSource for SheetClient {
    async fn load(&self, gid: &str) -> Result<Table, SheetError> {
        let text = self.fetch_csv(gid).await?;
        let rows = parse_rows(&text, self.header_row, &self.columns)?;
        tracing::info!(gid, rows = rows.len(), "loaded sheet export");
        Ok(Table::new(gid, rows))
    }
}
