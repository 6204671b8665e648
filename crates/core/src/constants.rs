//! Shared constants for folio-lookup.

/// Published spreadsheet holding one sub-sheet per distribution center.
pub const DEFAULT_SHEET_ID: &str = "1uga-VQ9UTr9lhMPe-VGjA581G2Fyjatt6bNB6JeEykk";

/// Base of the CSV export URL; the sheet id and `export?...` are appended.
pub const DEFAULT_EXPORT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// Distribution centers and their sub-sheet ids, in display order.
pub const DEFAULT_LOCATIONS: &[(&str, &str)] =
    &[("Santa Isabel", "1299544230"), ("Enea", "1200217273")];

/// Zero-based row index of the header line in the export (row 6 in the sheet).
pub const DEFAULT_HEADER_ROW: usize = 5;

/// Timeout for a single CSV export fetch.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Cache entries never expire unless invalidated.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 0;

/// Branding image looked up relative to the working directory.
pub const DEFAULT_LOGO_PATH: &str = "logo.png";

/// Digits accepted before padding for the EAN-13 variant (13th is the check digit).
pub const EAN13_PAYLOAD_DIGITS: usize = 12;

/// Longest folio turned into a barcode; bounds the rendered image width.
pub const MAX_FOLIO_CHARS: usize = 80;

/// Header names in the sheet export.
pub const COLUMN_FOLIO: &str = "Folio Rebuss";
pub const COLUMN_ASSU: &str = "ABASSU";
pub const COLUMN_DESCRIPTION: &str = "ABDESC";
pub const COLUMN_SERIAL: &str = "ABSER#";
pub const COLUMN_PLANT: &str = "PLDESC";
