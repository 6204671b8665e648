//! Sheet rows and the column set that produces them.

use serde::Serialize;

use crate::constants::{COLUMN_ASSU, COLUMN_DESCRIPTION, COLUMN_FOLIO, COLUMN_PLANT, COLUMN_SERIAL};
use crate::symbology::Symbology;

/// One row of the dataset, restricted to the configured columns.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Row {
    /// Identifier encoded into the barcode.
    pub folio: String,
    /// Free-text description; the only searchable field.
    pub description: String,
    pub assu: String,
    pub serial: String,
    /// Plant description, present only when the column set includes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant: Option<String>,
    /// Lowercased `description`, never absent.
    #[serde(skip)]
    search: String,
}

impl Row {
    #[must_use]
    pub fn new(
        folio: String,
        description: String,
        assu: String,
        serial: String,
        plant: Option<String>,
    ) -> Self {
        let search = description.to_lowercase();
        Self { folio, description, assu, serial, plant, search }
    }

    /// Lowercase search column derived from the description.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Title line shown above each result: `Folio: <folio>` plus the plant if any.
    #[must_use]
    pub fn heading(&self) -> String {
        match self.plant.as_deref() {
            Some(plant) => format!("Folio: {} - {}", self.folio, plant),
            None => format!("Folio: {}", self.folio),
        }
    }

    /// Labelled fields in display order.
    #[must_use]
    pub fn display_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![(COLUMN_FOLIO, self.folio.as_str())];
        if let Some(plant) = self.plant.as_deref() {
            fields.push((COLUMN_PLANT, plant));
        }
        fields.push((COLUMN_ASSU, self.assu.as_str()));
        fields.push((COLUMN_SERIAL, self.serial.as_str()));
        fields.push((COLUMN_DESCRIPTION, self.description.as_str()));
        fields
    }
}

/// Named columns read from the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    pub folio: &'static str,
    pub description: &'static str,
    pub assu: &'static str,
    pub serial: &'static str,
    pub plant: Option<&'static str>,
}

impl ColumnSet {
    /// The EAN-13 sheet has no plant column; the Code 128 sheet adds `PLDESC`.
    #[must_use]
    pub const fn for_symbology(symbology: Symbology) -> Self {
        let plant = match symbology {
            Symbology::Ean13 => None,
            Symbology::Code128 => Some(COLUMN_PLANT),
        };
        Self {
            folio: COLUMN_FOLIO,
            description: COLUMN_DESCRIPTION,
            assu: COLUMN_ASSU,
            serial: COLUMN_SERIAL,
            plant,
        }
    }

    /// Every header the export must contain.
    #[must_use]
    pub fn required(&self) -> Vec<&'static str> {
        let mut names = vec![self.folio, self.assu, self.description, self.serial];
        names.extend(self.plant);
        names
    }
}
