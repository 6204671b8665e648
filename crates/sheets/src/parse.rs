//! CSV export parsing: header offset, column selection, text coercion.

use folio_lookup_core::{ColumnSet, Row};

use crate::error::SheetError;

struct ColumnIndex {
    folio: usize,
    description: usize,
    assu: usize,
    serial: usize,
    plant: Option<usize>,
}

impl ColumnIndex {
    fn resolve(header: &csv::StringRecord, columns: &ColumnSet) -> Result<Self, SheetError> {
        let find = |name: &str| {
            header
                .iter()
                .position(|cell| cell.trim() == name)
                .ok_or_else(|| SheetError::MissingColumn(name.to_owned()))
        };
        Ok(Self {
            folio: find(columns.folio)?,
            description: find(columns.description)?,
            assu: find(columns.assu)?,
            serial: find(columns.serial)?,
            plant: columns.plant.map(find).transpose()?,
        })
    }
}

fn cell(record: &csv::StringRecord, index: usize) -> String {
    record.get(index).map(str::trim).unwrap_or_default().to_owned()
}

/// Parses an export whose header sits at zero-based record `header_row`.
///
/// Records before the header are skipped; blank lines do not count.
/// Cells are trimmed text, missing cells become empty strings, and records
/// whose selected cells are all empty are dropped.
pub fn parse_rows(
    text: &str,
    header_row: usize,
    columns: &ColumnSet,
) -> Result<Vec<Row>, SheetError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    for _ in 0..header_row {
        if records.next().transpose()?.is_none() {
            return Err(SheetError::MissingHeader { row: header_row });
        }
    }
    let header =
        records.next().transpose()?.ok_or(SheetError::MissingHeader { row: header_row })?;
    let index = ColumnIndex::resolve(&header, columns)?;

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        let plant = index.plant.map(|i| cell(&record, i));
        let row = Row::new(
            cell(&record, index.folio),
            cell(&record, index.description),
            cell(&record, index.assu),
            cell(&record, index.serial),
            plant,
        );
        let blank = row.folio.is_empty()
            && row.description.is_empty()
            && row.assu.is_empty()
            && row.serial.is_empty()
            && row.plant.as_deref().is_none_or(str::is_empty);
        if !blank {
            rows.push(row);
        }
    }
    Ok(rows)
}
