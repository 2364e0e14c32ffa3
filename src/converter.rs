use crate::config::ConverterConfig;
use crate::error::{ConverterError, Result};
use crate::sheet::{self, SheetTable};
use crate::types::PriceRecord;
use calamine::DataType;
use std::fs;
use tracing::{debug, info, instrument};

const BRAND_COLUMN: &str = "Brand";
const PART_NO_COLUMN: &str = "Part No";
const ROOT_PART_NO_COLUMN: &str = "Root Part No";
const MRP_COLUMN: &str = "MRP";
const GST_COLUMN: &str = "GST%";

/// Result of a complete conversion run
#[derive(Debug)]
pub struct ConversionReport {
    /// Data rows found in the source sheet.
    pub total_rows: usize,
    /// Rows that survived cleaning and were written.
    pub written_rows: usize,
    /// Rows dropped for a missing or unparsable field.
    pub dropped_rows: usize,
}

/// Positions of the five required columns in the header row.
struct ColumnIndices {
    brand: usize,
    part_no: usize,
    root_part_no: usize,
    mrp: usize,
    gst_percent: usize,
}

fn locate_columns(headers: &[String]) -> Result<ColumnIndices> {
    let mut missing = Vec::new();
    let mut index_of = |name: &'static str| match headers.iter().position(|h| h.as_str() == name) {
        Some(idx) => idx,
        None => {
            missing.push(name.to_string());
            0
        }
    };

    let columns = ColumnIndices {
        brand: index_of(BRAND_COLUMN),
        part_no: index_of(PART_NO_COLUMN),
        root_part_no: index_of(ROOT_PART_NO_COLUMN),
        mrp: index_of(MRP_COLUMN),
        gst_percent: index_of(GST_COLUMN),
    };

    if missing.is_empty() {
        Ok(columns)
    } else {
        Err(ConverterError::Schema(missing))
    }
}

/// Trimmed string representation of a cell. Blank, absent, and error cells
/// count as missing so the row gets dropped instead of carrying a sentinel.
fn string_field(cell: Option<&DataType>) -> Option<String> {
    let cell = cell?;
    if matches!(cell, DataType::Empty | DataType::Error(_)) {
        return None;
    }
    let text = cell.to_string();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Best-effort numeric coercion. Native numeric cells pass through; string
/// cells are trimmed and parsed; everything else is missing. Non-finite
/// values ("nan", "inf") count as missing: they have no JSON number
/// representation.
fn numeric_field(cell: Option<&DataType>) -> Option<f64> {
    let value = match cell? {
        DataType::Float(f) => Some(*f),
        DataType::Int(i) => Some(*i as f64),
        DataType::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    value.filter(|v| v.is_finite())
}

fn build_record(row: &[DataType], columns: &ColumnIndices) -> Option<PriceRecord> {
    Some(PriceRecord {
        brand: string_field(row.get(columns.brand))?,
        part_no: string_field(row.get(columns.part_no))?,
        root_part_no: string_field(row.get(columns.root_part_no))?,
        mrp: numeric_field(row.get(columns.mrp))?,
        gst_percent: numeric_field(row.get(columns.gst_percent))?,
    })
}

/// Projects the five required columns out of the loaded table and drops every
/// row with a missing or unparsable field. Row order is preserved.
pub fn clean_table(table: &SheetTable) -> Result<Vec<PriceRecord>> {
    let columns = locate_columns(&table.headers)?;

    let mut records = Vec::with_capacity(table.rows.len());
    for (idx, row) in table.rows.iter().enumerate() {
        match build_record(row, &columns) {
            Some(record) => records.push(record),
            // idx + 2: sheet row number, accounting for the header row
            None => debug!("dropping row {}: missing or unparsable field", idx + 2),
        }
    }
    Ok(records)
}

/// Runs the full conversion: load, clean, write.
///
/// The JSON document is serialized in memory before any byte is written, so a
/// failure at any step leaves an existing output file untouched. The output
/// directory must already exist.
#[instrument(skip(config), fields(source = %config.source_path.display()))]
pub fn convert(config: &ConverterConfig) -> Result<ConversionReport> {
    info!("loading spreadsheet");
    let table = sheet::load_table(&config.source_path)?;
    let total_rows = table.rows.len();

    let records = clean_table(&table)?;
    let report = ConversionReport {
        total_rows,
        written_rows: records.len(),
        dropped_rows: total_rows - records.len(),
    };
    info!(
        total = report.total_rows,
        written = report.written_rows,
        dropped = report.dropped_rows,
        "cleaned price list"
    );

    let json = serde_json::to_string(&records)?;
    fs::write(&config.output_path, json).map_err(|source| ConverterError::Write {
        path: config.output_path.clone(),
        source,
    })?;
    info!(output = %config.output_path.display(), "wrote price list");

    Ok(report)
}
