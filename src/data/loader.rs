use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::countries::is_recognized_entity;
use super::model::{Dataset, Record, Tier};

/// Required column names, shared by every supported source format.
const ENTITY_COL: &str = "Team";
const PERIOD_COL: &str = "Year";
const CATEGORY_COL: &str = "Sport";
const TIER_COL: &str = "Medal";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the medal dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with `Team`, `Year`, `Sport`, `Medal` columns
/// * `.json`    – `[{ "Team": ..., "Year": ..., "Sport": ..., "Medal": ... }, ...]`
/// * `.parquet` – flat columns of the same names
///
/// Extra columns are ignored. Rows with a missing or unparsable value in any
/// required column are dropped, as are rows whose team is not a recognized
/// country. The surviving rows come back sorted ascending by year.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Allow-list restriction plus the final consistency check, common to all
/// formats.
fn finish(mut records: Vec<Record>) -> Result<Dataset> {
    records.retain(|r| is_recognized_entity(&r.entity));
    if records.is_empty() {
        bail!("no usable rows after cleaning");
    }
    Ok(Dataset::from_records(records))
}

/// Assemble a record from the raw cell values, or `None` when the row must
/// be dropped. A year outside four digits or an unknown medal text counts
/// as missing.
fn clean_row(entity: &str, period: Option<i32>, category: &str, tier: &str) -> Option<Record> {
    let entity = entity.trim();
    let category = category.trim();
    let tier = tier.trim();
    if entity.is_empty() || category.is_empty() {
        return None;
    }
    let period = period.filter(|p| (1000..=9999).contains(p))?;
    let tier: Tier = tier.parse().ok()?;
    Some(Record {
        entity: entity.to_string(),
        period,
        category: category.to_string(),
        tier,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

fn read_csv<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let col = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))
    };
    let entity_idx = col(ENTITY_COL)?;
    let period_idx = col(PERIOD_COL)?;
    let category_idx = col(CATEGORY_COL)?;
    let tier_idx = col(TIER_COL)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let period = row
            .get(period_idx)
            .and_then(|s| s.trim().parse::<i32>().ok());
        if let Some(record) = clean_row(
            row.get(entity_idx).unwrap_or(""),
            period,
            row.get(category_idx).unwrap_or(""),
            row.get(tier_idx).unwrap_or(""),
        ) {
            records.push(record);
        }
    }

    finish(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// One raw row of the records-oriented JSON form (`df.to_json(orient='records')`).
/// Every field is optional so incomplete rows deserialize and get dropped by
/// the cleaner instead of failing the whole load.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Team")]
    entity: Option<String>,
    #[serde(rename = "Year")]
    period: Option<i64>,
    #[serde(rename = "Sport")]
    category: Option<String>,
    #[serde(rename = "Medal")]
    tier: Option<String>,
}

fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    read_json(&text)
}

fn read_json(text: &str) -> Result<Dataset> {
    let rows: Vec<RawRow> = serde_json::from_str(text).context("parsing JSON")?;

    let records = rows
        .iter()
        .filter_map(|row| {
            clean_row(
                row.entity.as_deref().unwrap_or(""),
                row.period.and_then(|p| i32::try_from(p).ok()),
                row.category.as_deref().unwrap_or(""),
                row.tier.as_deref().unwrap_or(""),
            )
        })
        .collect();

    finish(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Expected schema: `Team`, `Sport`, `Medal` as Utf8/LargeUtf8 and `Year` as
/// Int32/Int64. Works with files written by both Pandas (`df.to_parquet()`)
/// and Polars (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let col = |name: &str| {
            schema
                .index_of(name)
                .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))
        };
        let entity_col = batch.column(col(ENTITY_COL)?);
        let period_col = batch.column(col(PERIOD_COL)?);
        let category_col = batch.column(col(CATEGORY_COL)?);
        let tier_col = batch.column(col(TIER_COL)?);

        for row in 0..batch.num_rows() {
            let period = int_at(period_col, row).and_then(|p| i32::try_from(p).ok());
            if let Some(record) = clean_row(
                string_at(entity_col, row).unwrap_or_default().as_str(),
                period,
                string_at(category_col, row).unwrap_or_default().as_str(),
                string_at(tier_col, row).unwrap_or_default().as_str(),
            ) {
                records.push(record);
            }
        }
    }

    finish(records)
}

// -- Arrow helpers --

fn string_at(col: &Arc<dyn Array>, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Utf8 => col
            .as_any()
            .downcast_ref::<StringArray>()
            .map(|arr| arr.value(row).to_string()),
        DataType::LargeUtf8 => Some(col.as_string::<i64>().value(row).to_string()),
        _ => None,
    }
}

fn int_at(col: &Arc<dyn Array>, row: usize) -> Option<i64> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|arr| arr.value(row) as i64),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|arr| arr.value(row)),
        _ => None,
    }
}
