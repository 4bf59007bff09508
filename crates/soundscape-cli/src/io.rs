//! File I/O: raw and clean CSV, chart-data JSON.

use std::{fs::File, io::Write, path::Path};

use anyhow::Context;
use serde::Serialize;
use soundscape_model::{
    record::{CleanRecord, CleanTable},
    schema::{ColumnIndex, RawColumns, RawRecord},
};

/// Reads the raw form export.
///
/// Resolving the header is where the one fatal structural error can occur:
/// a missing required column aborts with a message naming it.
pub(crate) fn read_raw_records(path: &Path, columns: &RawColumns) -> anyhow::Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open raw survey file: {}", path.display()))?;

    let header_row = reader
        .headers()
        .with_context(|| format!("Failed to read header row: {}", path.display()))?
        .clone();
    let header = header_row.iter().map(str::trim).collect::<Vec<_>>();
    let index = ColumnIndex::resolve(columns, &header)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("Failed to read row from {}", path.display()))?;
        let cells = row.iter().collect::<Vec<_>>();
        records.push(index.extract(&cells));
    }
    Ok(records)
}

/// Writes the clean table with its fixed column order, one row per
/// respondent in input order.
pub(crate) fn write_clean_table(path: &Path, table: &CleanTable) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create clean file: {}", path.display()))?;
    for record in table {
        writer
            .serialize(record)
            .with_context(|| format!("Failed to write record {}", record.respondent_id))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush clean file: {}", path.display()))?;
    Ok(())
}

/// Reads a clean table back for analysis.
pub(crate) fn read_clean_table(path: &Path) -> anyhow::Result<CleanTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open clean survey file: {}", path.display()))?;

    let mut records = Vec::new();
    for result in reader.deserialize::<CleanRecord>() {
        let record =
            result.with_context(|| format!("Failed to parse record from {}", path.display()))?;
        records.push(record);
    }
    Ok(CleanTable::new(records))
}

/// Writes one analysis' chart-input data as pretty JSON under `dir`,
/// keyed by the analysis' chart key.
pub(crate) fn write_chart_data<T>(dir: &Path, key: &str, data: &T) -> anyhow::Result<()>
where
    T: Serialize,
{
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create chart data directory: {}", dir.display()))?;
    let path = dir.join(format!("{key}.json"));

    let json = serde_json::to_string_pretty(data).context("Failed to serialize chart data")?;
    let mut file = File::create(&path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;
    Ok(())
}
