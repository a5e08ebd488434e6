use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{LabelColumn, OntologyEntry, Segment};

// ---------------------------------------------------------------------------
// Ontology
// ---------------------------------------------------------------------------

/// Read an AudioSet `ontology.json`: a top-level array of records, each
/// with at least `id` and `name` string fields.
pub fn load_ontology(path: &Path) -> Result<Vec<OntologyEntry>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading ontology file {}", path.display()))?;
    let entries: Vec<OntologyEntry> =
        serde_json::from_str(&text).context("parsing ontology JSON")?;
    log::debug!("loaded {} ontology entries from {}", entries.len(), path.display());
    Ok(entries)
}

// ---------------------------------------------------------------------------
// Label column: public entry-point
// ---------------------------------------------------------------------------

/// Load one column of label-name strings from a table.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, `column` names the label column
/// * `.json`    – `[{ "<column>": "Music|Piano", ... }, ...]`
/// * `.parquet` – `column` is a Utf8 or LargeUtf8 column
///
/// Null cells become empty strings so row indices stay aligned with the file.
pub fn load_label_column(path: &Path, column: &str) -> Result<LabelColumn> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let col = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path, column),
        "json" => load_json(path, column),
        "csv" => load_csv(path, column),
        other => bail!("Unsupported file extension: .{other}"),
    }?;
    log::info!("loaded {} records from column '{column}' of {}", col.len(), path.display());
    Ok(col)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')`.
fn load_json(path: &Path, column: &str) -> Result<LabelColumn> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut values = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        let value = match obj.get(column) {
            Some(JsonValue::String(s)) => s.clone(),
            Some(JsonValue::Null) => String::new(),
            Some(other) => bail!("Row {i}: '{column}' is not a string: {other}"),
            None => bail!("Row {i}: missing '{column}' field"),
        };
        values.push(value);
    }

    Ok(LabelColumn::new(values))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path, column: &str) -> Result<LabelColumn> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let col_idx = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .position(|h| h.trim() == column)
        .with_context(|| format!("CSV missing '{column}' column"))?;

    let mut values = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        values.push(record.get(col_idx).unwrap_or("").to_string());
    }

    Ok(LabelColumn::new(values))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path, column: &str) -> Result<LabelColumn> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut values = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let col_idx = batch
            .schema()
            .index_of(column)
            .map_err(|_| anyhow::anyhow!("Parquet file missing '{column}' column"))?;
        let col = batch.column(col_idx);

        if let Some(arr) = col.as_string_opt::<i32>() {
            values.extend((0..arr.len()).map(|row| {
                if arr.is_null(row) { String::new() } else { arr.value(row).to_string() }
            }));
        } else if let Some(arr) = col.as_string_opt::<i64>() {
            values.extend((0..arr.len()).map(|row| {
                if arr.is_null(row) { String::new() } else { arr.value(row).to_string() }
            }));
        } else {
            bail!("Column '{column}' is {:?}, expected Utf8 or LargeUtf8", col.data_type());
        }
    }

    Ok(LabelColumn::new(values))
}

// ---------------------------------------------------------------------------
// AudioSet segments CSV
// ---------------------------------------------------------------------------

/// Read an AudioSet segments file (`balanced_train_segments.csv` etc.):
///
/// ```text
/// # Segments csv created Sun Mar  5 10:54:31 2017
/// # YTID, start_seconds, end_seconds, positive_labels
/// --PJHxphWEs, 30.000, 40.000, "/m/09x0r,/t/dd00088"
/// ```
///
/// The quoted label list follows a `", "` separator, which the `csv` crate
/// does not treat as a quoted field, so lines are split by hand.
pub fn load_segments(path: &Path) -> Result<Vec<Segment>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening segments file {}", path.display()))?;

    let mut segments = Vec::new();
    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", line_no + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        segments.push(
            parse_segment_line(line).with_context(|| format!("segments line {}", line_no + 1))?,
        );
    }

    log::info!("loaded {} segments from {}", segments.len(), path.display());
    Ok(segments)
}

fn parse_segment_line(line: &str) -> Result<Segment> {
    let mut fields = line.splitn(4, ',').map(str::trim);
    let (Some(ytid), Some(start), Some(end), Some(labels)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        bail!("expected 4 fields: {line}");
    };

    Ok(Segment {
        ytid: ytid.to_string(),
        start_seconds: start
            .parse()
            .with_context(|| format!("'{start}' is not a number"))?,
        end_seconds: end
            .parse()
            .with_context(|| format!("'{end}' is not a number"))?,
        positive_labels: labels.trim_matches('"').to_string(),
    })
}
