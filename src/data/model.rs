use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// OntologyEntry – one record of ontology.json
// ---------------------------------------------------------------------------

/// A single ontology record.  The AudioSet file carries more fields
/// (`description`, `child_ids`, `restrictions`, ...) which are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyEntry {
    /// Opaque label identifier, e.g. `/m/04rlf`.
    pub id: String,
    /// Human-readable label name, e.g. `Music`.
    pub name: String,
}

// ---------------------------------------------------------------------------
// Segment – one row of an AudioSet segments CSV
// ---------------------------------------------------------------------------

/// One annotated clip from a `*_segments.csv` file.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub ytid: String,
    pub start_seconds: f64,
    pub end_seconds: f64,
    /// Comma-separated label ids, e.g. `/m/04rlf,/m/09x0r`.
    pub positive_labels: String,
}

// ---------------------------------------------------------------------------
// LabelColumn – an indexed column of pipe-separated label names
// ---------------------------------------------------------------------------

/// An ordered column of label-name strings (`"Music|Piano"`), one per record.
///
/// Each value keeps the row index it had in the source table, so a filtered
/// column still tells you which records matched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelColumn {
    index: Vec<usize>,
    values: Vec<String>,
}

impl LabelColumn {
    /// Build a column with a fresh `0..n` index.
    pub fn new(values: Vec<String>) -> Self {
        let index = (0..values.len()).collect();
        LabelColumn { index, values }
    }

    /// Build a column from `(row_index, value)` pairs.
    pub fn from_indexed(rows: impl IntoIterator<Item = (usize, String)>) -> Self {
        let (index, values) = rows.into_iter().unzip();
        LabelColumn { index, values }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no records.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Original row indices, parallel to [`values`](Self::values).
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Iterate `(row_index, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.index
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }
}

impl<S: Into<String>> FromIterator<S> for LabelColumn {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        LabelColumn::new(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for LabelColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter() {
            writeln!(f, "{i}\t{value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_column_gets_sequential_index() {
        let col: LabelColumn = ["Music|Piano", "Speech"].into_iter().collect();
        assert_eq!(col.index(), &[0, 1]);
        assert_eq!(col.len(), 2);
    }

    #[test]
    fn indexed_column_keeps_given_rows() {
        let col = LabelColumn::from_indexed(vec![(4, "Music".to_string()), (9, "Piano".to_string())]);
        let rows: Vec<_> = col.iter().collect();
        assert_eq!(rows, vec![(4, "Music"), (9, "Piano")]);
        assert_eq!(col.to_string(), "4\tMusic\n9\tPiano\n");
    }
}
