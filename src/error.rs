use thiserror::Error;

/// Errors raised by the label operations themselves.
///
/// File and parse failures are reported through `anyhow` by the loaders;
/// this enum only covers outcomes a caller may want to match on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// The identifier has no entry in the ontology.
    #[error("unknown label id: {0}")]
    UnknownLabelId(String),

    /// No record of the column contains the conditioning label, so the
    /// co-occurrence rate is undefined.
    #[error("no records contain label '{label}'")]
    NoMatchingRecords { label: String },
}
