//! AudioSet ontology label utilities: id → name conversion and label
//! co-occurrence over a column of multi-label annotations.

pub mod correlation;
pub mod data;
pub mod error;
pub mod labels;
pub mod ontology;

pub use correlation::get_correlation;
pub use data::filter::{MatchMode, contains_label};
pub use data::model::{LabelColumn, OntologyEntry, Segment};
pub use error::LabelError;
pub use labels::{convert_id, convert_ids, count_labels, segments_to_column};
pub use ontology::Ontology;
