use crate::data::filter::NAME_SEPARATOR;
use crate::data::model::{LabelColumn, Segment};
use crate::error::LabelError;
use crate::ontology::Ontology;

/// Separator between ids in a label-id string.
pub const ID_SEPARATOR: char = ',';

/// Number of ids in a comma-separated label-id string.
///
/// Counts separators, so `""` is 1 and the ids themselves are not checked.
pub fn count_labels(labels: &str) -> usize {
    labels.matches(ID_SEPARATOR).count() + 1
}

/// Name of a single label id.
pub fn convert_id<'a>(ontology: &'a Ontology, id: &str) -> Result<&'a str, LabelError> {
    ontology.lookup(id)
}

/// Turn `"/m/04rlf,/m/09x0r"` into `"Music|Speech"`, keeping the order.
///
/// Fails on the first id missing from the ontology.
pub fn convert_ids(ontology: &Ontology, labels: &str) -> Result<String, LabelError> {
    let names = labels
        .split(ID_SEPARATOR)
        .map(|id| convert_id(ontology, id))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names.join(NAME_SEPARATOR))
}

/// Convert the positive labels of every segment into a label column.
pub fn segments_to_column(
    ontology: &Ontology,
    segments: &[Segment],
) -> Result<LabelColumn, LabelError> {
    segments
        .iter()
        .map(|s| convert_ids(ontology, &s.positive_labels))
        .collect::<Result<Vec<_>, _>>()
        .map(LabelColumn::new)
}
