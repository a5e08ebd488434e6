use crate::data::filter::{MatchMode, contains_label};
use crate::data::model::LabelColumn;
use crate::error::LabelError;

/// Proportion of records containing `label_1` that also contain `label_2`.
///
/// Returns [`LabelError::NoMatchingRecords`] when no record contains
/// `label_1`, including when `labels` is empty.
pub fn get_correlation(
    labels: &LabelColumn,
    label_1: &str,
    label_2: &str,
    mode: MatchMode,
) -> Result<f64, LabelError> {
    let with_first = contains_label(labels, label_1, mode);
    if with_first.is_empty() {
        return Err(LabelError::NoMatchingRecords { label: label_1.to_string() });
    }
    let with_both = contains_label(&with_first, label_2, mode);
    log::debug!(
        "{label_1} -> {label_2}: {} of {} records",
        with_both.len(),
        with_first.len()
    );
    Ok(with_both.len() as f64 / with_first.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LabelColumn {
        ["Music|Skateboard|Speech", "Voice|Speech", "Music|Piano"]
            .into_iter()
            .collect()
    }

    #[test]
    fn half_of_music_has_piano() {
        assert_eq!(get_correlation(&sample(), "Music", "Piano", MatchMode::Substring), Ok(0.5));
    }

    #[test]
    fn label_with_itself_is_one() {
        assert_eq!(get_correlation(&sample(), "Speech", "Speech", MatchMode::Segment), Ok(1.0));
    }

    #[test]
    fn absent_second_label_is_zero() {
        assert_eq!(get_correlation(&sample(), "Voice", "Piano", MatchMode::Segment), Ok(0.0));
    }

    #[test]
    fn empty_column_is_an_error() {
        assert_eq!(
            get_correlation(&LabelColumn::default(), "Music", "Piano", MatchMode::Substring),
            Err(LabelError::NoMatchingRecords { label: "Music".into() })
        );
    }

    #[test]
    fn unmatched_first_label_is_an_error() {
        assert!(matches!(
            get_correlation(&sample(), "Dog", "Music", MatchMode::Substring),
            Err(LabelError::NoMatchingRecords { .. })
        ));
    }

    #[test]
    fn match_mode_changes_the_denominator() {
        let col: LabelColumn = ["Musical instrument|Guitar", "Music|Guitar", "Music"]
            .into_iter()
            .collect();
        let sub = get_correlation(&col, "Music", "Guitar", MatchMode::Substring).unwrap();
        let seg = get_correlation(&col, "Music", "Guitar", MatchMode::Segment).unwrap();
        assert!((sub - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(seg, 0.5);
    }
}
