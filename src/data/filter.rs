use super::model::LabelColumn;

/// Separator between label names in a label-name string.
pub const NAME_SEPARATOR: &str = "|";

// ---------------------------------------------------------------------------
// Match mode
// ---------------------------------------------------------------------------

/// How a target label is matched against a `"A|B|C"` string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Raw substring match: `"Music"` also matches `"Musical instrument"`.
    #[default]
    Substring,
    /// The target must equal one whole `|`-delimited segment.
    Segment,
}

impl MatchMode {
    /// Whether `labels` contains `label` under this mode.
    pub fn matches(self, labels: &str, label: &str) -> bool {
        match self {
            MatchMode::Substring => labels.contains(label),
            MatchMode::Segment => labels.split(NAME_SEPARATOR).any(|seg| seg == label),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Return the records of `column` that contain `label`.
///
/// Relative order and the original row indices are preserved.
pub fn contains_label(column: &LabelColumn, label: &str, mode: MatchMode) -> LabelColumn {
    LabelColumn::from_indexed(
        column
            .iter()
            .filter(|(_, labels)| mode.matches(labels, label))
            .map(|(i, labels)| (i, labels.to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> LabelColumn {
        ["Music|Skateboard|Speech", "Voice|Speech", "Music|Piano"]
            .into_iter()
            .collect()
    }

    #[test]
    fn keeps_matching_rows_in_order() {
        let music = contains_label(&sample(), "Music", MatchMode::Substring);
        assert_eq!(music.values(), &["Music|Skateboard|Speech", "Music|Piano"]);
        assert_eq!(music.index(), &[0, 2]);
    }

    #[test]
    fn refiltering_keeps_original_index() {
        let music = contains_label(&sample(), "Music", MatchMode::Substring);
        let piano = contains_label(&music, "Piano", MatchMode::Substring);
        assert_eq!(piano.index(), &[2]);
    }

    #[test]
    fn substring_mode_matches_inside_longer_names() {
        let col: LabelColumn = ["Musical instrument|Guitar", "Music"].into_iter().collect();
        assert_eq!(contains_label(&col, "Music", MatchMode::Substring).len(), 2);
    }

    #[test]
    fn segment_mode_requires_whole_name() {
        let col: LabelColumn = ["Musical instrument|Guitar", "Speech|Music"].into_iter().collect();
        let hits = contains_label(&col, "Music", MatchMode::Segment);
        assert_eq!(hits.index(), &[1]);
    }

    #[test]
    fn no_match_gives_empty_column() {
        assert!(contains_label(&sample(), "Dog", MatchMode::Segment).is_empty());
    }

    proptest! {
        #[test]
        fn segment_hits_are_a_subset_of_substring_hits(
            rows in proptest::collection::vec("[A-C]{1,3}(\\|[A-C]{1,3}){0,3}", 0..20),
            label in "[A-C]{1,2}",
        ) {
            let col: LabelColumn = rows.into_iter().collect();
            let seg = contains_label(&col, &label, MatchMode::Segment);
            let sub = contains_label(&col, &label, MatchMode::Substring);
            prop_assert!(seg.index().iter().all(|i| sub.index().contains(i)));
            prop_assert!(sub.len() <= col.len());
        }
    }
}
