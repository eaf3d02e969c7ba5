use crate::models::StyleId;

/// Soft-compatibility rows, keyed by the requester's style.
///
/// The relation is directional: a row `a -> [b]` says nothing about `b -> [a]`.
/// Rows are kept exactly as curated; `7 -> [1]` has no reciprocal on purpose.
const AFFINITY_TABLE: &[(StyleId, &[StyleId])] = &[
    (1, &[2, 3]),
    (2, &[1]),
    (3, &[4]),
    (4, &[3]),
    // Provisional: 5 <-> 6 and 8 <-> 9 have no curated source yet
    (5, &[6]),
    (6, &[5]),
    (7, &[1]),
    (8, &[9]),
    (9, &[8]),
];

/// Styles considered a soft match for `style`. Unknown styles have none.
pub fn soft_matches(style: StyleId) -> &'static [StyleId] {
    AFFINITY_TABLE
        .iter()
        .find(|(id, _)| *id == style)
        .map(|(_, related)| *related)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_rows() {
        assert_eq!(soft_matches(1), &[2, 3]);
        assert_eq!(soft_matches(7), &[1]);

        let rows: Vec<StyleId> = AFFINITY_TABLE.iter().map(|(id, _)| *id).collect();
        assert_eq!(rows, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_unknown_style_has_no_soft_matches() {
        assert!(soft_matches(0).is_empty());
        assert!(soft_matches(42).is_empty());
        assert!(soft_matches(-1).is_empty());
    }

    #[test]
    fn test_table_is_not_symmetric() {
        // 1 -> 3 exists, 3 -> 1 does not
        assert!(soft_matches(1).contains(&3));
        assert!(!soft_matches(3).contains(&1));
        // 7 -> 1 exists, 1 -> 7 does not
        assert!(!soft_matches(1).contains(&7));
    }
}
