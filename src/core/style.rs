use crate::core::affinity::soft_matches;
use crate::models::StyleId;

/// Candidate offers the requester's exact style
pub const EXACT_STYLE_SCORE: u8 = 70;
/// Candidate offers a style listed in the requester style's affinity row
pub const SOFT_STYLE_SCORE: u8 = 40;
/// Fallback; every pairing scores at least this
pub const WEAK_STYLE_SCORE: u8 = 10;

/// Score how well a candidate's styles fit the requester's single style
///
/// Exact containment is checked first and wins regardless of the other
/// entries in `candidate_styles`.
#[inline]
pub fn style_score(requester_style: StyleId, candidate_styles: &[StyleId]) -> u8 {
    if candidate_styles.contains(&requester_style) {
        return EXACT_STYLE_SCORE;
    }

    let related = soft_matches(requester_style);
    if candidate_styles.iter().any(|style| related.contains(style)) {
        return SOFT_STYLE_SCORE;
    }

    WEAK_STYLE_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_dominates() {
        assert_eq!(style_score(1, &[1]), 70);
        assert_eq!(style_score(1, &[5, 2, 1]), 70);
        assert_eq!(style_score(42, &[42]), 70);
    }

    #[test]
    fn test_soft_match() {
        assert_eq!(style_score(1, &[2]), 40);
        assert_eq!(style_score(1, &[5, 3]), 40);
        assert_eq!(style_score(3, &[4]), 40);
        assert_eq!(style_score(4, &[3]), 40);
    }

    #[test]
    fn test_weak_match() {
        assert_eq!(style_score(1, &[5]), 10);
        assert_eq!(style_score(3, &[1]), 10);
        assert_eq!(style_score(1, &[7]), 10);
        assert_eq!(style_score(1, &[]), 10);
        assert_eq!(style_score(99, &[1, 2, 3]), 10);
    }
}
