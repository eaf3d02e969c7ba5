pub const NICHE_MATCH_SCORE: u8 = 100;
pub const NICHE_MISMATCH_SCORE: u8 = 0;

/// Binary niche compatibility: exact, case-sensitive equality or nothing
#[inline]
pub fn niche_score(requester_niche: &str, candidate_niche: Option<&str>) -> u8 {
    match candidate_niche {
        Some(niche) if !requester_niche.is_empty() && niche == requester_niche => NICHE_MATCH_SCORE,
        _ => NICHE_MISMATCH_SCORE,
    }
}
