use crate::core::{niche::niche_score, style::style_score};
use crate::models::{Candidate, MatchResult, ScoringWeights, StyleId};

/// Weight of the niche sub-score in the final score
pub const NICHE_WEIGHT: f64 = 0.6;
/// Weight of the style sub-score in the final score
pub const STYLE_WEIGHT: f64 = 0.4;

/// Score one candidate against the requester's style and niche
///
/// Scoring formula:
/// final_score = (
///     niche_score * 0.6 +     # 100 on exact niche, else 0
///     style_score * 0.4       # 70 exact, 40 affinity, 10 otherwise
/// )
pub fn calculate_match_score(
    requester_style: StyleId,
    requester_niche: &str,
    candidate: &Candidate,
    weights: &ScoringWeights,
) -> MatchResult {
    let style = style_score(requester_style, &candidate.styles);
    let niche = niche_score(requester_niche, candidate.niche.as_deref());

    MatchResult {
        candidate_id: candidate.id,
        final_score: combine(niche, style, weights),
        style_score: style,
        niche_match_score: niche,
    }
}

#[inline]
fn combine(niche: u8, style: u8, weights: &ScoringWeights) -> f64 {
    weights.niche * f64::from(niche) + weights.style * f64::from(style)
}
