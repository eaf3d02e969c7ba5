use std::cmp::Ordering;

use crate::core::scoring::calculate_match_score;
use crate::error::MatchError;
use crate::models::{Candidate, MatchResult, Requester, ScoringWeights, StyleId};

/// Ranking orchestrator: scores every candidate and orders them best first
///
/// Holds no mutable state, so one instance is shared by all requests.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Style and niche of a requester, or `ValidationFailed` if either is missing
    pub fn check_requester(requester: &Requester) -> Result<(StyleId, &str), MatchError> {
        let style = requester.style_id.ok_or_else(|| {
            MatchError::ValidationFailed(format!(
                "user {} has not selected an artwork style",
                requester.user_id
            ))
        })?;

        let niche = requester
            .niche
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                MatchError::ValidationFailed(format!(
                    "user {} has not selected a niche",
                    requester.user_id
                ))
            })?;

        Ok((style, niche))
    }

    /// Rank candidates for a requester
    ///
    /// # Errors
    /// `ValidationFailed` when the requester has no style or no niche selected.
    ///
    /// # Ordering
    /// Descending by `final_score`. The sort is stable, so candidates with equal
    /// scores keep the order they were passed in. Every candidate is returned.
    pub fn rank(
        &self,
        requester: &Requester,
        candidates: Vec<Candidate>,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let (style, niche) = Self::check_requester(requester)?;

        let mut results: Vec<MatchResult> = candidates
            .iter()
            .map(|candidate| calculate_match_score(style, niche, candidate, &self.weights))
            .collect();

        sort_by_score(&mut results);

        Ok(results)
    }
}

/// Order results by descending `final_score`, keeping input order on ties
pub fn sort_by_score(results: &mut [MatchResult]) {
    results.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requester(style: Option<i32>, niche: Option<&str>) -> Requester {
        Requester {
            user_id: 1,
            style_id: style,
            niche: niche.map(str::to_string),
        }
    }

    fn candidate(id: i64, styles: Vec<i32>, niche: &str) -> Candidate {
        Candidate {
            id,
            styles,
            niche: Some(niche.to_string()),
        }
    }

    #[test]
    fn test_scenario_ordering() {
        let matcher = Matcher::default();
        let candidates = vec![
            candidate(10, vec![1], "RunAndGunSocial"),
            candidate(11, vec![5], "Colourist"),
            candidate(12, vec![2], "RunAndGunSocial"),
        ];

        let ranked = matcher
            .rank(&requester(Some(1), Some("RunAndGunSocial")), candidates)
            .unwrap();

        let ids: Vec<i64> = ranked.iter().map(|r| r.candidate_id).collect();
        assert_eq!(ids, vec![10, 12, 11]);
        assert!((ranked[0].final_score - 88.0).abs() < 1e-9);
        assert!((ranked[1].final_score - 76.0).abs() < 1e-9);
        assert!((ranked[2].final_score - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_style_is_rejected() {
        let matcher = Matcher::default();
        let err = matcher
            .rank(&requester(None, Some("Colourist")), vec![candidate(2, vec![1], "Colourist")])
            .unwrap_err();
        assert!(matches!(err, MatchError::ValidationFailed(_)));
    }

    #[test]
    fn test_missing_or_empty_niche_is_rejected() {
        let matcher = Matcher::default();
        assert!(matches!(
            matcher.rank(&requester(Some(1), None), vec![]),
            Err(MatchError::ValidationFailed(_))
        ));
        assert!(matches!(
            matcher.rank(&requester(Some(1), Some("")), vec![]),
            Err(MatchError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_empty_pool_is_not_an_error() {
        let matcher = Matcher::default();
        let ranked = matcher.rank(&requester(Some(1), Some("Colourist")), vec![]).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = Matcher::default();
        let candidates = vec![
            candidate(5, vec![9], "Colourist"),
            candidate(3, vec![8], "Colourist"),
            candidate(4, vec![6], "Colourist"),
        ];

        let ranked = matcher
            .rank(&requester(Some(1), Some("Colourist")), candidates)
            .unwrap();

        let ids: Vec<i64> = ranked.iter().map(|r| r.candidate_id).collect();
        assert_eq!(ids, vec![5, 3, 4]);
    }
}
