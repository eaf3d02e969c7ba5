use crate::core::Matcher;
use crate::error::MatchError;
use crate::models::{MatchResult, ProjectId, Requester, UserId};
use crate::services::store::MarketplaceStore;

/// Ranked candidates for one project
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub project_id: ProjectId,
    pub requester_id: UserId,
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Rank every active creator for the owner of `project_id`
///
/// Read-only. Any repository failure aborts the whole call; there is no
/// partial ranking.
pub async fn get_recommended_candidates<S: MarketplaceStore>(
    store: &S,
    matcher: &Matcher,
    project_id: ProjectId,
) -> Result<Recommendation, MatchError> {
    let project = store
        .get_project(project_id)
        .await?
        .ok_or_else(|| MatchError::not_found("project", project_id))?;

    let owner = store
        .get_user(project.owner_id)
        .await?
        .ok_or_else(|| MatchError::not_found("user", project.owner_id))?;

    let requester = Requester::from(&owner);

    // Reject incomplete selections before loading the creator pool
    Matcher::check_requester(&requester)?;

    let candidates = store.list_active_creators().await?;
    let total_candidates = candidates.len();

    let matches = matcher.rank(&requester, candidates)?;

    tracing::info!(
        "Ranked {} candidates for project {} (requester {})",
        total_candidates,
        project_id,
        requester.user_id
    );

    Ok(Recommendation {
        project_id,
        requester_id: requester.user_id,
        matches,
        total_candidates,
    })
}
