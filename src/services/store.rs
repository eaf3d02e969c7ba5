use std::collections::BTreeSet;
use std::future::Future;

use crate::error::MatchError;
use crate::models::{Candidate, NicheKind, Project, ProjectId, StyleId, UserId, UserRecord};

/// Outcome of a conditional style write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleWrite {
    /// Write applied; the user's styles after it
    Stored(Vec<StyleId>),
    /// Style already recorded, nothing written
    Duplicate,
    /// Style list already full, nothing written
    LimitReached,
}

/// Persistence seam for everything the matching and selection flows read or write
///
/// Implemented by [`PostgresClient`](super::PostgresClient) in production and by
/// [`InMemoryStore`](super::InMemoryStore) in tests.
pub trait MarketplaceStore: Send + Sync {
    fn get_project(
        &self,
        project_id: ProjectId,
    ) -> impl Future<Output = Result<Option<Project>, MatchError>> + Send;

    fn get_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<UserRecord>, MatchError>> + Send;

    /// Active, non-banned creators ordered by ascending id
    fn list_active_creators(
        &self,
    ) -> impl Future<Output = Result<Vec<Candidate>, MatchError>> + Send;

    /// Active, non-deleted niche names for one vocabulary
    fn list_valid_niches(
        &self,
        kind: NicheKind,
    ) -> impl Future<Output = Result<BTreeSet<String>, MatchError>> + Send;

    /// Replace a client's single style in one atomic write
    ///
    /// Returns `Duplicate` when `style` is already the selected style.
    fn replace_style(
        &self,
        user_id: UserId,
        style: StyleId,
    ) -> impl Future<Output = Result<StyleWrite, MatchError>> + Send;

    /// Append a creator style in one atomic write, bounded by `max_styles`
    fn add_style(
        &self,
        user_id: UserId,
        style: StyleId,
        max_styles: usize,
    ) -> impl Future<Output = Result<StyleWrite, MatchError>> + Send;

    /// Store a niche unless it is already the recorded one; `false` means unchanged
    fn save_niche(
        &self,
        user_id: UserId,
        niche: &str,
    ) -> impl Future<Output = Result<bool, MatchError>> + Send;

    fn health_check(&self) -> impl Future<Output = Result<bool, MatchError>> + Send;
}
