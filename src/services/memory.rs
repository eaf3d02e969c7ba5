use std::collections::{BTreeMap, BTreeSet};

use tokio::sync::Mutex;

use crate::error::MatchError;
use crate::models::{Candidate, NicheKind, Project, ProjectId, StyleId, UserId, UserRecord};
use crate::services::store::{MarketplaceStore, StyleWrite};

/// In-process marketplace repository for tests
///
/// Users and projects are keyed by id in ordered maps, so creator listing
/// follows ascending id exactly like the PostgreSQL query. Conditional style
/// and niche writes hold the users lock across the check and the update.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<BTreeMap<UserId, UserRecord>>,
    projects: Mutex<BTreeMap<ProjectId, Project>>,
    niches: Mutex<BTreeMap<NicheKind, BTreeSet<String>>>,
    fail_creator_listing: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.users.get_mut().insert(user.id, user);
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.get_mut().insert(project.id, project);
        self
    }

    pub fn with_niche(mut self, kind: NicheKind, name: &str) -> Self {
        self.niches
            .get_mut()
            .entry(kind)
            .or_default()
            .insert(name.to_string());
        self
    }

    /// Make every `list_active_creators` call fail with a database error
    pub fn with_failing_creator_listing(mut self) -> Self {
        self.fail_creator_listing = true;
        self
    }
}

impl MarketplaceStore for InMemoryStore {
    async fn get_project(&self, project_id: ProjectId) -> Result<Option<Project>, MatchError> {
        Ok(self.projects.lock().await.get(&project_id).cloned())
    }

    async fn get_user(&self, user_id: UserId) -> Result<Option<UserRecord>, MatchError> {
        Ok(self.users.lock().await.get(&user_id).cloned())
    }

    async fn list_active_creators(&self) -> Result<Vec<Candidate>, MatchError> {
        if self.fail_creator_listing {
            return Err(MatchError::Database(sqlx::Error::PoolTimedOut));
        }

        Ok(self
            .users
            .lock()
            .await
            .values()
            .filter(|user| user.is_rankable_creator())
            .map(UserRecord::to_candidate)
            .collect())
    }

    async fn list_valid_niches(&self, kind: NicheKind) -> Result<BTreeSet<String>, MatchError> {
        Ok(self
            .niches
            .lock()
            .await
            .get(&kind)
            .cloned()
            .unwrap_or_default())
    }

    async fn replace_style(&self, user_id: UserId, style: StyleId) -> Result<StyleWrite, MatchError> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| MatchError::not_found("user", user_id))?;

        if user.styles.first() == Some(&style) {
            return Ok(StyleWrite::Duplicate);
        }

        user.styles = vec![style];
        Ok(StyleWrite::Stored(user.styles.clone()))
    }

    async fn add_style(
        &self,
        user_id: UserId,
        style: StyleId,
        max_styles: usize,
    ) -> Result<StyleWrite, MatchError> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| MatchError::not_found("user", user_id))?;

        if user.styles.contains(&style) {
            return Ok(StyleWrite::Duplicate);
        }
        if user.styles.len() >= max_styles {
            return Ok(StyleWrite::LimitReached);
        }

        user.styles.push(style);
        Ok(StyleWrite::Stored(user.styles.clone()))
    }

    async fn save_niche(&self, user_id: UserId, niche: &str) -> Result<bool, MatchError> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| MatchError::not_found("user", user_id))?;

        if user.niche.as_deref() == Some(niche) {
            return Ok(false);
        }

        user.niche = Some(niche.to_string());
        Ok(true)
    }

    async fn health_check(&self) -> Result<bool, MatchError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountType;

    fn creator(id: UserId, is_banned: bool) -> UserRecord {
        UserRecord {
            id,
            account_type: AccountType::Creator,
            styles: vec![1],
            niche: Some("Colourist".to_string()),
            is_active: true,
            is_banned,
        }
    }

    #[test]
    fn test_creator_listing_skips_banned_and_orders_by_id() {
        let store = InMemoryStore::new()
            .with_user(creator(9, false))
            .with_user(creator(2, false))
            .with_user(creator(5, true));

        let candidates = tokio_test::block_on(store.list_active_creators()).unwrap();
        let ids: Vec<UserId> = candidates.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 9]);
    }

    #[test]
    fn test_style_writes_unknown_user() {
        let store = InMemoryStore::new();
        let err = tokio_test::block_on(store.add_style(1, 1, 3)).unwrap_err();
        assert!(matches!(err, MatchError::NotFound { entity: "user", id: 1 }));

        let err = tokio_test::block_on(store.replace_style(1, 1)).unwrap_err();
        assert!(matches!(err, MatchError::NotFound { entity: "user", id: 1 }));
    }

    #[test]
    fn test_add_style_checks_duplicate_before_limit() {
        let store = InMemoryStore::new().with_user(creator(3, false));

        assert_eq!(
            tokio_test::block_on(store.add_style(3, 2, 2)).unwrap(),
            StyleWrite::Stored(vec![1, 2])
        );
        assert_eq!(
            tokio_test::block_on(store.add_style(3, 2, 2)).unwrap(),
            StyleWrite::Duplicate
        );
        assert_eq!(
            tokio_test::block_on(store.add_style(3, 4, 2)).unwrap(),
            StyleWrite::LimitReached
        );
    }

    #[test]
    fn test_save_niche_reports_unchanged() {
        let store = InMemoryStore::new().with_user(creator(4, false));

        assert!(!tokio_test::block_on(store.save_niche(4, "Colourist")).unwrap());
        assert!(tokio_test::block_on(store.save_niche(4, "RunAndGunSocial")).unwrap());
    }

    #[test]
    fn test_failing_creator_listing() {
        let store = InMemoryStore::new()
            .with_user(creator(1, false))
            .with_failing_creator_listing();

        let err = tokio_test::block_on(store.list_active_creators()).unwrap_err();
        assert!(matches!(err, MatchError::Database(_)));
    }

    #[test]
    fn test_niche_vocabulary_per_kind() {
        let store = InMemoryStore::new()
            .with_niche(NicheKind::Editor, "Colourist")
            .with_niche(NicheKind::Videographer, "DroneOperator");

        let editor = tokio_test::block_on(store.list_valid_niches(NicheKind::Editor)).unwrap();
        assert!(editor.contains("Colourist"));
        assert!(!editor.contains("DroneOperator"));
    }
}
