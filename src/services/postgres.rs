use std::collections::BTreeSet;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::config::DatabaseSettings;
use crate::error::MatchError;
use crate::models::{Candidate, NicheKind, Project, ProjectId, StyleId, UserId, UserRecord};
use crate::services::store::{MarketplaceStore, StyleWrite};

/// PostgreSQL-backed marketplace repository
///
/// Reads projects, users and the niche vocabulary; writes only the style and
/// niche selections on `users`.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, MatchError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, MatchError> {
        let max_connections = settings.max_connections.unwrap_or(10);
        let min_connections = settings.min_connections.unwrap_or(1);

        tracing::debug!(
            "Connecting to PostgreSQL (min: {}, max: {} connections)",
            min_connections,
            max_connections
        );

        Self::new(
            &settings.url,
            max_connections,
            min_connections,
            Duration::from_secs(settings.acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(settings.idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Load a user after a conditional write matched nothing
    async fn require_user(&self, user_id: UserId) -> Result<UserRecord, MatchError> {
        self.get_user(user_id)
            .await?
            .ok_or_else(|| MatchError::not_found("user", user_id))
    }
}

impl MarketplaceStore for PostgresClient {
    async fn get_project(&self, project_id: ProjectId) -> Result<Option<Project>, MatchError> {
        let query = r#"
            SELECT id, owner_id, title
            FROM projects
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(project_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Project {
            id: row.get("id"),
            owner_id: row.get("owner_id"),
            title: row.get("title"),
        }))
    }

    async fn get_user(&self, user_id: UserId) -> Result<Option<UserRecord>, MatchError> {
        let query = r#"
            SELECT id, account_type, artwork, niche, is_active, is_banned
            FROM users
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| UserRecord {
            id: row.get("id"),
            account_type: row.get("account_type"),
            styles: row.get("artwork"),
            niche: row.get("niche"),
            is_active: row.get("is_active"),
            is_banned: row.get("is_banned"),
        }))
    }

    async fn list_active_creators(&self) -> Result<Vec<Candidate>, MatchError> {
        let query = r#"
            SELECT id, artwork, niche
            FROM users
            WHERE account_type = 'creator'
              AND is_active = TRUE
              AND is_banned = FALSE
            ORDER BY id ASC
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let candidates: Vec<Candidate> = rows
            .iter()
            .map(|row| Candidate {
                id: row.get("id"),
                styles: row.get("artwork"),
                niche: row.get("niche"),
            })
            .collect();

        tracing::debug!("Loaded {} active creators", candidates.len());

        Ok(candidates)
    }

    async fn list_valid_niches(&self, kind: NicheKind) -> Result<BTreeSet<String>, MatchError> {
        let query = r#"
            SELECT name
            FROM niches
            WHERE niche_type = $1
              AND is_active = TRUE
              AND is_deleted = FALSE
        "#;

        let rows = sqlx::query(query).bind(kind).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(|row| row.get("name")).collect())
    }

    async fn replace_style(&self, user_id: UserId, style: StyleId) -> Result<StyleWrite, MatchError> {
        let query = r#"
            UPDATE users
            SET artwork = ARRAY[$2]::INTEGER[], updated_at = NOW()
            WHERE id = $1
              AND (cardinality(artwork) = 0 OR artwork[1] <> $2)
            RETURNING artwork
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .bind(style)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(StyleWrite::Stored(row.get("artwork"))),
            None => {
                self.require_user(user_id).await?;
                Ok(StyleWrite::Duplicate)
            }
        }
    }

    async fn add_style(
        &self,
        user_id: UserId,
        style: StyleId,
        max_styles: usize,
    ) -> Result<StyleWrite, MatchError> {
        // Check and append in one statement so concurrent selections cannot interleave
        let query = r#"
            UPDATE users
            SET artwork = array_append(artwork, $2), updated_at = NOW()
            WHERE id = $1
              AND NOT ($2 = ANY(artwork))
              AND cardinality(artwork) < $3
            RETURNING artwork
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .bind(style)
            .bind(max_styles as i32)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(StyleWrite::Stored(row.get("artwork"))),
            None => {
                let user = self.require_user(user_id).await?;
                if user.styles.contains(&style) {
                    Ok(StyleWrite::Duplicate)
                } else {
                    Ok(StyleWrite::LimitReached)
                }
            }
        }
    }

    async fn save_niche(&self, user_id: UserId, niche: &str) -> Result<bool, MatchError> {
        let query = r#"
            UPDATE users
            SET niche = $2, updated_at = NOW()
            WHERE id = $1
              AND niche IS DISTINCT FROM $2
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .bind(niche)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            self.require_user(user_id).await?;
            return Ok(false);
        }

        Ok(true)
    }

    async fn health_check(&self) -> Result<bool, MatchError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
