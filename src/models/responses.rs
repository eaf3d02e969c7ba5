use serde::{Deserialize, Serialize};

use crate::models::domain::{MatchResult, NicheKind, ProjectId, StyleId, UserId};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub project_id: ProjectId,
    pub requester_id: UserId,
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Response after a style selection is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleSelectionResponse {
    pub user_id: UserId,
    pub styles: Vec<StyleId>,
}

/// Response after a niche selection is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NicheSelectionResponse {
    pub user_id: UserId,
    pub niche: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NicheListResponse {
    pub niche_type: NicheKind,
    pub niches: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
