use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Matcher;
use crate::error::MatchError;
use crate::models::{
    HealthResponse, NicheListQuery, NicheListResponse, NicheSelectionResponse, ProjectId,
    RecommendationsResponse, SelectNicheRequest, SelectStyleRequest, StyleSelectionResponse,
    UserId,
};
use crate::services::{self, MarketplaceStore};

/// Application state shared across all handlers
pub struct AppState<S> {
    pub store: Arc<S>,
    pub matcher: Matcher,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            matcher: self.matcher.clone(),
        }
    }
}

/// Configure the matching and selection routes
pub fn configure<S: MarketplaceStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check::<S>))
        .route(
            "/projects/{project_id}/recommendations",
            web::get().to(get_recommendations::<S>),
        )
        .route("/users/{user_id}/styles", web::put().to(select_style::<S>))
        .route("/users/{user_id}/niche", web::put().to(select_niche::<S>))
        .route("/niches", web::get().to(list_niches::<S>));
}

/// Health check endpoint
async fn health_check<S: MarketplaceStore>(state: web::Data<AppState<S>>) -> impl Responder {
    let healthy = state.store.health_check().await.unwrap_or(false);

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommended creators for a project
///
/// GET /api/v1/projects/{project_id}/recommendations
///
/// Response body:
/// ```json
/// {
///   "project_id": 1,
///   "requester_id": 3,
///   "matches": [
///     {"candidate_id": 7, "final_score": 88.0, "style_score": 70, "niche_match_score": 100}
///   ],
///   "total_candidates": 1
/// }
/// ```
async fn get_recommendations<S: MarketplaceStore>(
    state: web::Data<AppState<S>>,
    path: web::Path<ProjectId>,
) -> Result<HttpResponse, MatchError> {
    let project_id = path.into_inner();

    tracing::info!("Finding recommended creators for project {}", project_id);

    let recommendation =
        services::get_recommended_candidates(state.store.as_ref(), &state.matcher, project_id)
            .await?;

    Ok(HttpResponse::Ok().json(RecommendationsResponse {
        project_id: recommendation.project_id,
        requester_id: recommendation.requester_id,
        matches: recommendation.matches,
        total_candidates: recommendation.total_candidates,
    }))
}

/// Record an artwork style selection
///
/// PUT /api/v1/users/{user_id}/styles
///
/// Request body:
/// ```json
/// { "styleId": 3 }
/// ```
async fn select_style<S: MarketplaceStore>(
    state: web::Data<AppState<S>>,
    path: web::Path<UserId>,
    req: web::Json<SelectStyleRequest>,
) -> Result<HttpResponse, MatchError> {
    req.validate()?;

    let user_id = path.into_inner();
    let styles = services::select_style(state.store.as_ref(), user_id, req.style_id).await?;

    Ok(HttpResponse::Ok().json(StyleSelectionResponse { user_id, styles }))
}

/// Record a niche selection
///
/// PUT /api/v1/users/{user_id}/niche
///
/// Request body:
/// ```json
/// { "niche": "WeddingFilm", "nicheType": "videographer" }
/// ```
async fn select_niche<S: MarketplaceStore>(
    state: web::Data<AppState<S>>,
    path: web::Path<UserId>,
    req: web::Json<SelectNicheRequest>,
) -> Result<HttpResponse, MatchError> {
    req.validate()?;

    let user_id = path.into_inner();
    let SelectNicheRequest { niche, niche_type } = req.into_inner();

    services::select_niche(state.store.as_ref(), user_id, niche_type, &niche).await?;

    Ok(HttpResponse::Ok().json(NicheSelectionResponse { user_id, niche }))
}

/// Active niche vocabulary
///
/// GET /api/v1/niches?type=editor
async fn list_niches<S: MarketplaceStore>(
    state: web::Data<AppState<S>>,
    query: web::Query<NicheListQuery>,
) -> Result<HttpResponse, MatchError> {
    let niche_type = query.niche_type;
    let niches = services::list_niches(state.store.as_ref(), niche_type).await?;

    Ok(HttpResponse::Ok().json(NicheListResponse { niche_type, niches }))
}
