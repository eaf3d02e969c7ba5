// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AccountType, Candidate, MatchResult, NicheKind, Project, ProjectId, Requester, ScoringWeights, StyleId, UserId, UserRecord};
pub use requests::{NicheListQuery, SelectNicheRequest, SelectStyleRequest};
pub use responses::{ErrorResponse, HealthResponse, NicheListResponse, NicheSelectionResponse, RecommendationsResponse, StyleSelectionResponse};
