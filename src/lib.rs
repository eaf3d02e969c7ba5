//! EMC engine - creator matching service for the editor/videographer marketplace
//!
//! Ranks active creators for a client's project by combining a niche match with
//! an artwork-style affinity score, and records the style and niche selections
//! the ranking reads.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{niche_score, style_score, Matcher};
pub use error::MatchError;
pub use models::{Candidate, MatchResult, Requester, ScoringWeights, StyleId};
