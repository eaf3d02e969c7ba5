// Core algorithm exports
pub mod affinity;
pub mod matcher;
pub mod niche;
pub mod scoring;
pub mod style;

pub use affinity::soft_matches;
pub use matcher::{sort_by_score, Matcher};
pub use niche::niche_score;
pub use scoring::{calculate_match_score, NICHE_WEIGHT, STYLE_WEIGHT};
pub use style::style_score;
