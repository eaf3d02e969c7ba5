use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{NicheKind, StyleId};

/// Request to record an artwork style selection
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SelectStyleRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "style_id", rename = "styleId")]
    pub style_id: StyleId,
}

/// Request to record a niche selection
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SelectNicheRequest {
    #[validate(length(min = 1, max = 64))]
    pub niche: String,
    #[serde(alias = "niche_type", rename = "nicheType")]
    pub niche_type: NicheKind,
}

/// Query string for the niche vocabulary listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NicheListQuery {
    #[serde(rename = "type")]
    pub niche_type: NicheKind,
}
