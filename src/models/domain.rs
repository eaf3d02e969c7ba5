use serde::{Deserialize, Serialize};

use crate::core::scoring::{NICHE_WEIGHT, STYLE_WEIGHT};

/// Identifier of a single artwork style
pub type StyleId = i32;

pub type UserId = i64;
pub type ProjectId = i64;

/// Account role as stored in the `users` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Client,
    Creator,
    Admin,
}

/// Which niche vocabulary a niche belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "niche_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NicheKind {
    Editor,
    Videographer,
}

impl NicheKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NicheKind::Editor => "editor",
            NicheKind::Videographer => "videographer",
        }
    }
}

/// User row with the fields the matching engine reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub account_type: AccountType,
    /// Selected artwork styles. Clients hold one, creators up to three.
    #[serde(default)]
    pub styles: Vec<StyleId>,
    #[serde(default)]
    pub niche: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_banned: bool,
}

impl UserRecord {
    /// Only active, non-banned creators are ever ranked
    pub fn is_rankable_creator(&self) -> bool {
        self.account_type == AccountType::Creator && self.is_active && !self.is_banned
    }

    pub fn to_candidate(&self) -> Candidate {
        Candidate {
            id: self.id,
            styles: self.styles.clone(),
            niche: self.niche.clone(),
        }
    }
}

fn default_true() -> bool { true }

/// Project posted by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub owner_id: UserId,
    pub title: String,
}

/// The project owner's selections, as seen by the matcher
#[derive(Debug, Clone, PartialEq)]
pub struct Requester {
    pub user_id: UserId,
    pub style_id: Option<StyleId>,
    pub niche: Option<String>,
}

impl From<&UserRecord> for Requester {
    fn from(user: &UserRecord) -> Self {
        // Stored as a single-element array; the first entry is the selection
        Self {
            user_id: user.id,
            style_id: user.styles.first().copied(),
            niche: user.niche.clone().filter(|n| !n.is_empty()),
        }
    }
}

/// A creator being scored against a requester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: UserId,
    pub styles: Vec<StyleId>,
    pub niche: Option<String>,
}

/// Scored candidate. Built per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate_id: UserId,
    pub final_score: f64,
    pub style_score: u8,
    pub niche_match_score: u8,
}

/// Weights of the two sub-scores in the final score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub niche: f64,
    pub style: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            niche: NICHE_WEIGHT,
            style: STYLE_WEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(account_type: AccountType, styles: Vec<StyleId>, niche: Option<&str>) -> UserRecord {
        UserRecord {
            id: 7,
            account_type,
            styles,
            niche: niche.map(str::to_string),
            is_active: true,
            is_banned: false,
        }
    }

    #[test]
    fn test_requester_takes_first_style() {
        let requester = Requester::from(&user(AccountType::Client, vec![4, 9], Some("WeddingFilm")));
        assert_eq!(requester.style_id, Some(4));
        assert_eq!(requester.niche.as_deref(), Some("WeddingFilm"));
    }

    #[test]
    fn test_requester_empty_niche_is_absent() {
        let requester = Requester::from(&user(AccountType::Client, vec![], Some("")));
        assert_eq!(requester.style_id, None);
        assert_eq!(requester.niche, None);
    }

    #[test]
    fn test_rankable_creator() {
        assert!(user(AccountType::Creator, vec![1], None).is_rankable_creator());
        assert!(!user(AccountType::Client, vec![1], None).is_rankable_creator());

        let mut banned = user(AccountType::Creator, vec![1], None);
        banned.is_banned = true;
        assert!(!banned.is_rankable_creator());

        let mut inactive = user(AccountType::Creator, vec![1], None);
        inactive.is_active = false;
        assert!(!inactive.is_rankable_creator());
    }

    #[test]
    fn test_account_type_serde() {
        let json = serde_json::to_string(&AccountType::Creator).unwrap();
        assert_eq!(json, "\"creator\"");
        let kind: NicheKind = serde_json::from_str("\"videographer\"").unwrap();
        assert_eq!(kind, NicheKind::Videographer);
    }
}
