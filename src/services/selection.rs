use crate::error::MatchError;
use crate::models::{AccountType, NicheKind, StyleId, UserId};
use crate::services::store::{MarketplaceStore, StyleWrite};

/// Creators may offer at most this many artwork styles
pub const MAX_CREATOR_STYLES: usize = 3;

/// Record an artwork style for a user and return the stored selection
///
/// Clients hold a single style which is replaced; creators accumulate up to
/// [`MAX_CREATOR_STYLES`]. Re-selecting a style already recorded is a conflict.
pub async fn select_style<S: MarketplaceStore>(
    store: &S,
    user_id: UserId,
    style_id: StyleId,
) -> Result<Vec<StyleId>, MatchError> {
    if style_id < 1 {
        return Err(MatchError::ValidationFailed(format!(
            "style id must be positive, got {}",
            style_id
        )));
    }

    let user = store
        .get_user(user_id)
        .await?
        .ok_or_else(|| MatchError::not_found("user", user_id))?;

    // Duplicate and limit checks run inside the store write, not on `user.styles`
    let write = match user.account_type {
        AccountType::Client => store.replace_style(user_id, style_id).await?,
        AccountType::Creator => {
            store
                .add_style(user_id, style_id, MAX_CREATOR_STYLES)
                .await?
        }
        AccountType::Admin => {
            return Err(MatchError::ValidationFailed(
                "admin accounts do not hold style selections".to_string(),
            ));
        }
    };

    let styles = match write {
        StyleWrite::Stored(styles) => styles,
        StyleWrite::Duplicate => {
            return Err(MatchError::Conflict(format!(
                "style {} is already selected",
                style_id
            )));
        }
        StyleWrite::LimitReached => {
            return Err(MatchError::ValidationFailed(format!(
                "creators may select at most {} styles",
                MAX_CREATOR_STYLES
            )));
        }
    };

    tracing::info!("User {} selected style {} (now {:?})", user_id, style_id, styles);

    Ok(styles)
}

/// Record a niche for a user after checking it against the active vocabulary
pub async fn select_niche<S: MarketplaceStore>(
    store: &S,
    user_id: UserId,
    kind: NicheKind,
    niche: &str,
) -> Result<(), MatchError> {
    let user = store
        .get_user(user_id)
        .await?
        .ok_or_else(|| MatchError::not_found("user", user_id))?;

    if user.account_type == AccountType::Admin {
        return Err(MatchError::ValidationFailed(
            "admin accounts do not hold niche selections".to_string(),
        ));
    }

    let vocabulary = store.list_valid_niches(kind).await?;
    if !vocabulary.contains(niche) {
        return Err(MatchError::ValidationFailed(format!(
            "'{}' is not a valid {} niche",
            niche,
            kind.as_str()
        )));
    }

    if !store.save_niche(user_id, niche).await? {
        return Err(MatchError::Conflict(format!(
            "niche '{}' is already selected",
            niche
        )));
    }

    tracing::info!("User {} selected {} niche {}", user_id, kind.as_str(), niche);

    Ok(())
}

/// Active niche names for one vocabulary, sorted
pub async fn list_niches<S: MarketplaceStore>(
    store: &S,
    kind: NicheKind,
) -> Result<Vec<String>, MatchError> {
    Ok(store.list_valid_niches(kind).await?.into_iter().collect())
}
