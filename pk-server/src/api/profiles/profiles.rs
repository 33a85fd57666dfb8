//! Profile REST API handlers
//!
//! Two disjoint surfaces share these routes: the owner's editing surface
//! (raw record) and the anonymous viewer surface (filtered view). The two
//! shapes must never be confused.

use crate::{
    ApiError, ApiResult, AuthenticatedOwner, ProfileResponse, PublicInfoResponse,
    SaveProfileRequest, ShareLinkResponse,
};
use crate::state::AppState;

use pk_core::OwnerKey;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/profile
///
/// Owner view of the record: all fields plus visibility flags, unfiltered.
/// 404 before the first save; owner clients render the empty editing form.
pub async fn get_profile(
    State(state): State<AppState>,
    AuthenticatedOwner(key): AuthenticatedOwner,
) -> ApiResult<Json<ProfileResponse>> {
    let record = state
        .store
        .get_by_key(&key)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("No profile saved for owner {}", key),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(ProfileResponse {
        profile: record.into(),
    }))
}

/// PUT /api/v1/profile
///
/// Create-or-update. The first save creates the record; later saves replace
/// fields and visibility wholesale while `created_at` stays fixed.
pub async fn save_profile(
    State(state): State<AppState>,
    AuthenticatedOwner(key): AuthenticatedOwner,
    Json(request): Json<SaveProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let record = state
        .store
        .upsert(&key, request.fields, request.visibility)
        .await?;

    Ok(Json(ProfileResponse {
        profile: record.into(),
    }))
}

/// GET /api/v1/profile/share-link
///
/// Deterministic public URL for the owner's QR code. The QR renderer
/// consumes this string and nothing else; no store access happens here.
pub async fn share_link(
    State(state): State<AppState>,
    AuthenticatedOwner(key): AuthenticatedOwner,
) -> ApiResult<Json<ShareLinkResponse>> {
    Ok(Json(ShareLinkResponse {
        url: key.public_url(&state.public_base_url),
    }))
}

/// GET /api/v1/info/{key}
///
/// Anonymous viewer read. The record is projected through the visibility
/// filter before anything leaves this handler; a malformed key is rejected
/// without touching the store, a well-formed unknown key is a plain 404.
pub async fn get_public_info(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<Json<PublicInfoResponse>> {
    let key = OwnerKey::parse(&key)?;

    let record = state
        .store
        .get_by_key(&key)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "Parking info not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let view = pk_core::project(&record);

    Ok(Json(PublicInfoResponse { info: view.into() }))
}
