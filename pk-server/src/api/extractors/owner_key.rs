//! Axum extractors for the authenticated-owner boundary

use crate::ApiError;
use crate::state::AppState;

use pk_core::OwnerKey;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Extracts the owner key for requests on the owner's own surface.
///
/// The identity provider in front of this service authenticates the owner
/// and forwards the opaque key in the `X-Owner-Key` header. The value is
/// trusted as already authenticated; only shape validation happens here.
pub struct AuthenticatedOwner(pub OwnerKey);

impl FromRequestParts<AppState> for AuthenticatedOwner {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get("X-Owner-Key")
                .ok_or_else(|| ApiError::BadRequest {
                    message: "Missing X-Owner-Key header".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let value = header.to_str().map_err(|_| ApiError::BadRequest {
                message: "X-Owner-Key header is not valid UTF-8".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let key = OwnerKey::parse(value)?;
            log::debug!("Authenticated owner: {}", key);

            Ok(AuthenticatedOwner(key))
        }
    }
}
