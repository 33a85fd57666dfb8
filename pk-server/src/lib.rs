pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, Result as ApiResult},
    extractors::owner_key::AuthenticatedOwner,
    profiles::{
        profile_dto::ProfileDto,
        profile_response::ProfileResponse,
        profiles::{get_profile, get_public_info, save_profile, share_link},
        public_info_dto::PublicInfoDto,
        public_info_response::PublicInfoResponse,
        save_profile_request::SaveProfileRequest,
        share_link_response::ShareLinkResponse,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
