use crate::health;
use crate::api::profiles::profiles::{get_profile, get_public_info, save_profile, share_link};
use crate::state::AppState;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Owner editing surface (raw record, never pre-filtered)
        .route("/api/v1/profile", get(get_profile).put(save_profile))
        .route("/api/v1/profile/share-link", get(share_link))
        // Anonymous viewer surface (filtered view only)
        .route("/api/v1/info/{key}", get(get_public_info))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware (viewer pages are served from another origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
