use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, normalize_path::NormalizePath,
    trace::TraceLayer,
};

use super::{
    handlers::{add_member, delete_member, get_all_members, get_family, get_member, sitemap},
    middleware::{handle_panic, not_found},
};
use crate::{app::AppServices, ports::services::FamilyService};

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    pub family_service: Arc<dyn FamilyService>,
}

impl From<AppServices> for AppState {
    fn from(services: AppServices) -> Self {
        AppState {
            family_service: Arc::new(services.family_service),
        }
    }
}

/// Create the main application router with all endpoints.
///
/// Trailing slashes are trimmed before routing, so `/members/` and `/members`
/// reach the same handler.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(sitemap))
        .merge(create_member_router())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(CorsLayer::permissive()),
        )
        // Add state for dependency injection
        .with_state(state);

    // Router layers run after route matching, so normalisation wraps the whole router
    Router::new().fallback_service(NormalizePath::trim_trailing_slash(routes))
}

/// Create a router with just the member operations
pub fn create_member_router() -> Router<AppState> {
    Router::new()
        .route("/members", get(get_all_members))
        .route("/member", post(add_member))
        .route("/member/{id}", get(get_member).delete(delete_member))
        .route("/family", get(get_family))
}
