use axum::Router;
use axum::routing::get;

use crate::features::health::handle_healthcheck;
use crate::features::home::handle_home;
use crate::server::AppState;

/// Registers the root handler and the health check.
///
/// The root path takes exactly one handler; whichever `HomeResponse` the
/// state carries is the one served.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_home))
        .route("/api/health", get(handle_healthcheck))
        .with_state(state)
}
