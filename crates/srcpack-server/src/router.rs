//! Router assembly.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::state::AppState;

/// Creates the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::download::routes())
        .merge(routes::health::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
