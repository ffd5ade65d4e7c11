//! HTTP API server

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::storage::Database;

pub mod error;
pub mod handlers;
pub mod state;
pub mod url;

pub use error::ApiError;
pub use state::AppState;
pub use url::{ParsedUrl, UrlError};

/// Build the API router using the provided application state.
///
/// Every path goes through the same per-verb dispatchers, which resolve the
/// resource from the path themselves.
pub fn create_router(state: AppState) -> Router {
    let dispatch: MethodRouter<AppState> = get(handlers::dispatch_get)
        .post(handlers::dispatch_post)
        .put(handlers::dispatch_put)
        .delete(handlers::dispatch_delete);

    Router::new()
        .route("/", dispatch.clone())
        .route("/*path", dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper building state and router from a database handle
pub fn create_database_router(db: Database) -> Router {
    create_router(AppState::new(db))
}
