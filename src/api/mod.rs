//! HTTP interface over the title collection.
//!
//! Routes:
//! - `GET /search?title=<query>`: case-insensitive lookup over a freshly sorted collection.
//! - `GET /sort`: the whole collection in case-insensitive order.

pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::catalog::TitleStore;

pub use error::ApiError;

// =============================================================================
// Application State
// =============================================================================

/// State shared by every handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    store: Arc<TitleStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: TitleStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    #[must_use]
    pub fn from_shared(store: Arc<TitleStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &TitleStore {
        &self.store
    }
}

// =============================================================================
// Router Creation
// =============================================================================

/// Creates the API router.
///
/// # Examples
///
/// ```ignore
/// use titlesort::api::{AppState, create_router};
///
/// let router = create_router(AppState::default());
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(handlers::search_title))
        .route("/sort", get(handlers::sort_titles))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
