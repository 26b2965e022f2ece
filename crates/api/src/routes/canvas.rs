//! Route definitions for the canvas.

use axum::routing::get;
use axum::Router;

use crate::handlers::canvas;
use crate::state::AppState;

/// Canvas routes mounted at the application root.
///
/// ```text
/// GET /        -> home
/// GET /create  -> create
/// GET /reset   -> reset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(canvas::home))
        .route("/create", get(canvas::create))
        .route("/reset", get(canvas::reset))
}
