//! Handlers for the shared drawing canvas.
//!
//! Visitors read the canvas at `/`, contribute a step via `/create`,
//! and can clear the whole drawing via `/reset`.

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;

use gridpath_core::canvas::{self, CAPACITY};
use gridpath_core::steps::Steps;
use gridpath_db::repositories::SubmissionRepo;

use crate::error::AppResult;
use crate::render;
use crate::state::AppState;

/// Raw query parameters for `/create`. All four are optional strings;
/// coercion to integers is lenient by design.
#[derive(Debug, Deserialize)]
pub struct CreateParams {
    pub left: Option<String>,
    pub up: Option<String>,
    pub right: Option<String>,
    pub down: Option<String>,
}

/// GET /
///
/// Read all submissions, lay out the path, render the canvas view.
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let submissions = SubmissionRepo::list_all(&state.pool).await?;
    let layout = canvas::layout(&submissions);
    Ok(Html(render::canvas_page(&layout)))
}

/// GET /create?left=&up=&right=&down=
///
/// Validate and persist one submission, wiping the canvas first once
/// the capacity threshold is reached, then bounce back home.
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<CreateParams>,
) -> AppResult<Redirect> {
    let steps = Steps::coerce(
        params.left.as_deref(),
        params.up.as_deref(),
        params.right.as_deref(),
        params.down.as_deref(),
    );
    steps.validate()?;

    // The count read, the wipe, and the insert are deliberately not one
    // transaction; concurrent requests can interleave between them.
    let count = SubmissionRepo::count(&state.pool).await?;
    if count >= CAPACITY {
        let wiped = SubmissionRepo::wipe_all(&state.pool).await?;
        tracing::info!(wiped, "Capacity reached, resetting canvas");
    }

    let submission = SubmissionRepo::create(&state.pool, &steps).await?;
    tracing::debug!(id = submission.id, "Submission stored");

    Ok(Redirect::to("/"))
}

/// GET /reset
///
/// Clears the whole canvas with no warning.
pub async fn reset(State(state): State<AppState>) -> AppResult<Redirect> {
    let wiped = SubmissionRepo::wipe_all(&state.pool).await?;
    tracing::info!(wiped, "Canvas reset");
    Ok(Redirect::to("/"))
}
