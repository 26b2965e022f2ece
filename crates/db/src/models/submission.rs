//! Submission row model.

use gridpath_core::canvas::Stroke;
use gridpath_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `submissions` table: one visitor-contributed
/// four-direction path step.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: DbId,
    pub left: i32,
    pub up: i32,
    pub right: i32,
    pub down: i32,
    pub created_at: Timestamp,
}

impl Stroke for Submission {
    fn source_id(&self) -> DbId {
        self.id
    }
    fn left(&self) -> i32 {
        self.left
    }
    fn up(&self) -> i32 {
        self.up
    }
    fn right(&self) -> i32 {
        self.right
    }
    fn down(&self) -> i32 {
        self.down
    }
}
