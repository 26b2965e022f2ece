//! Repository for the `submissions` table.

use gridpath_core::steps::Steps;
use sqlx::PgPool;

use crate::models::submission::Submission;

/// Column list shared across queries. `left` and `right` are reserved
/// words and stay quoted.
const COLUMNS: &str = r#"id, "left", up, "right", down, created_at"#;

/// Provides data access for submissions.
///
/// The repository exclusively owns the canonical collection; readers
/// only ever get immutable snapshots.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// List every submission in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions ORDER BY id ASC");
        sqlx::query_as::<_, Submission>(&query).fetch_all(pool).await
    }

    /// Current number of stored submissions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM submissions")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Insert one submission, returning the created row with its
    /// assigned id and creation timestamp.
    ///
    /// Callers validate `steps` first; the table's CHECK constraints
    /// abort the insert if an out-of-range value slips through.
    pub async fn create(pool: &PgPool, steps: &Steps) -> Result<Submission, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO submissions ("left", up, "right", down)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(steps.left)
            .bind(steps.up)
            .bind(steps.right)
            .bind(steps.down)
            .fetch_one(pool)
            .await
    }

    /// Delete every submission, returning how many rows were removed.
    pub async fn wipe_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM submissions").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
