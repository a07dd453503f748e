//! The job board: jobs kept in a dense, manually re-orderable priority sequence.
//!
//! Priorities always occupy exactly `1..=N` for `N` jobs. Only `delete` and `move_to`
//! renumber other jobs, and each does so inside a single transaction, so a reader never
//! sees a gap or a duplicate.

use crate::domain::model::Job;
use crate::domain::{matches_filter, title_case};
use anyhow::{Context, Result};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, warn};

/// Slot a job is parked in while the rest of the board shifts around it.
/// Real priorities start at 1 and shifting uses negative values, so 0 never collides.
const PARKED_PRIORITY: i64 = 0;

#[derive(Clone, Debug)]
pub struct JobBoard {
    pool: SqlitePool,
}

impl JobBoard {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Adds a job at the bottom of the board (priority `N + 1`).
    pub async fn append(
        &self,
        customer_name: &str,
        description: &str,
        status: &str,
    ) -> Result<Job> {
        let customer_name = title_case(customer_name);
        let mut tx = self.pool.begin().await?;

        let priority = max_priority(&mut tx).await? + 1;
        sqlx::query(
            "INSERT INTO jobs (priority, customer_name, description, status)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(priority)
        .bind(&customer_name)
        .bind(description)
        .bind(status)
        .execute(&mut *tx)
        .await
        .context("failed to insert job")?;

        tx.commit().await?;
        debug!(priority, customer = %customer_name, "appended job");

        Ok(Job {
            priority,
            customer_name,
            description: description.to_string(),
            status: status.to_string(),
        })
    }

    pub async fn get(&self, priority: i64) -> Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>(
            "SELECT priority, customer_name, description, status FROM jobs WHERE priority = ?1",
        )
        .bind(priority)
        .fetch_optional(&self.pool)
        .await?;
        Ok(job)
    }

    /// Jobs in priority order, optionally narrowed to customers whose name contains `filter`
    /// (case-insensitive).
    pub async fn list(&self, filter: Option<&str>) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(
            "SELECT priority, customer_name, description, status FROM jobs ORDER BY priority ASC",
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to list jobs")?;

        Ok(jobs
            .into_iter()
            .filter(|job| matches_filter(&job.customer_name, filter))
            .collect())
    }

    pub async fn count(&self) -> Result<i64> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }

    /// Replaces the status of the job at `priority`. Returns `false` (and changes nothing)
    /// when there is no such job.
    pub async fn update_status(&self, priority: i64, status: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE jobs SET status = ?1 WHERE priority = ?2")
            .bind(status)
            .bind(priority)
            .execute(&self.pool)
            .await
            .context("failed to update job status")?;

        let updated = result.rows_affected() > 0;
        debug!(priority, status, updated, "update job status");
        Ok(updated)
    }

    /// Removes the job at `priority` and closes the gap it leaves.
    ///
    /// Deleting a priority that does not exist removes nothing, but the compaction still runs
    /// (and finds nothing to renumber). Returns whether a job was removed.
    pub async fn delete(&self, priority: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM jobs WHERE priority = ?1")
            .bind(priority)
            .execute(&mut *tx)
            .await
            .context("failed to delete job")?
            .rows_affected()
            > 0;

        let renumbered = compact(&mut tx).await?;
        tx.commit().await?;

        debug!(priority, removed, renumbered, "deleted job");
        Ok(removed)
    }

    /// Moves the job at `old_priority` to `new_priority`, shifting every job in between by one
    /// slot to close the gap.
    ///
    /// Targets outside `1..=N` are clamped. Returns the job's resulting priority, or `None`
    /// when no job holds `old_priority` (the board is left untouched).
    pub async fn move_to(&self, old_priority: i64, new_priority: i64) -> Result<Option<i64>> {
        let mut tx = self.pool.begin().await?;

        let ceiling = max_priority(&mut tx).await?.max(1);
        let target = new_priority.clamp(1, ceiling);
        if target != new_priority {
            warn!(
                requested = new_priority,
                clamped = target,
                max = ceiling,
                "job move target out of range, clamping"
            );
        }

        let job_id = sqlx::query_scalar::<_, i64>("SELECT id FROM jobs WHERE priority = ?1")
            .bind(old_priority)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(job_id) = job_id else {
            debug!(old_priority, "no job at priority, nothing to move");
            return Ok(None);
        };

        if old_priority == target {
            return Ok(Some(target));
        }

        sqlx::query("UPDATE jobs SET priority = ?1 WHERE id = ?2")
            .bind(PARKED_PRIORITY)
            .bind(job_id)
            .execute(&mut *tx)
            .await?;

        // SQLite checks UNIQUE row by row, so the window is flipped through negative
        // values before landing on its shifted slots.
        if old_priority > target {
            sqlx::query(
                "UPDATE jobs SET priority = -(priority + 1) WHERE priority >= ?1 AND priority < ?2",
            )
            .bind(target)
            .bind(old_priority)
            .execute(&mut *tx)
            .await?;
        } else {
            sqlx::query(
                "UPDATE jobs SET priority = -(priority - 1) WHERE priority > ?1 AND priority <= ?2",
            )
            .bind(old_priority)
            .bind(target)
            .execute(&mut *tx)
            .await?;
        }
        sqlx::query("UPDATE jobs SET priority = -priority WHERE priority < 0")
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE jobs SET priority = ?1 WHERE id = ?2")
            .bind(target)
            .bind(job_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await.context("failed to commit job move")?;
        debug!(from = old_priority, to = target, "moved job");
        Ok(Some(target))
    }

    /// Moves a job one slot toward the top of the board.
    pub async fn move_up(&self, priority: i64) -> Result<Option<i64>> {
        self.move_to(priority, priority.saturating_sub(1)).await
    }

    /// Moves a job one slot toward the bottom of the board.
    pub async fn move_down(&self, priority: i64) -> Result<Option<i64>> {
        self.move_to(priority, priority.saturating_add(1)).await
    }
}

async fn max_priority(tx: &mut Transaction<'_, Sqlite>) -> Result<i64> {
    let max = sqlx::query_scalar::<_, i64>("SELECT COALESCE(MAX(priority), 0) FROM jobs")
        .fetch_one(&mut **tx)
        .await?;
    Ok(max)
}

/// Reassigns priorities `1..=N` in current order. Returns how many jobs changed slot.
///
/// Rows are visited in ascending order and only ever move down to a lower slot, so the
/// slot being written is always free.
async fn compact(tx: &mut Transaction<'_, Sqlite>) -> Result<u64> {
    let rows =
        sqlx::query_as::<_, (i64, i64)>("SELECT id, priority FROM jobs ORDER BY priority ASC")
            .fetch_all(&mut **tx)
            .await
            .context("failed to read jobs for compaction")?;

    let mut renumbered = 0;
    for ((id, priority), slot) in rows.into_iter().zip(1_i64..) {
        if priority != slot {
            sqlx::query("UPDATE jobs SET priority = ?1 WHERE id = ?2")
                .bind(slot)
                .bind(id)
                .execute(&mut **tx)
                .await
                .context("failed to renumber job")?;
            renumbered += 1;
        }
    }
    Ok(renumbered)
}
