//! Storage gateway: opens the SQLite database and ensures the schema exists.

use crate::domain::model::all_tables;
use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Handle on the record store. Cloning is cheap; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens (creating if needed) the database file at `path`.
    ///
    /// The parent directory is created when missing, so a fresh install only needs a
    /// writable working directory.
    pub async fn open(path: &Path, max_connections: u32) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create data directory {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .with_context(|| format!("failed to open database {}", path.display()))?;

        debug!(path = %path.display(), "opened record store");
        Ok(Self { pool })
    }

    /// Opens a private in-memory database.
    ///
    /// Each SQLite `:memory:` connection is its own database, so the pool is pinned to a
    /// single connection that is never recycled.
    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("failed to open in-memory database")?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates every table and index that is missing. Safe to run on every startup.
    pub async fn ensure_schema(&self) -> Result<()> {
        for table in all_tables() {
            sqlx::query(table.get_create_table_sql())
                .execute(&self.pool)
                .await
                .with_context(|| format!("failed to create table {}", table.table_name()))?;

            for index_sql in table.get_index_sql() {
                sqlx::query(index_sql)
                    .execute(&self.pool)
                    .await
                    .with_context(|| {
                        format!("failed to create index on {}", table.table_name())
                    })?;
            }
        }
        info!("record store schema ready");
        Ok(())
    }

    /// Names of the tables currently present in the database, sorted.
    pub async fn table_names(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    /// Waits for in-flight work and closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
