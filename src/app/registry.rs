//! Approved material names.

use crate::domain::title_case;
use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct MaterialRegistry {
    pool: SqlitePool,
}

impl MaterialRegistry {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Registers `name` (title-cased). Adding a name that is already present does nothing.
    pub async fn add(&self, name: &str) -> Result<String> {
        let name = title_case(name);
        sqlx::query("INSERT OR IGNORE INTO registry (material_name) VALUES (?1)")
            .bind(&name)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to register material {}", name))?;
        debug!(material = %name, "registered material");
        Ok(name)
    }

    /// Removes `name` exactly as given. Stock already recorded under it is kept.
    /// Returns whether the name was registered.
    pub async fn remove(&self, name: &str) -> Result<bool> {
        let removed = sqlx::query("DELETE FROM registry WHERE material_name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to unregister material {}", name))?
            .rows_affected()
            > 0;
        debug!(material = name, removed, "unregistered material");
        Ok(removed)
    }

    /// All registered names, alphabetical.
    pub async fn list(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT material_name FROM registry ORDER BY material_name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to list registry")?;
        Ok(names)
    }

    /// Looks `name` up ignoring case and returns the registered spelling.
    pub async fn resolve(&self, name: &str) -> Result<Option<String>> {
        let wanted = name.trim().to_lowercase();
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|registered| registered.to_lowercase() == wanted))
    }
}
