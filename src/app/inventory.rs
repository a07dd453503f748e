//! Stock levels per material.

use crate::domain::matches_filter;
use crate::domain::model::InventoryItem;
use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::{debug, warn};

#[derive(Clone, Debug)]
pub struct InventoryLedger {
    pool: SqlitePool,
}

impl InventoryLedger {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Adds `quantity` to the stock of `material`, creating the item when it is new.
    ///
    /// The material name is stored as given; callers resolve it through the registry first.
    pub async fn add_stock(&self, material: &str, quantity: u32) -> Result<()> {
        sqlx::query(
            "INSERT INTO inventory (material, quantity) VALUES (?1, ?2)
             ON CONFLICT (material) DO UPDATE SET quantity = quantity + excluded.quantity",
        )
        .bind(material)
        .bind(i64::from(quantity))
        .execute(&self.pool)
        .await
        .with_context(|| format!("failed to add stock for {}", material))?;

        debug!(material, quantity, "added stock");
        Ok(())
    }

    /// Takes `quantity` out of stock. Returns `false`, leaving the stock untouched, when the
    /// material is unknown or there is not enough of it.
    ///
    /// The availability check and the deduction are one conditional statement.
    pub async fn use_stock(&self, material: &str, quantity: u32) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE inventory SET quantity = quantity - ?1 WHERE material = ?2 AND quantity >= ?1",
        )
        .bind(i64::from(quantity))
        .bind(material)
        .execute(&self.pool)
        .await
        .with_context(|| format!("failed to use stock for {}", material))?;

        let used = result.rows_affected() == 1;
        if used {
            debug!(material, quantity, "used stock");
        } else {
            warn!(material, quantity, "insufficient stock");
        }
        Ok(used)
    }

    /// Removes the item outright. Returns whether it existed.
    pub async fn delete_material(&self, material: &str) -> Result<bool> {
        let removed = sqlx::query("DELETE FROM inventory WHERE material = ?1")
            .bind(material)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to delete material {}", material))?
            .rows_affected()
            > 0;
        debug!(material, removed, "deleted material");
        Ok(removed)
    }

    pub async fn get(&self, material: &str) -> Result<Option<InventoryItem>> {
        let item = sqlx::query_as::<_, InventoryItem>(
            "SELECT material, quantity FROM inventory WHERE material = ?1",
        )
        .bind(material)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    /// Items sorted by material name, optionally narrowed to names containing `filter`
    /// (case-insensitive).
    pub async fn list(&self, filter: Option<&str>) -> Result<Vec<InventoryItem>> {
        let items = sqlx::query_as::<_, InventoryItem>(
            "SELECT material, quantity FROM inventory ORDER BY material ASC",
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to list inventory")?;

        Ok(items
            .into_iter()
            .filter(|item| matches_filter(&item.material, filter))
            .collect())
    }
}
