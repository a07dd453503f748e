//! The record service.
//!
//! Owns the storage handle and hands out the four record components:
//! 1.  `JobBoard` for the priority-ordered job list.
//! 2.  `CustomerDirectory` for contacts.
//! 3.  `InventoryLedger` for stock levels.
//! 4.  `MaterialRegistry` for the approved material names that gate stock intake.

use crate::app::customers::CustomerDirectory;
use crate::app::inventory::InventoryLedger;
use crate::app::jobs::JobBoard;
use crate::app::registry::MaterialRegistry;
use crate::infra::config;
use crate::storage::Store;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Result of stock intake through the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StockIntake {
    /// Stock was added under the registry's spelling of the material.
    Received { material: String, quantity: u32 },
    /// The material is not registered; nothing was written.
    Unregistered,
}

pub struct RecordService {
    store: Store,
    jobs: JobBoard,
    customers: CustomerDirectory,
    inventory: InventoryLedger,
    registry: MaterialRegistry,
}

impl RecordService {
    /// Opens the store configured by the environment (`DATABASE_PATH`, ...) and ensures the
    /// schema exists.
    pub async fn new() -> Result<Self> {
        dotenv::dotenv().ok();
        let path = config::database_path();
        let store = Store::open(&path, config::database_max_connections()).await?;
        info!(path = %path.display(), "record store opened");
        Self::with_store(store).await
    }

    /// Opens the database file at `path` and ensures the schema exists.
    pub async fn open(path: &Path) -> Result<Self> {
        let store = Store::open(path, config::database_max_connections()).await?;
        Self::with_store(store).await
    }

    /// A service over a fresh in-memory database.
    pub async fn in_memory() -> Result<Self> {
        Self::with_store(Store::open_in_memory().await?).await
    }

    pub async fn with_store(store: Store) -> Result<Self> {
        store.ensure_schema().await?;
        let pool = store.pool().clone();
        Ok(Self {
            jobs: JobBoard::new(pool.clone()),
            customers: CustomerDirectory::new(pool.clone()),
            inventory: InventoryLedger::new(pool.clone()),
            registry: MaterialRegistry::new(pool),
            store,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn jobs(&self) -> &JobBoard {
        &self.jobs
    }

    pub fn customers(&self) -> &CustomerDirectory {
        &self.customers
    }

    pub fn inventory(&self) -> &InventoryLedger {
        &self.inventory
    }

    pub fn registry(&self) -> &MaterialRegistry {
        &self.registry
    }

    /// Adds stock for a registered material, matched case-insensitively and written under the
    /// registry's spelling. Unregistered materials are refused without touching the inventory.
    pub async fn receive_stock(&self, material: &str, quantity: u32) -> Result<StockIntake> {
        let Some(material) = self.registry.resolve(material).await? else {
            debug!(material, "refusing stock for unregistered material");
            return Ok(StockIntake::Unregistered);
        };
        self.inventory.add_stock(&material, quantity).await?;
        Ok(StockIntake::Received { material, quantity })
    }

    /// Closes the underlying connection pool.
    pub async fn close(self) {
        self.store.close().await;
    }
}
