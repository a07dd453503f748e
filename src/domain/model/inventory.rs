use serde::{Deserialize, Serialize};

/// Stock on hand for one material. `quantity` is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct InventoryItem {
    pub material: String,
    pub quantity: i64,
}
