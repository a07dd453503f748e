use serde::{Deserialize, Serialize};

/// A job on the board. `priority` is its 1-based rank; the board keeps priorities dense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub priority: i64,
    pub customer_name: String,
    pub description: String,
    pub status: String,
}
