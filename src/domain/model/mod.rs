//! Record types and table definitions for the four record sets.

pub mod customer;
pub mod inventory;
pub mod job;
pub mod tables;

pub use customer::Customer;
pub use inventory::InventoryItem;
pub use job::Job;
pub use tables::{all_tables, CustomerTable, InventoryTable, JobTable, RegistryTable};

/// Contract for a table owned by the record store.
///
/// The storage gateway walks every `RecordTable` on startup and executes its
/// statements, so each statement must be idempotent (`IF NOT EXISTS`).
pub trait RecordTable: Send + Sync {
    /// Returns the name of the database table.
    fn table_name(&self) -> &str;

    /// Returns the SQL CREATE TABLE statement for this table.
    fn get_create_table_sql(&self) -> &str;

    /// Secondary indexes created after the table.
    fn get_index_sql(&self) -> &[&str] {
        &[]
    }
}
