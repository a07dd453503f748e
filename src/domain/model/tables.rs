use super::RecordTable;

/// Jobs. `id` is an internal row identifier; `priority` is the dense 1..N rank.
pub struct JobTable;

impl RecordTable for JobTable {
    fn table_name(&self) -> &str {
        "jobs"
    }

    fn get_create_table_sql(&self) -> &str {
        "CREATE TABLE IF NOT EXISTS jobs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            priority INTEGER NOT NULL UNIQUE,
            customer_name TEXT NOT NULL,
            description TEXT NOT NULL,
            status TEXT NOT NULL
        )"
    }
}

/// Customer contact list. `name` is a soft key enforced by the directory, not the schema.
pub struct CustomerTable;

impl RecordTable for CustomerTable {
    fn table_name(&self) -> &str {
        "customers"
    }

    fn get_create_table_sql(&self) -> &str {
        "CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            phone TEXT NOT NULL DEFAULT '',
            email TEXT NOT NULL DEFAULT ''
        )"
    }

    fn get_index_sql(&self) -> &[&str] {
        &["CREATE INDEX IF NOT EXISTS idx_customers_name ON customers(name)"]
    }
}

/// Materials in stock.
pub struct InventoryTable;

impl RecordTable for InventoryTable {
    fn table_name(&self) -> &str {
        "inventory"
    }

    fn get_create_table_sql(&self) -> &str {
        "CREATE TABLE IF NOT EXISTS inventory (
            material TEXT PRIMARY KEY,
            quantity INTEGER NOT NULL CHECK (quantity >= 0)
        )"
    }
}

/// Approved material names (prevents typos in the inventory).
pub struct RegistryTable;

impl RecordTable for RegistryTable {
    fn table_name(&self) -> &str {
        "registry"
    }

    fn get_create_table_sql(&self) -> &str {
        "CREATE TABLE IF NOT EXISTS registry (material_name TEXT PRIMARY KEY)"
    }
}

/// Every table the store owns, in creation order.
pub fn all_tables() -> Vec<Box<dyn RecordTable>> {
    vec![
        Box::new(InventoryTable),
        Box::new(RegistryTable),
        Box::new(CustomerTable),
        Box::new(JobTable),
    ]
}
