pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::customers::CustomerDirectory;
pub use app::inventory::InventoryLedger;
pub use app::jobs::JobBoard;
pub use app::record_service::{RecordService, StockIntake};
pub use app::registry::MaterialRegistry;
pub use domain::model::{Customer, InventoryItem, Job};
pub use domain::title_case;
pub use storage::Store;
