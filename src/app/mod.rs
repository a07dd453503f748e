pub mod customers;
pub mod inventory;
pub mod jobs;
pub mod record_service;
pub mod registry;
