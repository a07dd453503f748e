pub mod command;
pub mod handlers;
pub mod types;

pub use command::{Command, USAGE};
pub use handlers::execute;
pub use types::CliResponse;
