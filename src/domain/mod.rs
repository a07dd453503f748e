pub mod model;
pub mod text;

pub use text::{matches_filter, title_case};
