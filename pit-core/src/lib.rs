pub mod calculations;
pub mod models;

pub use models::*;
