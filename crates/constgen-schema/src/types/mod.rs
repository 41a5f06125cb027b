pub mod common;
pub mod definition;
pub mod error;
pub mod schema;
