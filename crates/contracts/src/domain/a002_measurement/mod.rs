pub mod aggregate;
pub mod repository;
pub mod schema;
