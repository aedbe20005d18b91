pub mod details;
pub mod edit;
pub mod list;
