pub mod store;

pub use store::{use_store, AppStore};
