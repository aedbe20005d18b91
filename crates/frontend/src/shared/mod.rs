pub mod components;
pub mod config;
pub mod data;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod modal;
