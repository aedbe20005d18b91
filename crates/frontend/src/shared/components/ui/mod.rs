pub mod badge;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::{Badge, PriorityBadge, StatusBadge};
pub use input::Input;
pub use select::{options_with_all, Select};
pub use textarea::Textarea;
