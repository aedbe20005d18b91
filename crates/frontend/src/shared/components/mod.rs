pub mod card_animated;
pub mod date_input;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod ui;

pub use card_animated::CardAnimated;
pub use date_input::DateInput;
pub use filter_panel::FilterPanel;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::{StatCard, StatTone};
