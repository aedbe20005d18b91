pub mod list_filter;
