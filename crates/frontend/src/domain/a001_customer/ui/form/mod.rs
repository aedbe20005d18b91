mod view;
mod view_model;

pub use view::{CustomerForm, NewCustomerPage};
pub use view_model::CustomerFormViewModel;
