mod progress;
mod step_customer;
mod step_measurements;
mod step_type;
mod view;

pub use view::NewMeasurementWizard;
