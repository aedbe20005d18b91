pub mod common;
pub mod u101_new_measurement;
