pub mod a001_customer;
pub mod a002_measurement;
