pub mod garment_type;
pub mod measurement_status;
pub mod priority;

pub use garment_type::GarmentType;
pub use measurement_status::MeasurementStatus;
pub use priority::Priority;
