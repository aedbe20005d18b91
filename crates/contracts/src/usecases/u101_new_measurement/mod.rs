pub mod wizard;

pub use wizard::{WizardError, WizardSession, WizardStep};

use crate::usecases::common::UseCaseMetadata;

pub struct NewMeasurement;

impl UseCaseMetadata for NewMeasurement {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "new_measurement"
    }

    fn display_name() -> &'static str {
        "New Measurement"
    }

    fn description() -> &'static str {
        "Record measurements for a customer in three steps"
    }
}
