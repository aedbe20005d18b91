use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Статус жизненного цикла мерки (не связан с шагами мастера)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementStatus {
    #[default]
    Draft,
    Confirmed,
    Completed,
}

impl MeasurementStatus {
    pub const ALL: [MeasurementStatus; 3] = [
        MeasurementStatus::Draft,
        MeasurementStatus::Confirmed,
        MeasurementStatus::Completed,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MeasurementStatus::Draft => "draft",
            MeasurementStatus::Confirmed => "confirmed",
            MeasurementStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeasurementStatus::Draft => "Draft",
            MeasurementStatus::Confirmed => "Confirmed",
            MeasurementStatus::Completed => "Completed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

impl fmt::Display for MeasurementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MeasurementStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown measurement status: {}", s))
    }
}
