use serde::{Deserialize, Serialize};

/// Outcome of one processing step on a sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProcessReport {
    NoReadings { id: String },
    MinimumDiscarded { id: String },
    Average { id: String, value: f64 },
}

impl ProcessReport {
    pub fn id(&self) -> &str {
        match self {
            ProcessReport::NoReadings { id }
            | ProcessReport::MinimumDiscarded { id }
            | ProcessReport::Average { id, .. } => id,
        }
    }
}

impl std::fmt::Display for ProcessReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessReport::NoReadings { id } => write!(f, "{}: no readings", id),
            ProcessReport::MinimumDiscarded { id } => write!(f, "{}: minimum discarded", id),
            ProcessReport::Average { id, value } => write!(f, "{}: average {:.2}", id, value),
        }
    }
}
