use serde::{Deserialize, Serialize};

use crate::error::SensorError;
use crate::parse::{parse_float, parse_int};

/// Numeric type a sensor stores its readings as.
pub trait Reading: Copy + PartialOrd + Into<f64> + std::fmt::Debug {
    /// Converts raw text into a reading. Never fails: unparseable text is zero.
    fn from_text(text: &str) -> Self;
}

impl Reading for f32 {
    fn from_text(text: &str) -> Self {
        parse_float(text) as f32
    }
}

impl Reading for i32 {
    fn from_text(text: &str) -> Self {
        parse_int(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Temperature,
    Pressure,
    Vibration,
}

impl SensorKind {
    pub const ALL: [SensorKind; 3] = [
        SensorKind::Temperature,
        SensorKind::Pressure,
        SensorKind::Vibration,
    ];

    /// Kind tag used by tagged reading lines.
    pub fn tag(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "TEMP",
            SensorKind::Pressure => "PRES",
            SensorKind::Vibration => "VIBR",
        }
    }

    /// Exact, case-sensitive match against the known kind tags.
    pub fn from_tag(tag: &str) -> Result<Self, SensorError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| SensorError::UnrecognizedKind(tag.to_string()))
    }

    /// Kind guessed for a reading that arrives without a tag.
    /// A decimal point means temperature; everything else is pressure.
    pub fn infer(value_text: &str) -> Self {
        if value_text.contains('.') {
            SensorKind::Temperature
        } else {
            SensorKind::Pressure
        }
    }
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SensorKind::Temperature => write!(f, "temp"),
            SensorKind::Pressure => write!(f, "pres"),
            SensorKind::Vibration => write!(f, "vibr"),
        }
    }
}

impl std::str::FromStr for SensorKind {
    type Err = SensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "temp" | "temperature" => Ok(SensorKind::Temperature),
            "pres" | "pressure" => Ok(SensorKind::Pressure),
            "vibr" | "vibration" => Ok(SensorKind::Vibration),
            _ => Err(SensorError::UnrecognizedKind(s.to_string())),
        }
    }
}
