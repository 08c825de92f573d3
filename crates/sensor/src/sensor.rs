use crate::reading_list::ReadingList;
use crate::report::ProcessReport;
use crate::traits::{Reading, SensorKind};

/// Longest identifier a sensor keeps; longer ids are truncated.
pub const MAX_ID_LEN: usize = 49;

/// Truncates an identifier to [`MAX_ID_LEN`] characters.
pub fn normalize_id(id: &str) -> &str {
    match id.char_indices().nth(MAX_ID_LEN) {
        Some((cut, _)) => &id[..cut],
        None => id,
    }
}

/// Per-kind reading storage. The variant decides both how incoming text
/// is converted and what `process` does.
#[derive(Debug, Clone, PartialEq)]
pub enum Readings {
    Temperature(ReadingList<f32>),
    Pressure(ReadingList<i32>),
    Vibration(ReadingList<i32>),
}

impl Readings {
    fn for_kind(kind: SensorKind) -> Self {
        match kind {
            SensorKind::Temperature => Readings::Temperature(ReadingList::new()),
            SensorKind::Pressure => Readings::Pressure(ReadingList::new()),
            SensorKind::Vibration => Readings::Vibration(ReadingList::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sensor {
    id: String,
    readings: Readings,
}

impl Sensor {
    /// The registry guarantees `id` is non-empty.
    pub(crate) fn new(kind: SensorKind, id: &str) -> Self {
        Self {
            id: normalize_id(id).to_string(),
            readings: Readings::for_kind(kind),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> SensorKind {
        match self.readings {
            Readings::Temperature(_) => SensorKind::Temperature,
            Readings::Pressure(_) => SensorKind::Pressure,
            Readings::Vibration(_) => SensorKind::Vibration,
        }
    }

    pub fn readings(&self) -> &Readings {
        &self.readings
    }

    /// Parses `text` leniently and appends it. Garbage becomes zero.
    pub fn add_reading(&mut self, text: &str) {
        match &mut self.readings {
            Readings::Temperature(list) => push_text(list, text),
            Readings::Pressure(list) | Readings::Vibration(list) => push_text(list, text),
        }
        tracing::debug!("{}: reading {:?} appended", self.id, text);
    }

    /// Temperature sensors drop their lowest reading; pressure and
    /// vibration sensors report their average and keep every reading.
    pub fn process(&mut self) -> ProcessReport {
        let id = self.id.clone();
        if self.is_empty() {
            return ProcessReport::NoReadings { id };
        }

        match &mut self.readings {
            Readings::Temperature(list) => {
                list.remove_minimum();
                ProcessReport::MinimumDiscarded { id }
            }
            Readings::Pressure(list) | Readings::Vibration(list) => ProcessReport::Average {
                id,
                value: list.average(),
            },
        }
    }

    pub fn describe(&self) -> String {
        format!("{}: {}", self.id, self.kind())
    }

    pub fn len(&self) -> usize {
        match &self.readings {
            Readings::Temperature(list) => list.len(),
            Readings::Pressure(list) | Readings::Vibration(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn average(&self) -> f64 {
        match &self.readings {
            Readings::Temperature(list) => list.average(),
            Readings::Pressure(list) | Readings::Vibration(list) => list.average(),
        }
    }
}

fn push_text<T: Reading>(list: &mut ReadingList<T>, text: &str) {
    list.append(T::from_text(text));
}
