use std::collections::VecDeque;

use crate::error::{Result, SensorError};
use crate::report::ProcessReport;
use crate::sensor::{normalize_id, Sensor};
use crate::traits::SensorKind;

/// Owns every sensor by id. Newest sensors come first in traversal order.
pub struct SensorRegistry {
    sensors: VecDeque<Sensor>,
}

impl SensorRegistry {
    pub fn new() -> Self {
        Self {
            sensors: VecDeque::new(),
        }
    }

    pub fn find(&self, id: &str) -> Option<&Sensor> {
        let id = normalize_id(id);
        self.sensors.iter().find(|s| s.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Sensor> {
        let id = normalize_id(id);
        self.sensors.iter_mut().find(|s| s.id() == id)
    }

    pub fn create(&mut self, kind: SensorKind, id: &str) -> Result<&mut Sensor> {
        if id.is_empty() {
            return Err(SensorError::EmptyId);
        }
        if self.find(id).is_some() {
            return Err(SensorError::DuplicateId(normalize_id(id).to_string()));
        }
        Ok(self.insert(kind, id))
    }

    /// Appends to an existing sensor only.
    pub fn add_reading(&mut self, id: &str, value_text: &str) -> Result<&Sensor> {
        let sensor = self
            .find_mut(id)
            .ok_or_else(|| SensorError::SensorNotFound(normalize_id(id).to_string()))?;
        sensor.add_reading(value_text);
        Ok(&*sensor)
    }

    /// Routes a tagged reading. The tag only matters when the sensor does
    /// not exist yet; an unknown tag or an empty id then drops the reading
    /// silently.
    pub fn register_by_kind_or_create(&mut self, kind_tag: &str, id: &str, value_text: &str) {
        if let Some(sensor) = self.find_mut(id) {
            sensor.add_reading(value_text);
            return;
        }
        if id.is_empty() {
            tracing::warn!("Dropping {} reading without a sensor id", kind_tag);
            return;
        }

        match SensorKind::from_tag(kind_tag) {
            Ok(kind) => self.insert(kind, id).add_reading(value_text),
            Err(e) => tracing::warn!("Dropping reading for {}: {}", normalize_id(id), e),
        }
    }

    /// Routes an untagged reading, creating a sensor of the inferred kind
    /// if needed. Never creates a vibration sensor. Returns `None` when the
    /// reading was dropped for lack of an id.
    pub fn add_loose_reading(&mut self, id: &str, value_text: &str) -> Option<&Sensor> {
        let index = match self.position(id) {
            Some(index) => index,
            None if id.is_empty() => {
                tracing::warn!("Dropping loose reading without a sensor id");
                return None;
            }
            None => {
                self.insert(SensorKind::infer(value_text), id);
                0
            }
        };
        let sensor = &mut self.sensors[index];
        sensor.add_reading(value_text);
        Some(&*sensor)
    }

    pub fn process_all(&mut self) -> Vec<ProcessReport> {
        tracing::debug!("Processing {} sensors", self.sensors.len());
        self.sensors.iter_mut().map(Sensor::process).collect()
    }

    pub fn describe_all(&self) -> Vec<String> {
        self.sensors.iter().map(Sensor::describe).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sensor> {
        self.sensors.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.sensors.iter().map(|s| s.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        let id = normalize_id(id);
        self.sensors.iter().position(|s| s.id() == id)
    }

    fn insert(&mut self, kind: SensorKind, id: &str) -> &mut Sensor {
        let sensor = Sensor::new(kind, id);
        tracing::info!("Registering sensor: {} ({:?})", sensor.id(), kind);
        self.sensors.push_front(sensor);
        &mut self.sensors[0]
    }
}

impl Default for SensorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
