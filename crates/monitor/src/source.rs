use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sensormon_sensor::SensorKind;

/// A reading as it would arrive from a device line: all text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReading {
    pub kind_tag: String,
    pub id: String,
    pub value: String,
}

/// Generates readings for a fixed pool of simulated devices.
pub struct SimulatedSource {
    rng: StdRng,
    devices: Vec<(SensorKind, String)>,
}

impl SimulatedSource {
    /// `devices` simulated sensors per kind.
    pub fn new(seed: Option<u64>, devices: usize) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let devices = SensorKind::ALL
            .into_iter()
            .flat_map(|kind| (1..=devices.max(1)).map(move |n| (kind, format!("{}-{}", kind.tag(), n))))
            .collect();

        Self { rng, devices }
    }

    pub fn next_reading(&mut self) -> RawReading {
        let index = self.rng.gen_range(0..self.devices.len());
        let (kind, id) = &self.devices[index];

        let value = match kind {
            SensorKind::Temperature => format!("{:.1}", self.rng.gen_range(15.0..35.0)),
            SensorKind::Pressure => self.rng.gen_range(950..=1050).to_string(),
            SensorKind::Vibration => self.rng.gen_range(0..=100).to_string(),
        };

        RawReading {
            kind_tag: kind.tag().to_string(),
            id: id.clone(),
            value,
        }
    }
}

impl Iterator for SimulatedSource {
    type Item = RawReading;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_reading())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensormon_sensor::SensorRegistry;

    #[test]
    fn test_seeded_source_is_reproducible() {
        let a: Vec<_> = SimulatedSource::new(Some(42), 2).take(20).collect();
        let b: Vec<_> = SimulatedSource::new(Some(42), 2).take(20).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_values_match_their_kind() {
        for reading in SimulatedSource::new(Some(1), 3).take(200) {
            let kind = SensorKind::from_tag(&reading.kind_tag).unwrap();
            assert!(reading.id.starts_with(kind.tag()));
            match kind {
                SensorKind::Temperature => {
                    let v: f64 = reading.value.parse().unwrap();
                    assert!(reading.value.contains('.'));
                    assert!((15.0..=35.0).contains(&v));
                }
                SensorKind::Pressure => {
                    let v: i32 = reading.value.parse().unwrap();
                    assert!((950..=1050).contains(&v));
                }
                SensorKind::Vibration => {
                    let v: i32 = reading.value.parse().unwrap();
                    assert!((0..=100).contains(&v));
                }
            }
        }
    }

    #[test]
    fn test_feeds_registry() {
        let mut registry = SensorRegistry::new();
        for r in SimulatedSource::new(Some(9), 1).take(50) {
            registry.register_by_kind_or_create(&r.kind_tag, &r.id, &r.value);
        }
        assert!(registry.len() <= 3);
        for sensor in registry.iter() {
            assert!(sensor.id().starts_with(sensor.kind().tag()));
        }
    }
}
