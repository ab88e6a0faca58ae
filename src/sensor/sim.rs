use std::time::{SystemTime, UNIX_EPOCH};

use super::{Reading, SensorReader};

/// Stand-in for the sensor bus on hosts without one attached.
///
/// Produces a slow wobble around fixed base values so consecutive requests
/// see slightly different numbers. Real hardware plugs in by implementing
/// `SensorReader` over the actual bus transaction.
pub struct SimulatedSensor {
    temperature: f32,
    humidity: f32,
}

impl SimulatedSensor {
    pub fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature,
            humidity,
        }
    }
}

impl Default for SimulatedSensor {
    fn default() -> Self {
        Self::new(21.0, 45.0)
    }
}

impl SensorReader for SimulatedSensor {
    fn read(&mut self) -> Reading {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        // Triangle wave with a two minute period, +/- 1 degree.
        let phase = (seconds % 120) as f32 / 120.0;
        let wobble = if phase < 0.5 {
            4.0 * phase - 1.0
        } else {
            3.0 - 4.0 * phase
        };

        Reading::new(self.temperature + wobble, self.humidity + 2.0 * wobble)
    }
}
