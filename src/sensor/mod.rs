pub mod sim;

/// One temperature/humidity measurement.
///
/// Both channels come from a single bus transaction, so they are either both
/// present or both the failure sentinel. A reading is built fresh for every
/// request and dropped once it has been rendered; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Degrees Celsius, or `None` when the transaction failed.
    pub temperature: Option<f32>,
    /// Relative humidity in percent, or `None` when the transaction failed.
    pub humidity: Option<f32>,
}

impl Reading {
    /// Builds a reading from raw channel values. A not-a-number value on
    /// either channel invalidates both, keeping the payload shape uniform.
    pub fn new(temperature: f32, humidity: f32) -> Self {
        if temperature.is_nan() || humidity.is_nan() {
            Self::failed()
        } else {
            Self {
                temperature: Some(temperature),
                humidity: Some(humidity),
            }
        }
    }

    pub fn failed() -> Self {
        Self {
            temperature: None,
            humidity: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.temperature.is_none()
    }
}

/// Access to the physical sensor.
///
/// `read` performs one blocking bus transaction, bounded by the bus protocol
/// timeout. It never fails loudly: a bus error or implausible value comes
/// back as `Reading::failed()`. Implementations must not retry — the next
/// request makes an independent attempt.
pub trait SensorReader: Send {
    fn read(&mut self) -> Reading;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_channels_are_kept() {
        let reading = Reading::new(21.5, 47.3);

        assert_eq!(reading.temperature, Some(21.5));
        assert_eq!(reading.humidity, Some(47.3));
        assert!(!reading.is_failed());
    }

    #[test]
    fn nan_on_either_channel_fails_both() {
        assert_eq!(Reading::new(f32::NAN, 47.3), Reading::failed());
        assert_eq!(Reading::new(21.5, f32::NAN), Reading::failed());
        assert_eq!(Reading::new(f32::NAN, f32::NAN), Reading::failed());
    }

    #[test]
    fn failed_reading_has_no_channels() {
        let reading = Reading::failed();

        assert_eq!(reading.temperature, None);
        assert_eq!(reading.humidity, None);
        assert!(reading.is_failed());
    }
}
