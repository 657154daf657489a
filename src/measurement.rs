//! Sensor measurement data structure.

/// One observation from a temperature/humidity sensor.
///
/// Values are in standard SI units:
/// - Temperature in Celsius
/// - Relative humidity in percent (0-100)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity in percent (0-100)
    pub humidity: f64,
}

impl Measurement {
    /// Create a measurement from a temperature/humidity pair.
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
        }
    }
}
