use crate::measurement::Measurement;

/// Build a measurement series from (temperature, humidity) pairs.
///
/// Tests can state their input data without repeating field names.
pub fn measurements(pairs: &[(f64, f64)]) -> Vec<Measurement> {
    pairs
        .iter()
        .map(|&(temperature, humidity)| Measurement::new(temperature, humidity))
        .collect()
}
