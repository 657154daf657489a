//! Mean and sample standard deviation statistic.

use crate::statistic::Statistic;
use std::fmt;

/// Mean and sample standard deviation of a series.
///
/// Renders as `Mean = <mean>, Std = <std>` with Rust's default `f64`
/// formatting (shortest decimal that round-trips), which is locale-free and
/// stable across platforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanAndStd {
    /// Arithmetic mean of the series
    pub mean: f64,
    /// Sample standard deviation (N-1 denominator)
    pub std: f64,
}

impl fmt::Display for MeanAndStd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mean = {}, Std = {}", self.mean, self.std)
    }
}

/// Statistic reporting the mean and sample standard deviation of a series.
///
/// The standard deviation uses the unbiased N-1 denominator, computed in
/// floating point. A single-sample series therefore divides 0.0 by 0.0 and
/// renders `NaN`; an empty series renders `NaN` for the mean as well. Callers
/// own that boundary.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanStdStatistic;

impl MeanStdStatistic {
    fn mean_and_std(values: &[f64]) -> MeanAndStd {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt();
        MeanAndStd { mean, std }
    }
}

impl Statistic for MeanStdStatistic {
    fn summarize(&self, values: &[f64]) -> String {
        Self::mean_and_std(values).to_string()
    }
}
