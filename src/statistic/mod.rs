//! Summary statistics for measurement series.
//!
//! This module provides a trait for reducing a series of samples to a
//! formatted summary string, with implementations for mean + sample standard
//! deviation and for the median.

pub mod mean_std;
pub mod median;

pub use mean_std::{MeanAndStd, MeanStdStatistic};
pub use median::MedianStatistic;

/// Trait for reducing a series of samples into a formatted summary string.
///
/// Implementations are pure: they hold no mutable state, and the same input
/// always renders the same string.
pub trait Statistic: Send + Sync {
    /// Summarize a series of samples.
    ///
    /// # Arguments
    /// * `values` - The samples to summarize, in input order
    ///
    /// # Returns
    /// The formatted summary value
    fn summarize(&self, values: &[f64]) -> String;
}
