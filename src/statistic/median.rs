//! Median statistic.

use crate::statistic::Statistic;

/// Statistic reporting the median of a series.
///
/// The series is copied and sorted ascending before the middle element is
/// read. For an even number of samples the median is the average of the two
/// middle samples. An empty series panics on the middle-element lookup;
/// callers own that boundary.
#[derive(Debug, Default, Clone, Copy)]
pub struct MedianStatistic;

impl Statistic for MedianStatistic {
    fn summarize(&self, values: &[f64]) -> String {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };
        median.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_count_takes_middle_element() {
        let statistic = MedianStatistic;
        assert_eq!(statistic.summarize(&[1.0, 2.0, 3.0]), "2");
    }

    #[test]
    fn test_even_count_averages_middle_elements() {
        let statistic = MedianStatistic;
        assert_eq!(statistic.summarize(&[1.0, 2.0, 3.0, 4.0]), "2.5");
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let statistic = MedianStatistic;
        assert_eq!(statistic.summarize(&[3.0, 1.0, 2.0]), "2");
        assert_eq!(statistic.summarize(&[4.0, 1.0, 3.0, 2.0]), "2.5");
    }

    #[test]
    fn test_single_sample_is_its_own_median() {
        let statistic = MedianStatistic;
        assert_eq!(statistic.summarize(&[7.5]), "7.5");
    }

    #[test]
    #[should_panic]
    fn test_empty_series_panics() {
        MedianStatistic.summarize(&[]);
    }
}
