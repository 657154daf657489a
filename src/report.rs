//! Report assembly from markup and statistic strategies.
//!
//! [`ReportMaker`] binds a caption, a [`Markup`] and a [`Statistic`] at
//! construction; the four public report functions below are the fixed
//! compositions callers normally use.

use crate::markup::{HtmlMarkup, MarkdownMarkup, Markup};
use crate::measurement::Measurement;
use crate::statistic::{MeanStdStatistic, MedianStatistic, Statistic};

/// Composes a caption, a markup format and a summary statistic into a report
/// generator.
///
/// The strategies are bound at construction and immutable thereafter.
/// Generating a report is a pure computation: no I/O, no side effects, the
/// same input always yields the same string.
pub struct ReportMaker<M, S> {
    caption: String,
    markup: M,
    statistic: S,
}

impl<M: Markup, S: Statistic> ReportMaker<M, S> {
    /// Create a report maker from a caption and the two strategies.
    pub fn new(caption: impl Into<String>, markup: M, statistic: S) -> Self {
        Self {
            caption: caption.into(),
            markup,
            statistic,
        }
    }

    /// Generate the report for a series of measurements.
    ///
    /// Appends, in order: the formatted caption, the list opening, one entry
    /// summarizing the temperatures, one entry summarizing the humidities,
    /// and the list closing.
    pub fn make_report(&self, measurements: &[Measurement]) -> String {
        let temperatures: Vec<f64> = measurements.iter().map(|m| m.temperature).collect();
        let humidities: Vec<f64> = measurements.iter().map(|m| m.humidity).collect();

        let mut report = String::new();
        report.push_str(&self.markup.format_caption(&self.caption));
        report.push_str(self.markup.begin_list());
        report.push_str(
            &self
                .markup
                .format_item("Temperature", &self.statistic.summarize(&temperatures)),
        );
        report.push_str(
            &self
                .markup
                .format_item("Humidity", &self.statistic.summarize(&humidities)),
        );
        report.push_str(self.markup.end_list());
        report
    }
}

/// Mean and sample standard deviation of each series, as an HTML fragment.
pub fn mean_std_html_report(measurements: &[Measurement]) -> String {
    ReportMaker::new("Mean and Std", HtmlMarkup, MeanStdStatistic).make_report(measurements)
}

/// Median of each series, as an HTML fragment.
///
/// # Example
/// ```
/// use measurement_report::{Measurement, median_html_report};
///
/// let measurements = [Measurement::new(10.0, 20.0), Measurement::new(30.0, 40.0)];
/// assert_eq!(
///     median_html_report(&measurements),
///     "<h1>Median</h1><ul><li><b>Temperature</b>: 20<li><b>Humidity</b>: 30</ul>"
/// );
/// ```
pub fn median_html_report(measurements: &[Measurement]) -> String {
    ReportMaker::new("Median", HtmlMarkup, MedianStatistic).make_report(measurements)
}

/// Mean and sample standard deviation of each series, as a Markdown fragment.
pub fn mean_std_markdown_report(measurements: &[Measurement]) -> String {
    ReportMaker::new("Mean and Std", MarkdownMarkup, MeanStdStatistic).make_report(measurements)
}

/// Median of each series, as a Markdown fragment.
pub fn median_markdown_report(measurements: &[Measurement]) -> String {
    ReportMaker::new("Median", MarkdownMarkup, MedianStatistic).make_report(measurements)
}
