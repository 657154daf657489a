//! Report kind selection for callers that pick a composition at runtime.
//!
//! Embedding applications often carry the report choice as a configuration
//! string; [`ReportKind`] parses those names and dispatches to the matching
//! report function.

use crate::measurement::Measurement;
use crate::report::{
    mean_std_html_report, mean_std_markdown_report, median_html_report, median_markdown_report,
};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors returned when parsing a report kind name.
#[derive(Error, Debug, PartialEq)]
pub enum ParseReportKindError {
    #[error(
        "unknown report kind '{0}': expected mean-std-html, median-html, mean-std-markdown or median-markdown"
    )]
    Unknown(String),
}

/// The four available report compositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Mean and sample standard deviation, rendered as HTML
    MeanStdHtml,
    /// Median, rendered as HTML
    MedianHtml,
    /// Mean and sample standard deviation, rendered as Markdown
    MeanStdMarkdown,
    /// Median, rendered as Markdown
    MedianMarkdown,
}

impl ReportKind {
    /// Generate a report of this kind for a series of measurements.
    pub fn generate(&self, measurements: &[Measurement]) -> String {
        match self {
            ReportKind::MeanStdHtml => mean_std_html_report(measurements),
            ReportKind::MedianHtml => median_html_report(measurements),
            ReportKind::MeanStdMarkdown => mean_std_markdown_report(measurements),
            ReportKind::MedianMarkdown => median_markdown_report(measurements),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportKind::MeanStdHtml => "mean-std-html",
            ReportKind::MedianHtml => "median-html",
            ReportKind::MeanStdMarkdown => "mean-std-markdown",
            ReportKind::MedianMarkdown => "median-markdown",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ReportKind {
    type Err = ParseReportKindError;

    /// Parse a report kind from its kebab-case name.
    ///
    /// # Example
    /// ```
    /// use measurement_report::ReportKind;
    ///
    /// let kind: ReportKind = "median-html".parse().unwrap();
    /// assert_eq!(kind, ReportKind::MedianHtml);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean-std-html" => Ok(ReportKind::MeanStdHtml),
            "median-html" => Ok(ReportKind::MedianHtml),
            "mean-std-markdown" => Ok(ReportKind::MeanStdMarkdown),
            "median-markdown" => Ok(ReportKind::MedianMarkdown),
            other => Err(ParseReportKindError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::measurements;

    const ALL_KINDS: [ReportKind; 4] = [
        ReportKind::MeanStdHtml,
        ReportKind::MedianHtml,
        ReportKind::MeanStdMarkdown,
        ReportKind::MedianMarkdown,
    ];

    #[test]
    fn test_parse_valid_names() {
        assert_eq!(
            "mean-std-html".parse::<ReportKind>().unwrap(),
            ReportKind::MeanStdHtml
        );
        assert_eq!(
            "median-markdown".parse::<ReportKind>().unwrap(),
            ReportKind::MedianMarkdown
        );
    }

    #[test]
    fn test_parse_invalid_name() {
        assert_eq!(
            "median-latex".parse::<ReportKind>(),
            Err(ParseReportKindError::Unknown("median-latex".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for kind in ALL_KINDS {
            assert_eq!(kind.to_string().parse::<ReportKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_generate_matches_report_functions() {
        let data = measurements(&[(10.0, 20.0), (30.0, 40.0)]);

        assert_eq!(
            ReportKind::MedianHtml.generate(&data),
            median_html_report(&data)
        );
        assert_eq!(
            ReportKind::MeanStdMarkdown.generate(&data),
            mean_std_markdown_report(&data)
        );
    }
}
