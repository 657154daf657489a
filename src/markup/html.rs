//! HTML report markup.

use crate::markup::Markup;

/// HTML fragment markup.
///
/// Produces a fragment without an `<html>`/`<body>` wrapper; the caller embeds
/// it in a larger document. List entries carry no closing `</li>` — consumers
/// match on the exact shape of this fragment, so the tag must stay unclosed.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlMarkup;

impl Markup for HtmlMarkup {
    fn begin_list(&self) -> &'static str {
        "<ul>"
    }

    fn end_list(&self) -> &'static str {
        "</ul>"
    }

    fn format_caption(&self, caption: &str) -> String {
        format!("<h1>{caption}</h1>")
    }

    fn format_item(&self, label: &str, value: &str) -> String {
        format!("<li><b>{label}</b>: {value}")
    }
}
