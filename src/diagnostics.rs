//! Fancy diagnostics support using `ariadne`.
//!
//! Parse warnings carry the 1-based line they refer to; this module
//! resolves that line to its byte span in the source text and renders a
//! styled [`ariadne::Report`] against it, without touching the warning
//! types themselves.

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::chart::parse::ParseWarning;

/// Simple source container that holds the chart name and source text.
pub struct SimpleSource<'a> {
    /// Name of the chart source.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Creates a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Gets the source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Gets the chart source name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Byte span of a 1-based line in `text`, without its line terminator.
/// Lines past the end of the text resolve to an empty span at the end.
fn line_span(text: &str, line: usize) -> Range<usize> {
    let mut start = 0;
    for (index, raw_line) in text.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let content = raw_line.trim_end_matches(['\n', '\r']);
            return start..start + content.len();
        }
        start += raw_line.len();
    }
    start..start
}

/// Trait for converting line-positioned warnings to [`ariadne::Report`].
pub trait ToAriadne {
    /// Converts the warning to an ariadne report against `src`.
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)>;
}

impl ToAriadne for ParseWarning {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        let range = line_span(src.text(), self.line());
        build_report(
            src,
            ReportKind::Warning,
            range,
            "chart parse warning",
            self,
            Color::Yellow,
        )
    }
}

/// Helper to build a styled ariadne [`Report`] consistently.
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    range: Range<usize>,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> Report<'a, (String, Range<usize>)> {
    let filename = src.name().to_string();
    Report::build(kind, (filename.clone(), range.clone()))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(color),
        )
        .finish()
}

/// Convenience method: batch render a [`ParseWarning`] list to stdout.
pub fn emit_chart_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a ParseWarning>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for warning in warnings {
        let report = warning.to_report(&simple);
        let _ = report.print((name.to_string(), ariadne_source.clone()));
    }
}

/// Collects [`Report`]s for a warning list without printing.
///
/// Useful in tests to verify diagnostics can be generated while keeping
/// test output clean.
#[must_use]
pub fn collect_chart_reports<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a ParseWarning>,
) -> Vec<Report<'a, (String, Range<usize>)>> {
    let simple = SimpleSource::new(name, source);
    warnings
        .into_iter()
        .map(|warning| warning.to_report(&simple))
        .collect()
}
