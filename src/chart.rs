//! The parser module of ISBM chart (.isbm) files.
//!
//! This module consists of two phases: line tokenizing and note parsing.
//!
//! [`lex`] provides the field [`Syntax`](lex::Syntax) of the format and a
//! tokenizer that splits one physical line into classified fields. [`parse`]
//! folds the tokenized lines into a [`Beatmap`](model::Beatmap), converting
//! each note declaration once its argument set is complete.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `&str` to input).
//! - Never fail on chart text: malformed directives and note declarations
//!   that never complete their argument set are dropped, and everything
//!   recoverable is reported as a [`ParseWarning`](parse::ParseWarning) in
//!   the output instead of an error.
//! - Keep the permissive quirks of the original game client, including
//!   argument fan-out to every note declared on the same physical line.

pub mod lex;
pub mod model;
pub mod parse;

use self::{lex::Syntax, model::Beatmap, parse::ParseWarning};

/// Output of parsing one ISBM chart source.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct ChartOutput {
    /// The parsed beatmap.
    pub beatmap: Beatmap,
    /// Recoverable warnings that occurred during parsing.
    pub warnings: Vec<ParseWarning>,
}

/// Parses an ISBM chart source with the default [`Syntax`].
///
/// This function provides a convenient way to parse a chart in one step.
/// The source is the full text of one chart file; reading it from disk is
/// the catalog's job (see [`crate::catalog::BeatmapCatalog::load`]).
///
/// # Example
///
/// ```
/// use isbm_rs::chart::{ChartOutput, parse_chart};
///
/// let source = "beatname;Tutorial\nnote;4;0;0;0;100.0;200.0;0.0";
/// let ChartOutput { beatmap, warnings } = parse_chart(source);
/// assert_eq!(beatmap.name, "Tutorial");
/// assert_eq!(beatmap.notes.len(), 1);
/// assert!(warnings.is_empty());
/// ```
pub fn parse_chart(source: &str) -> ChartOutput {
    parse_chart_with_syntax(source, &Syntax::default())
}

/// Parses an ISBM chart source with a custom [`Syntax`].
///
/// A step of [`parse_chart`]. Use this when the chart set was authored with
/// non-default field constants.
pub fn parse_chart_with_syntax(source: &str, syntax: &Syntax) -> ChartOutput {
    parse::parse(source, syntax)
}
