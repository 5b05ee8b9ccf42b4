//! Parsing tokenized chart lines into a [`Beatmap`].
//!
//! The parser is a fold over the 1-indexed physical lines of one source.
//! All mutable state lives in an explicit [`ParserState`] threaded through
//! the loop: the open note builders, the active default tempo, the running
//! cumulative position and the one-shot name/tempo flags. A note converts
//! the moment its argument set completes, with whatever tempo is active at
//! that point; a later tempo directive never applies retroactively.
//!
//! Parsing never fails. Note declarations that never complete their
//! argument set vanish without a trace, and a completed declaration with
//! unparsable data is dropped with a [`ParseWarning`]. This asymmetry is a
//! documented property of the format, not an accident to fix.

use std::str::FromStr;

use thiserror::Error;

use super::{
    ChartOutput,
    lex::{Directive, Syntax, TokenKind, tokenize_line},
    model::{Beatmap, Note, NoteButton, NoteKind},
};

/// Number of arguments a note declaration must accumulate to convert.
pub const NOTE_ARGC: usize = 7;

/// Default tempo applied to notes declared before any tempo directive.
pub const DEFAULT_TEMPO: u32 = 30;

/// A recoverable problem found while parsing a chart source.
///
/// Warnings are collected into [`ChartOutput`]; none of them aborts the
/// parse. Every variant carries the 1-based source line it came from.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ParseWarning {
    /// A note was converted without its full argument set. The parser
    /// itself never does this; it is the contract error of
    /// [`NoteBuilder::convert`].
    #[error("note at line {line} has {got} of {NOTE_ARGC} required arguments")]
    InsufficientArguments {
        /// Declaration line of the note.
        line: usize,
        /// How many arguments had been collected.
        got: usize,
    },
    /// A numeric note argument could not be parsed; the note was dropped.
    #[error("invalid {field} `{literal}` for note at line {line}")]
    InvalidNumericLiteral {
        /// Declaration line of the note.
        line: usize,
        /// Which argument failed to parse.
        field: &'static str,
        /// The offending argument text.
        literal: String,
    },
    /// A kind/button ordinal fell outside the defined range; the note was
    /// dropped.
    #[error("{field} ordinal {ordinal} out of range for note at line {line}")]
    InvalidEnumOrdinal {
        /// Declaration line of the note.
        line: usize,
        /// Which enum the ordinal was for.
        field: &'static str,
        /// The offending ordinal.
        ordinal: u32,
    },
    /// A tempo directive's value was not an integer; the previous default
    /// tempo stays active.
    #[error("invalid tempo `{literal}` at line {line}")]
    InvalidTempo {
        /// Line of the tempo directive.
        line: usize,
        /// The offending value text.
        literal: String,
    },
}

impl ParseWarning {
    /// The 1-based source line the warning refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InsufficientArguments { line, .. }
            | Self::InvalidNumericLiteral { line, .. }
            | Self::InvalidEnumOrdinal { line, .. }
            | Self::InvalidTempo { line, .. } => *line,
        }
    }
}

pub(crate) type Result<T> = core::result::Result<T, ParseWarning>;

/// A note declaration accumulating raw arguments during parsing.
///
/// Exists only while its source is being parsed: it is converted into a
/// [`Note`] as soon as [`NOTE_ARGC`] arguments have arrived, or dropped
/// when the source ends first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteBuilder {
    line: usize,
    args: Vec<String>,
}

impl NoteBuilder {
    /// Creates an empty builder for a note declared on `line`.
    #[must_use]
    pub const fn new(line: usize) -> Self {
        Self {
            line,
            args: Vec::new(),
        }
    }

    /// The 1-based line the note was declared on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Appends one raw argument.
    pub fn push_arg(&mut self, arg: String) {
        self.args.push(arg);
    }

    /// Whether the full argument set has arrived.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.args.len() >= NOTE_ARGC
    }

    /// Converts the collected arguments into a [`Note`].
    ///
    /// `default_tempo` is snapshotted into the note; `previous_position` is
    /// the cumulative position of the previously converted note in the same
    /// beatmap (`0.0` for the first).
    ///
    /// # Errors
    ///
    /// [`ParseWarning::InsufficientArguments`] when fewer than [`NOTE_ARGC`]
    /// arguments were collected, [`ParseWarning::InvalidNumericLiteral`] and
    /// [`ParseWarning::InvalidEnumOrdinal`] when a field fails to convert.
    /// No argument index is ever read past the collected set.
    pub fn convert(self, default_tempo: u32, previous_position: f32) -> Result<Note> {
        let Self { line, args } = self;
        let [divisor, offset, kind, button, shadow_x, shadow_y, angle] = args.as_slice() else {
            return Err(ParseWarning::InsufficientArguments {
                line,
                got: args.len(),
            });
        };

        let divisor: f32 = parse_field(divisor, "divisor", line)?;
        let fraction = 1.0 / divisor;
        let position = fraction + previous_position;
        let kind_ordinal: u32 = parse_field(kind, "kind", line)?;
        let button_ordinal: u32 = parse_field(button, "button", line)?;

        Ok(Note {
            line,
            fraction,
            position,
            bpm_override: Some(default_tempo),
            offset_ms: parse_field(offset, "offset", line)?,
            shadow_x: parse_field(shadow_x, "shadow x", line)?,
            shadow_y: parse_field(shadow_y, "shadow y", line)?,
            angle: parse_field(angle, "angle", line)?,
            target_beat: position,
            rest: false,
            rest_size: 1,
            kind: NoteKind::from_ordinal(kind_ordinal).ok_or_else(|| {
                ParseWarning::InvalidEnumOrdinal {
                    line,
                    field: "kind",
                    ordinal: kind_ordinal,
                }
            })?,
            button: NoteButton::from_ordinal(button_ordinal).ok_or_else(|| {
                ParseWarning::InvalidEnumOrdinal {
                    line,
                    field: "button",
                    ordinal: button_ordinal,
                }
            })?,
        })
    }
}

fn parse_field<T: FromStr>(literal: &str, field: &'static str, line: usize) -> Result<T> {
    literal
        .parse()
        .map_err(|_| ParseWarning::InvalidNumericLiteral {
            line,
            field,
            literal: literal.to_owned(),
        })
}

/// Accumulator threaded through the line fold.
#[derive(Debug, Default)]
struct ParserState {
    builders: Vec<NoteBuilder>,
    default_tempo: u32,
    name: String,
    notes: Vec<Note>,
    position: f32,
    warnings: Vec<ParseWarning>,
}

impl ParserState {
    /// Fans one argument out to every open builder declared on `line`,
    /// then converts the builders that just completed, in declaration
    /// order.
    fn push_argument(&mut self, line: usize, arg: &str) {
        for builder in self.builders.iter_mut().filter(|b| b.line() == line) {
            builder.push_arg(arg.to_owned());
        }

        let mut index = 0;
        while let Some(open) = self.builders.get(index) {
            if open.is_complete() {
                let builder = self.builders.remove(index);
                match builder.convert(self.default_tempo, self.position) {
                    Ok(note) => {
                        self.position = note.position;
                        self.notes.push(note);
                    }
                    Err(warning) => self.warnings.push(warning),
                }
            } else {
                index += 1;
            }
        }
    }
}

/// Parses one chart source into a beatmap, collecting warnings.
///
/// Prefer the [`parse_chart`](super::parse_chart) /
/// [`parse_chart_with_syntax`](super::parse_chart_with_syntax) entry points.
pub(super) fn parse(source: &str, syntax: &Syntax) -> ChartOutput {
    let mut state = ParserState {
        default_tempo: DEFAULT_TEMPO,
        ..ParserState::default()
    };

    for (index, raw_line) in source.lines().enumerate() {
        let line = index + 1;
        let Some(tokens) = tokenize_line(raw_line, syntax) else {
            continue;
        };

        // One-shot flags armed by directives, consumed at end of line.
        let mut name_pending = false;
        let mut tempo_pending = false;

        for token in &tokens {
            match token.kind {
                TokenKind::Directive(Directive::Note) => {
                    state.builders.push(NoteBuilder::new(line));
                }
                TokenKind::Directive(Directive::Name) => name_pending = true,
                TokenKind::Directive(Directive::Tempo) => tempo_pending = true,
                TokenKind::Argument => state.push_argument(line, &token.text),
            }
        }

        let trailing = tokens.last().map(|token| token.text.as_str()).unwrap_or("");
        if name_pending {
            state.name = expand_camel_case(trailing);
        }
        if tempo_pending {
            match trailing.parse() {
                Ok(tempo) => state.default_tempo = tempo,
                Err(_) => state.warnings.push(ParseWarning::InvalidTempo {
                    line,
                    literal: trailing.to_owned(),
                }),
            }
        }
    }

    // Builders that never completed are dropped here, silently.
    ChartOutput {
        beatmap: Beatmap {
            name: state.name,
            notes: state.notes,
        },
        warnings: state.warnings,
    }
}

/// Inserts a space before every internal uppercase letter, turning a camel
/// case name token into its display form (`BossFight` into `Boss Fight`).
fn expand_camel_case(raw: &str) -> String {
    let mut expanded = String::with_capacity(raw.len());
    for (index, c) in raw.chars().enumerate() {
        if c.is_uppercase() && index != 0 {
            expanded.push(' ');
        }
        expanded.push(c);
    }
    expanded
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn complete_builder(line: usize, args: [&str; NOTE_ARGC]) -> NoteBuilder {
        let mut builder = NoteBuilder::new(line);
        for arg in args {
            builder.push_arg(arg.to_owned());
        }
        builder
    }

    #[test]
    fn converts_the_documented_example() {
        let builder = complete_builder(3, ["4", "0", "0", "0", "100.0", "200.0", "0.0"]);
        let note = builder.convert(120, 0.0).unwrap();
        assert_eq!(note.line, 3);
        assert_eq!(note.fraction, 0.25);
        assert_eq!(note.position, 0.25);
        assert_eq!(note.offset_ms, 0);
        assert_eq!(note.kind, NoteKind::Button);
        assert_eq!(note.button, NoteButton::A);
        assert_eq!(note.shadow_x, 100.0);
        assert_eq!(note.shadow_y, 200.0);
        assert_eq!(note.angle, 0.0);
        assert_eq!(note.bpm_override, Some(120));
        assert_eq!(note.target_beat, 0.25);
        assert!(!note.rest);
        assert_eq!(note.rest_size, 1);
    }

    #[test]
    fn convert_accumulates_previous_position() {
        let builder = complete_builder(4, ["2", "0", "1", "14", "0.0", "0.0", "90.0"]);
        let note = builder.convert(60, 1.25).unwrap();
        assert_eq!(note.fraction, 0.5);
        assert_eq!(note.position, 1.75);
        assert_eq!(note.kind, NoteKind::Axis);
        assert_eq!(note.button, NoteButton::Empty);
    }

    #[test]
    fn convert_fails_fast_on_short_argument_sets() {
        let mut builder = NoteBuilder::new(7);
        builder.push_arg("4".into());
        assert_eq!(
            builder.convert(30, 0.0),
            Err(ParseWarning::InsufficientArguments { line: 7, got: 1 })
        );
    }

    #[test]
    fn convert_rejects_bad_numerics_and_ordinals() {
        let builder = complete_builder(2, ["four", "0", "0", "0", "0.0", "0.0", "0.0"]);
        assert_eq!(
            builder.convert(30, 0.0),
            Err(ParseWarning::InvalidNumericLiteral {
                line: 2,
                field: "divisor",
                literal: "four".into(),
            })
        );

        let builder = complete_builder(2, ["4", "0", "2", "0", "0.0", "0.0", "0.0"]);
        assert_eq!(
            builder.convert(30, 0.0),
            Err(ParseWarning::InvalidEnumOrdinal {
                line: 2,
                field: "kind",
                ordinal: 2,
            })
        );

        let builder = complete_builder(2, ["4", "0", "0", "15", "0.0", "0.0", "0.0"]);
        assert_eq!(
            builder.convert(30, 0.0),
            Err(ParseWarning::InvalidEnumOrdinal {
                line: 2,
                field: "button",
                ordinal: 15,
            })
        );
    }

    #[test]
    fn expands_camel_case_names() {
        assert_eq!(expand_camel_case("BossFight"), "Boss Fight");
        assert_eq!(expand_camel_case("A"), "A");
        assert_eq!(expand_camel_case("ABC"), "A B C");
        assert_eq!(expand_camel_case("tutorial"), "tutorial");
        assert_eq!(expand_camel_case(""), "");
    }
}
