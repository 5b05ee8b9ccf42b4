//! Prelude module for the ISBM crate.
//!
//! Re-exports all public types for convenient access. You can use
//! `use isbm_rs::prelude::*;` to import everything at once.

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{
    SimpleSource, ToAriadne, build_report, collect_chart_reports, emit_chart_warnings,
};
pub use crate::{
    catalog::{BeatmapCatalog, CatalogError, CatalogOutput, CatalogWarning},
    chart::{
        ChartOutput,
        lex::{Directive, Syntax, Token, TokenKind, tokenize_line},
        model::{Beatmap, Note, NoteButton, NoteKind},
        parse::{DEFAULT_TEMPO, NOTE_ARGC, NoteBuilder, ParseWarning},
        parse_chart, parse_chart_with_syntax,
    },
    conductor::Conductor,
};
