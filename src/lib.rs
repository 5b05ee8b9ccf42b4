//! The ISBM beatmap format parser and conductor.
//!
//! ISBM is the line-oriented chart format of a controller rhythm game: a
//! chart declares notes with `note`, names the beatmap with `beatname` and
//! changes the default tempo with `bpm`, all on delimiter-separated lines.
//! This crate covers the whole loading path of a play session:
//!
//! - [`chart`] parses one chart source into a [`chart::model::Beatmap`],
//!   collecting recoverable warnings instead of failing.
//! - [`catalog`] builds the session's ordered beatmap list from many
//!   sources and validates selection by 1-based ordinal.
//! - [`conductor`] converts elapsed playback time into a fractional beat
//!   position once a beatmap is playing.
//! - `diagnostics` (feature `diagnostics`, default on) renders parse
//!   warnings as fancy `ariadne` reports.
//!
//! ```
//! use isbm_rs::prelude::*;
//!
//! let source = "beatname;BossFight\nbpm;120\nnote;4;0;0;0;100.0;200.0;0.0";
//! let ChartOutput { beatmap, warnings } = parse_chart(source);
//! assert_eq!(beatmap.name, "Boss Fight");
//! assert_eq!(beatmap.notes.len(), 1);
//! assert!(warnings.is_empty());
//! ```

pub mod catalog;
pub mod chart;
pub mod conductor;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod prelude;
