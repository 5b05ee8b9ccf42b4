//! The catalog of beatmaps loaded for a session.
//!
//! Built once at startup from an ordered list of chart paths and read-only
//! afterward. Sources parse independently; one unreadable file never aborts
//! the build, it just leaves a warning and no catalog entry.

use std::{fmt, io, path::PathBuf};

use itertools::Itertools;
use thiserror::Error;

use crate::chart::{
    ChartOutput, lex::Syntax, model::Beatmap, parse::ParseWarning, parse_chart_with_syntax,
};

/// A problem reported while building the catalog. Never fatal to the build.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CatalogWarning {
    /// A chart source could not be opened or read; it contributes no
    /// catalog entry.
    #[error("chart source `{}` could not be read", .path.display())]
    MalformedSource {
        /// The path of the unreadable source.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A note-level warning from parsing one source.
    #[error("{}: {warning}", .path.display())]
    Chart {
        /// The path of the source the warning came from.
        path: PathBuf,
        /// The forwarded parse warning.
        warning: ParseWarning,
    },
}

/// Selecting a beatmap with an invalid ordinal. A caller error, not retried
/// here; the interactive retry loop belongs to the UI.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum CatalogError {
    /// Ordinals are 1-based and bounded by the number of loaded beatmaps.
    #[error("beatmap ordinal {ordinal} out of range 1..={count}")]
    IndexOutOfRange {
        /// The rejected ordinal.
        ordinal: usize,
        /// How many beatmaps the catalog holds.
        count: usize,
    },
}

/// Output of building a [`BeatmapCatalog`].
#[derive(Debug)]
#[must_use]
pub struct CatalogOutput {
    /// The built catalog, in source-enumeration order.
    pub catalog: BeatmapCatalog,
    /// Warnings from unreadable sources and from per-note parsing.
    pub warnings: Vec<CatalogWarning>,
}

/// All beatmaps of a session, in the order their sources were enumerated.
///
/// The enumeration order is the selection contract: the UI shows this list
/// and selection happens by 1-based ordinal into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeatmapCatalog {
    beatmaps: Vec<Beatmap>,
}

impl BeatmapCatalog {
    /// Builds a catalog by parsing every path with the default [`Syntax`].
    ///
    /// Paths are read with [`std::fs::read_to_string`]; which paths to
    /// enumerate (and in what order) is the caller's concern.
    pub fn load(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> CatalogOutput {
        Self::load_with_syntax(paths, &Syntax::default())
    }

    /// Builds a catalog with a custom [`Syntax`]. A step of [`load`](Self::load).
    pub fn load_with_syntax(
        paths: impl IntoIterator<Item = impl Into<PathBuf>>,
        syntax: &Syntax,
    ) -> CatalogOutput {
        let mut beatmaps = Vec::new();
        let mut warnings = Vec::new();
        for path in paths {
            let path = path.into();
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    let ChartOutput {
                        beatmap,
                        warnings: chart_warnings,
                    } = parse_chart_with_syntax(&text, syntax);
                    warnings.extend(chart_warnings.into_iter().map(|warning| {
                        CatalogWarning::Chart {
                            path: path.clone(),
                            warning,
                        }
                    }));
                    beatmaps.push(beatmap);
                }
                Err(source) => warnings.push(CatalogWarning::MalformedSource { path, source }),
            }
        }
        CatalogOutput {
            catalog: Self { beatmaps },
            warnings,
        }
    }

    /// Wraps already-parsed beatmaps, preserving their order.
    #[must_use]
    pub const fn from_beatmaps(beatmaps: Vec<Beatmap>) -> Self {
        Self { beatmaps }
    }

    /// Selects a beatmap by 1-based ordinal.
    ///
    /// # Errors
    ///
    /// [`CatalogError::IndexOutOfRange`] when `ordinal` is zero or exceeds
    /// [`len`](Self::len).
    pub fn select(&self, ordinal: usize) -> Result<&Beatmap, CatalogError> {
        ordinal
            .checked_sub(1)
            .and_then(|index| self.beatmaps.get(index))
            .ok_or(CatalogError::IndexOutOfRange {
                ordinal,
                count: self.beatmaps.len(),
            })
    }

    /// How many beatmaps were loaded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.beatmaps.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beatmaps.is_empty()
    }

    /// Iterates the beatmaps in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Beatmap> {
        self.beatmaps.iter()
    }
}

impl<'a> IntoIterator for &'a BeatmapCatalog {
    type Item = &'a Beatmap;
    type IntoIter = std::slice::Iter<'a, Beatmap>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lists `ordinal: name` per line, the way the selection menu shows it.
impl fmt::Display for BeatmapCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.beatmaps
                .iter()
                .enumerate()
                .format_with("\n", |(index, beatmap), fmt| {
                    fmt(&format_args!("{}: {}", index + 1, beatmap.name))
                })
        )
    }
}
