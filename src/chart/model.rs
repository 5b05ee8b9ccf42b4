//! Data model of parsed ISBM charts.

/// A named, ordered collection of notes parsed from one chart source.
///
/// Owned by the [`BeatmapCatalog`](crate::catalog::BeatmapCatalog) for the
/// session's lifetime and treated as read-only once parsing returns.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    /// Display name, set by the name directive (camel case expanded).
    pub name: String,
    /// Notes in file order. Positions form a running sum over this order,
    /// so the order is semantically load-bearing.
    pub notes: Vec<Note>,
}

/// A single playable event with a rhythmic position, controller mapping
/// and visual placement hints.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    /// The 1-based line number of the declaration in its chart source.
    pub line: usize,
    /// Rhythmic subdivision value, `1.0 / divisor`.
    pub fraction: f32,
    /// Cumulative beat offset from song start: this note's fraction plus
    /// the position of the previous converted note.
    pub position: f32,
    /// Snapshot of the default tempo active when this note converted.
    pub bpm_override: Option<u32>,
    /// Judgment offset in milliseconds.
    pub offset_ms: i32,
    /// X position of the note shadow.
    pub shadow_x: f32,
    /// Y position of the note shadow.
    pub shadow_y: f32,
    /// Angle the note approaches from, in degrees.
    pub angle: f32,
    /// The beat the note should be hit on.
    pub target_beat: f32,
    /// Whether the note is a rest.
    pub rest: bool,
    /// Length of the rest, in notes.
    pub rest_size: u32,
    /// Whether the note is judged against a button or an axis.
    pub kind: NoteKind,
    /// The controller button assigned to the note.
    pub button: NoteButton,
}

/// How a note is judged: a button press or an axis movement (joysticks or
/// triggers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteKind {
    /// Judged against a button press.
    Button,
    /// Judged against an axis movement.
    Axis,
}

impl NoteKind {
    /// Converts a chart ordinal into a kind. Returns `None` when the
    /// ordinal is outside the defined range.
    #[must_use]
    pub const fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Button),
            1 => Some(Self::Axis),
            _ => None,
        }
    }
}

/// The controller buttons a note can be assigned to.
///
/// [`NoteButton::Empty`] is used when the note is judged against an axis
/// instead of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteButton {
    /// The A face button.
    A,
    /// The B face button.
    B,
    /// The X face button.
    X,
    /// The Y face button.
    Y,
    /// The left bumper.
    LBumper,
    /// The right bumper.
    RBumper,
    /// The back button.
    Back,
    /// The start button.
    Start,
    /// The left stick click.
    LStick,
    /// The right stick click.
    RStick,
    /// D-pad up.
    DPadUp,
    /// D-pad right.
    DPadRight,
    /// D-pad down.
    DPadDown,
    /// D-pad left.
    DPadLeft,
    /// No button; the note uses an axis.
    Empty,
}

impl NoteButton {
    /// Converts a chart ordinal into a button. Returns `None` when the
    /// ordinal is outside the defined range.
    #[must_use]
    pub const fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::A),
            1 => Some(Self::B),
            2 => Some(Self::X),
            3 => Some(Self::Y),
            4 => Some(Self::LBumper),
            5 => Some(Self::RBumper),
            6 => Some(Self::Back),
            7 => Some(Self::Start),
            8 => Some(Self::LStick),
            9 => Some(Self::RStick),
            10 => Some(Self::DPadUp),
            11 => Some(Self::DPadRight),
            12 => Some(Self::DPadDown),
            13 => Some(Self::DPadLeft),
            14 => Some(Self::Empty),
            _ => None,
        }
    }
}
