//! The conductor converts elapsed playback time into a beat position.
//!
//! One conductor is owned exclusively by the active play session. It is
//! polled once per frame by the game loop: every refresh is O(1) arithmetic
//! on locally owned fields, with no I/O and no allocation.

use gametime::{TimeSpan, TimeStamp};

const MS_PER_MINUTE: f64 = 60_000.0;
const NANOS_PER_MS: f64 = 1_000_000.0;

/// Real-time beat clock for one song.
///
/// The conductor is Idle until [`start_timer`](Self::start_timer) captures
/// the playback origin, then Running for the rest of the song. While
/// Running, [`refresh`](Self::refresh) recomputes the current fractional
/// beat from the elapsed wall-clock time; the per-refresh beat delta lets
/// callers detect beat-boundary crossings without re-deriving from absolute
/// time.
///
/// There is no terminal state: playback end is the caller's to detect, by
/// comparing [`current_beat`](Self::current_beat) against
/// [`total_beats`](Self::total_beats).
///
/// ```
/// use std::time::Duration;
/// use gametime::{TimeSpan, TimeStamp};
/// use isbm_rs::conductor::Conductor;
///
/// let mut conductor = Conductor::new(120, 60.0, 0);
/// let start = TimeStamp::now();
/// conductor.start_timer_at(start);
/// conductor.refresh_at(start + TimeSpan::from_duration(Duration::from_millis(500)));
/// assert!((conductor.current_beat() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct Conductor {
    started_at: Option<TimeStamp>,
    refreshed_at: Option<TimeStamp>,
    bpm: u32,
    offset_ms: i32,
    length_seconds: f64,
    total_beats: f64,
    offset_beats: f64,
    current_beat: f64,
    beats_since_refresh: f64,
}

impl Conductor {
    /// Creates an Idle conductor for a song.
    ///
    /// `bpm` is the song tempo, `length_seconds` the song length and
    /// `offset_ms` the audio offset applied to every computed beat.
    #[must_use]
    pub fn new(bpm: u32, length_seconds: f64, offset_ms: i32) -> Self {
        Self {
            started_at: None,
            refreshed_at: None,
            bpm,
            offset_ms,
            length_seconds,
            total_beats: length_seconds / 60.0 * f64::from(bpm),
            offset_beats: f64::from(offset_ms) * f64::from(bpm) / MS_PER_MINUTE,
            current_beat: 0.0,
            beats_since_refresh: 0.0,
        }
    }

    /// Transitions Idle to Running, capturing the origin timestamp now.
    pub fn start_timer(&mut self) {
        self.start_timer_at(TimeStamp::now());
    }

    /// Transitions Idle to Running with an explicit origin timestamp.
    ///
    /// A step of [`start_timer`](Self::start_timer); useful for tests and
    /// for callers that already sampled the clock this frame.
    pub fn start_timer_at(&mut self, now: TimeStamp) {
        self.started_at = Some(now);
        self.refreshed_at = Some(now);
        self.current_beat = -self.offset_beats;
        self.beats_since_refresh = 0.0;
    }

    /// Recomputes the current beat from the clock. Once per frame.
    pub fn refresh(&mut self) {
        self.refresh_at(TimeStamp::now());
    }

    /// Recomputes the current beat against an explicit timestamp.
    ///
    /// A step of [`refresh`](Self::refresh). Does nothing while Idle.
    pub fn refresh_at(&mut self, now: TimeStamp) {
        let Some(started) = self.started_at else {
            return;
        };
        let elapsed = now
            .checked_elapsed_since(started)
            .unwrap_or(TimeSpan::ZERO);
        let elapsed_ms = elapsed.as_nanos().max(0) as f64 / NANOS_PER_MS;
        let beats_per_ms = f64::from(self.bpm) / MS_PER_MINUTE;

        let previous = self.current_beat;
        self.current_beat = elapsed_ms * beats_per_ms - self.offset_beats;
        self.beats_since_refresh = self.current_beat - previous;
        self.refreshed_at = Some(now);
    }

    /// Whether [`start_timer`](Self::start_timer) has run.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// The playback origin, once Running.
    #[must_use]
    pub const fn started_at(&self) -> Option<TimeStamp> {
        self.started_at
    }

    /// The timestamp of the most recent refresh.
    #[must_use]
    pub const fn refreshed_at(&self) -> Option<TimeStamp> {
        self.refreshed_at
    }

    /// The song tempo in beats per minute.
    #[must_use]
    pub const fn bpm(&self) -> u32 {
        self.bpm
    }

    /// The audio offset in milliseconds.
    #[must_use]
    pub const fn offset_ms(&self) -> i32 {
        self.offset_ms
    }

    /// The song length in seconds.
    #[must_use]
    pub const fn length_seconds(&self) -> f64 {
        self.length_seconds
    }

    /// Total beats in the song, fixed at construction.
    #[must_use]
    pub const fn total_beats(&self) -> f64 {
        self.total_beats
    }

    /// The audio offset expressed in beats.
    #[must_use]
    pub const fn offset_beats(&self) -> f64 {
        self.offset_beats
    }

    /// The current fractional beat position.
    #[must_use]
    pub const fn current_beat(&self) -> f64 {
        self.current_beat
    }

    /// Beat delta between the last two refreshes.
    #[must_use]
    pub const fn beats_since_refresh(&self) -> f64 {
        self.beats_since_refresh
    }
}
