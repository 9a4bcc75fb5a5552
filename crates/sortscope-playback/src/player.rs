#![forbid(unsafe_code)]

//! The playback driver: one animated sort from start to completion.
//!
//! A [`Player`] owns the array being visualized and, while a sort runs, the
//! session around its event stream. The host scheduler calls [`Player::step`]
//! to drain one event at a time; each call returns a [`StepOutcome`] telling
//! the host whether (and after what delay) to schedule the next step. The
//! driver never owns a timer: pausing is simply not being rescheduled, which
//! leaves the suspended stream exactly where it was.
//!
//! # Example
//! ```
//! use sortscope_playback::{Player, PlayerConfig, RunState, StepOutcome};
//! use sortscope_engine::{Algorithm, Distribution};
//!
//! let config = PlayerConfig {
//!     size: 8,
//!     algorithm: Algorithm::Insertion,
//!     distribution: Distribution::Descending,
//! };
//! let mut player = Player::with_config(config);
//!
//! player.start();
//! while let StepOutcome::Continue { .. } = player.step() {}
//!
//! assert_eq!(player.state(), RunState::Complete);
//! assert_eq!(player.array(), &[1, 2, 3, 4, 5, 6, 7, 8]);
//! ```

use std::fmt;
use std::time::Duration;

use sortscope_engine::{Algorithm, Distribution, EventKind, Indices, SortEvent, generate};
use web_time::Instant;

use crate::error::PlaybackError;
use crate::pacing::step_delay;
use crate::tone::{NullSink, ToneSink};

/// Where the driver's state machine currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No active stream; the array is whatever was last generated.
    Idle,
    /// A stream is active and the host is scheduling steps.
    Running,
    /// A stream is active but suspended indefinitely.
    Paused,
    /// The stream finished; the array is sorted.
    Complete,
}

/// Configuration the driver sorts under.
///
/// The element count is validated by the configuration surface before it
/// reaches the driver (the UI range is 10–200); the driver itself only
/// requires a positive size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Number of elements to generate and sort.
    pub size: usize,
    /// Which algorithm to animate.
    pub algorithm: Algorithm,
    /// Arrangement of freshly generated arrays.
    pub distribution: Distribution,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: 30,
            algorithm: Algorithm::Bubble,
            distribution: Distribution::Random,
        }
    }
}

/// What the host scheduler should do after a command or step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Schedule the next [`Player::step`] after `delay`.
    Continue {
        /// How long to wait before the next step.
        delay: Duration,
    },
    /// The sort finished; stop scheduling.
    Finished,
    /// The stream broke its contract; playback halted. Stop scheduling.
    Halted,
    /// The command did not apply in the current run state.
    Ignored,
}

/// The in-progress sort: the suspended stream plus its time base.
struct Session {
    stream: Box<dyn Iterator<Item = SortEvent> + Send>,
    /// Time base for the elapsed clock. Shifted on resume so the clock is
    /// continuous across pauses.
    started_at: Instant,
    /// Elapsed time frozen at the last pause.
    frozen: Duration,
}

/// The playback driver.
///
/// Observable state (the current array, highlighted indices, comparison
/// count, elapsed clock, and run state) updates on every consumed event;
/// the presentation layer reads it between steps.
pub struct Player {
    config: PlayerConfig,
    array: Vec<u32>,
    highlighted: Indices,
    comparisons: u64,
    elapsed: Duration,
    state: RunState,
    session: Option<Session>,
    sink: Box<dyn ToneSink + Send>,
    last_error: Option<PlaybackError>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A driver with the default configuration and a fresh array.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PlayerConfig::default())
    }

    /// A driver with the given configuration and a fresh array.
    #[must_use]
    pub fn with_config(config: PlayerConfig) -> Self {
        Self {
            array: generate(config.size, config.distribution),
            config,
            highlighted: Indices::none(),
            comparisons: 0,
            elapsed: Duration::ZERO,
            state: RunState::Idle,
            session: None,
            sink: Box::new(NullSink),
            last_error: None,
        }
    }

    /// Attach a tone sink; it receives one notification per comparison.
    #[must_use]
    pub fn with_sink(mut self, sink: impl ToneSink + Send + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    // ── Observable state ─────────────────────────────────────────────

    /// The array as of the last consumed event.
    #[must_use]
    pub fn array(&self) -> &[u32] {
        &self.array
    }

    /// Positions touched by the last consumed event.
    #[must_use]
    pub fn highlighted(&self) -> Indices {
        self.highlighted
    }

    /// Comparisons consumed since the current sort started.
    #[must_use]
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Wall-clock time the current sort has been running, continuous
    /// across pauses.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Current state-machine position.
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether a sort is in progress (running or paused).
    #[must_use]
    pub fn is_sorting(&self) -> bool {
        matches!(self.state, RunState::Running | RunState::Paused)
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> PlayerConfig {
        self.config
    }

    /// The error that halted playback, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&PlaybackError> {
        self.last_error.as_ref()
    }

    // ── Configuration ────────────────────────────────────────────────

    /// Change the element count. Regenerates the array if no sort is in
    /// progress.
    pub fn set_size(&mut self, size: usize) {
        self.config.size = size;
        self.refresh_idle_array();
    }

    /// Change the algorithm. Takes effect at the next start.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.algorithm = algorithm;
    }

    /// Change the distribution. Regenerates the array if no sort is in
    /// progress.
    pub fn set_distribution(&mut self, distribution: Distribution) {
        self.config.distribution = distribution;
        self.refresh_idle_array();
    }

    fn refresh_idle_array(&mut self) {
        if self.session.is_none() {
            self.array = generate(self.config.size, self.config.distribution);
            self.highlighted = Indices::none();
            self.comparisons = 0;
            self.elapsed = Duration::ZERO;
            self.state = RunState::Idle;
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start a new sort, or resume a paused one.
    ///
    /// From [`RunState::Idle`] or [`RunState::Complete`] this opens a new
    /// session over the current array. From [`RunState::Paused`] it resumes
    /// the same stream, shifting the time base so the elapsed clock carries
    /// on where it froze. While running, this is ignored: only one stream
    /// is ever active.
    pub fn start(&mut self) -> StepOutcome {
        match self.state {
            RunState::Idle | RunState::Complete => {
                self.comparisons = 0;
                self.elapsed = Duration::ZERO;
                self.last_error = None;
                self.session = Some(Session {
                    stream: Box::new(self.config.algorithm.stream(&self.array)),
                    started_at: Instant::now(),
                    frozen: Duration::ZERO,
                });
                self.state = RunState::Running;
                tracing::debug!(
                    algorithm = %self.config.algorithm,
                    size = self.array.len(),
                    "starting sort"
                );
                StepOutcome::Continue {
                    delay: step_delay(self.array.len()),
                }
            }
            RunState::Paused => {
                let Some(session) = self.session.as_mut() else {
                    return StepOutcome::Ignored;
                };
                let now = Instant::now();
                session.started_at = now.checked_sub(session.frozen).unwrap_or(now);
                self.state = RunState::Running;
                tracing::debug!("resuming sort");
                StepOutcome::Continue {
                    delay: step_delay(self.array.len()),
                }
            }
            RunState::Running => StepOutcome::Ignored,
        }
    }

    /// Suspend the running sort at the current step boundary.
    ///
    /// The stream keeps its position; the elapsed clock freezes.
    pub fn pause(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.frozen = session.started_at.elapsed();
            self.elapsed = session.frozen;
        }
        self.state = RunState::Paused;
        tracing::debug!(elapsed = ?self.elapsed, "paused sort");
    }

    /// Abandon any sort in progress and regenerate a fresh array.
    pub fn reset(&mut self) {
        self.session = None;
        self.state = RunState::Idle;
        self.array = generate(self.config.size, self.config.distribution);
        self.highlighted = Indices::none();
        self.comparisons = 0;
        self.elapsed = Duration::ZERO;
        self.last_error = None;
        tracing::debug!(size = self.array.len(), "reset");
    }

    /// Consume one event from the active stream.
    ///
    /// Updates the observable state unconditionally, counts comparisons,
    /// notifies the tone sink, and reports what the host should do next.
    /// Outside [`RunState::Running`] this is ignored, which is what makes
    /// pausing safe at any pending step boundary.
    pub fn step(&mut self) -> StepOutcome {
        if self.state != RunState::Running {
            return StepOutcome::Ignored;
        }
        let Some(session) = self.session.as_mut() else {
            return self.halt_stalled();
        };
        let Some(event) = session.stream.next() else {
            return self.halt_stalled();
        };

        self.elapsed = session.started_at.elapsed();
        self.highlighted = event.indices;
        let kind = event.kind;
        self.array = event.snapshot;

        match kind {
            EventKind::Compare => {
                self.comparisons += 1;
                if let Some(&first) = self.highlighted.as_slice().first() {
                    if let Some(&value) = self.array.get(first) {
                        self.sink.comparison(value, self.array.len() as u32);
                    }
                }
            }
            EventKind::Complete => {
                self.highlighted = Indices::none();
                self.session = None;
                self.state = RunState::Complete;
                tracing::debug!(
                    comparisons = self.comparisons,
                    elapsed = ?self.elapsed,
                    "sort complete"
                );
                return StepOutcome::Finished;
            }
            EventKind::Swap | EventKind::Update => {}
        }

        StepOutcome::Continue {
            delay: step_delay(self.array.len()),
        }
    }

    /// A stream that ends without completing broke its contract: log it,
    /// clear the sorting state, and tell the host to stop scheduling.
    fn halt_stalled(&mut self) -> StepOutcome {
        let error = PlaybackError::StreamStalled {
            algorithm: self.config.algorithm,
        };
        tracing::error!(%error, "halting playback");
        self.last_error = Some(error);
        self.session = None;
        self.highlighted = Indices::none();
        self.state = RunState::Idle;
        StepOutcome::Halted
    }

    /// Begin a session over an arbitrary stream, bypassing the registry.
    #[cfg(test)]
    fn start_with_stream(&mut self, stream: Box<dyn Iterator<Item = SortEvent> + Send>) {
        self.comparisons = 0;
        self.elapsed = Duration::ZERO;
        self.last_error = None;
        self.session = Some(Session {
            stream,
            started_at: Instant::now(),
            frozen: Duration::ZERO,
        });
        self.state = RunState::Running;
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("comparisons", &self.comparisons)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}
