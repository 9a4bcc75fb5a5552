#![forbid(unsafe_code)]

//! Playback driver for animated sorting.
//!
//! This crate turns the event streams of `sortscope-engine` into an
//! animation: a [`Player`] owns one sort at a time, exposes
//! start/pause/resume/reset, and tells its host scheduler when to draw the
//! next event. Pacing lives in [`pacing`], the comparison-tone contract in
//! [`tone`].
//!
//! The driver is cooperative and single-threaded: it owns no timer and no
//! thread. The host calls [`Player::step`] when the returned delay expires;
//! pausing is simply not calling again, which suspends the stream in place.

mod error;
pub mod pacing;
mod player;
pub mod tone;

pub use error::PlaybackError;
pub use pacing::{MAX_STEP_DELAY, MIN_STEP_DELAY, step_delay};
pub use player::{Player, PlayerConfig, RunState, StepOutcome};
pub use tone::{
    MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ, NullSink, TONE_LENGTH, ToneSink, tone_frequency,
};
