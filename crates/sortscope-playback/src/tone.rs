#![forbid(unsafe_code)]

//! The comparison-tone contract with the audio collaborator.
//!
//! The driver reports each comparison as `(value, max_value)`; the
//! collaborator maps that to a pitch. [`tone_frequency`] is the reference
//! mapping. Synthesis itself lives outside this crate.

use std::time::Duration;

/// Pitch of the smallest element.
pub const MIN_FREQUENCY_HZ: f32 = 220.0;

/// Pitch of the largest element.
pub const MAX_FREQUENCY_HZ: f32 = 880.0;

/// Default length of one comparison tone.
pub const TONE_LENGTH: Duration = Duration::from_millis(50);

/// Map an element to a tone frequency, proportionally between
/// [`MIN_FREQUENCY_HZ`] and [`MAX_FREQUENCY_HZ`].
#[must_use]
pub fn tone_frequency(value: u32, max_value: u32) -> f32 {
    if max_value == 0 {
        return MIN_FREQUENCY_HZ;
    }
    let normalized = value as f32 / max_value as f32;
    MIN_FREQUENCY_HZ + normalized * (MAX_FREQUENCY_HZ - MIN_FREQUENCY_HZ)
}

/// Receives one notification per comparison the driver consumes.
pub trait ToneSink {
    /// `value` is the element at the first compared position; `max_value`
    /// is the largest element in play (the array length, since elements
    /// are `1..=N`).
    fn comparison(&mut self, value: u32, max_value: u32);
}

/// Discards every notification; the default for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ToneSink for NullSink {
    fn comparison(&mut self, _value: u32, _max_value: u32) {}
}
