#![forbid(unsafe_code)]

//! Step pacing: how long the driver waits between events.
//!
//! Larger arrays get shorter per-step delays so a full sort animates in
//! comparable wall time, clamped so the animation neither stalls nor
//! outruns the display.

use std::time::Duration;

/// Floor for the per-step delay.
pub const MIN_STEP_DELAY: Duration = Duration::from_millis(10);

/// Ceiling for the per-step delay.
pub const MAX_STEP_DELAY: Duration = Duration::from_millis(50);

/// Delay before the next step for an array of `len` elements.
///
/// `50ms − len/10 ms`, clamped to `[MIN_STEP_DELAY, MAX_STEP_DELAY]`.
#[must_use]
pub fn step_delay(len: usize) -> Duration {
    let millis = 50u64.saturating_sub(len as u64 / 10);
    Duration::from_millis(millis).clamp(MIN_STEP_DELAY, MAX_STEP_DELAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_arrays_step_slowly() {
        assert_eq!(step_delay(10), Duration::from_millis(49));
        assert_eq!(step_delay(30), Duration::from_millis(47));
    }

    #[test]
    fn large_arrays_step_quickly() {
        assert_eq!(step_delay(200), Duration::from_millis(30));
    }

    #[test]
    fn never_below_the_floor() {
        assert_eq!(step_delay(1000), MIN_STEP_DELAY);
        assert_eq!(step_delay(usize::MAX), MIN_STEP_DELAY);
    }

    #[test]
    fn never_above_the_ceiling() {
        assert_eq!(step_delay(0), MAX_STEP_DELAY);
    }

    #[test]
    fn monotonically_non_increasing_in_len() {
        let mut previous = step_delay(0);
        for len in 1..600 {
            let delay = step_delay(len);
            assert!(delay <= previous, "len {len}");
            previous = delay;
        }
    }
}
