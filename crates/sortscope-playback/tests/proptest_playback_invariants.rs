//! Property-based invariants for the playback driver.
//!
//! ## Invariants
//!
//! 1. Step delay stays inside its clamp band and never grows with size
//! 2. Tone frequencies stay inside [220 Hz, 880 Hz] for in-range values
//! 3. Pausing at arbitrary points never changes the final result

use proptest::prelude::*;
use sortscope_engine::{Algorithm, Distribution};
use sortscope_playback::{
    MAX_FREQUENCY_HZ, MAX_STEP_DELAY, MIN_FREQUENCY_HZ, MIN_STEP_DELAY, Player, PlayerConfig,
    RunState, StepOutcome, step_delay, tone_frequency,
};

fn arb_algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

// ── 1. Step delay ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn step_delay_is_clamped(len in 0usize..100_000) {
        let delay = step_delay(len);
        prop_assert!(delay >= MIN_STEP_DELAY);
        prop_assert!(delay <= MAX_STEP_DELAY);
    }

    #[test]
    fn step_delay_never_grows_with_size(a in 0usize..10_000, b in 0usize..10_000) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(step_delay(large) <= step_delay(small));
    }
}

// ── 2. Tone frequencies ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn tone_frequency_stays_in_band(max in 1u32..=200, value_fraction in 0.0f64..=1.0) {
        let value = (f64::from(max) * value_fraction).round() as u32;
        let frequency = tone_frequency(value, max);
        prop_assert!(frequency >= MIN_FREQUENCY_HZ, "{frequency}");
        prop_assert!(frequency <= MAX_FREQUENCY_HZ, "{frequency}");
    }
}

// ── 3. Determinism under suspension ───────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn pausing_never_changes_the_outcome(
        algorithm in arb_algorithm(),
        size in 2usize..=16,
        pause_every in 1u32..=7,
    ) {
        let config = PlayerConfig {
            size,
            algorithm,
            distribution: Distribution::SplitAscending,
        };

        let mut straight = Player::with_config(config);
        let mut outcome = straight.start();
        while let StepOutcome::Continue { .. } = outcome {
            outcome = straight.step();
        }

        let mut interrupted = Player::with_config(config);
        let mut outcome = interrupted.start();
        let mut steps = 0u32;
        while let StepOutcome::Continue { .. } = outcome {
            steps += 1;
            if steps % pause_every == 0 {
                interrupted.pause();
                interrupted.start();
            }
            outcome = interrupted.step();
        }

        prop_assert_eq!(straight.state(), RunState::Complete);
        prop_assert_eq!(interrupted.state(), RunState::Complete);
        prop_assert_eq!(interrupted.array(), straight.array());
        prop_assert_eq!(interrupted.comparisons(), straight.comparisons());
    }
}
