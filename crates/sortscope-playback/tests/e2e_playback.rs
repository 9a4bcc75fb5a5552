//! End-to-end playback: drive a Player through whole sorts the way a host
//! scheduler would, and check the observable state at every stage.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use sortscope_engine::{Algorithm, Distribution, EventKind};
use sortscope_playback::{
    Player, PlayerConfig, RunState, StepOutcome, ToneSink, step_delay, tone_frequency,
};

fn player(size: usize, algorithm: Algorithm, distribution: Distribution) -> Player {
    Player::with_config(PlayerConfig {
        size,
        algorithm,
        distribution,
    })
}

/// Drive the player like a host scheduler, minus the waiting.
fn drive(player: &mut Player) -> StepOutcome {
    let mut outcome = player.start();
    while let StepOutcome::Continue { delay } = outcome {
        assert!(delay >= sortscope_playback::MIN_STEP_DELAY);
        assert!(delay <= sortscope_playback::MAX_STEP_DELAY);
        outcome = player.step();
    }
    outcome
}

#[test]
fn every_algorithm_plays_to_a_sorted_array() {
    for algorithm in Algorithm::ALL {
        let mut p = player(12, algorithm, Distribution::Descending);
        let outcome = drive(&mut p);
        assert_eq!(outcome, StepOutcome::Finished, "{algorithm}");
        assert_eq!(p.state(), RunState::Complete, "{algorithm}");
        let expected: Vec<u32> = (1..=12).collect();
        assert_eq!(p.array(), expected.as_slice(), "{algorithm}");
    }
}

#[test]
fn scheduling_delay_matches_the_configured_size() {
    let mut p = player(40, Algorithm::Bubble, Distribution::Descending);
    let outcome = p.start();
    assert_eq!(
        outcome,
        StepOutcome::Continue {
            delay: step_delay(40)
        }
    );
}

#[test]
fn pause_and_resume_reach_the_same_result_as_an_uninterrupted_run() {
    for algorithm in [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ] {
        let mut straight = player(10, algorithm, Distribution::SplitDescending);
        drive(&mut straight);

        // Same configuration, pausing after every third event.
        let mut interrupted = player(10, algorithm, Distribution::SplitDescending);
        let mut outcome = interrupted.start();
        let mut steps = 0u32;
        while let StepOutcome::Continue { .. } = outcome {
            steps += 1;
            if steps % 3 == 0 {
                interrupted.pause();
                assert_eq!(interrupted.state(), RunState::Paused, "{algorithm}");
                interrupted.start();
            }
            outcome = interrupted.step();
        }

        assert_eq!(outcome, StepOutcome::Finished, "{algorithm}");
        assert_eq!(interrupted.array(), straight.array(), "{algorithm}");
        assert_eq!(
            interrupted.comparisons(),
            straight.comparisons(),
            "{algorithm}"
        );
    }
}

#[test]
fn comparison_counter_matches_the_event_stream() {
    let mut p = player(9, Algorithm::Selection, Distribution::Descending);
    drive(&mut p);

    let input: Vec<u32> = (1..=9).rev().collect();
    let expected = Algorithm::Selection
        .stream(&input)
        .filter(|e| e.kind == EventKind::Compare)
        .count() as u64;
    assert_eq!(p.comparisons(), expected);
}

#[test]
fn reset_mid_run_regenerates_per_the_distribution_contract() {
    let mut p = player(7, Algorithm::Merge, Distribution::Ascending);
    p.start();
    for _ in 0..4 {
        p.step();
    }
    p.reset();

    assert_eq!(p.state(), RunState::Idle);
    assert_eq!(p.array(), &[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(p.comparisons(), 0);
    assert_eq!(p.elapsed(), Duration::ZERO);
    assert!(p.highlighted().is_empty());
}

#[test]
fn reset_with_random_distribution_yields_a_permutation() {
    let mut p = player(50, Algorithm::Bubble, Distribution::Random);
    p.start();
    p.step();
    p.reset();

    let mut sorted = p.array().to_vec();
    sorted.sort_unstable();
    let expected: Vec<u32> = (1..=50).collect();
    assert_eq!(sorted, expected);
}

struct FrequencySink {
    frequencies: Arc<Mutex<Vec<f32>>>,
}

impl ToneSink for FrequencySink {
    fn comparison(&mut self, value: u32, max_value: u32) {
        self.frequencies
            .lock()
            .unwrap()
            .push(tone_frequency(value, max_value));
    }
}

#[test]
fn comparison_tones_stay_inside_the_audible_band() {
    let frequencies = Arc::new(Mutex::new(Vec::new()));
    let sink = FrequencySink {
        frequencies: frequencies.clone(),
    };
    let mut p = player(20, Algorithm::Heap, Distribution::Random).with_sink(sink);
    drive(&mut p);

    let frequencies = frequencies.lock().unwrap();
    assert_eq!(frequencies.len() as u64, p.comparisons());
    for &f in frequencies.iter() {
        assert!(
            (sortscope_playback::MIN_FREQUENCY_HZ..=sortscope_playback::MAX_FREQUENCY_HZ)
                .contains(&f),
            "{f}"
        );
    }
}
