#![forbid(unsafe_code)]

//! Sortscope public facade crate.
//!
//! Re-exports the stable surface of the engine (event streams, array
//! generation, the algorithm registry) and the playback driver, plus a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//! ```
//! use sortscope::prelude::*;
//!
//! let mut player = Player::with_config(PlayerConfig {
//!     size: 10,
//!     algorithm: Algorithm::Heap,
//!     distribution: Distribution::Descending,
//! });
//!
//! let mut outcome = player.start();
//! while let StepOutcome::Continue { .. } = outcome {
//!     outcome = player.step();
//! }
//!
//! assert_eq!(player.state(), RunState::Complete);
//! assert_eq!(player.array(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//! ```

// --- Engine re-exports -----------------------------------------------------

pub use sortscope_engine::{
    Algorithm, Distribution, EventKind, Indices, ParseAlgorithmError, ParseDistributionError,
    SortEvent, SortStream, generate, generate_with,
};

// --- Playback re-exports ---------------------------------------------------

pub use sortscope_playback::{
    NullSink, PlaybackError, Player, PlayerConfig, RunState, StepOutcome, ToneSink, step_delay,
    tone_frequency,
};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Algorithm, Distribution, EventKind, Player, PlayerConfig, RunState, SortEvent, StepOutcome,
        generate,
    };

    pub use crate::{engine, playback};
}

pub use sortscope_engine as engine;
pub use sortscope_playback as playback;
