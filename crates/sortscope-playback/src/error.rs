#![forbid(unsafe_code)]

//! Playback errors.
//!
//! Sorting is deterministic and pure, so the driver never retries: a broken
//! stream is logged and mapped to a halt, and the error stays inspectable
//! on the driver rather than propagating to the host.

use std::fmt;

use sortscope_engine::Algorithm;

/// A failure observed at the driver boundary while drawing events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The stream ended without a Complete event. Streams guarantee a
    /// terminal Complete, so this is a contract violation, not a
    /// recoverable condition.
    StreamStalled {
        /// The algorithm whose stream stalled.
        algorithm: Algorithm,
    },
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StreamStalled { algorithm } => {
                write!(f, "{algorithm} stream ended without completing")
            }
        }
    }
}

impl std::error::Error for PlaybackError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_algorithm() {
        let err = PlaybackError::StreamStalled {
            algorithm: Algorithm::Merge,
        };
        assert_eq!(err.to_string(), "Merge Sort stream ended without completing");
    }
}
