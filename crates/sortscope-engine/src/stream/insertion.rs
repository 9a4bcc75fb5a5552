#![forbid(unsafe_code)]

//! Insertion sort as an event stream.
//!
//! Each round lifts `key = data[i]` out of the array, shifts larger
//! elements of the sorted prefix one slot right, and drops the key into the
//! hole that remains. The final placement is reported even when the key
//! never moved, matching the shift/placement write protocol.

use crate::event::SortEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Lift the next key.
    NextKey,
    /// Emit the comparison against the element left of the hole.
    Probe,
    /// Apply the outcome of the probe: shift or stop scanning.
    Shift,
    /// Drop the key into the hole.
    Place,
    Finish,
    Fused,
}

/// Insertion sort over a private copy of the input.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    data: Vec<u32>,
    i: usize,
    hole: usize,
    key: u32,
    phase: Phase,
}

impl InsertionSort {
    /// Start a stream over a copy of `input`.
    #[must_use]
    pub fn new(input: &[u32]) -> Self {
        Self {
            data: input.to_vec(),
            i: 1,
            hole: 0,
            key: 0,
            phase: Phase::NextKey,
        }
    }
}

impl Iterator for InsertionSort {
    type Item = SortEvent;

    fn next(&mut self) -> Option<SortEvent> {
        loop {
            match self.phase {
                Phase::NextKey => {
                    if self.i >= self.data.len() {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    self.key = self.data[self.i];
                    self.hole = self.i;
                    self.phase = Phase::Probe;
                }
                Phase::Probe => {
                    if self.hole == 0 {
                        self.phase = Phase::Place;
                        continue;
                    }
                    self.phase = Phase::Shift;
                    return Some(SortEvent::compare(
                        self.hole - 1,
                        self.hole,
                        self.data.clone(),
                    ));
                }
                Phase::Shift => {
                    if self.data[self.hole - 1] > self.key {
                        self.data[self.hole] = self.data[self.hole - 1];
                        let written = self.hole;
                        self.hole -= 1;
                        self.phase = Phase::Probe;
                        return Some(SortEvent::update(written, self.data.clone()));
                    }
                    self.phase = Phase::Place;
                }
                Phase::Place => {
                    self.data[self.hole] = self.key;
                    let written = self.hole;
                    self.i += 1;
                    self.phase = Phase::NextKey;
                    return Some(SortEvent::update(written, self.data.clone()));
                }
                Phase::Finish => {
                    self.phase = Phase::Fused;
                    return Some(SortEvent::complete(self.data.clone()));
                }
                Phase::Fused => return None,
            }
        }
    }
}

impl std::iter::FusedIterator for InsertionSort {}
