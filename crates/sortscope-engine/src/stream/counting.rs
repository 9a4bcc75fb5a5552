#![forbid(unsafe_code)]

//! Counting sort as an event stream.
//!
//! Comparison-free: the stream reports writes only. The counting pass
//! touches each input position, the placement pass reports each element's
//! source position together with its destination slot, and the copy-back
//! pass writes the ordered output over the working array. Placement walks
//! the input from the right, which keeps equal elements in their original
//! relative order.

use crate::event::SortEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Tally each value, reporting the input position touched.
    Count { i: usize },
    /// Place elements right-to-left, reporting (source, destination).
    Place { pos: usize },
    /// Copy the ordered output back over the working array.
    CopyBack { i: usize },
    Finish,
    Fused,
}

/// Counting sort over a private copy of the input.
#[derive(Debug, Clone)]
pub struct CountingSort {
    data: Vec<u32>,
    output: Vec<u32>,
    /// Cumulative counts, indexed by value; built when counting finishes.
    counts: Vec<usize>,
    phase: Phase,
}

impl CountingSort {
    /// Start a stream over a copy of `input`.
    #[must_use]
    pub fn new(input: &[u32]) -> Self {
        let max = input.iter().copied().max().unwrap_or(0) as usize;
        let phase = if input.is_empty() {
            Phase::Finish
        } else {
            Phase::Count { i: 0 }
        };
        Self {
            data: input.to_vec(),
            output: vec![0; input.len()],
            counts: vec![0; max + 1],
            phase,
        }
    }
}

impl Iterator for CountingSort {
    type Item = SortEvent;

    fn next(&mut self) -> Option<SortEvent> {
        loop {
            match self.phase {
                Phase::Count { i } => {
                    if i >= self.data.len() {
                        for v in 1..self.counts.len() {
                            self.counts[v] += self.counts[v - 1];
                        }
                        self.phase = Phase::Place {
                            pos: self.data.len(),
                        };
                        continue;
                    }
                    self.counts[self.data[i] as usize] += 1;
                    self.phase = Phase::Count { i: i + 1 };
                    return Some(SortEvent::update(i, self.data.clone()));
                }
                Phase::Place { pos } => {
                    if pos == 0 {
                        self.phase = Phase::CopyBack { i: 0 };
                        continue;
                    }
                    let i = pos - 1;
                    let value = self.data[i] as usize;
                    let slot = self.counts[value] - 1;
                    self.output[slot] = self.data[i];
                    self.counts[value] = slot;
                    self.phase = Phase::Place { pos: i };
                    return Some(SortEvent::update_pair(i, slot, self.data.clone()));
                }
                Phase::CopyBack { i } => {
                    if i >= self.data.len() {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    self.data[i] = self.output[i];
                    self.phase = Phase::CopyBack { i: i + 1 };
                    return Some(SortEvent::update(i, self.data.clone()));
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

impl std::iter::FusedIterator for CountingSort {}
