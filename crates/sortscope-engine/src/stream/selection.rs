#![forbid(unsafe_code)]

//! Selection sort as an event stream.
//!
//! Each outer round scans the unsorted suffix for its minimum, comparing
//! the running minimum against every candidate, then swaps it into place,
//! but only when the minimum actually moved.

use crate::event::SortEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Scan,
    Settle,
    Finish,
    Fused,
}

/// Selection sort over a private copy of the input.
#[derive(Debug, Clone)]
pub struct SelectionSort {
    data: Vec<u32>,
    i: usize,
    j: usize,
    min_index: usize,
    phase: Phase,
}

impl SelectionSort {
    /// Start a stream over a copy of `input`.
    #[must_use]
    pub fn new(input: &[u32]) -> Self {
        Self {
            data: input.to_vec(),
            i: 0,
            j: 1,
            min_index: 0,
            phase: Phase::Scan,
        }
    }
}

impl Iterator for SelectionSort {
    type Item = SortEvent;

    fn next(&mut self) -> Option<SortEvent> {
        loop {
            match self.phase {
                Phase::Scan => {
                    let n = self.data.len();
                    if n < 2 || self.i + 1 >= n {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    if self.j >= n {
                        // Round done; place the minimum if it moved.
                        let (round, min_index) = (self.i, self.min_index);
                        self.i += 1;
                        self.min_index = self.i;
                        self.j = self.i + 1;
                        if min_index != round {
                            self.data.swap(round, min_index);
                            return Some(SortEvent::swap(round, min_index, self.data.clone()));
                        }
                        continue;
                    }
                    self.phase = Phase::Settle;
                    return Some(SortEvent::compare(
                        self.min_index,
                        self.j,
                        self.data.clone(),
                    ));
                }
                Phase::Settle => {
                    if self.data[self.j] < self.data[self.min_index] {
                        self.min_index = self.j;
                    }
                    self.j += 1;
                    self.phase = Phase::Scan;
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

impl std::iter::FusedIterator for SelectionSort {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    fn drain(input: &[u32]) -> Vec<SortEvent> {
        SelectionSort::new(input).collect()
    }

    #[test]
    fn sorts_and_completes() {
        let events = drain(&[4, 1, 3, 2]);
        let last = events.last().unwrap();
        assert!(last.is_complete());
        assert_eq!(last.snapshot, vec![1, 2, 3, 4]);
    }

    #[test]
    fn comparison_count_is_quadratic_regardless_of_order() {
        // n(n-1)/2 comparisons, whatever the arrangement.
        for input in [[1u32, 2, 3, 4, 5], [5, 4, 3, 2, 1], [2, 4, 1, 5, 3]] {
            let comparisons = drain(&input)
                .iter()
                .filter(|e| e.kind == EventKind::Compare)
                .count();
            assert_eq!(comparisons, 10);
        }
    }

    #[test]
    fn sorted_input_swaps_nothing() {
        let events = drain(&[1, 2, 3, 4, 5]);
        assert!(events.iter().all(|e| e.kind != EventKind::Swap));
    }

    #[test]
    fn comparison_tracks_running_minimum() {
        let events = drain(&[3, 1, 2]);
        // First compare is (0, 1); 1 becomes the minimum, so the second
        // compare is (1, 2).
        assert_eq!(events[0].indices.as_slice(), &[0, 1]);
        assert_eq!(events[1].indices.as_slice(), &[1, 2]);
        // Round ends with the swap that places the minimum.
        assert_eq!(events[2].kind, EventKind::Swap);
        assert_eq!(events[2].indices.as_slice(), &[0, 1]);
    }

    #[test]
    fn single_element_completes_immediately() {
        let events = drain(&[1]);
        assert_eq!(events.len(), 1);
        assert!(events[0].is_complete());
    }
}
