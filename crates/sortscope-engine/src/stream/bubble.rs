#![forbid(unsafe_code)]

//! Bubble sort as an event stream.
//!
//! Pass `i` walks `j` over the unsorted prefix, comparing each adjacent
//! pair before (possibly) exchanging it. Each pass floats the largest
//! remaining element to the end.

use crate::event::SortEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Position the scan and emit the next comparison.
    Scan,
    /// Apply the outcome of the comparison just emitted.
    Settle,
    /// Emit the terminal event.
    Finish,
    /// Exhausted.
    Fused,
}

/// Bubble sort over a private copy of the input.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    data: Vec<u32>,
    i: usize,
    j: usize,
    phase: Phase,
}

impl BubbleSort {
    /// Start a stream over a copy of `input`.
    #[must_use]
    pub fn new(input: &[u32]) -> Self {
        Self {
            data: input.to_vec(),
            i: 0,
            j: 0,
            phase: Phase::Scan,
        }
    }
}

impl Iterator for BubbleSort {
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
                    if self.j + 1 >= n - self.i {
                        // Pass done; the tail is settled.
                        self.i += 1;
                        self.j = 0;
                        continue;
                    }
                    self.phase = Phase::Settle;
                    return Some(SortEvent::compare(self.j, self.j + 1, self.data.clone()));
                }
                Phase::Settle => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = Phase::Scan;
                    if self.data[j] > self.data[j + 1] {
                        self.data.swap(j, j + 1);
                        return Some(SortEvent::swap(j, j + 1, self.data.clone()));
                    }
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

impl std::iter::FusedIterator for BubbleSort {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    fn drain(input: &[u32]) -> Vec<SortEvent> {
        BubbleSort::new(input).collect()
    }

    #[test]
    fn sorts_and_completes() {
        let events = drain(&[5, 3, 4, 1, 2]);
        let last = events.last().unwrap();
        assert_eq!(last.kind, EventKind::Complete);
        assert_eq!(last.snapshot, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn reversed_five_elements_take_ten_comparisons() {
        let events = drain(&[5, 4, 3, 2, 1]);
        let comparisons = events
            .iter()
            .filter(|e| e.kind == EventKind::Compare)
            .count();
        assert_eq!(comparisons, 10);
    }

    #[test]
    fn sorted_input_swaps_nothing() {
        let events = drain(&[1, 2, 3, 4]);
        assert!(events.iter().all(|e| e.kind != EventKind::Swap));
        // Comparisons still run every pass.
        let comparisons = events
            .iter()
            .filter(|e| e.kind == EventKind::Compare)
            .count();
        assert_eq!(comparisons, 6);
    }

    #[test]
    fn comparison_comes_before_its_swap() {
        let events = drain(&[2, 1]);
        assert_eq!(events[0].kind, EventKind::Compare);
        assert_eq!(events[0].indices.as_slice(), &[0, 1]);
        assert_eq!(events[1].kind, EventKind::Swap);
        assert_eq!(events[1].snapshot, vec![1, 2]);
    }

    #[test]
    fn single_element_completes_immediately() {
        let events = drain(&[9]);
        assert_eq!(events.len(), 1);
        assert!(events[0].is_complete());
    }

    #[test]
    fn empty_input_completes_immediately() {
        let events = drain(&[]);
        assert_eq!(events.len(), 1);
        assert!(events[0].is_complete());
    }

    #[test]
    fn fused_after_complete() {
        let mut stream = BubbleSort::new(&[2, 1]);
        while stream.next().is_some() {}
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }
}
