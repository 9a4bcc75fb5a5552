#![forbid(unsafe_code)]

//! Quick sort as an event stream.
//!
//! Lomuto partitioning with the last element as pivot. The recursion is a
//! stack of pending ranges; partitioning a range compares every element
//! against the pivot, swaps the small ones down to the boundary (a swap is
//! reported even when an element swaps with itself), and finishes by
//! swapping the pivot into its final slot. The left partition is processed
//! before the right.

use crate::event::SortEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Emit the comparison of `j` against the pivot.
    Compare,
    /// Apply the outcome: swap below the boundary or move on.
    Decide,
    /// Swap the pivot into place and schedule the sub-ranges.
    Pivot,
}

#[derive(Debug, Clone, Copy)]
struct Partition {
    low: usize,
    high: usize,
    /// Next slot of the below-pivot region (Lomuto's `i + 1`).
    dest: usize,
    j: usize,
    stage: Stage,
}

impl Partition {
    fn new(low: usize, high: usize) -> Self {
        Self {
            low,
            high,
            dest: low,
            j: low,
            stage: Stage::Compare,
        }
    }
}

enum PartitionStep {
    Emit(SortEvent),
    /// The pivot swap: this partition is finished.
    Done(SortEvent),
}

fn advance_partition(
    p: &mut Partition,
    data: &mut Vec<u32>,
    stack: &mut Vec<(usize, usize)>,
) -> PartitionStep {
    loop {
        match p.stage {
            Stage::Compare => {
                if p.j < p.high {
                    p.stage = Stage::Decide;
                    return PartitionStep::Emit(SortEvent::compare(p.j, p.high, data.clone()));
                }
                p.stage = Stage::Pivot;
            }
            Stage::Decide => {
                p.stage = Stage::Compare;
                if data[p.j] < data[p.high] {
                    data.swap(p.dest, p.j);
                    let (a, b) = (p.dest, p.j);
                    p.dest += 1;
                    p.j += 1;
                    return PartitionStep::Emit(SortEvent::swap(a, b, data.clone()));
                }
                p.j += 1;
            }
            Stage::Pivot => {
                data.swap(p.dest, p.high);
                let pivot = p.dest;
                // Right range pushed first so the left pops first.
                if pivot + 1 < p.high {
                    stack.push((pivot + 1, p.high));
                }
                if pivot > p.low + 1 {
                    stack.push((p.low, pivot - 1));
                }
                return PartitionStep::Done(SortEvent::swap(pivot, p.high, data.clone()));
            }
        }
    }
}

/// Quick sort over a private copy of the input.
#[derive(Debug, Clone)]
pub struct QuickSort {
    data: Vec<u32>,
    /// Pending ranges, inclusive on both ends; only ranges of two or more
    /// elements are ever pushed.
    stack: Vec<(usize, usize)>,
    partition: Option<Partition>,
    done: bool,
}

impl QuickSort {
    /// Start a stream over a copy of `input`.
    #[must_use]
    pub fn new(input: &[u32]) -> Self {
        let mut stack = Vec::new();
        if input.len() > 1 {
            stack.push((0, input.len() - 1));
        }
        Self {
            data: input.to_vec(),
            stack,
            partition: None,
            done: false,
        }
    }
}

impl Iterator for QuickSort {
    type Item = SortEvent;

    fn next(&mut self) -> Option<SortEvent> {
        loop {
            if let Some(p) = self.partition.as_mut() {
                match advance_partition(p, &mut self.data, &mut self.stack) {
                    PartitionStep::Emit(event) => return Some(event),
                    PartitionStep::Done(event) => {
                        self.partition = None;
                        return Some(event);
                    }
                }
            }
            match self.stack.pop() {
                Some((low, high)) => self.partition = Some(Partition::new(low, high)),
                None => {
                    if self.done {
                        return None;
                    }
                    self.done = true;
                    return Some(SortEvent::complete(self.data.clone()));
                }
            }
        }
    }
}

impl std::iter::FusedIterator for QuickSort {}
