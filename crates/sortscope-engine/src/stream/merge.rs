#![forbid(unsafe_code)]

//! Top-down merge sort as an event stream.
//!
//! The recursion is simulated with an explicit frame stack so the sort can
//! suspend between events without holding a call stack: a `Split` frame
//! expands into its two halves plus a `Merge` frame, and the pop order
//! reproduces the left-first recursive schedule. Merging compares the run
//! heads, writes the smaller back, and drains whichever run remains.

use crate::event::SortEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Split { left: usize, right: usize },
    Merge { left: usize, mid: usize, right: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Emit the head-to-head comparison, or move to draining.
    Compare,
    /// Write the smaller head back and report it.
    Place,
    /// Copy whatever one run still holds.
    Drain,
}

#[derive(Debug, Clone)]
struct MergeState {
    left: usize,
    mid: usize,
    left_run: Vec<u32>,
    right_run: Vec<u32>,
    i: usize,
    j: usize,
    k: usize,
    stage: Stage,
}

impl MergeState {
    fn new(data: &[u32], left: usize, mid: usize, right: usize) -> Self {
        Self {
            left,
            mid,
            left_run: data[left..=mid].to_vec(),
            right_run: data[mid + 1..=right].to_vec(),
            i: 0,
            j: 0,
            k: left,
            stage: Stage::Compare,
        }
    }
}

enum MergeStep {
    Emit(SortEvent),
    Done,
}

fn advance_merge(m: &mut MergeState, data: &mut [u32]) -> MergeStep {
    loop {
        match m.stage {
            Stage::Compare => {
                if m.i < m.left_run.len() && m.j < m.right_run.len() {
                    m.stage = Stage::Place;
                    return MergeStep::Emit(SortEvent::compare(
                        m.left + m.i,
                        m.mid + 1 + m.j,
                        data.to_vec(),
                    ));
                }
                m.stage = Stage::Drain;
            }
            Stage::Place => {
                if m.left_run[m.i] <= m.right_run[m.j] {
                    data[m.k] = m.left_run[m.i];
                    m.i += 1;
                } else {
                    data[m.k] = m.right_run[m.j];
                    m.j += 1;
                }
                let written = m.k;
                m.k += 1;
                m.stage = Stage::Compare;
                return MergeStep::Emit(SortEvent::update(written, data.to_vec()));
            }
            Stage::Drain => {
                if m.i < m.left_run.len() {
                    data[m.k] = m.left_run[m.i];
                    m.i += 1;
                } else if m.j < m.right_run.len() {
                    data[m.k] = m.right_run[m.j];
                    m.j += 1;
                } else {
                    return MergeStep::Done;
                }
                let written = m.k;
                m.k += 1;
                return MergeStep::Emit(SortEvent::update(written, data.to_vec()));
            }
        }
    }
}

/// Merge sort over a private copy of the input.
#[derive(Debug, Clone)]
pub struct MergeSort {
    data: Vec<u32>,
    stack: Vec<Frame>,
    merge: Option<MergeState>,
    done: bool,
}

impl MergeSort {
    /// Start a stream over a copy of `input`.
    #[must_use]
    pub fn new(input: &[u32]) -> Self {
        let mut stack = Vec::new();
        if input.len() > 1 {
            stack.push(Frame::Split {
                left: 0,
                right: input.len() - 1,
            });
        }
        Self {
            data: input.to_vec(),
            stack,
            merge: None,
            done: false,
        }
    }
}

impl Iterator for MergeSort {
    type Item = SortEvent;

    fn next(&mut self) -> Option<SortEvent> {
        loop {
            if let Some(m) = self.merge.as_mut() {
                match advance_merge(m, &mut self.data) {
                    MergeStep::Emit(event) => return Some(event),
                    MergeStep::Done => self.merge = None,
                }
                continue;
            }
            match self.stack.pop() {
                Some(Frame::Split { left, right }) => {
                    if left < right {
                        let mid = left + (right - left) / 2;
                        self.stack.push(Frame::Merge { left, mid, right });
                        self.stack.push(Frame::Split {
                            left: mid + 1,
                            right,
                        });
                        self.stack.push(Frame::Split { left, right: mid });
                    }
                }
                Some(Frame::Merge { left, mid, right }) => {
                    self.merge = Some(MergeState::new(&self.data, left, mid, right));
                }
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

impl std::iter::FusedIterator for MergeSort {}
