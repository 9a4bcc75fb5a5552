#![forbid(unsafe_code)]

//! Sort events: the observable steps a sort stream yields.
//!
//! Every significant step of a running sort is reported as a [`SortEvent`]
//! carrying the kind of step, the (up to two) array positions it touched,
//! and a full snapshot of the working array at that instant. Snapshots are
//! independently owned copies, so consumers may retain and diff past events
//! without racing later mutations.
//!
//! # Example
//! ```
//! use sortscope_engine::{Algorithm, SortEvent};
//!
//! let events: Vec<SortEvent> = Algorithm::Bubble.stream(&[2, 1]).collect();
//! assert!(events.last().is_some_and(SortEvent::is_complete));
//! assert_eq!(events.last().map(|e| e.snapshot.as_slice()), Some(&[1u32, 2][..]));
//! ```

/// The kind of step an event reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Two positions were compared. Never mutates the array.
    Compare,
    /// Two positions exchanged values. The snapshot reflects the state
    /// after the exchange.
    Swap,
    /// One position was overwritten (shift, placement, or bookkeeping
    /// write). The snapshot reflects the state after the write.
    Update,
    /// The sort finished; the snapshot is the fully sorted array.
    Complete,
}

/// Up to two array positions touched by an event, stored inline.
///
/// Positions keep the order the algorithm reported them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indices {
    slots: [usize; 2],
    len: u8,
}

impl Indices {
    /// No positions (used by [`EventKind::Complete`]).
    #[must_use]
    pub const fn none() -> Self {
        Self {
            slots: [0; 2],
            len: 0,
        }
    }

    /// A single position.
    #[must_use]
    pub const fn one(index: usize) -> Self {
        Self {
            slots: [index, 0],
            len: 1,
        }
    }

    /// An ordered pair of positions.
    #[must_use]
    pub const fn pair(first: usize, second: usize) -> Self {
        Self {
            slots: [first, second],
            len: 2,
        }
    }

    /// Number of positions held (0, 1, or 2).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether no positions are held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The positions as a slice, in reported order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.slots[..self.len as usize]
    }

    /// Whether `index` is one of the held positions.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.as_slice().contains(&index)
    }
}

impl<'a> IntoIterator for &'a Indices {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// One observable step of a sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEvent {
    /// What happened.
    pub kind: EventKind,
    /// The positions involved, valid into `snapshot`.
    pub indices: Indices,
    /// The working array immediately after this step.
    pub snapshot: Vec<u32>,
}

impl SortEvent {
    /// A comparison of two positions.
    #[must_use]
    pub fn compare(a: usize, b: usize, snapshot: Vec<u32>) -> Self {
        Self {
            kind: EventKind::Compare,
            indices: Indices::pair(a, b),
            snapshot,
        }
    }

    /// An exchange of two positions.
    #[must_use]
    pub fn swap(a: usize, b: usize, snapshot: Vec<u32>) -> Self {
        Self {
            kind: EventKind::Swap,
            indices: Indices::pair(a, b),
            snapshot,
        }
    }

    /// A single-position write.
    #[must_use]
    pub fn update(index: usize, snapshot: Vec<u32>) -> Self {
        Self {
            kind: EventKind::Update,
            indices: Indices::one(index),
            snapshot,
        }
    }

    /// A write reported against two positions (source and destination).
    #[must_use]
    pub fn update_pair(a: usize, b: usize, snapshot: Vec<u32>) -> Self {
        Self {
            kind: EventKind::Update,
            indices: Indices::pair(a, b),
            snapshot,
        }
    }

    /// The terminal event carrying the sorted array.
    #[must_use]
    pub fn complete(snapshot: Vec<u32>) -> Self {
        Self {
            kind: EventKind::Complete,
            indices: Indices::none(),
            snapshot,
        }
    }

    /// Whether this is the terminal event of a stream.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.kind == EventKind::Complete
    }

    /// Whether every held index is a valid position into the snapshot.
    #[must_use]
    pub fn indices_in_bounds(&self) -> bool {
        self.indices.as_slice().iter().all(|&i| i < self.snapshot.len())
    }
}
