#![forbid(unsafe_code)]

//! Step-generation engine for animated sorting.
//!
//! Instead of sorting in place and returning, every algorithm here runs as
//! a [`SortStream`]: a suspendable state machine that yields one
//! [`SortEvent`] per significant step (a comparison, a swap, a write, and
//! finally completion), each carrying a full snapshot of the working array.
//! A driver (see the `sortscope-playback` crate) draws events at its own
//! pace; between draws the sort is simply suspended data.
//!
//! [`generate`] builds the input arrays and [`Algorithm`] is the closed
//! registry of selectable sorts.
//!
//! # Example
//! ```
//! use sortscope_engine::{Algorithm, Distribution, EventKind, generate};
//!
//! let input = generate(8, Distribution::Descending);
//! let events: Vec<_> = Algorithm::Insertion.stream(&input).collect();
//!
//! assert_eq!(events.last().unwrap().kind, EventKind::Complete);
//! assert_eq!(events.last().unwrap().snapshot, generate(8, Distribution::Ascending));
//! ```

mod algorithm;
mod event;
mod generate;
mod stream;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use event::{EventKind, Indices, SortEvent};
pub use generate::{Distribution, ParseDistributionError, generate, generate_with};
pub use stream::{
    BubbleSort, CountingSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort,
    SortStream,
};
