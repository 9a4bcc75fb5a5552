#![forbid(unsafe_code)]

//! The algorithm registry: a closed enumeration of every selectable
//! algorithm and the dispatch that turns one into a running stream.
//!
//! Several identifiers are selectable but do not yet have a distinct
//! implementation; they run the bubble-sort stream instead.
//! [`Algorithm::is_fallback`] reports which ones.

use std::fmt;
use std::str::FromStr;

use crate::stream::{
    BubbleSort, CountingSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort,
    SortStream,
};

/// A selectable sorting algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
    Bucket,
    Shell,
    Tim,
    Comb,
    Pigeonhole,
    Cycle,
    Strand,
    Bitonic,
    Pancake,
    Bogo,
    Gnome,
    Stooge,
    OddEven,
}

impl Algorithm {
    /// Every selectable algorithm, in presentation order.
    pub const ALL: [Algorithm; 21] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Bucket,
        Algorithm::Shell,
        Algorithm::Tim,
        Algorithm::Comb,
        Algorithm::Pigeonhole,
        Algorithm::Cycle,
        Algorithm::Strand,
        Algorithm::Bitonic,
        Algorithm::Pancake,
        Algorithm::Bogo,
        Algorithm::Gnome,
        Algorithm::Stooge,
        Algorithm::OddEven,
    ];

    /// Start a stream sorting a private copy of `input`.
    #[must_use]
    pub fn stream(self, input: &[u32]) -> SortStream {
        match self {
            Self::Bubble => SortStream::Bubble(BubbleSort::new(input)),
            Self::Selection => SortStream::Selection(SelectionSort::new(input)),
            Self::Insertion => SortStream::Insertion(InsertionSort::new(input)),
            Self::Merge => SortStream::Merge(MergeSort::new(input)),
            Self::Quick => SortStream::Quick(QuickSort::new(input)),
            Self::Heap => SortStream::Heap(HeapSort::new(input)),
            Self::Counting => SortStream::Counting(CountingSort::new(input)),
            // Not yet implemented distinctly; run the bubble stream.
            Self::Radix
            | Self::Bucket
            | Self::Shell
            | Self::Tim
            | Self::Comb
            | Self::Pigeonhole
            | Self::Cycle
            | Self::Strand
            | Self::Bitonic
            | Self::Pancake
            | Self::Bogo
            | Self::Gnome
            | Self::Stooge
            | Self::OddEven => SortStream::Bubble(BubbleSort::new(input)),
        }
    }

    /// Whether this identifier currently runs the bubble-sort stream
    /// instead of a distinct implementation.
    #[must_use]
    pub fn is_fallback(self) -> bool {
        !matches!(
            self,
            Self::Bubble
                | Self::Selection
                | Self::Insertion
                | Self::Merge
                | Self::Quick
                | Self::Heap
                | Self::Counting
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
            Self::Counting => "Counting Sort",
            Self::Radix => "Radix Sort",
            Self::Bucket => "Bucket Sort",
            Self::Shell => "Shell Sort",
            Self::Tim => "Tim Sort",
            Self::Comb => "Comb Sort",
            Self::Pigeonhole => "Pigeonhole Sort",
            Self::Cycle => "Cycle Sort",
            Self::Strand => "Strand Sort",
            Self::Bitonic => "Bitonic Sort",
            Self::Pancake => "Pancake Sort",
            Self::Bogo => "Bogo Sort",
            Self::Gnome => "Gnome Sort",
            Self::Stooge => "Stooge Sort",
            Self::OddEven => "Odd-Even Sort",
        };
        f.write_str(name)
    }
}

/// Error parsing an algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    name: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm: {:?}", self.name)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.to_string() == s)
            .ok_or_else(|| ParseAlgorithmError {
                name: s.to_string(),
            })
    }
}
