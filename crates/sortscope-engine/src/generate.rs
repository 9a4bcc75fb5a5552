#![forbid(unsafe_code)]

//! Initial-array construction.
//!
//! [`generate`] builds the array a sort will animate over: the integers
//! `1..=size`, each exactly once, arranged per a [`Distribution`]. Sizes
//! below 1 are a precondition violation and are the caller's responsibility
//! to reject.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

/// Arrangement policy for a freshly generated array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Uniform-random permutation.
    Random,
    /// `1..=N` in order.
    Ascending,
    /// `N..=1`.
    Descending,
    /// Second half (ascending) followed by first half (ascending): the
    /// sorted array rotated left by `N / 2`.
    SplitAscending,
    /// Second half reversed, followed by first half reversed.
    SplitDescending,
}

impl Distribution {
    /// Every supported distribution, in presentation order.
    pub const ALL: [Distribution; 5] = [
        Distribution::Random,
        Distribution::Ascending,
        Distribution::Descending,
        Distribution::SplitAscending,
        Distribution::SplitDescending,
    ];
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Random => "Random",
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
            Self::SplitAscending => "Split Ascending",
            Self::SplitDescending => "Split Descending",
        };
        f.write_str(name)
    }
}

/// Error parsing a distribution name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDistributionError {
    name: String,
}

impl fmt::Display for ParseDistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown distribution: {:?}", self.name)
    }
}

impl std::error::Error for ParseDistributionError {}

impl FromStr for Distribution {
    type Err = ParseDistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Random" => Ok(Self::Random),
            "Ascending" => Ok(Self::Ascending),
            "Descending" => Ok(Self::Descending),
            "Split Ascending" => Ok(Self::SplitAscending),
            "Split Descending" => Ok(Self::SplitDescending),
            other => Err(ParseDistributionError {
                name: other.to_string(),
            }),
        }
    }
}

/// Generate `size` distinct integers `1..=size` arranged per `distribution`.
///
/// Random arrangements draw from the thread-local RNG; use [`generate_with`]
/// to supply a seeded RNG instead.
#[must_use]
pub fn generate(size: usize, distribution: Distribution) -> Vec<u32> {
    generate_with(size, distribution, &mut rand::rng())
}

/// [`generate`] with a caller-supplied RNG.
#[must_use]
pub fn generate_with(size: usize, distribution: Distribution, rng: &mut impl Rng) -> Vec<u32> {
    let base: Vec<u32> = (1..=size as u32).collect();
    let mid = size / 2;

    match distribution {
        Distribution::Random => shuffle(base, rng),
        Distribution::Ascending => base,
        Distribution::Descending => base.into_iter().rev().collect(),
        Distribution::SplitAscending => {
            let mut out = base[mid..].to_vec();
            out.extend_from_slice(&base[..mid]);
            out
        }
        Distribution::SplitDescending => {
            let mut out: Vec<u32> = base[mid..].iter().rev().copied().collect();
            out.extend(base[..mid].iter().rev().copied());
            out
        }
    }
}

/// Fisher–Yates: walk from the last index down, swapping each position with
/// a uniformly random position at or below it.
fn shuffle(mut array: Vec<u32>, rng: &mut impl Rng) -> Vec<u32> {
    for i in (1..array.len()).rev() {
        let j = rng.random_range(0..=i);
        array.swap(i, j);
    }
    array
}
