//! Dot product implementations.
//!
//! This module contains the three strategies and the pieces they share:
//! the validated input pair, the lane split and the strategy trait.

mod scalar;
mod x86_64_avx;
mod x86_64_sse41_dpps;

pub use scalar::{dot_product_scalar, Scalar};
pub use x86_64_avx::{dot_product_lanes8, WideAvx};
pub use x86_64_sse41_dpps::{dot_product_lanes4, NarrowDpps};

use crate::error::{Error, Result};

/// Element type a strategy consumes.
pub trait Element: Copy + Send + Sync + 'static {
    /// Convert an integer test value into this element type.
    fn from_sample(value: i32) -> Self;
}

impl Element for i32 {
    fn from_sample(value: i32) -> Self {
        value
    }
}

impl Element for f32 {
    fn from_sample(value: i32) -> Self {
        value as f32
    }
}

/// Two input sequences proven to have the same length.
///
/// Every kernel takes an `InputPair`, so length validation happens once,
/// up front, for all strategies.
#[derive(Clone, Copy, Debug)]
pub struct InputPair<'a, T> {
    left: &'a [T],
    right: &'a [T],
}

impl<'a, T> InputPair<'a, T> {
    /// Pair two sequences, rejecting unequal lengths.
    pub fn new(left: &'a [T], right: &'a [T]) -> Result<Self> {
        if left.len() != right.len() {
            return Err(Error::LengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        Ok(Self { left, right })
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn left(&self) -> &'a [T] {
        self.left
    }

    pub fn right(&self) -> &'a [T] {
        self.right
    }

    /// Split the pair's length into full lane groups and a tail.
    pub fn split(&self, lanes: usize) -> LaneSplit {
        LaneSplit::new(self.len(), lanes)
    }

    /// The elements not covered by full lane groups.
    pub fn tail(&self, split: LaneSplit) -> (&'a [T], &'a [T]) {
        let base = split.body_len();
        (&self.left[base..], &self.right[base..])
    }
}

/// Decomposition of a length into full lane groups plus a remainder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaneSplit {
    /// Number of full lane groups
    pub chunks: usize,
    /// Number of elements left over (always `< lanes`)
    pub tail: usize,
    lanes: usize,
}

impl LaneSplit {
    pub fn new(len: usize, lanes: usize) -> Self {
        assert!(lanes > 0, "lane width must be non-zero");
        Self {
            chunks: len / lanes,
            tail: len % lanes,
            lanes,
        }
    }

    /// Number of elements handled by the vector loop.
    pub fn body_len(&self) -> usize {
        self.chunks * self.lanes
    }
}

/// A dot-product strategy.
///
/// Implementors provide [`compute`](DotProduct::compute) on an already
/// validated pair; callers use [`dot`](DotProduct::dot) on raw slices.
pub trait DotProduct {
    /// Element type of both input sequences
    type Elem: Element;

    /// Number of lanes processed per vector step (1 for scalar)
    const LANES: usize;

    /// Name of this strategy (e.g. "x86_64-avx")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Which code path runs on this machine ("avx", "portable", ...)
    fn backend(&self) -> &'static str;

    /// Compute the dot product of a validated pair.
    fn compute(&self, pair: InputPair<'_, Self::Elem>) -> f64;

    /// Compute the dot product of two slices.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if the slices differ in length.
    fn dot(&self, a: &[Self::Elem], b: &[Self::Elem]) -> Result<f64> {
        InputPair::new(a, b).map(|pair| self.compute(pair))
    }
}
