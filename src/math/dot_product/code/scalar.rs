//! Scalar (reference) implementation of the dot product.
//!
//! This is a plain multiply-accumulate loop that serves as the baseline
//! for correctness and performance comparison.

use super::{DotProduct, InputPair};

/// Compute the dot product of two integer vectors.
///
/// Each product is formed exactly in `i64` and accumulated in `f64`.
///
/// # Example
/// ```
/// use simd_dot_bench::math::dot_product::{dot_product_scalar, InputPair};
///
/// let a = [1, 2, 3, 4, 5];
/// let b = [5, 4, 3, 2, 1];
/// let pair = InputPair::new(&a, &b).unwrap();
/// assert_eq!(dot_product_scalar(pair), 35.0);
/// ```
pub fn dot_product_scalar(pair: InputPair<'_, i32>) -> f64 {
    pair.left()
        .iter()
        .zip(pair.right())
        .fold(0.0, |acc, (&x, &y)| acc + (i64::from(x) * i64::from(y)) as f64)
}

/// Scalar strategy over `i32` inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scalar;

impl DotProduct for Scalar {
    type Elem = i32;
    const LANES: usize = 1;

    fn name(&self) -> &'static str {
        "scalar"
    }

    fn description(&self) -> &'static str {
        "Element-wise multiply-accumulate into an f64"
    }

    fn backend(&self) -> &'static str {
        "scalar"
    }

    fn compute(&self, pair: InputPair<'_, i32>) -> f64 {
        dot_product_scalar(pair)
    }
}
