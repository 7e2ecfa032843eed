//! Shared benchmark utilities.
//!
//! The fixed size sweep, input generation and the per-size sample record.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// First size of the sweep
pub const SWEEP_START: usize = 16;

/// Last size of the sweep (inclusive)
pub const SWEEP_END: usize = 65536;

/// Sizes 16, 32, 64, ..., 65536.
pub fn sweep_sizes() -> Vec<usize> {
    std::iter::successors(Some(SWEEP_START), |&size| size.checked_mul(2))
        .take_while(|&size| size <= SWEEP_END)
        .collect()
}

/// Build the input generator.
///
/// With a seed the run is reproducible; without one the generator is
/// seeded from OS entropy and every run sees different data.
pub fn input_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Produces the two input sequences for one sweep sample.
pub trait InputSource<T>: Send + Sync {
    /// Short description for the report
    fn describe(&self) -> String;

    /// Generate two sequences of `size` elements.
    fn generate_pair(&self, size: usize, rng: &mut StdRng) -> (Vec<T>, Vec<T>);
}

/// Integers drawn uniformly from `[low, high)`.
#[derive(Clone, Copy, Debug)]
pub struct UniformInts {
    pub low: i32,
    pub high: i32,
}

impl UniformInts {
    pub fn generate(&self, size: usize, rng: &mut StdRng) -> Vec<i32> {
        (0..size).map(|_| rng.random_range(self.low..self.high)).collect()
    }
}

impl Default for UniformInts {
    fn default() -> Self {
        Self { low: 0, high: 99 }
    }
}

impl InputSource<i32> for UniformInts {
    fn describe(&self) -> String {
        format!("uniform integers in [{}, {})", self.low, self.high)
    }

    fn generate_pair(&self, size: usize, rng: &mut StdRng) -> (Vec<i32>, Vec<i32>) {
        let a = self.generate(size, rng);
        let b = self.generate(size, rng);
        (a, b)
    }
}

/// Every element of the first sequence is `first`, of the second `second`.
#[derive(Clone, Copy, Debug)]
pub struct ConstantFloats {
    pub first: f32,
    pub second: f32,
}

impl Default for ConstantFloats {
    fn default() -> Self {
        Self {
            first: 1.0,
            second: 2.0,
        }
    }
}

impl InputSource<f32> for ConstantFloats {
    fn describe(&self) -> String {
        format!("constant floats {} and {}", self.first, self.second)
    }

    fn generate_pair(&self, size: usize, _rng: &mut StdRng) -> (Vec<f32>, Vec<f32>) {
        (vec![self.first; size], vec![self.second; size])
    }
}

/// One timed kernel call.
#[derive(Clone, Copy, Debug)]
pub struct BenchmarkSample {
    /// Input length
    pub size: usize,
    /// Wall-clock time of the single call
    pub elapsed: Duration,
    /// Value the kernel returned
    pub result: f64,
}

impl BenchmarkSample {
    /// Elapsed time in whole microseconds.
    pub fn micros(&self) -> u128 {
        self.elapsed.as_micros()
    }
}

/// Relative error of `value` against `reference` (absolute near zero).
pub fn relative_error(value: f64, reference: f64) -> f64 {
    let diff = (value - reference).abs();
    if reference.abs() > 1e-9 {
        diff / reference.abs()
    } else {
        diff
    }
}
