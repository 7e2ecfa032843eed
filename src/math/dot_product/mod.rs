//! # Dot Product Algorithm
//!
//! The dot product (also known as scalar product) computes the sum of products
//! of corresponding elements in two vectors:
//!
//! `dot(a, b) = Σ(a[i] * b[i])`
//!
//! ## Strategies
//!
//! - **scalar**: one element per step, `f64` accumulator
//! - **x86_64-avx**: 8 `f32` lanes, vector multiply + add, left-to-right lane sum
//! - **x86_64-sse41-dpps**: 4 `f32` lanes, fused `DPPS` multiply + horizontal add
//!
//! Both SIMD strategies finish the elements that do not fill a whole lane
//! group with scalar arithmetic.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::error::{Error, Result};
use crate::registry::StrategyRunner;
use crate::utils::bench::{input_rng, relative_error, InputSource, UniformInts};
use rand::rngs::StdRng;
use std::io::Write;

/// Length used by `verify`, deliberately not a multiple of 8 or 4
const VERIFY_SIZE: usize = 1023;

/// Fixed seed so verification is deterministic
const VERIFY_SEED: u64 = 0x5EED_D07;

/// Maximum relative error allowed against the scalar reference
pub const TOLERANCE: f64 = 1e-3;

/// A strategy paired with the input source its sweep uses.
pub struct DotProductRunner<S, G> {
    strategy: S,
    source: G,
}

impl<S, G> DotProductRunner<S, G>
where
    S: DotProduct,
    G: InputSource<S::Elem>,
{
    pub fn new(strategy: S, source: G) -> Self {
        Self { strategy, source }
    }
}

impl<S, G> StrategyRunner for DotProductRunner<S, G>
where
    S: DotProduct + Send + Sync,
    G: InputSource<S::Elem>,
{
    fn name(&self) -> &'static str {
        self.strategy.name()
    }

    fn description(&self) -> &'static str {
        self.strategy.description()
    }

    fn lanes(&self) -> usize {
        S::LANES
    }

    fn backend(&self) -> &'static str {
        self.strategy.backend()
    }

    fn input_description(&self) -> String {
        self.source.describe()
    }

    fn run_sweep(&self, sizes: &[usize], rng: &mut StdRng, out: &mut dyn Write) -> Result<()> {
        bench::run_sweep(&self.strategy, &self.source, sizes, rng, out)
    }

    fn verify(&self) -> Result<()> {
        let mut rng = input_rng(Some(VERIFY_SEED));
        let (a, b) = UniformInts::default().generate_pair(VERIFY_SIZE, &mut rng);

        let expected = Scalar.dot(&a, &b)?;

        let a: Vec<S::Elem> = a.into_iter().map(<S::Elem as Element>::from_sample).collect();
        let b: Vec<S::Elem> = b.into_iter().map(<S::Elem as Element>::from_sample).collect();
        let result = self.strategy.dot(&a, &b)?;

        let err = relative_error(result, expected);
        if err > TOLERANCE {
            return Err(Error::Verification(format!(
                "'{}' expected {}, got {}, relative error {:.2e}",
                self.strategy.name(),
                expected,
                result,
                err
            )));
        }

        log::debug!("'{}' verified, relative error {:.2e}", self.strategy.name(), err);
        Ok(())
    }
}
