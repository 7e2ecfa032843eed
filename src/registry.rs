//! Strategy registry for dynamic strategy discovery and execution.
//!
//! The three strategies consume different element types, so the registry
//! stores them behind an object-safe runner trait that owns the strategy
//! together with its input source.

use crate::error::Result;
use rand::rngs::StdRng;
use std::io::Write;

/// Trait that every registered strategy runner implements
pub trait StrategyRunner: Send + Sync {
    /// Name of the strategy (e.g., "x86_64-avx")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Lanes per vector step
    fn lanes(&self) -> usize;

    /// Code path selected on this machine
    fn backend(&self) -> &'static str;

    /// How the sweep inputs are generated
    fn input_description(&self) -> String;

    /// Run the size sweep, writing one line per sample to `out`.
    fn run_sweep(&self, sizes: &[usize], rng: &mut StdRng, out: &mut dyn Write) -> Result<()>;

    /// Verify correctness against the scalar reference
    fn verify(&self) -> Result<()>;
}

/// Registry of all strategies
pub struct StrategyRegistry {
    runners: Vec<Box<dyn StrategyRunner>>,
}

impl StrategyRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            runners: Vec::new(),
        }
    }

    /// Register a strategy runner
    pub fn register<R: StrategyRunner + 'static>(&mut self, runner: R) {
        self.runners.push(Box::new(runner));
    }

    /// Get all registered runners
    pub fn all(&self) -> &[Box<dyn StrategyRunner>] {
        &self.runners
    }

    /// Find runner by name
    pub fn find(&self, name: &str) -> Option<&dyn StrategyRunner> {
        self.runners
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.as_ref())
    }

    /// List runner names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.runners.iter().map(|r| r.name()).collect()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry: scalar, 8-lane, 4-lane fused dot
pub fn build_registry() -> StrategyRegistry {
    use crate::math::dot_product::{DotProductRunner, NarrowDpps, Scalar, WideAvx};
    use crate::utils::bench::{ConstantFloats, UniformInts};

    let mut registry = StrategyRegistry::new();

    registry.register(DotProductRunner::new(Scalar, UniformInts::default()));
    registry.register(DotProductRunner::new(WideAvx, UniformInts::default()));
    registry.register(DotProductRunner::new(NarrowDpps, ConstantFloats::default()));

    registry
}
