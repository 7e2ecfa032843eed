//! Utility modules for input generation, timing and output.

pub mod bench;
pub mod cpu_affinity;
pub mod tui;

// Re-export commonly used items
pub use bench::{
    input_rng, relative_error, sweep_sizes, BenchmarkSample, ConstantFloats, InputSource,
    UniformInts, SWEEP_END, SWEEP_START,
};
pub use cpu_affinity::CpuPinGuard;
