//! Single-shot sweep driver for dot product strategies.
//!
//! For every size: fresh inputs, exactly one timed call, one output line.
//! No warmup, no repetition, no aggregation.

use super::code::DotProduct;
use crate::error::Result;
use crate::utils::bench::{BenchmarkSample, InputSource};
use crate::utils::cpu_affinity::CpuPinGuard;
use crate::utils::tui::format_sample;
use rand::rngs::StdRng;
use std::hint::black_box;
use std::io::Write;
use std::time::Instant;

/// Time a single call of `strategy` on `a` and `b`.
///
/// The length check runs inside the timed region, as part of the call.
pub fn measure_once<S: DotProduct>(
    strategy: &S,
    a: &[S::Elem],
    b: &[S::Elem],
) -> Result<BenchmarkSample> {
    let (result, elapsed) = {
        let _pin = CpuPinGuard::new();
        let start = Instant::now();
        let result = strategy.dot(black_box(a), black_box(b));
        (result, start.elapsed())
    };
    let result = black_box(result?);

    Ok(BenchmarkSample {
        size: a.len(),
        elapsed,
        result,
    })
}

/// Warning text for a SIMD strategy running its portable lane emulation.
pub fn portable_fallback_warning<S: DotProduct>(strategy: &S) -> Option<String> {
    (S::LANES > 1 && strategy.backend() == "portable").then(|| {
        format!(
            "'{}' has no hardware support here, timing the portable {}-lane emulation",
            strategy.name(),
            S::LANES
        )
    })
}

/// Sweep `sizes`, generating inputs from `source` and writing each sample.
pub fn run_sweep<S, G>(
    strategy: &S,
    source: &G,
    sizes: &[usize],
    rng: &mut StdRng,
    out: &mut dyn Write,
) -> Result<()>
where
    S: DotProduct,
    G: InputSource<S::Elem> + ?Sized,
{
    log::info!(
        "sweeping '{}' ({} backend) over {} sizes",
        strategy.name(),
        strategy.backend(),
        sizes.len()
    );
    if let Some(warning) = portable_fallback_warning(strategy) {
        log::warn!("{}", warning);
    }

    for &size in sizes {
        let (a, b) = source.generate_pair(size, rng);
        let sample = measure_once(strategy, &a, &b)?;
        log::debug!(
            "{}: size={} elapsed={:?} result={}",
            strategy.name(),
            sample.size,
            sample.elapsed,
            sample.result
        );
        writeln!(out, "{}", format_sample(&sample))?;
    }

    out.flush()?;
    Ok(())
}
