//! Narrow (4-lane) SIMD implementation using the fused dot instruction.
//!
//! Each step multiplies four lane pairs and sums them inside a single
//! `DPPS` instruction. With mask `0xFF` the sum is broadcast into every
//! lane, so after the loop lane 0 already holds the partial sum.

use super::{DotProduct, InputPair, LaneSplit};

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Lanes per vector step
pub const LANES: usize = 4;

/// All four products in, sum out to all four lanes.
#[cfg(target_arch = "x86_64")]
const DP_MASK: i32 = 0xFF;

/// One fused step: `(p0 + p1) + (p2 + p3)`, the order `DPPS` adds in.
#[inline(always)]
fn fused_dot(a: &[f32], b: &[f32]) -> f32 {
    let p0 = a[0] * b[0];
    let p1 = a[1] * b[1];
    let p2 = a[2] * b[2];
    let p3 = a[3] * b[3];
    (p0 + p1) + (p2 + p3)
}

#[inline(always)]
fn finish_tail(pair: InputPair<'_, f32>, split: LaneSplit, partial: f32) -> f32 {
    let (a, b) = pair.tail(split);
    a.iter().zip(b).fold(partial, |acc, (&x, &y)| acc + x * y)
}

/// Compute the dot product with an emulated 4-lane fused-dot accumulator.
pub fn dot_product_lanes4(pair: InputPair<'_, f32>) -> f32 {
    let split = pair.split(LANES);
    let body = split.body_len();

    let mut acc = [0.0f32; LANES];
    let a_chunks = pair.left()[..body].chunks_exact(LANES);
    let b_chunks = pair.right()[..body].chunks_exact(LANES);
    for (a_chunk, b_chunk) in a_chunks.zip(b_chunks) {
        let dp = fused_dot(a_chunk, b_chunk);
        for lane in acc.iter_mut() {
            *lane += dp;
        }
    }

    finish_tail(pair, split, acc[0])
}

/// Compute the dot product using SSE4.1 `DPPS`.
///
/// # Safety
/// The caller must ensure the CPU supports SSE4.1.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse4.1")]
unsafe fn dot_product_x86_64_sse41(pair: InputPair<'_, f32>) -> f32 {
    let split = pair.split(LANES);
    let a = pair.left().as_ptr();
    let b = pair.right().as_ptr();

    let mut sum_vec = _mm_setzero_ps();

    for i in 0..split.chunks {
        let idx = i * LANES;
        let a_vec = _mm_loadu_ps(a.add(idx));
        let b_vec = _mm_loadu_ps(b.add(idx));
        let dp = _mm_dp_ps::<DP_MASK>(a_vec, b_vec);
        sum_vec = _mm_add_ps(sum_vec, dp);
    }

    // Every lane holds the same value; take lane 0
    let partial = _mm_cvtss_f32(sum_vec);

    finish_tail(pair, split, partial)
}

fn sse41_available() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        is_x86_feature_detected!("sse4.1")
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        false
    }
}

/// 4-lane fused-dot strategy over `f32` inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NarrowDpps;

impl DotProduct for NarrowDpps {
    type Elem = f32;
    const LANES: usize = LANES;

    fn name(&self) -> &'static str {
        "x86_64-sse41-dpps"
    }

    fn description(&self) -> &'static str {
        "4 f32 lanes: fused DPPS multiply + horizontal add, lane 0, scalar tail"
    }

    fn backend(&self) -> &'static str {
        if sse41_available() {
            "sse4.1"
        } else {
            "portable"
        }
    }

    fn compute(&self, pair: InputPair<'_, f32>) -> f64 {
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("sse4.1") {
                // Safety: SSE4.1 confirmed available by runtime check.
                return f64::from(unsafe { dot_product_x86_64_sse41(pair) });
            }
        }
        f64::from(dot_product_lanes4(pair))
    }
}
