//! Wide (8-lane) SIMD implementation.
//!
//! Integer inputs are converted to `f32` lanes, multiplied and added into an
//! 8-lane accumulator with separate multiply and add steps (no FMA). The
//! accumulator is then reduced lane 0 through lane 7, strictly left to
//! right, and the 0-7 trailing elements are finished with scalar `f32`
//! arithmetic.
//!
//! The AVX path is selected at runtime. Every other machine runs the
//! portable lane emulation, which performs the same operations in the same
//! order and therefore returns bit-identical results.

use super::{DotProduct, InputPair, LaneSplit};

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Lanes per vector step
pub const LANES: usize = 8;

/// Sum the accumulator lanes from lane 0 to lane 7, left to right.
#[inline(always)]
fn horizontal_sum(lanes: &[f32; LANES]) -> f32 {
    lanes[1..].iter().fold(lanes[0], |acc, &lane| acc + lane)
}

#[inline(always)]
fn finish_tail(pair: InputPair<'_, i32>, split: LaneSplit, partial: f32) -> f32 {
    let (a, b) = pair.tail(split);
    a.iter()
        .zip(b)
        .fold(partial, |acc, (&x, &y)| acc + x as f32 * y as f32)
}

/// Compute the dot product with an emulated 8-lane accumulator.
pub fn dot_product_lanes8(pair: InputPair<'_, i32>) -> f32 {
    let split = pair.split(LANES);
    let body = split.body_len();

    let mut acc = [0.0f32; LANES];
    let a_chunks = pair.left()[..body].chunks_exact(LANES);
    let b_chunks = pair.right()[..body].chunks_exact(LANES);
    for (a_chunk, b_chunk) in a_chunks.zip(b_chunks) {
        for ((lane, &x), &y) in acc.iter_mut().zip(a_chunk).zip(b_chunk) {
            let prod = x as f32 * y as f32;
            *lane += prod;
        }
    }

    finish_tail(pair, split, horizontal_sum(&acc))
}

/// Compute the dot product using AVX instructions.
///
/// # Safety
/// The caller must ensure the CPU supports AVX.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx")]
unsafe fn dot_product_x86_64_avx(pair: InputPair<'_, i32>) -> f32 {
    let split = pair.split(LANES);
    let a = pair.left().as_ptr();
    let b = pair.right().as_ptr();

    let mut sum_vec = _mm256_setzero_ps();

    for i in 0..split.chunks {
        let idx = i * LANES;
        // Unaligned load of 8 i32, converted to 8 f32
        let a_vec = _mm256_cvtepi32_ps(_mm256_loadu_si256(a.add(idx).cast::<__m256i>()));
        let b_vec = _mm256_cvtepi32_ps(_mm256_loadu_si256(b.add(idx).cast::<__m256i>()));

        let prod = _mm256_mul_ps(a_vec, b_vec);
        sum_vec = _mm256_add_ps(sum_vec, prod);
    }

    let mut lanes = [0.0f32; LANES];
    _mm256_storeu_ps(lanes.as_mut_ptr(), sum_vec);

    finish_tail(pair, split, horizontal_sum(&lanes))
}

fn avx_available() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        is_x86_feature_detected!("avx")
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        false
    }
}

/// 8-lane strategy over `i32` inputs.
///
/// Matches the scalar strategy exactly only while every product and partial
/// sum fits in f32's 24-bit mantissa (|value| <= 2^24).
#[derive(Clone, Copy, Debug, Default)]
pub struct WideAvx;

impl DotProduct for WideAvx {
    type Elem = i32;
    const LANES: usize = LANES;

    fn name(&self) -> &'static str {
        "x86_64-avx"
    }

    fn description(&self) -> &'static str {
        "8 f32 lanes: vector multiply + add, left-to-right lane sum, scalar tail"
    }

    fn backend(&self) -> &'static str {
        if avx_available() {
            "avx"
        } else {
            "portable"
        }
    }

    fn compute(&self, pair: InputPair<'_, i32>) -> f64 {
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("avx") {
                // Safety: AVX confirmed available by runtime check.
                return f64::from(unsafe { dot_product_x86_64_avx(pair) });
            }
        }
        f64::from(dot_product_lanes8(pair))
    }
}
