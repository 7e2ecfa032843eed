//! # SIMD Dot-Product Bench
//!
//! Three strategies for the same dot-product contract (scalar, 8-lane
//! vector multiply + add, 4-lane fused dot) and a single-shot size sweep
//! that times each of them.

pub mod error;
pub mod math;
pub mod registry;
pub mod utils;

pub use error::{Error, Result};

/// Re-export tui from utils
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::math::dot_product::{DotProduct, InputPair, NarrowDpps, Scalar, WideAvx};
    pub use crate::registry::{build_registry, StrategyRegistry, StrategyRunner};
}
