//! Precomputed table of unit gradient directions.

use glam::DVec2;
use std::f64::consts::TAU;
use std::sync::LazyLock;

/// Number of gradient directions. Determines the angular resolution of the
/// noise; output values depend on it numerically, so it is fixed.
pub const GRADIENT_COUNT: usize = 128;

/// Unit vectors `(cos θ, sin θ)` for `θ = 2π·k / GRADIENT_COUNT`, built once
/// on first use and read-only for the process lifetime.
static GRADIENTS: LazyLock<[DVec2; GRADIENT_COUNT]> = LazyLock::new(|| {
    std::array::from_fn(|k| {
        let angle = TAU * k as f64 / GRADIENT_COUNT as f64;
        DVec2::new(angle.cos(), angle.sin())
    })
});

/// Look up a gradient by hash value. The index is reduced modulo
/// [`GRADIENT_COUNT`], so any u64 is a valid input.
#[inline]
pub fn gradient(hash: u64) -> DVec2 {
    GRADIENTS[(hash % GRADIENT_COUNT as u64) as usize]
}
