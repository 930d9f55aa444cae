//! 2D Perlin noise on the unit lattice.

use crate::gradient::gradient;
use crate::hash::integer_hash_3d;
use glam::DVec2;
use std::f64::consts::SQRT_2;

/// Quintic fade curve `t³(6t² − 15t + 10)`; C2-continuous at 0 and 1.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (10.0 + t * (-15.0 + t * 6.0))
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Smooth gradient noise at `(x, y)` for the given seed.
///
/// Returns a value in approximately `[-1, 1]` (the raw interpolation range
/// scaled by `√2`). At exact integer coordinates the result is exactly `0.0`,
/// since the offset from the sample's own corner is the zero vector.
///
/// Requires `x >= 0.0 && y >= 0.0`. Coordinates are truncated toward zero to
/// find the lattice cell, which is only correct for non-negative inputs;
/// negative inputs produce silently folded values, never a panic.
pub fn perlin_noise_2d(seed: u64, x: f64, y: f64) -> f64 {
    let i = x as u64;
    let j = y as u64;
    let u = x - i as f64;
    let v = y - j as f64;

    // Corner gradients of the cell containing (x, y)
    let g00 = gradient(integer_hash_3d(seed, i, j));
    let g10 = gradient(integer_hash_3d(seed, i.wrapping_add(1), j));
    let g01 = gradient(integer_hash_3d(seed, i, j.wrapping_add(1)));
    let g11 = gradient(integer_hash_3d(seed, i.wrapping_add(1), j.wrapping_add(1)));

    // Dot of each gradient with the offset from its own corner
    let n00 = g00.dot(DVec2::new(u, v));
    let n10 = g10.dot(DVec2::new(u - 1.0, v));
    let n01 = g01.dot(DVec2::new(u, v - 1.0));
    let n11 = g11.dot(DVec2::new(u - 1.0, v - 1.0));

    let tu = fade(u);
    let n0 = lerp(n00, n10, tu);
    let n1 = lerp(n01, n11, tu);
    let tv = fade(v);
    SQRT_2 * lerp(n0, n1, tv)
}
