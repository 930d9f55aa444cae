//! Deterministic fractal Perlin noise fields.
//!
//! The kernel is a seed-keyed integer hash feeding a precomputed table of
//! unit gradient vectors, combined by classic 2D Perlin interpolation and
//! summed over octaves. Every function is pure: the same seed and
//! coordinates always produce the same value, and the only shared state is
//! the read-only gradient table.

pub mod field;
pub mod fractal;
pub mod gradient;
pub mod hash;
pub mod perlin;

pub use field::{Field, FieldConfig};
pub use fractal::{fractal_noise_2d, FractalParams};
pub use hash::{integer_hash, integer_hash_2d, integer_hash_3d};
pub use perlin::perlin_noise_2d;
