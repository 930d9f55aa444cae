//! Seedable integer hashing.
//!
//! One additive round followed by three xorshift/multiply rounds with fixed
//! finalizer constants. All arithmetic wraps mod 2^64; any input is valid.
//! Field values are a pure function of the constants, so they must never
//! change; the known-answer tests pin them.

/// Hash a u64 to a well-distributed u64 (avalanche mixer).
#[inline]
pub const fn integer_hash(mut i: u64) -> u64 {
    i = i.wrapping_add(0x62a9_d9ed_7997_05f5);
    i ^= i >> 33;
    i = i.wrapping_mul(0x4be9_8134_a597_6fd3);
    i ^= i >> 33;
    i = i.wrapping_mul(0x3bc0_993a_5ad1_9a13);
    i ^= i >> 33;
    i
}

/// Hash a pair of integers: `integer_hash(i + integer_hash(j))`.
#[inline]
pub const fn integer_hash_2d(i: u64, j: u64) -> u64 {
    integer_hash(i.wrapping_add(integer_hash(j)))
}

/// Hash a triple of integers, nesting as the 2D form does.
#[inline]
pub const fn integer_hash_3d(i: u64, j: u64, k: u64) -> u64 {
    integer_hash(i.wrapping_add(integer_hash_2d(j, k)))
}

/// Hash mapped to `[0, 1]` by dividing by `u64::MAX`.
#[inline]
pub fn unit_noise(i: u64) -> f64 {
    integer_hash(i) as f64 / u64::MAX as f64
}

/// 2D hash mapped to `[0, 1]`.
#[inline]
pub fn unit_noise_2d(i: u64, j: u64) -> f64 {
    integer_hash_2d(i, j) as f64 / u64::MAX as f64
}

/// 3D hash mapped to `[0, 1]`.
#[inline]
pub fn unit_noise_3d(i: u64, j: u64, k: u64) -> f64 {
    integer_hash_3d(i, j, k) as f64 / u64::MAX as f64
}
