//! Multi-octave (fractal) composition of the Perlin kernel.

use crate::perlin::perlin_noise_2d;

/// Octave parameters for fractal accumulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalParams {
    /// Number of octaves summed. Zero is a valid empty sum yielding `0.0`.
    pub octaves: u32,
    /// Frequency multiplier applied after each octave. Values above 1.0 add
    /// finer detail per octave.
    pub lacunarity: f64,
    /// Amplitude multiplier applied after each octave. Values below 1.0 make
    /// successive octaves contribute less.
    pub persistence: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 8,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

/// Sum `octaves` layers of Perlin noise, starting at frequency 1.0 and
/// amplitude 1.0.
///
/// Lacunarity and persistence are caller-supplied tuning knobs and are not
/// validated; out-of-range values degrade the output but never fail. The
/// coordinate precondition of [`perlin_noise_2d`] applies to `(x, y)`.
pub fn fractal_noise_2d(
    seed: u64,
    x: f64,
    y: f64,
    octaves: u32,
    lacunarity: f64,
    persistence: f64,
) -> f64 {
    let mut value = 0.0;
    let mut frequency = 1.0;
    let mut amplitude = 1.0;
    for _ in 0..octaves {
        value += amplitude * perlin_noise_2d(seed, frequency * x, frequency * y);
        frequency *= lacunarity;
        amplitude *= persistence;
    }
    value
}

/// [`fractal_noise_2d`] with the knobs bundled in a [`FractalParams`].
#[inline]
pub fn fractal_noise_2d_params(seed: u64, x: f64, y: f64, params: &FractalParams) -> f64 {
    fractal_noise_2d(
        seed,
        x,
        y,
        params.octaves,
        params.lacunarity,
        params.persistence,
    )
}
