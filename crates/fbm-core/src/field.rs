//! Grid sampling and display-range normalization.

use crate::fractal::{fractal_noise_2d_params, FractalParams};

/// Normalized value used for every cell of a flat (max == min) field.
const FLAT_FALLBACK: u8 = 128;

/// Sampling parameters for a noise field.
///
/// Each grid axis is mapped onto `[0, periods]` in noise-domain coordinates,
/// so `periods` controls how many lattice cells the field spans. It must be
/// non-negative to honor the coordinate precondition of the kernel.
pub struct FieldConfig {
    pub width: usize,
    pub height: usize,
    pub periods: f64,
    pub fractal: FractalParams,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            periods: 10.0,
            fractal: FractalParams::default(),
        }
    }
}

/// Row-major grid of fractal noise samples.
///
/// A field is produced whole by [`Field::generate`] and never mutated
/// afterward; regeneration builds a new one.
pub struct Field {
    pub width: usize,
    pub height: usize,
    pub values: Vec<f64>,
}

impl Field {
    /// Evaluate the fractal compositor at every grid cell.
    ///
    /// Row `i` maps to `x = i / height * periods`, column `j` to
    /// `y = j / width * periods`, so all sampled coordinates are
    /// non-negative for `periods >= 0`.
    pub fn generate(seed: u64, config: &FieldConfig) -> Self {
        let mut values = Vec::with_capacity(config.width * config.height);
        for i in 0..config.height {
            let x = i as f64 / config.height as f64 * config.periods;
            for j in 0..config.width {
                let y = j as f64 / config.width as f64 * config.periods;
                values.push(fractal_noise_2d_params(seed, x, y, &config.fractal));
            }
        }
        Self {
            width: config.width,
            height: config.height,
            values,
        }
    }

    /// Sample at (row, col). Row-major: row selects the x coordinate.
    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.width + col]
    }

    /// Scan the field once for its extrema. Returns `(0.0, 0.0)` for an
    /// empty field.
    pub fn min_max(&self) -> (f64, f64) {
        let mut iter = self.values.iter().copied();
        let first = match iter.next() {
            Some(v) => v,
            None => return (0.0, 0.0),
        };
        iter.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
    }

    /// Linearly rescale every sample to `0..=255`.
    ///
    /// `round((v - min) / (max - min) * 255)`, clamped. A flat field (max ==
    /// min) has no usable range and normalizes to [`FLAT_FALLBACK`]
    /// everywhere instead of dividing by zero.
    pub fn normalize(&self) -> Vec<u8> {
        let (min, max) = self.min_max();
        let delta = max - min;
        if delta <= 0.0 {
            return vec![FLAT_FALLBACK; self.values.len()];
        }
        self.values
            .iter()
            .map(|&v| ((v - min) / delta * 255.0).round().clamp(0.0, 255.0) as u8)
            .collect()
    }
}
