use fbm_core::field::{Field, FieldConfig};
use wasm_bindgen::prelude::*;

/// GPU-compatible texel: 4 bytes, matches an RGBA8 texture upload.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Rgba8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

/// A regenerable grayscale noise texture backed by the fractal noise kernel.
///
/// The JS side reads the pixel buffer directly out of wasm memory via
/// `pixels_ptr()` / `pixels_byte_length()` and uploads it as a texture;
/// everything past that point (rendering, input handling) lives in JS.
#[wasm_bindgen]
pub struct NoiseTexture {
    config: FieldConfig,
    seed: u64,
    pixels: Vec<Rgba8>,
}

#[wasm_bindgen]
impl NoiseTexture {
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> NoiseTexture {
        web_sys::console::log_1(
            &format!("WASM NoiseTexture created: {}x{}", width, height).into(),
        );

        let config = FieldConfig {
            width,
            height,
            ..FieldConfig::default()
        };
        let pixels = vec![
            Rgba8 {
                r: 0,
                g: 0,
                b: 0,
                a: 255,
            };
            width * height
        ];

        let mut texture = NoiseTexture {
            config,
            seed: 0,
            pixels,
        };
        texture.regenerate();
        texture
    }

    /// Generate a fresh field from a new random seed (the "regenerate"
    /// user action). Returns the generation time in milliseconds.
    #[wasm_bindgen]
    pub fn regenerate(&mut self) -> f64 {
        self.regenerate_with_seed(random_seed())
    }

    /// Generate a field from a caller-chosen seed. Returns the generation
    /// time in milliseconds.
    #[wasm_bindgen]
    pub fn regenerate_with_seed(&mut self, seed: u64) -> f64 {
        let start = js_sys::Date::now();

        self.seed = seed;
        let field = Field::generate(seed, &self.config);
        for (pixel, value) in self.pixels.iter_mut().zip(field.normalize()) {
            *pixel = Rgba8 {
                r: value,
                g: value,
                b: value,
                a: 255,
            };
        }

        let elapsed = js_sys::Date::now() - start;
        web_sys::console::log_1(&format!("noise: {:.1}ms", elapsed).into());
        elapsed
    }

    /// Update the octave knobs; takes effect on the next regeneration.
    #[wasm_bindgen]
    pub fn set_fractal_params(&mut self, octaves: u32, lacunarity: f64, persistence: f64) {
        self.config.fractal.octaves = octaves;
        self.config.fractal.lacunarity = lacunarity;
        self.config.fractal.persistence = persistence;
    }

    /// Update the number of noise periods the texture spans; takes effect
    /// on the next regeneration. Must be non-negative.
    #[wasm_bindgen]
    pub fn set_periods(&mut self, periods: f64) {
        self.config.periods = periods;
    }

    #[wasm_bindgen]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[wasm_bindgen]
    pub fn width(&self) -> usize {
        self.config.width
    }

    #[wasm_bindgen]
    pub fn height(&self) -> usize {
        self.config.height
    }

    #[wasm_bindgen]
    pub fn pixels_ptr(&self) -> *const u8 {
        bytemuck::cast_slice(&self.pixels).as_ptr()
    }

    #[wasm_bindgen]
    pub fn pixels_byte_length(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<Rgba8>()
    }
}

/// Seed from the platform RNG, falling back to the clock when the RNG is
/// unavailable.
fn random_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(_) => js_sys::Date::now() as u64,
    }
}
