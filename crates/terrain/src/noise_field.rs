//! Seeded 2D coherent noise used as the island height source.

use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::config::NOISE_FREQUENCY;

/// Deterministic OpenSimplex2 noise field.
///
/// Identical seeds produce identical fields, so every island is reproducible
/// from its [`crate::island::IslandParams`].
pub struct NoiseField {
    noise: FastNoiseLite,
    seed: i32,
}

impl NoiseField {
    pub fn new(seed: i32) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(NOISE_FREQUENCY));
        Self { noise, seed }
    }

    /// Sample the field at `(x, y)`. The result is always within [-1, 1].
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        self.noise.get_noise_2d(x, y).clamp(-1.0, 1.0)
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}
