//! Deterministic RNG for island decoration.
//!
//! Wraps `ChaCha8Rng` so that identical seeds produce identical islands on
//! every platform. Terrain decorations and clouds draw from separate streams
//! of the same seed, so the cloud layout does not shift when the terrain
//! consumes a different number of values.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::DEFAULT_SEED;

/// Stream id for per-tile decoration draws.
const DECORATION_STREAM: u64 = 0;
/// Stream id for cloud layout draws.
const CLOUD_STREAM: u64 = 1;

/// Deterministic RNG resource. Use `rng.0` (a `ChaCha8Rng` implementing
/// `rand::Rng`) to draw values.
#[derive(Resource, Clone)]
pub struct IslandRng(pub ChaCha8Rng);

impl Default for IslandRng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_SEED)
    }
}

impl IslandRng {
    /// Create a new `IslandRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// RNG for tile decorations (trees, stones).
    pub fn decorations(seed: u64) -> Self {
        let mut rng = Self::from_seed_u64(seed);
        rng.0.set_stream(DECORATION_STREAM);
        rng
    }

    /// RNG for the cloud layer.
    pub fn clouds(seed: u64) -> Self {
        let mut rng = Self::from_seed_u64(seed);
        rng.0.set_stream(CLOUD_STREAM);
        rng
    }
}
