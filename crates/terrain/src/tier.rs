//! Height mapping and material tier classification.

use crate::config::{
    DIRT_HEIGHT, GRASS_HEIGHT, HEIGHT_EXPONENT, MAX_HEIGHT, SAND_HEIGHT, STONE_HEIGHT,
};

/// Terrain material class assigned to a tile by its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Stone,
    Dirt,
    Grass,
    Sand,
    /// Low, beach-adjacent ground.
    Dirt2,
}

impl Tier {
    /// All tiers, highest first.
    pub const ALL: [Tier; 5] = [Tier::Stone, Tier::Dirt, Tier::Grass, Tier::Sand, Tier::Dirt2];

    /// Classify a terrain height. Every height maps to exactly one tier.
    ///
    /// Thresholds are exclusive: a height equal to a threshold belongs to the
    /// tier below it. There is no lower cutoff, so a height of exactly 0 is
    /// still a (zero-height) dirt2 tile rather than a skipped one.
    pub fn classify(height: f32) -> Tier {
        if height > STONE_HEIGHT {
            Tier::Stone
        } else if height > DIRT_HEIGHT {
            Tier::Dirt
        } else if height > GRASS_HEIGHT {
            Tier::Grass
        } else if height > SAND_HEIGHT {
            Tier::Sand
        } else {
            Tier::Dirt2
        }
    }

    /// Dense index into per-tier arrays, matching the order of [`Tier::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Tier::Stone => 0,
            Tier::Dirt => 1,
            Tier::Grass => 2,
            Tier::Sand => 3,
            Tier::Dirt2 => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Tier::Stone => "stone",
            Tier::Dirt => "dirt",
            Tier::Grass => "grass",
            Tier::Sand => "sand",
            Tier::Dirt2 => "dirt2",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a raw noise sample in [-1, 1] to a terrain height in [0, MAX_HEIGHT].
///
/// The sample is normalized to [0, 1] and raised to [`HEIGHT_EXPONENT`], which
/// skews the distribution toward low ground.
pub fn height_from_noise(sample: f32) -> f32 {
    let normalized = ((sample + 1.0) * 0.5).clamp(0.0, 1.0);
    normalized.powf(HEIGHT_EXPONENT) * MAX_HEIGHT
}
