//! Island generation pipeline: noise → layout → classifier → batcher, plus
//! the cloud layer.

use bevy::prelude::*;

use crate::batcher::{batch_tiles, Tile, TierBuffers};
use crate::config::DEFAULT_SEED;
use crate::decorations::{self, CloudLayer};
use crate::island_rng::IslandRng;
use crate::layout::island_coords;
use crate::noise_field::NoiseField;
use crate::tier::{height_from_noise, Tier};

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Seeds that fully determine an island.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IslandParams {
    /// Seed of the height noise field.
    pub noise_seed: i32,
    /// Seed of the decoration and cloud random streams.
    pub decoration_seed: u64,
}

impl Default for IslandParams {
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }
}

impl IslandParams {
    /// Derive both seeds from a single user-facing seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            // Fold the high half in so seeds above i32::MAX still vary the noise.
            noise_seed: (seed ^ (seed >> 32)) as u32 as i32,
            decoration_seed: seed,
        }
    }
}

/// Error returned when a seed override cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// The override was present but empty.
    Empty,
    /// The override was not an unsigned integer.
    InvalidSeed(String),
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamsError::Empty => write!(f, "seed override is empty"),
            ParamsError::InvalidSeed(raw) => {
                write!(f, "seed override '{raw}' is not an unsigned integer")
            }
        }
    }
}

impl std::error::Error for ParamsError {}

impl std::str::FromStr for IslandParams {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParamsError::Empty);
        }
        let seed = trimmed
            .parse::<u64>()
            .map_err(|_| ParamsError::InvalidSeed(trimmed.to_string()))?;
        Ok(Self::from_seed(seed))
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Counts collected while generating an island.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IslandStats {
    pub tiles: [usize; 5],
    pub stones: usize,
    pub trees: usize,
    pub clouds: usize,
}

impl IslandStats {
    pub fn tiles_in(&self, tier: Tier) -> usize {
        self.tiles[tier.index()]
    }

    pub fn total_tiles(&self) -> usize {
        self.tiles.iter().sum()
    }
}

impl std::fmt::Display for IslandStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} tiles (", self.total_tiles())?;
        for (i, tier) in Tier::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{tier}: {}", self.tiles_in(*tier))?;
        }
        write!(
            f,
            "), {} stones, {} trees, {} clouds",
            self.stones, self.trees, self.clouds
        )
    }
}

/// A generated island: batched tier geometry plus the cloud layer.
#[derive(Resource, Debug, Clone)]
pub struct Island {
    pub params: IslandParams,
    pub tiers: TierBuffers,
    pub clouds: CloudLayer,
    pub stats: IslandStats,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Sample the noise field for every tile inside the island radius.
pub fn classify_tiles(noise: &NoiseField) -> Vec<Tile> {
    island_coords()
        .map(|coord| {
            let position = coord.to_world();
            let sample = noise.sample(coord.col as f32, coord.row as f32);
            let height = height_from_noise(sample);
            Tile {
                position,
                height,
                tier: Tier::classify(height),
            }
        })
        .collect()
}

/// Run the full generation pipeline for `params`.
pub fn generate_island(params: IslandParams) -> Island {
    let noise = NoiseField::new(params.noise_seed);
    let tiles = classify_tiles(&noise);

    let mut deco_rng = IslandRng::decorations(params.decoration_seed);
    let tiers = batch_tiles(TierBuffers::new(), &tiles, &mut deco_rng.0);

    let mut cloud_rng = IslandRng::clouds(params.decoration_seed);
    let clouds = decorations::clouds(&mut cloud_rng.0);

    let mut stats = IslandStats {
        stones: tiers.stone_count(),
        trees: tiers.tree_count(),
        clouds: clouds.count,
        ..default()
    };
    for tier in Tier::ALL {
        stats.tiles[tier.index()] = tiers.tile_count(tier);
    }

    Island {
        params,
        tiers,
        clouds,
        stats,
    }
}

/// Startup system: generate the island from the current [`IslandParams`].
pub fn generate_island_system(mut commands: Commands, params: Res<IslandParams>) {
    let island = generate_island(*params);
    info!(
        "Generated island (noise seed {}, decoration seed {}): {}",
        params.noise_seed, params.decoration_seed, island.stats
    );
    commands.insert_resource(island);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::island_coords;

    #[test]
    fn test_every_island_tile_classified_once() {
        let island = generate_island(IslandParams::default());
        assert_eq!(island.stats.total_tiles(), island_coords().count());
    }

    #[test]
    fn test_deterministic_for_same_params() {
        let a = generate_island(IslandParams::from_seed(7));
        let b = generate_island(IslandParams::from_seed(7));
        assert_eq!(a.stats, b.stats);
        for ((_, ma), (_, mb)) in a.tiers.iter().zip(b.tiers.iter()) {
            assert_eq!(ma, mb);
        }
        assert_eq!(a.clouds.mesh, b.clouds.mesh);
    }

    #[test]
    fn test_tile_heights_in_range() {
        let noise = NoiseField::new(3);
        for tile in classify_tiles(&noise) {
            assert!((0.0..=crate::config::MAX_HEIGHT).contains(&tile.height));
            assert_eq!(tile.tier, Tier::classify(tile.height));
        }
    }

    #[test]
    fn test_params_from_str() {
        assert_eq!("12".parse::<IslandParams>(), Ok(IslandParams::from_seed(12)));
        assert_eq!(" 12 \n".parse::<IslandParams>(), Ok(IslandParams::from_seed(12)));
        assert_eq!("".parse::<IslandParams>(), Err(ParamsError::Empty));
        assert_eq!(
            "abc".parse::<IslandParams>(),
            Err(ParamsError::InvalidSeed("abc".to_string()))
        );
        assert!("-4".parse::<IslandParams>().is_err());
    }

    #[test]
    fn test_large_seeds_vary_noise_seed() {
        let a = IslandParams::from_seed(1);
        let b = IslandParams::from_seed(1 | (5 << 32));
        assert_ne!(a.noise_seed, b.noise_seed);
        assert_eq!(IslandParams::from_seed(42).noise_seed, 42);
    }

    #[test]
    fn test_stats_display_lists_every_tier() {
        let island = generate_island(IslandParams::default());
        let text = island.stats.to_string();
        for tier in Tier::ALL {
            assert!(text.contains(tier.name()), "missing {tier} in '{text}'");
        }
    }
}
