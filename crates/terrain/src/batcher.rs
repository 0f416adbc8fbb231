//! Per-tier geometry accumulation.
//!
//! Every classified tile contributes one hex prism to the buffer of its tier.
//! Some tiers also roll for a decoration:
//!
//! | tile tier | decoration | merged into |
//! |-----------|------------|-------------|
//! | stone     | stone      | stone       |
//! | dirt      | tree       | grass       |
//! | sand      | stone      | stone       |
//! | grass     | none       |             |
//! | dirt2     | none       |             |
//!
//! Trees land in the grass buffer so they are drawn with the grass texture.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{DECORATION_THRESHOLD, HEX_RADIUS};
use crate::decorations;
use crate::mesh_data::MeshData;
use crate::tier::Tier;

/// One classified tile, ready to be batched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// World position on the ground plane (x, z).
    pub position: Vec2,
    pub height: f32,
    pub tier: Tier,
}

/// What a tile added besides its hex prism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Stone,
    Tree,
}

/// Decoration rule for a tile tier: the prop kind and the buffer it joins.
pub fn decoration_for(tier: Tier) -> Option<(Decoration, Tier)> {
    match tier {
        Tier::Stone | Tier::Sand => Some((Decoration::Stone, Tier::Stone)),
        Tier::Dirt => Some((Decoration::Tree, Tier::Grass)),
        Tier::Grass | Tier::Dirt2 => None,
    }
}

/// Five growable geometry accumulators, one per [`Tier`].
#[derive(Debug, Clone, Default)]
pub struct TierBuffers {
    buffers: [MeshData; 5],
    tiles: [usize; 5],
    stones: usize,
    trees: usize,
}

impl TierBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tier: Tier) -> &MeshData {
        &self.buffers[tier.index()]
    }

    /// Number of base tiles merged into `tier`.
    pub fn tile_count(&self, tier: Tier) -> usize {
        self.tiles[tier.index()]
    }

    pub fn total_tiles(&self) -> usize {
        self.tiles.iter().sum()
    }

    pub fn stone_count(&self) -> usize {
        self.stones
    }

    pub fn tree_count(&self) -> usize {
        self.trees
    }

    pub fn merge_into(&mut self, tier: Tier, geo: MeshData) {
        self.buffers[tier.index()].merge(geo);
    }

    /// Merge a tile's hex prism into its tier, then roll for a decoration.
    pub fn add_tile(&mut self, tile: &Tile, rng: &mut impl Rng) -> Option<Decoration> {
        let mut prism = MeshData::new();
        prism.add_hex_prism(tile.position, HEX_RADIUS, tile.height);
        self.merge_into(tile.tier, prism);
        self.tiles[tile.tier.index()] += 1;

        let (kind, target) = decoration_for(tile.tier)?;
        if rng.gen::<f32>() <= DECORATION_THRESHOLD {
            return None;
        }
        let geo = match kind {
            Decoration::Stone => {
                self.stones += 1;
                decorations::stone(tile.height, tile.position, rng)
            }
            Decoration::Tree => {
                self.trees += 1;
                decorations::tree(tile.height, tile.position, rng)
            }
        };
        self.merge_into(target, geo);
        Some(kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, &MeshData)> {
        Tier::ALL.into_iter().zip(self.buffers.iter())
    }
}

/// Batch `tiles` into `buffers` and hand the accumulators back.
pub fn batch_tiles<'a>(
    mut buffers: TierBuffers,
    tiles: impl IntoIterator<Item = &'a Tile>,
    rng: &mut impl Rng,
) -> TierBuffers {
    for tile in tiles {
        buffers.add_tile(tile, rng);
    }
    buffers
}
