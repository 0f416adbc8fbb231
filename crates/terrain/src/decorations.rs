//! Procedural props: trees, stones and clouds.
//!
//! Each generator returns a self-contained [`MeshData`] in world space that
//! the caller merges into a tier buffer (trees, stones) or the cloud layer.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::config::{
    CLOUD_ALTITUDE_RANGE, CLOUD_COUNT_EXPONENT, CLOUD_MIN_ALTITUDE, CLOUD_SPREAD, MAX_CLOUDS,
};
use crate::mesh_data::MeshData;

// =============================================================================
// Constants
// =============================================================================

/// Base radii of the three stacked tree segments, bottom to top.
const TREE_SEGMENT_RADII: [f32; 3] = [1.5, 1.15, 0.8];
/// Vertical offset of each segment as a fraction of the segment height.
const TREE_SEGMENT_OFFSETS: [f32; 3] = [0.0, 0.6, 1.25];
const TREE_MIN_HEIGHT: f32 = 1.25;
const TREE_HEIGHT_RANGE: f32 = 1.0;
/// Trees start this far above the tile top.
const TREE_LIFT: f32 = 1.0;
const TREE_SIDES: u32 = 3;

const STONE_MIN_RADIUS: f32 = 0.1;
const STONE_RADIUS_RANGE: f32 = 0.3;
const STONE_MAX_OFFSET: f32 = 0.4;
const STONE_SEGMENTS: u32 = 7;

/// (x offset, radius) of each cloud puff.
const CLOUD_PUFFS: [(f32, f32); 3] = [(-1.85, 1.2), (0.0, 1.5), (1.85, 0.9)];
const CLOUD_PUFF_JITTER: f32 = 0.3;
const CLOUD_SEGMENTS: u32 = 7;

// =============================================================================
// Generators
// =============================================================================

/// Three stacked cones of decreasing radius on top of a tile.
pub fn tree(height: f32, position: Vec2, rng: &mut impl Rng) -> MeshData {
    let segment_height = rng.gen::<f32>() * TREE_HEIGHT_RANGE + TREE_MIN_HEIGHT;

    let mut geo = MeshData::new();
    for (radius, offset) in TREE_SEGMENT_RADII.into_iter().zip(TREE_SEGMENT_OFFSETS) {
        let y = height + segment_height * offset + TREE_LIFT;
        geo.add_cone(
            Vec3::new(position.x, y, position.y),
            radius,
            segment_height,
            TREE_SIDES,
        );
    }
    geo
}

/// A single small boulder resting at the tile top, nudged off-centre.
pub fn stone(height: f32, position: Vec2, rng: &mut impl Rng) -> MeshData {
    let px = rng.gen::<f32>() * STONE_MAX_OFFSET;
    let pz = rng.gen::<f32>() * STONE_MAX_OFFSET;
    let radius = rng.gen::<f32>() * STONE_RADIUS_RANGE + STONE_MIN_RADIUS;

    let mut geo = MeshData::new();
    geo.add_sphere(
        Vec3::new(position.x + px, height, position.y + pz),
        radius,
        STONE_SEGMENTS,
        STONE_SEGMENTS,
    );
    geo
}

/// One three-puff cloud placed somewhere above the island.
///
/// The rotation is applied after translation, so it swings the cloud around
/// the island centre rather than spinning it in place.
pub fn cloud(rng: &mut impl Rng) -> MeshData {
    let mut geo = MeshData::new();
    for (x, radius) in CLOUD_PUFFS {
        let y = rng.gen::<f32>() * CLOUD_PUFF_JITTER;
        geo.add_sphere(Vec3::new(x, y, 0.0), radius, CLOUD_SEGMENTS, CLOUD_SEGMENTS);
    }

    let offset = Vec3::new(
        rng.gen::<f32>() * CLOUD_SPREAD * 2.0 - CLOUD_SPREAD,
        rng.gen::<f32>() * CLOUD_ALTITUDE_RANGE + CLOUD_MIN_ALTITUDE,
        rng.gen::<f32>() * CLOUD_SPREAD * 2.0 - CLOUD_SPREAD,
    );
    geo.translate(offset);
    geo.rotate_y(rng.gen::<f32>() * TAU);
    geo
}

/// Number of clouds for a uniform draw `u` in [0, 1).
///
/// The 0.45 exponent pushes draws upward, so busier skies are more likely.
/// The result is always in 0..=3.
pub fn cloud_count(u: f32) -> usize {
    let u = u.clamp(0.0, 1.0);
    let count = (u.powf(CLOUD_COUNT_EXPONENT) * MAX_CLOUDS).floor() as usize;
    count.min(MAX_CLOUDS as usize - 1)
}

/// The merged cloud layer.
#[derive(Debug, Clone, Default)]
pub struct CloudLayer {
    pub mesh: MeshData,
    pub count: usize,
}

/// Roll the cloud count and build every cloud into one buffer.
pub fn clouds(rng: &mut impl Rng) -> CloudLayer {
    let count = cloud_count(rng.gen::<f32>());
    let mesh = MeshData::merged((0..count).map(|_| cloud(&mut *rng)));
    CloudLayer { mesh, count }
}
