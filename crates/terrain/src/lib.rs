use bevy::prelude::*;

pub mod batcher;
pub mod config;
pub mod decorations;
pub mod island;
pub mod island_rng;
pub mod layout;
pub mod mesh_data;
pub mod noise_field;
pub mod tier;

pub use island::{generate_island, Island, IslandParams, IslandStats, ParamsError};
pub use mesh_data::MeshData;
pub use tier::Tier;

/// System set containing island generation, so rendering can order after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenerateIsland;

pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        // Keep any params inserted before the plugin (seed overrides).
        app.init_resource::<IslandParams>().add_systems(
            Startup,
            island::generate_island_system.in_set(GenerateIsland),
        );
    }
}
