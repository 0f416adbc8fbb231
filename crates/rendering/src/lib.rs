use bevy::prelude::*;

pub mod assets;
pub mod camera;
pub mod config;
pub mod lighting;
pub mod scene;
pub mod window;

use camera::{CameraDrag, OrbitSettings};

/// Startup progresses `Loading` → `Running` once, after every asset is in.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IslandState {
    #[default]
    Loading,
    Running,
}

/// Queues the island assets and gates [`IslandState::Running`] on them.
/// Needs the asset, image and state plugins; runs without a window.
pub struct IslandAssetsPlugin;

impl Plugin for IslandAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<IslandState>()
            .add_systems(
                Startup,
                assets::load_island_assets.after(terrain::GenerateIsland),
            )
            .add_systems(
                Update,
                assets::poll_island_assets.run_if(in_state(IslandState::Loading)),
            );
    }
}

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(IslandAssetsPlugin)
            .init_resource::<OrbitSettings>()
            .init_resource::<CameraDrag>()
            .add_systems(
                Startup,
                (camera::setup_camera, lighting::setup_lighting).after(terrain::GenerateIsland),
            )
            .add_systems(OnEnter(IslandState::Running), scene::spawn_island_scene)
            .add_systems(
                Update,
                (
                    camera::camera_drag,
                    camera::camera_zoom,
                    camera::damp_camera_toward_target,
                    camera::apply_orbit_camera,
                )
                    .chain()
                    .run_if(in_state(IslandState::Running)),
            )
            .add_systems(Update, (window::cap_pixel_ratio, window::log_window_resize));
    }
}
