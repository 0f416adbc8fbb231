use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::WinitSettings;

mod params;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Hex Island".to_string(),
                resolution: (1280.0, 720.0).into(),
                present_mode: PresentMode::AutoVsync,
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        // Camera damping animates between input events.
        .insert_resource(WinitSettings::game())
        .add_plugins((
            params::IslandParamsPlugin,
            terrain::TerrainPlugin,
            rendering::RenderingPlugin,
        ))
        .run();
}
