use bevy::pbr::PointLightShadowMap;
use bevy::prelude::*;

use crate::config::{
    BACKGROUND_COLOR, LIGHT_COLOR, LIGHT_INTENSITY, LIGHT_POSITION, LIGHT_RANGE,
    LIGHT_SHADOW_MAP_SIZE,
};

/// Background colour, the shadow-casting point light, and no ambient fill
/// (the environment map provides the soft light).
pub fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(ClearColor(BACKGROUND_COLOR));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.0,
    });
    commands.insert_resource(PointLightShadowMap {
        size: LIGHT_SHADOW_MAP_SIZE,
    });

    commands.spawn((
        Name::new("sun"),
        PointLight {
            color: LIGHT_COLOR,
            intensity: LIGHT_INTENSITY,
            range: LIGHT_RANGE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(LIGHT_POSITION),
    ));
}
