use bevy::prelude::*;

use terrain::config::MAX_HEIGHT;

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// Prefiltered environment cubemaps (diffuse irradiance + specular mips).
pub const ENV_DIFFUSE_PATH: &str = "environment_maps/envmap_diffuse_rgb9e5_zstd.ktx2";
pub const ENV_SPECULAR_PATH: &str = "environment_maps/envmap_specular_rgb9e5_zstd.ktx2";

/// Environment light brightness (cd/m²) for a reflection strength of 1.0.
pub const ENV_MAP_BASE_INTENSITY: f32 = 2000.0;
/// Reflection strength of the tile surfaces, which fill most of the frame.
/// Environment light is per view, so this one value lights the whole scene.
pub const ENV_MAP_STRENGTH: f32 = 0.135;

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

pub const BACKGROUND_COLOR: Color = Color::srgb(1.0, 0.933, 0.8);

/// Sea, rim and floor cylinders are this finely segmented.
pub const RING_SEGMENTS: u32 = 50;
/// Sea and rim are turned so their seams sit away from the default view.
pub const RING_ROTATION: f32 = -std::f32::consts::PI * 0.333 * 0.5;

pub const SEA_RADIUS: f32 = 17.0;
pub const SEA_HEIGHT: f32 = MAX_HEIGHT * 0.2;
pub const SEA_Y: f32 = MAX_HEIGHT * 0.1;
pub const SEA_IOR: f32 = 1.4;
pub const SEA_THICKNESS: f32 = 1.5;
pub const SEA_METALLIC: f32 = 0.025;
/// Linear multiplier applied to the sea tint after sRGB decoding.
pub const SEA_TINT_BOOST: f32 = 3.0;

pub const RIM_RADIUS: f32 = 17.1;
pub const RIM_HEIGHT: f32 = MAX_HEIGHT * 0.25;
pub const RIM_Y: f32 = MAX_HEIGHT * 0.125;

pub const FLOOR_RADIUS: f32 = 18.5;
pub const FLOOR_HEIGHT: f32 = MAX_HEIGHT * 0.1;
pub const FLOOR_Y: f32 = -MAX_HEIGHT * 0.05;

// ---------------------------------------------------------------------------
// Light
// ---------------------------------------------------------------------------

pub const LIGHT_POSITION: Vec3 = Vec3::new(10.0, 20.0, 10.0);
pub const LIGHT_INTENSITY: f32 = 2_000_000.0;
pub const LIGHT_RANGE: f32 = 600.0;
pub const LIGHT_COLOR: Color = Color::srgb(1.0, 0.796, 0.557);
pub const LIGHT_SHADOW_MAP_SIZE: usize = 512;

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

pub const CAMERA_START: Vec3 = Vec3::new(-17.0, 31.0, 33.0);
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Highest device pixel ratio the surface is rendered at.
pub const MAX_PIXEL_RATIO: f32 = 2.0;
