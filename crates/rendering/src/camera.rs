//! Orbit camera with damping.
//!
//! Input systems write to [`CameraTarget`] (the desired state). Each frame,
//! `damp_camera_toward_target` moves [`OrbitCamera`] a fixed fraction of the
//! way toward it, and `apply_orbit_camera` writes the result to the camera
//! transform:
//!
//!   `value += (target - value) * (1 - (1 - damping)^(dt * 60))`
//!
//! At 60 fps this closes exactly `damping` of the gap per frame, and the
//! motion keeps the same feel at other frame rates.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::config::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START};

/// Tunables for the orbit controls.
#[derive(Resource, Debug, Clone)]
pub struct OrbitSettings {
    /// Fraction of the remaining gap closed per 60 Hz frame.
    pub damping: f32,
    /// Radians per pixel of left-drag.
    pub rotate_sensitivity: f32,
    /// World units per pixel of right-drag, per unit of distance.
    pub pan_sensitivity: f32,
    /// Fractional distance change per wheel line.
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
    /// The focus point stays within this distance of the island centre.
    pub max_focus_offset: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            damping: 0.05,
            rotate_sensitivity: 0.005,
            pan_sensitivity: 0.0015,
            zoom_speed: 0.1,
            min_distance: 5.0,
            max_distance: 200.0,
            min_pitch: 2.0_f32.to_radians(),
            max_pitch: 88.0_f32.to_radians(),
            max_focus_offset: 40.0,
        }
    }
}

/// Orbital camera model: the camera circles a focus point.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    /// Horizontal rotation in radians, measured from +Z toward +X.
    pub yaw: f32,
    /// Elevation above the horizontal plane in radians.
    pub pitch: f32,
    pub distance: f32,
}

impl OrbitCamera {
    /// The orbit that places the camera at `eye` looking at `focus`.
    pub fn looking_from(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = offset.length();
        let horizontal = Vec2::new(offset.x, offset.z).length();
        Self {
            focus,
            yaw: offset.x.atan2(offset.z),
            pitch: offset.y.atan2(horizontal),
            distance,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.focus + Vec3::new(x, y, z)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Y)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(CAMERA_START, Vec3::ZERO)
    }
}

/// Desired camera state written by the input systems.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraTarget(pub OrbitCamera);

/// Marker for the scene camera.
#[derive(Component)]
pub struct IslandCamera;

#[derive(Resource, Default)]
pub struct CameraDrag {
    pub rotating: Option<Vec2>,
    pub panning: Option<Vec2>,
}

// ---------------------------------------------------------------------------
// Math
// ---------------------------------------------------------------------------

/// Interpolation factor for `damping` over a frame of `dt` seconds.
pub fn damping_factor(damping: f32, dt: f32) -> f32 {
    let damping = damping.clamp(0.0, 1.0);
    1.0 - (1.0 - damping).powf(dt * 60.0)
}

/// Move `orbit` toward `target` by `factor` of the gap on every axis.
pub fn step_toward(orbit: &mut OrbitCamera, target: &OrbitCamera, factor: f32) {
    orbit.focus += (target.focus - orbit.focus) * factor;
    orbit.yaw += (target.yaw - orbit.yaw) * factor;
    orbit.pitch += (target.pitch - orbit.pitch) * factor;
    orbit.distance += (target.distance - orbit.distance) * factor;
}

pub fn rotate(target: &mut OrbitCamera, delta: Vec2, settings: &OrbitSettings) {
    target.yaw -= delta.x * settings.rotate_sensitivity;
    target.pitch = (target.pitch + delta.y * settings.rotate_sensitivity)
        .clamp(settings.min_pitch, settings.max_pitch);
}

/// Pan the focus along the ground plane, relative to the current yaw.
pub fn pan(target: &mut OrbitCamera, delta: Vec2, settings: &OrbitSettings) {
    let scale = target.distance * settings.pan_sensitivity;
    let (sin_yaw, cos_yaw) = target.yaw.sin_cos();
    let world_x = -delta.x * cos_yaw - delta.y * sin_yaw;
    let world_z = delta.x * sin_yaw - delta.y * cos_yaw;
    target.focus.x += world_x * scale;
    target.focus.z += world_z * scale;

    let ground = Vec2::new(target.focus.x, target.focus.z);
    let clamped = ground.clamp_length_max(settings.max_focus_offset);
    target.focus.x = clamped.x;
    target.focus.z = clamped.y;
}

/// Scale the distance by one wheel step of `lines` (positive zooms in).
pub fn zoom(target: &mut OrbitCamera, lines: f32, settings: &OrbitSettings) {
    let factor = (1.0 - lines * settings.zoom_speed).max(0.01);
    target.distance =
        (target.distance * factor).clamp(settings.min_distance, settings.max_distance);
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();

    commands.spawn((
        Name::new("camera"),
        IslandCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Tonemapping::AcesFitted,
        orbit.transform(),
    ));
    commands.insert_resource(orbit);
    commands.insert_resource(CameraTarget(orbit));
}

/// Left drag rotates, right drag pans.
pub fn camera_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    settings: Res<OrbitSettings>,
    mut drag: ResMut<CameraDrag>,
    mut target: ResMut<CameraTarget>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let cursor = window.cursor_position();

    if buttons.just_pressed(MouseButton::Left) {
        drag.rotating = cursor;
    }
    if buttons.just_released(MouseButton::Left) {
        drag.rotating = None;
    }
    if buttons.just_pressed(MouseButton::Right) {
        drag.panning = cursor;
    }
    if buttons.just_released(MouseButton::Right) {
        drag.panning = None;
    }

    let Some(pos) = cursor else {
        return;
    };
    if let Some(last) = drag.rotating {
        rotate(&mut target.0, pos - last, &settings);
        drag.rotating = Some(pos);
    }
    if let Some(last) = drag.panning {
        pan(&mut target.0, pos - last, &settings);
        drag.panning = Some(pos);
    }
}

pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    settings: Res<OrbitSettings>,
    mut target: ResMut<CameraTarget>,
) {
    for evt in scroll_evts.read() {
        let lines = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        zoom(&mut target.0, lines, &settings);
    }
}

pub fn damp_camera_toward_target(
    target: Res<CameraTarget>,
    settings: Res<OrbitSettings>,
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 || *orbit == target.0 {
        return;
    }
    step_toward(&mut orbit, &target.0, damping_factor(settings.damping, dt));
}

/// Apply `OrbitCamera` to the camera transform whenever it changes.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<IslandCamera>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = orbit.transform();
}
