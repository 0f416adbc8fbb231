use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::config::MAX_PIXEL_RATIO;

/// The scale-factor override needed for a window whose OS scale factor is
/// `base`, or `None` when it is already within the cap.
pub fn capped_scale_factor(base: f32) -> Option<f32> {
    (base > MAX_PIXEL_RATIO).then_some(MAX_PIXEL_RATIO)
}

/// Cap the pixel ratio by overriding the window's scale factor. The camera
/// aspect ratio follows the window on its own.
///
/// Best effort: the override changes how logical size maps to physical
/// pixels, but the surface size still comes from the OS on each resize.
/// The override is re-checked whenever the window changes.
pub fn cap_pixel_ratio(mut windows: Query<&mut Window, Changed<Window>>) {
    for mut window in &mut windows {
        let wanted = capped_scale_factor(window.resolution.base_scale_factor());
        if window.resolution.scale_factor_override() != wanted {
            if let Some(cap) = wanted {
                info!(
                    "Capping pixel ratio at {cap} (display reports {})",
                    window.resolution.base_scale_factor()
                );
            }
            window.resolution.set_scale_factor_override(wanted);
        }
    }
}

pub fn log_window_resize(mut resized: EventReader<WindowResized>) {
    for evt in resized.read() {
        debug!("Window resized to {}x{}", evt.width, evt.height);
    }
}
