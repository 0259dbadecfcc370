//=========================================================================
// Camera Controller
//=========================================================================
//
// Moves the camera from input.
//
// - Pan: every tick, each held direction key adds ±move_speed to one axis
//   (W/S → y, A/D → x). Axes are independent and the step is fixed per
//   tick, so pan speed follows the frame rate.
// - Zoom: each wheel event adds delta_y * zoom_speed to z, then clamps z
//   to [z_min, z_max].
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::trace;

//=== Internal Dependencies ===============================================

use super::camera::Camera;
use crate::core::input::{InputTracker, KeyCode};

//=== CameraSettings ======================================================

/// Camera motion and projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// World units per tick per held pan key.
    pub move_speed: f32,
    /// World units per wheel pixel.
    pub zoom_speed: f32,
    pub z_min: f32,
    pub z_max: f32,
    /// Starting camera z (clamped into the zoom range).
    pub initial_distance: f32,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            move_speed: 0.2,
            zoom_speed: 0.1,
            z_min: 10.0,
            z_max: 100.0,
            initial_distance: 30.0,
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

//--- Pan Bindings --------------------------------------------------------

const PAN_BINDINGS: [(KeyCode, Vec3); 4] = [
    (KeyCode::KeyW, Vec3::Y),
    (KeyCode::KeyS, Vec3::NEG_Y),
    (KeyCode::KeyA, Vec3::NEG_X),
    (KeyCode::KeyD, Vec3::X),
];

//=== CameraController ====================================================

/// Sole owner of the camera state.
#[derive(Debug)]
pub struct CameraController {
    camera: Camera,
    settings: CameraSettings,
}

impl CameraController {
    pub fn new(settings: CameraSettings, viewport_width: u32, viewport_height: u32) -> Self {
        let z = settings.initial_distance.clamp(settings.z_min, settings.z_max);
        let mut camera = Camera::new(
            Vec3::new(0.0, 0.0, z),
            settings.fov_y_degrees,
            1.0,
            settings.near,
            settings.far,
        );
        camera.set_viewport(viewport_width, viewport_height);

        Self { camera, settings }
    }

    //--- Per-frame --------------------------------------------------------

    /// Applies one tick of pan from the held keys.
    ///
    /// `_dt` is accepted for the frame contract; the step does not scale
    /// with it.
    pub fn tick(&mut self, input: &InputTracker, _dt: f32) {
        let mut offset = Vec3::ZERO;
        for (key, direction) in PAN_BINDINGS {
            if input.is_key_down(key) {
                offset += direction * self.settings.move_speed;
            }
        }

        if offset != Vec3::ZERO {
            self.camera.position += offset;
            trace!(target: "camera", "Pan to {:?}", self.camera.position);
        }
    }

    //--- Events -----------------------------------------------------------

    /// Zooms by a wheel delta and clamps the distance.
    pub fn on_wheel(&mut self, delta_y: f32) {
        let requested = self.camera.position.z + delta_y * self.settings.zoom_speed;
        let clamped = requested.clamp(self.settings.z_min, self.settings.z_max);

        if clamped != requested {
            trace!(target: "camera", "Zoom clamped: {} → {}", requested, clamped);
        }
        self.camera.position.z = clamped;
    }

    /// Matches the projection to a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    //--- Queries ----------------------------------------------------------

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
