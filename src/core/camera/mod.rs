//=========================================================================
// Camera
//=========================================================================
//
// Perspective camera state and the controller that moves it.
//
//=========================================================================

//=== Module Declarations =================================================

#[allow(clippy::module_inception)]
mod camera;
mod controller;

//=== Public API ==========================================================

pub use camera::Camera;
pub use controller::{CameraController, CameraSettings};
