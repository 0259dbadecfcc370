//=========================================================================
// Input System
//=========================================================================
//
// Portable input events and the level-state tracker fed by them.
//
// Architecture:
//   Platform → InputEvent → InputTracker → { CameraController, picking }
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, MouseButton};
pub use tracker::InputTracker;
