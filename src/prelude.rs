//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use periodic_scene::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine facade
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Scene data
pub use crate::core::catalog::{color_for, Catalog, Color, ElementRecord};
pub use crate::core::error::SceneError;
pub use crate::core::scene::{GridLayout, ObjectId, ObjectRegistry, PlacedObject};

// Camera and input
pub use crate::core::camera::{Camera, CameraController, CameraSettings};
pub use crate::core::input::{InputEvent, InputTracker, KeyCode, MouseButton};

// Interaction and drawing
pub use crate::core::interaction::{ChannelListener, InteractionState, SelectionListener};
pub use crate::core::picking::pick;
pub use crate::core::render::{RenderFrame, RenderObject, SceneRenderer, TraceRenderer};
pub use crate::core::viewer::{Viewer, ViewerSettings};
