//=========================================================================
// Scene Core
//
// Platform-independent state and logic of the periodic-table scene.
//
// Architecture:
// ```text
//  Catalog ──> ObjectRegistry (GridLayout)
//                   │
//  InputEvent ──> Viewer::frame()
//                   ├─ InputTracker       (keys, buttons, pointer NDC)
//                   ├─ CameraController   (pan, zoom, projection)
//                   ├─ InteractionState   (hover scale, sticky selection)
//                   │     └─ picking      (ray vs. scaled bounds)
//                   └─ SceneRenderer      (RenderFrame snapshot)
// ```
//
// Nothing in here touches a window; the platform layer feeds events in
// through `platform_bridge` and the viewer can be driven headless.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod camera;
pub mod catalog;
pub mod error;
pub mod input;
pub mod interaction;
pub mod picking;
pub mod platform_bridge;
pub mod render;
pub mod scene;
pub mod viewer;
