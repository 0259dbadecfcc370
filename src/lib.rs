//=========================================================================
// Periodic Scene — Library Root
//
// An interactive 3D periodic table: element boxes laid out on a grid, a
// keyboard/wheel driven camera, pointer hover highlighting and click
// selection.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the scene core for headless use and custom renderers
// - Keep the Winit host (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use periodic_scene::core::catalog::Catalog;
// use periodic_scene::EngineBuilder;
//
// fn main() -> Result<(), periodic_scene::EngineError> {
//     EngineBuilder::new().build(Catalog::builtin_records())?.run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the scene state and per-frame logic (layout, picking,
// camera, hover/selection). It never touches a window.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the Winit window and event loop; `engine` wires it to
// the core.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
