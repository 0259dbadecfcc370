//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the window host (winit) with the viewer.
//
// This module defines the contract between platform implementations and
// the scene core, so the viewer can be driven headless from tests through
// the same channel the window uses.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Viewer-side event collection
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Public API ==========================================================

pub(crate) use event_collector::EventCollector;
pub use event_collector::TickControl;
pub use interface::{PlatformError, PlatformEvent};
