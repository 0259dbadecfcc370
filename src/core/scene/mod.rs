//=========================================================================
// Scene
//=========================================================================
//
// Placement and storage of pickable scene objects.
//
// Architecture:
//   Catalog ──GridLayout::place()──> ObjectRegistry
//                                      └─ objects: Vec<PlacedObject>
//                                           └─ bounds(): Aabb (scaled)
//
//=========================================================================

//=== Module Declarations =================================================

mod bounds;
mod layout;
mod registry;

//=== Public API ==========================================================

pub use bounds::{Aabb, Ray};
pub use layout::GridLayout;
pub use registry::{ObjectId, ObjectRegistry, PlacedObject};
