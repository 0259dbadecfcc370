//=========================================================================
// Picking
//=========================================================================
//
// Ray casting from the pointer into the object registry.
//
// Architecture:
//   pointer NDC ──Camera::ray_from_ndc()──> Ray
//        Ray ──Aabb::intersect_ray()──> distance per object
//                                        └─ nearest wins, ties → lowest id
//
// Linear scan over every registered object. A spatial index would slot in
// behind `pick` without changing callers.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::camera::Camera;
use crate::core::scene::{ObjectId, ObjectRegistry};

//=== PickHit =============================================================

/// Nearest object under a ray and its distance from the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub id: ObjectId,
    pub distance: f32,
}

//=== pick ================================================================

/// Id of the nearest object under `pointer_ndc`, if any.
pub fn pick(pointer_ndc: Vec2, camera: &Camera, registry: &ObjectRegistry) -> Option<ObjectId> {
    pick_hit(pointer_ndc, camera, registry).map(|hit| hit.id)
}

/// Like [`pick`] but also reports the hit distance.
pub fn pick_hit(pointer_ndc: Vec2, camera: &Camera, registry: &ObjectRegistry) -> Option<PickHit> {
    let ray = camera.ray_from_ndc(pointer_ndc);
    let mut nearest: Option<PickHit> = None;

    // Registry order is ascending id, so a strict `<` keeps the lowest id on ties.
    for object in registry.all() {
        let Some(distance) = object.bounds().intersect_ray(&ray) else {
            continue;
        };

        match nearest {
            Some(best) if distance >= best.distance => {}
            _ => {
                nearest = Some(PickHit {
                    id: object.id(),
                    distance,
                })
            }
        }
    }

    nearest
}

//=========================================================================
// Unit Tests
//=========================================================================
