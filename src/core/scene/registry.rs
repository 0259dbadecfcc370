//=========================================================================
// Object Registry
//=========================================================================
//
// Owns every placed, pickable scene object.
//
// Objects are appended once at startup, in catalog order, and are never
// removed. An object's id is its index in the registry, so iteration
// order, insertion order and catalog order coincide.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use glam::Vec3;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::bounds::Aabb;
use super::layout::GridLayout;
use crate::core::catalog::{Catalog, ElementRecord};
use crate::core::error::SceneError;

//=== ObjectId ============================================================

/// Handle to a [`PlacedObject`], issued by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl ObjectId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//=== PlacedObject ========================================================

/// An element placed in the scene.
///
/// Only `scale_factor` changes after placement; it is written by the
/// interaction state each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedObject {
    id: ObjectId,
    record: ElementRecord,
    position: Vec3,
    size: Vec3,
    scale_factor: f32,
}

impl PlacedObject {
    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn record(&self) -> &ElementRecord {
        &self.record
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unscaled box extents (width, height, depth).
    pub fn size(&self) -> Vec3 {
        self.size
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// World-space bounds at the current scale.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size * self.scale_factor)
    }

    pub(crate) fn set_scale_factor(&mut self, scale: f32) {
        self.scale_factor = scale;
    }
}

//=== ObjectRegistry ======================================================

/// Ordered store of placed objects.
#[derive(Debug)]
pub struct ObjectRegistry {
    layout: GridLayout,
    object_size: Vec3,
    expected_total: usize,
    objects: Vec<PlacedObject>,
}

impl ObjectRegistry {
    /// Default element box: 4 wide, 6 tall, 2 deep.
    pub const DEFAULT_OBJECT_SIZE: Vec3 = Vec3::new(4.0, 6.0, 2.0);

    /// Creates an empty registry that expects `expected_total` objects.
    ///
    /// The expected total feeds the layout so rows are centred from the
    /// first registration on.
    pub fn new(layout: GridLayout, object_size: Vec3, expected_total: usize) -> Self {
        Self {
            layout,
            object_size,
            expected_total,
            objects: Vec::with_capacity(expected_total),
        }
    }

    /// Places every catalog record, in catalog order.
    pub fn from_catalog(catalog: &Catalog, layout: GridLayout, object_size: Vec3) -> Self {
        let mut registry = Self::new(layout, object_size, catalog.len());
        for record in catalog.records() {
            registry.register(record.clone());
        }

        info!(
            "Registry populated: {} objects in {} row(s)",
            registry.len(),
            registry.len().div_ceil(layout.columns)
        );
        registry
    }

    //--- Registration -----------------------------------------------------

    /// Places `record` at the next grid slot and stores it.
    pub fn register(&mut self, record: ElementRecord) -> &PlacedObject {
        let index = self.objects.len();
        let total = self.expected_total.max(index + 1);
        let position = self.layout.place(index, total);

        debug!(
            "Placed {} (#{}) at ({:.1}, {:.1}, {:.1})",
            record.symbol, record.atomic_number, position.x, position.y, position.z
        );

        self.objects.push(PlacedObject {
            id: ObjectId::new(index),
            record,
            position,
            size: self.object_size,
            scale_factor: 1.0,
        });

        &self.objects[index]
    }

    //--- Queries ----------------------------------------------------------

    pub fn all(&self) -> &[PlacedObject] {
        &self.objects
    }

    /// # Errors
    ///
    /// [`SceneError::ObjectNotFound`] if the id was not issued here.
    pub fn get(&self, id: ObjectId) -> Result<&PlacedObject, SceneError> {
        self.objects.get(id.0).ok_or(SceneError::ObjectNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub(crate) fn objects_mut(&mut self) -> &mut [PlacedObject] {
        &mut self.objects
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn move_object(&mut self, id: ObjectId, position: Vec3) {
        self.objects[id.0].position = position;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
