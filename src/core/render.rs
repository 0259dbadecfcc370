//=========================================================================
// Render Seam
//=========================================================================
//
// The draw interface between the viewer and a graphics backend.
//
// Once per frame the viewer builds a `RenderFrame` snapshot (camera
// matrices plus per-object transform, color and label text) and hands it
// to the backend's `draw`. GPU resources, label rasterisation and
// lighting belong to the backend.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Mat4, Vec3};
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::camera::Camera;
use crate::core::catalog::{color_for, Color};
use crate::core::scene::{ObjectId, PlacedObject};

//=== RenderObject ========================================================

/// Draw data for one object.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderObject {
    pub id: ObjectId,
    pub position: Vec3,
    pub size: Vec3,
    pub scale: f32,
    pub color: Color,
    /// Lines for the label face (symbol, number, mass).
    pub label: [String; 3],
}

impl RenderObject {
    fn from_placed(object: &PlacedObject) -> Self {
        let record = object.record();
        Self {
            id: object.id(),
            position: object.position(),
            size: object.size(),
            scale: object.scale_factor(),
            color: color_for(record.atomic_number),
            label: record.label_lines(),
        }
    }

    /// Model matrix: uniform scale about the object centre, then translate.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(self.size * self.scale)
    }
}

//=== RenderFrame =========================================================

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone)]
pub struct RenderFrame {
    pub frame_index: u64,
    pub view: Mat4,
    pub projection: Mat4,
    pub camera_position: Vec3,
    pub objects: Vec<RenderObject>,
}

impl RenderFrame {
    pub fn capture(frame_index: u64, camera: &Camera, objects: &[PlacedObject]) -> Self {
        Self {
            frame_index,
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            camera_position: camera.position,
            objects: objects.iter().map(RenderObject::from_placed).collect(),
        }
    }

    /// The object drawn enlarged this frame, if any.
    pub fn highlighted(&self) -> Option<&RenderObject> {
        self.objects.iter().find(|o| o.scale > 1.0)
    }
}

//=== SceneRenderer =======================================================

/// Graphics backend driven by the viewer.
pub trait SceneRenderer {
    /// Output surface changed size (pixels).
    fn resize(&mut self, width: u32, height: u32);

    /// Draws one frame.
    fn draw(&mut self, frame: &RenderFrame);
}

//=== TraceRenderer =======================================================

/// Backend that only logs what it would draw.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    size: (u32, u32),
    frames_drawn: u64,
}

impl TraceRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl SceneRenderer for TraceRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        debug!(target: "viewer", "Render target resized to {}x{}", width, height);
        self.size = (width, height);
    }

    fn draw(&mut self, frame: &RenderFrame) {
        self.frames_drawn += 1;
        trace!(
            target: "viewer",
            "Frame {}: {} objects, camera at {:?}, highlight {:?}",
            frame.frame_index,
            frame.objects.len(),
            frame.camera_position,
            frame.highlighted().map(|o| &o.label[0])
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{Catalog, ElementRecord};
    use crate::core::scene::{GridLayout, ObjectRegistry};

    fn registry() -> ObjectRegistry {
        let catalog = Catalog::new(vec![
            ElementRecord::new("H", 1, 1.008, "a"),
            ElementRecord::new("He", 2, 4.003, "b"),
        ])
        .unwrap();
        ObjectRegistry::from_catalog(&catalog, GridLayout::default(), ObjectRegistry::DEFAULT_OBJECT_SIZE)
    }

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 30.0), 75.0, 1.0, 0.1, 1000.0)
    }

    #[test]
    fn capture_copies_object_state() {
        let mut registry = registry();
        registry.objects_mut()[1].set_scale_factor(1.1);

        let frame = RenderFrame::capture(7, &camera(), registry.all());

        assert_eq!(frame.frame_index, 7);
        assert_eq!(frame.objects.len(), 2);
        assert_eq!(frame.objects[0].color, color_for(1));
        assert_eq!(frame.objects[0].label[0], "H");
        assert_eq!(frame.highlighted().map(|o| o.id), Some(ObjectId::new(1)));
        assert_eq!(frame.camera_position, Vec3::new(0.0, 0.0, 30.0));
    }

    #[test]
    fn model_matrix_scales_about_centre() {
        let registry = registry();
        let frame = RenderFrame::capture(0, &camera(), registry.all());
        let obj = &frame.objects[0];

        let centre = obj.model_matrix().transform_point3(Vec3::ZERO);
        let corner = obj.model_matrix().transform_point3(Vec3::splat(0.5));

        assert_eq!(centre, obj.position);
        assert_eq!(corner - centre, obj.size * 0.5);
    }

    #[test]
    fn trace_renderer_counts_frames() {
        let registry = registry();
        let mut renderer = TraceRenderer::new();

        renderer.resize(640, 480);
        renderer.draw(&RenderFrame::capture(0, &camera(), registry.all()));
        renderer.draw(&RenderFrame::capture(1, &camera(), registry.all()));

        assert_eq!(renderer.frames_drawn(), 2);
        assert_eq!(renderer.size(), (640, 480));
    }
}
