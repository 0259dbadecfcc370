//=========================================================================
// Hover & Selection
//=========================================================================
//
// Two independent pieces of state driven by picking:
//
// - hovered:  recomputed every frame from the current pointer and camera.
//             The hovered object is scaled up, every other object is reset
//             to scale 1.0.
// - selected: set only by a click that hits an object. A click on empty
//             space keeps the previous selection.
//
// Frame trigger:  update_hover() → pick() → rewrite scale_factor of all
// Click trigger:  on_click()     → pick() → selected = id → listener
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;
use glam::Vec2;
use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::camera::Camera;
use crate::core::catalog::ElementRecord;
use crate::core::picking::pick;
use crate::core::scene::{ObjectId, ObjectRegistry};

//=== SelectionListener ===================================================

/// Receives the record of each successfully clicked object.
pub trait SelectionListener {
    fn on_selection_changed(&mut self, record: &ElementRecord);
}

impl<F> SelectionListener for F
where
    F: FnMut(&ElementRecord),
{
    fn on_selection_changed(&mut self, record: &ElementRecord) {
        self(record)
    }
}

/// Forwards selections over a channel to a display living elsewhere.
pub struct ChannelListener {
    sender: Sender<ElementRecord>,
}

impl ChannelListener {
    pub fn new(sender: Sender<ElementRecord>) -> Self {
        Self { sender }
    }
}

impl SelectionListener for ChannelListener {
    fn on_selection_changed(&mut self, record: &ElementRecord) {
        if self.sender.try_send(record.clone()).is_err() {
            warn!("Selection display unavailable, dropping {}", record.symbol);
        }
    }
}

//=== InteractionState ====================================================

/// Hover and selection state of the scene.
#[derive(Debug)]
pub struct InteractionState {
    hovered: Option<ObjectId>,
    selected: Option<ObjectId>,
    hover_scale: f32,
}

impl InteractionState {
    pub const DEFAULT_HOVER_SCALE: f32 = 1.1;

    /// # Panics
    ///
    /// Panics if `hover_scale < 1.0`.
    pub fn new(hover_scale: f32) -> Self {
        assert!(hover_scale >= 1.0, "Hover scale must be at least 1.0, got {}", hover_scale);
        Self {
            hovered: None,
            selected: None,
            hover_scale,
        }
    }

    //--- Frame Trigger ----------------------------------------------------

    /// Re-picks under the pointer and rewrites every object's scale.
    ///
    /// Runs whether or not anything moved, so the highlight always matches
    /// the latest camera.
    pub fn update_hover(
        &mut self,
        pointer_ndc: Vec2,
        camera: &Camera,
        registry: &mut ObjectRegistry,
    ) -> Option<ObjectId> {
        let hovered = pick(pointer_ndc, camera, registry);

        if hovered != self.hovered {
            debug!("Hover changed: {:?} → {:?}", self.hovered, hovered);
        }
        self.hovered = hovered;

        for object in registry.objects_mut() {
            let scale = if Some(object.id()) == hovered { self.hover_scale } else { 1.0 };
            object.set_scale_factor(scale);
        }

        hovered
    }

    //--- Click Trigger ----------------------------------------------------

    /// Picks at the click position; on a hit, selects and notifies.
    ///
    /// Returns the newly selected id, or `None` when the click hit nothing
    /// (selection unchanged).
    pub fn on_click(
        &mut self,
        pointer_ndc: Vec2,
        camera: &Camera,
        registry: &ObjectRegistry,
        listener: &mut dyn SelectionListener,
    ) -> Option<ObjectId> {
        let id = pick(pointer_ndc, camera, registry)?;

        let object = match registry.get(id) {
            Ok(object) => object,
            Err(e) => {
                error!("Picked object missing from registry: {}", e);
                return None;
            }
        };

        let record = object.record();
        info!("Selected {} (#{})", record.symbol, record.atomic_number);

        self.selected = Some(id);
        listener.on_selection_changed(record);
        Some(id)
    }

    //--- Queries ----------------------------------------------------------

    pub fn hovered(&self) -> Option<ObjectId> {
        self.hovered
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    pub fn hover_scale(&self) -> f32 {
        self.hover_scale
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOVER_SCALE)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::scene::GridLayout;
    use crossbeam_channel::bounded;
    use glam::Vec3;

    //--- Test Helpers -----------------------------------------------------

    fn record(n: u32) -> ElementRecord {
        ElementRecord::new(format!("E{}", n), n, n as f64, format!("fact {}", n))
    }

    fn registry() -> ObjectRegistry {
        let catalog = Catalog::new((1..=20).map(record).collect()).unwrap();
        ObjectRegistry::from_catalog(&catalog, GridLayout::default(), ObjectRegistry::DEFAULT_OBJECT_SIZE)
    }

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 30.0), 75.0, 4.0 / 3.0, 0.1, 1000.0)
    }

    fn ndc_of(camera: &Camera, registry: &ObjectRegistry, index: usize) -> Vec2 {
        let position = registry.all()[index].position();
        camera.world_to_ndc(position).unwrap().truncate()
    }

    /// Records every selection it is told about.
    #[derive(Default)]
    struct Recorder {
        seen: Vec<ElementRecord>,
    }

    impl SelectionListener for Recorder {
        fn on_selection_changed(&mut self, record: &ElementRecord) {
            self.seen.push(record.clone());
        }
    }

    fn scaled_count(registry: &ObjectRegistry) -> usize {
        registry.all().iter().filter(|o| o.scale_factor() > 1.0).count()
    }

    //=====================================================================
    // Hover Tests
    //=====================================================================

    #[test]
    fn hover_scales_only_the_hovered_object() {
        let mut registry = registry();
        let cam = camera();
        let mut state = InteractionState::default();

        let ndc = ndc_of(&cam, &registry, 4);
        let hovered = state.update_hover(ndc, &cam, &mut registry);

        assert_eq!(hovered, Some(ObjectId::new(4)));
        assert_eq!(state.hovered(), hovered);
        assert_eq!(scaled_count(&registry), 1);
        assert_eq!(registry.all()[4].scale_factor(), 1.1);
    }

    #[test]
    fn hover_moves_and_resets_previous() {
        let mut registry = registry();
        let cam = camera();
        let mut state = InteractionState::default();

        state.update_hover(ndc_of(&cam, &registry, 4), &cam, &mut registry);
        state.update_hover(ndc_of(&cam, &registry, 12), &cam, &mut registry);

        assert_eq!(state.hovered(), Some(ObjectId::new(12)));
        assert_eq!(registry.all()[4].scale_factor(), 1.0);
        assert_eq!(scaled_count(&registry), 1);
    }

    #[test]
    fn hover_over_background_clears_all_scales() {
        let mut registry = registry();
        let cam = camera();
        let mut state = InteractionState::default();

        state.update_hover(ndc_of(&cam, &registry, 4), &cam, &mut registry);
        state.update_hover(Vec2::ZERO, &cam, &mut registry);

        assert_eq!(state.hovered(), None);
        assert_eq!(scaled_count(&registry), 0);
    }

    #[test]
    fn hover_follows_camera_without_pointer_motion() {
        let mut registry = registry();
        let mut cam = camera();
        let mut state = InteractionState::default();

        let ndc = ndc_of(&cam, &registry, 4);
        state.update_hover(ndc, &cam, &mut registry);
        assert_eq!(state.hovered(), Some(ObjectId::new(4)));

        // Shift the camera one column to the right; same pointer, new target.
        cam.position.x += 6.0;
        state.update_hover(ndc, &cam, &mut registry);
        assert_eq!(state.hovered(), Some(ObjectId::new(5)));
        assert_eq!(scaled_count(&registry), 1);
    }

    #[test]
    #[should_panic(expected = "Hover scale must be at least 1.0")]
    fn hover_scale_below_one_panics() {
        InteractionState::new(0.9);
    }

    //=====================================================================
    // Selection Tests
    //=====================================================================

    #[test]
    fn click_on_object_selects_and_notifies_once() {
        let registry = registry();
        let cam = camera();
        let mut state = InteractionState::default();
        let mut recorder = Recorder::default();

        let selected = state.on_click(ndc_of(&cam, &registry, 4), &cam, &registry, &mut recorder);

        assert_eq!(selected, Some(ObjectId::new(4)));
        assert_eq!(state.selected(), Some(ObjectId::new(4)));
        assert_eq!(recorder.seen.len(), 1);
        assert_eq!(recorder.seen[0].atomic_number, 5);
    }

    #[test]
    fn click_on_background_keeps_selection() {
        let registry = registry();
        let cam = camera();
        let mut state = InteractionState::default();
        let mut recorder = Recorder::default();

        state.on_click(ndc_of(&cam, &registry, 4), &cam, &registry, &mut recorder);
        let result = state.on_click(Vec2::ZERO, &cam, &registry, &mut recorder);

        assert_eq!(result, None);
        assert_eq!(state.selected(), Some(ObjectId::new(4)), "Selection is sticky");
        assert_eq!(recorder.seen.len(), 1, "No callback for a miss");
    }

    #[test]
    fn click_on_new_object_overwrites_selection() {
        let registry = registry();
        let cam = camera();
        let mut state = InteractionState::default();
        let mut recorder = Recorder::default();

        state.on_click(ndc_of(&cam, &registry, 4), &cam, &registry, &mut recorder);
        state.on_click(ndc_of(&cam, &registry, 15), &cam, &registry, &mut recorder);

        assert_eq!(state.selected(), Some(ObjectId::new(15)));
        assert_eq!(recorder.seen.len(), 2);
        assert_eq!(recorder.seen[1].atomic_number, 16);
    }

    #[test]
    fn click_does_not_touch_hover() {
        let registry = registry();
        let cam = camera();
        let mut state = InteractionState::default();
        let mut recorder = Recorder::default();

        state.on_click(ndc_of(&cam, &registry, 4), &cam, &registry, &mut recorder);
        assert_eq!(state.hovered(), None);
        assert_eq!(scaled_count(&registry), 0);
    }

    #[test]
    fn closure_listener_receives_record() {
        let registry = registry();
        let cam = camera();
        let mut state = InteractionState::default();
        let mut symbols = Vec::new();

        {
            let mut listener = |r: &ElementRecord| symbols.push(r.symbol.clone());
            state.on_click(ndc_of(&cam, &registry, 0), &cam, &registry, &mut listener);
        }

        assert_eq!(symbols, vec!["E1".to_string()]);
    }

    #[test]
    fn channel_listener_forwards_record() {
        let registry = registry();
        let cam = camera();
        let mut state = InteractionState::default();
        let (tx, rx) = bounded(4);
        let mut listener = ChannelListener::new(tx);

        state.on_click(ndc_of(&cam, &registry, 9), &cam, &registry, &mut listener);

        let received = rx.try_recv().expect("selection should be forwarded");
        assert_eq!(received.atomic_number, 10);
    }

    #[test]
    fn channel_listener_survives_disconnected_display() {
        let registry = registry();
        let cam = camera();
        let mut state = InteractionState::default();
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut listener = ChannelListener::new(tx);

        // Should not panic, just log a warning
        let selected = state.on_click(ndc_of(&cam, &registry, 0), &cam, &registry, &mut listener);
        assert_eq!(selected, Some(ObjectId::new(0)));
    }
}
