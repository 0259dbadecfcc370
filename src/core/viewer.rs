//=========================================================================
// Viewer
//=========================================================================
//
// Per-frame driver of the scene.
//
// The viewer owns every piece of scene state and is called once per
// display refresh. Each call:
//
//  1. Drains platform events (bounded, in arrival order)
//  2. Applies them: pointer, keys, clicks, wheel, resize
//  3. Ticks the camera controller
//  4. Re-picks the hovered object with the updated camera
//  5. Hands a RenderFrame snapshot to the renderer
//
// Input and the frame callback share one thread; the channel only
// preserves ordering between the window host and this loop.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::camera::{CameraController, CameraSettings};
use crate::core::input::{InputEvent, InputTracker, MouseButton};
use crate::core::interaction::{InteractionState, SelectionListener};
use crate::core::platform_bridge::{EventCollector, PlatformEvent, TickControl};
use crate::core::render::{RenderFrame, SceneRenderer};
use crate::core::scene::ObjectRegistry;

//=== ViewerSettings ======================================================

/// Resolved viewer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    pub camera: CameraSettings,
    pub hover_scale: f32,
    /// Initial viewport in pixels.
    pub viewport: (u32, u32),
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            camera: CameraSettings::default(),
            hover_scale: InteractionState::DEFAULT_HOVER_SCALE,
            viewport: (1280, 720),
        }
    }
}

//=== Viewer ==============================================================

pub struct Viewer {
    input: InputTracker,
    camera: CameraController,
    registry: ObjectRegistry,
    interaction: InteractionState,
    collector: EventCollector,
    renderer: Box<dyn SceneRenderer>,
    listener: Box<dyn SelectionListener>,
    frame_index: u64,
}

impl Viewer {
    pub fn new(
        settings: ViewerSettings,
        registry: ObjectRegistry,
        receiver: Receiver<PlatformEvent>,
        mut renderer: Box<dyn SceneRenderer>,
        listener: Box<dyn SelectionListener>,
    ) -> Self {
        let (width, height) = settings.viewport;
        renderer.resize(width, height);

        info!(
            target: "viewer",
            "Viewer ready: {} objects, viewport {}x{}",
            registry.len(),
            width,
            height
        );

        Self {
            input: InputTracker::new(width, height),
            camera: CameraController::new(settings.camera, width, height),
            registry,
            interaction: InteractionState::new(settings.hover_scale),
            collector: EventCollector::new(receiver),
            renderer,
            listener,
            frame_index: 0,
        }
    }

    //--- frame() ----------------------------------------------------------
    //
    // One display refresh. Events received before a close are still
    // applied; the frame itself is skipped once the host is gone.
    //
    pub fn frame(&mut self, dt: f32) -> TickControl {
        let control = self.collector.collect_frame();

        for event in self.collector.take_events() {
            self.apply(event);
        }

        if control == TickControl::Exit {
            info!(target: "viewer", "Viewer stopping after {} frames", self.frame_index);
            return TickControl::Exit;
        }

        self.camera.tick(&self.input, dt);
        self.interaction.update_hover(
            self.input.pointer_ndc(),
            self.camera.camera(),
            &mut self.registry,
        );

        let frame = RenderFrame::capture(self.frame_index, self.camera.camera(), self.registry.all());
        self.renderer.draw(&frame);
        self.frame_index += 1;

        TickControl::Continue
    }

    //--- apply() ----------------------------------------------------------

    fn apply(&mut self, event: InputEvent) {
        trace!(target: "viewer", "Applying {:?}", event);

        match event {
            InputEvent::MouseMoved { x, y } => self.input.on_pointer_move_in_viewport(x, y),
            InputEvent::KeyDown { key } => self.input.on_key_down(key),
            InputEvent::KeyUp { key } => self.input.on_key_up(key),
            InputEvent::MouseButtonDown { button } => self.input.on_button_down(button),
            InputEvent::MouseButtonUp { button } => {
                let completed = self.input.on_button_up(button);
                if completed && button == MouseButton::Left {
                    self.interaction.on_click(
                        self.input.pointer_ndc(),
                        self.camera.camera(),
                        &self.registry,
                        self.listener.as_mut(),
                    );
                }
            }
            InputEvent::Wheel { delta_y } => self.camera.on_wheel(delta_y),
            InputEvent::Resized { width, height } => {
                debug!(target: "viewer", "Viewport resized to {}x{}", width, height);
                self.input.set_viewport(width, height);
                self.camera.resize(width, height);
                self.renderer.resize(width, height);
            }
            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Number of frames drawn so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
