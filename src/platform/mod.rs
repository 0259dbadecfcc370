//=========================================================================
// Platform Subsystem
//
// Hosts the viewer inside a Winit window.
//
// Architecture:
// ```text
//  Main Thread (only thread):
//  ┌──────────────────────────────────────────────┐
//  │  Winit Event Loop                            │
//  │   ↓                                          │
//  │  InputProcessor (Winit → InputEvent)         │
//  │   ↓                                          │
//  │  Sender<PlatformEvent> ──→ channel (bounded) │
//  │                               ↓              │
//  │  RedrawRequested ──→ Viewer::frame(dt)       │
//  │                        ├─ drain in order     │
//  │                        ├─ camera tick        │
//  │                        ├─ hover re-pick      │
//  │                        └─ draw               │
//  │   ↓                                          │
//  │  Receiver<ElementRecord> ──→ window title    │
//  └──────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: every input sent since the
//   last frame is applied before the camera moves and hover is re-picked
// - **Wheel events are consumed**: there is no page to scroll, the delta
//   only drives zoom
// - **Pointer moves coalesce**: only the latest cursor position is queued
//   ahead of the next discrete event or frame
// - **Nothing is dropped on overflow**: when the bounded queue is full,
//   events wait in a local backlog (in order) instead of blocking the
//   only thread, so key and button releases always arrive
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Crates =====================================================

use std::collections::VecDeque;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::catalog::ElementRecord;
use crate::core::input::InputEvent;
use crate::core::platform_bridge::{PlatformError, PlatformEvent, TickControl};
use crate::core::viewer::Viewer;
use input_processor::InputProcessor;

//=== WindowConfig ========================================================

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowConfig {
    pub title: String,
    /// Logical size in points.
    pub size: (u32, u32),
}

//=== Platform ============================================================

/// Window owner and frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(..)` - wires the viewer and channels
/// 2. **Execution**: `platform.run()` - starts event loop
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: User closes window → `WindowClosed` → viewer exits
///
/// This type is NOT Send/Sync - it must remain on the main thread.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    config: WindowConfig,

    /// Ordered input queue drained by the viewer each frame.
    event_sender: Sender<PlatformEvent>,

    /// Events that did not fit in the queue, oldest first.
    backlog: VecDeque<PlatformEvent>,

    /// Latest cursor position not yet queued.
    pending_pointer: Option<InputEvent>,

    /// Records of clicked objects, shown in the window title.
    selections: Receiver<ElementRecord>,

    viewer: Viewer,

    input_processor: InputProcessor,

    last_frame: Instant,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Does not create window yet - that happens lazily in `resumed()`.
    pub fn new(
        config: WindowConfig,
        viewer: Viewer,
        event_sender: Sender<PlatformEvent>,
        selections: Receiver<ElementRecord>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            config,
            event_sender,
            backlog: VecDeque::new(),
            pending_pointer: None,
            selections,
            viewer,
            input_processor: InputProcessor::new(),
            last_frame: Instant::now(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop can't be created or
    /// terminates abnormally.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Remembers a cursor position; replaces any not yet queued.
    fn queue_pointer(&mut self, event: InputEvent) {
        self.pending_pointer = Some(event);
    }

    /// Queues one event for the next frame, after the pending pointer.
    fn forward(&mut self, event: PlatformEvent) {
        self.flush_pointer();
        self.enqueue(event);
    }

    fn flush_pointer(&mut self) {
        if let Some(pointer) = self.pending_pointer.take() {
            self.enqueue(PlatformEvent::Input(pointer));
        }
    }

    /// Sends into the channel, or behind the backlog to keep ordering.
    fn enqueue(&mut self, event: PlatformEvent) {
        if !self.backlog.is_empty() {
            self.backlog.push_back(event);
            return;
        }

        match self.event_sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                debug!(target: "platform::input", "Input queue full, holding {:?}", event);
                self.backlog.push_back(event);
            }
            Err(TrySendError::Disconnected(event)) => {
                warn!(target: "platform::input", "Viewer disconnected, dropping {:?}", event);
            }
        }
    }

    /// Moves as much of the backlog into the channel as fits.
    fn flush_backlog(&mut self) {
        while let Some(event) = self.backlog.pop_front() {
            match self.event_sender.try_send(event) {
                Ok(()) => {}
                Err(TrySendError::Full(event)) => {
                    self.backlog.push_front(event);
                    break;
                }
                Err(TrySendError::Disconnected(_)) => {
                    warn!(
                        target: "platform::input",
                        "Viewer disconnected, dropping {} held events",
                        self.backlog.len() + 1
                    );
                    self.backlog.clear();
                    break;
                }
            }
        }
    }

    /// Runs one viewer frame and publishes any new selection.
    fn run_frame(&mut self) -> TickControl {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.flush_pointer();
        self.flush_backlog();
        let control = self.viewer.frame(dt);
        // Refill the queue the viewer just drained.
        self.flush_backlog();

        if !self.backlog.is_empty() {
            warn!(
                target: "platform::input",
                "Input backlog of {} events carried to next frame",
                self.backlog.len()
            );
        }

        // Only the latest selection matters for the title.
        if let Some(record) = self.selections.try_iter().last() {
            let title = self.selection_title(&record);
            info!(target: "platform", "{}", title);
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
        }

        control
    }

    fn selection_title(&self, record: &ElementRecord) -> String {
        let (heading, fact) = record.fact_display();
        format!("{} | {}: {}", self.config.title, heading, fact)
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet. On mobile, this may be
    /// called multiple times (suspend/resume cycle).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let (width, height) = self.config.size;
        let attrs = WindowAttributes::default()
            .with_title(self.config.title.as_str())
            .with_inner_size(LogicalSize::new(width, height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );

                // Cursor positions arrive in physical pixels.
                let event = self.input_processor.process_resize(size);
                self.forward(PlatformEvent::Input(event));
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.forward(PlatformEvent::WindowClosed);
                self.run_frame();
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.forward(PlatformEvent::WindowClosed);
                if self.run_frame() != TickControl::Exit {
                    warn!(target: "platform", "Viewer did not acknowledge close, exiting anyway");
                }
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                let event = self.input_processor.process_resize(size);
                self.forward(PlatformEvent::Input(event));
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self
                    .input_processor
                    .process_mouse_move(position.x as f32, position.y as f32);
                self.queue_pointer(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(&key_event) {
                    self.forward(PlatformEvent::Input(event));
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(button, state);
                self.forward(PlatformEvent::Input(event));
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let event = self.input_processor.process_wheel(delta);
                self.forward(PlatformEvent::Input(event));
            }

            WindowEvent::RedrawRequested => match self.run_frame() {
                TickControl::Exit => event_loop.exit(),
                TickControl::Continue => {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            },

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
