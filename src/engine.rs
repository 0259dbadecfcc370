//=========================================================================
// Periodic Scene Engine
//
// Main entry point: configures the scene, then hands it to the window.
//
// Architecture:
// ```text
//     EngineBuilder  ──build(records)──>  Engine  ──run()──>  [Event Loop]
//         │                                 │
//         ├─ with_move_speed()              ├─ wires channels
//         ├─ with_zoom_bounds()             ├─ builds Viewer
//         ├─ with_window_size()             └─ runs Platform
//         └─ with_renderer()                   blocks until close
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::bounded;
use log::info;

//=== Internal Dependencies ===============================================

use crate::core::camera::CameraSettings;
use crate::core::catalog::{Catalog, ElementRecord};
use crate::core::error::SceneError;
use crate::core::interaction::{ChannelListener, InteractionState};
use crate::core::platform_bridge::PlatformError;
use crate::core::render::{SceneRenderer, TraceRenderer};
use crate::core::scene::{GridLayout, ObjectRegistry};
use crate::core::viewer::{Viewer, ViewerSettings};
use crate::platform::{Platform, WindowConfig};

//=== EngineError =========================================================

/// Anything that can stop the engine from starting or running.
#[derive(Debug)]
pub enum EngineError {
    Scene(SceneError),
    Platform(PlatformError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scene(e) => write!(f, "Scene setup failed: {}", e),
            Self::Platform(e) => write!(f, "Platform failure: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scene(e) => Some(e),
            Self::Platform(e) => Some(e),
        }
    }
}

impl From<SceneError> for EngineError {
    fn from(e: SceneError) -> Self {
        Self::Scene(e)
    }
}

impl From<PlatformError> for EngineError {
    fn from(e: PlatformError) -> Self {
        Self::Platform(e)
    }
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Move speed**: 0.2 world units per frame per held key
/// - **Zoom speed**: 0.1 world units per wheel pixel
/// - **Zoom bounds**: 10..=100
/// - **Hover scale**: 1.1
/// - **Initial distance**: 30
/// - **Field of view**: 75° vertical
/// - **Window**: 1280×720, titled "Periodic Scene"
/// - **Channel capacity**: 256 events
///
/// # Examples
///
/// ```no_run
/// use periodic_scene::core::catalog::Catalog;
/// use periodic_scene::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_move_speed(0.5)
///     .with_zoom_bounds(15.0, 60.0)
///     .build(Catalog::builtin_records())?
///     .run()?;
/// # Ok::<(), periodic_scene::EngineError>(())
/// ```
pub struct EngineBuilder {
    camera: CameraSettings,
    hover_scale: f32,
    window_size: (u32, u32),
    title: String,
    channel_capacity: usize,
    renderer: Option<Box<dyn SceneRenderer>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            camera: CameraSettings::default(),
            hover_scale: InteractionState::DEFAULT_HOVER_SCALE,
            window_size: (1280, 720),
            title: "Periodic Scene".to_string(),
            channel_capacity: 256,
            renderer: None,
        }
    }

    /// Pan distance per frame while a pan key is held.
    ///
    /// # Panics
    ///
    /// Panics if `speed <= 0.0`.
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        assert!(speed > 0.0, "Move speed must be positive, got {}", speed);
        self.camera.move_speed = speed;
        self
    }

    /// Camera z change per wheel pixel.
    ///
    /// # Panics
    ///
    /// Panics if `speed <= 0.0`.
    pub fn with_zoom_speed(mut self, speed: f32) -> Self {
        assert!(speed > 0.0, "Zoom speed must be positive, got {}", speed);
        self.camera.zoom_speed = speed;
        self
    }

    /// Closest and farthest camera z.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < min < max`.
    pub fn with_zoom_bounds(mut self, min: f32, max: f32) -> Self {
        assert!(min > 0.0, "Zoom minimum must be positive, got {}", min);
        assert!(min < max, "Zoom bounds must satisfy min < max, got {}..{}", min, max);
        self.camera.z_min = min;
        self.camera.z_max = max;
        self
    }

    /// # Panics
    ///
    /// Panics if `scale < 1.0`.
    pub fn with_hover_scale(mut self, scale: f32) -> Self {
        assert!(scale >= 1.0, "Hover scale must be at least 1.0, got {}", scale);
        self.hover_scale = scale;
        self
    }

    /// Starting camera z; clamped into the zoom bounds at startup.
    ///
    /// # Panics
    ///
    /// Panics if `distance <= 0.0`.
    pub fn with_initial_distance(mut self, distance: f32) -> Self {
        assert!(distance > 0.0, "Initial distance must be positive, got {}", distance);
        self.camera.initial_distance = distance;
        self
    }

    /// Vertical field of view in degrees.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < degrees < 180`.
    pub fn with_field_of_view(mut self, degrees: f32) -> Self {
        assert!(
            degrees > 0.0 && degrees < 180.0,
            "Field of view must be within (0, 180) degrees, got {}",
            degrees
        );
        self.camera.fov_y_degrees = degrees;
        self
    }

    /// Initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be non-zero, got {}x{}", width, height);
        self.window_size = (width, height);
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets the capacity of the platform → viewer event queue.
    ///
    /// Events arriving while the queue is full are dropped with a warning.
    ///
    /// Default: 256
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Replaces the default [`TraceRenderer`].
    pub fn with_renderer(mut self, renderer: impl SceneRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Validates the records and lays out the scene.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EmptyCatalog`] or
    /// [`SceneError::DuplicateAtomicNumber`] for an unusable catalog.
    pub fn build(self, records: Vec<ElementRecord>) -> Result<Engine, SceneError> {
        let catalog = Catalog::new(records)?;
        let registry = ObjectRegistry::from_catalog(
            &catalog,
            GridLayout::default(),
            ObjectRegistry::DEFAULT_OBJECT_SIZE,
        );

        info!(
            "Building engine ({} objects, window {}x{}, channel: {})",
            registry.len(),
            self.window_size.0,
            self.window_size.1,
            self.channel_capacity
        );

        Ok(Engine {
            settings: ViewerSettings {
                camera: self.camera,
                hover_scale: self.hover_scale,
                viewport: self.window_size,
            },
            window: WindowConfig {
                title: self.title,
                size: self.window_size,
            },
            channel_capacity: self.channel_capacity,
            registry,
            renderer: self
                .renderer
                .unwrap_or_else(|| Box::new(TraceRenderer::new())),
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// A configured scene ready to be shown.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   └─► Platform (Winit event loop)
///         ├─► Sender<PlatformEvent> ──► Viewer (frame on redraw)
///         └─► Receiver<ElementRecord> ◄── ChannelListener
/// ```
pub struct Engine {
    settings: ViewerSettings,
    window: WindowConfig,
    channel_capacity: usize,
    registry: ObjectRegistry,
    renderer: Box<dyn SceneRenderer>,
}

impl Engine {
    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and blocks until it closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the event and selection channels
    /// 2. Builds the viewer around the registry and renderer
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: viewer reports exit → event loop returns
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Platform`] if the event loop can't start or
    /// fails while running.
    pub fn run(self) -> Result<(), EngineError> {
        info!("Starting engine runtime");

        //--- 1. Create communication channels ----------------------------
        let (event_tx, event_rx) = bounded(self.channel_capacity);
        let (selection_tx, selection_rx) = bounded(self.channel_capacity);

        info!("Channels created (capacity: {})", self.channel_capacity);

        //--- 2. Build the viewer ------------------------------------------
        let viewer = Viewer::new(
            self.settings,
            self.registry,
            event_rx,
            self.renderer,
            Box::new(ChannelListener::new(selection_tx)),
        );

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(self.window, viewer, event_tx, selection_rx);
        info!("Platform initialized, entering event loop");

        platform.run()?;

        info!("Engine shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::RenderFrame;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.camera, CameraSettings::default());
        assert_eq!(builder.hover_scale, 1.1);
        assert_eq!(builder.window_size, (1280, 720));
        assert_eq!(builder.channel_capacity, 256);
        assert!(builder.renderer.is_none());
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let builder = EngineBuilder::new()
            .with_move_speed(0.5)
            .with_zoom_speed(0.2)
            .with_zoom_bounds(5.0, 50.0)
            .with_hover_scale(1.25)
            .with_initial_distance(20.0)
            .with_field_of_view(60.0)
            .with_window_size(800, 600)
            .with_title("Elements")
            .with_channel_capacity(64);

        assert_eq!(builder.camera.move_speed, 0.5);
        assert_eq!(builder.camera.zoom_speed, 0.2);
        assert_eq!((builder.camera.z_min, builder.camera.z_max), (5.0, 50.0));
        assert_eq!(builder.hover_scale, 1.25);
        assert_eq!(builder.camera.initial_distance, 20.0);
        assert_eq!(builder.camera.fov_y_degrees, 60.0);
        assert_eq!(builder.window_size, (800, 600));
        assert_eq!(builder.title, "Elements");
        assert_eq!(builder.channel_capacity, 64);
    }

    #[test]
    #[should_panic(expected = "Move speed must be positive")]
    fn builder_with_move_speed_panics_on_zero() {
        EngineBuilder::new().with_move_speed(0.0);
    }

    #[test]
    #[should_panic(expected = "Zoom speed must be positive")]
    fn builder_with_zoom_speed_panics_on_negative() {
        EngineBuilder::new().with_zoom_speed(-0.1);
    }

    #[test]
    #[should_panic(expected = "min < max")]
    fn builder_with_inverted_zoom_bounds_panics() {
        EngineBuilder::new().with_zoom_bounds(100.0, 10.0);
    }

    #[test]
    #[should_panic(expected = "Hover scale must be at least 1.0")]
    fn builder_with_shrinking_hover_panics() {
        EngineBuilder::new().with_hover_scale(0.5);
    }

    #[test]
    #[should_panic(expected = "Field of view must be within")]
    fn builder_with_flat_field_of_view_panics() {
        EngineBuilder::new().with_field_of_view(180.0);
    }

    #[test]
    #[should_panic(expected = "Window size must be non-zero")]
    fn builder_with_empty_window_panics() {
        EngineBuilder::new().with_window_size(0, 600);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    //=====================================================================
    // Build Tests
    //=====================================================================

    #[test]
    fn build_lays_out_builtin_catalog() {
        let engine = EngineBuilder::new()
            .with_window_size(800, 600)
            .build(Catalog::builtin_records())
            .unwrap();

        assert_eq!(engine.registry().len(), 20);
        assert_eq!(engine.settings().viewport, (800, 600));
        assert_eq!(engine.settings().hover_scale, 1.1);
    }

    #[test]
    fn build_rejects_empty_catalog() {
        let result = EngineBuilder::new().build(Vec::new());
        assert_eq!(result.err(), Some(SceneError::EmptyCatalog));
    }

    #[test]
    fn build_rejects_duplicate_atomic_numbers() {
        let records = vec![
            ElementRecord::new("H", 1, 1.008, "a"),
            ElementRecord::new("D", 1, 2.014, "b"),
        ];
        let result = EngineBuilder::new().build(records);
        assert_eq!(result.err(), Some(SceneError::DuplicateAtomicNumber(1)));
    }

    #[test]
    fn build_keeps_custom_renderer() {
        struct Null;
        impl SceneRenderer for Null {
            fn resize(&mut self, _width: u32, _height: u32) {}
            fn draw(&mut self, _frame: &RenderFrame) {}
        }

        let engine = EngineBuilder::new()
            .with_renderer(Null)
            .build(Catalog::builtin_records())
            .unwrap();
        assert_eq!(engine.registry().len(), 20);
    }

    //=====================================================================
    // EngineError Tests
    //=====================================================================

    #[test]
    fn scene_error_converts_and_displays() {
        let err: EngineError = SceneError::EmptyCatalog.into();
        assert!(matches!(err, EngineError::Scene(SceneError::EmptyCatalog)));
        assert_eq!(err.to_string(), "Scene setup failed: Element catalog is empty");
        assert!(std::error::Error::source(&err).is_some());
    }
}
