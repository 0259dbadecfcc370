//=========================================================================
// Input Tracker
//=========================================================================
//
// Level-state input tracking: which keys are held and where the pointer
// is, expressed in normalized device coordinates.
//
// Architecture:
//   InputEvent → on_*() → HashSet (keys/buttons held) + pointer NDC → query
//
// There is no event queue here. Repeated key-downs collapse to "held",
// and the last pointer write wins.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::fmt;

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::event::{KeyCode, MouseButton};

//=== InputTracker ========================================================

/// Tracks held keys, held mouse buttons and the pointer position.
pub struct InputTracker {
    held_keys: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    pointer_ndc: Vec2,
    viewport: (u32, u32),
}

impl InputTracker {
    /// Creates a tracker for a viewport of the given pixel size.
    ///
    /// The pointer starts at the viewport centre (NDC origin).
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            held_keys: HashSet::new(),
            buttons_down: HashSet::new(),
            pointer_ndc: Vec2::ZERO,
            viewport: (viewport_width, viewport_height),
        }
    }

    //--- Pointer ----------------------------------------------------------

    /// Converts a pixel position to NDC and overwrites the pointer.
    ///
    /// `x' = 2x/w - 1`, `y' = -2y/h + 1`. A degenerate viewport (zero
    /// width or height) leaves the pointer where it was.
    pub fn on_pointer_move(
        &mut self,
        client_x: f32,
        client_y: f32,
        viewport_width: u32,
        viewport_height: u32,
    ) {
        if viewport_width == 0 || viewport_height == 0 {
            return;
        }

        self.pointer_ndc = Vec2::new(
            2.0 * client_x / viewport_width as f32 - 1.0,
            -2.0 * client_y / viewport_height as f32 + 1.0,
        );
    }

    /// Same as [`on_pointer_move`](Self::on_pointer_move) using the tracked viewport.
    pub fn on_pointer_move_in_viewport(&mut self, client_x: f32, client_y: f32) {
        let (w, h) = self.viewport;
        self.on_pointer_move(client_x, client_y, w, h);
    }

    /// Records a new viewport size for subsequent pointer conversions.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    //--- Keyboard ---------------------------------------------------------

    pub fn on_key_down(&mut self, key: KeyCode) {
        if key != KeyCode::Unidentified {
            self.held_keys.insert(key);
        }
    }

    pub fn on_key_up(&mut self, key: KeyCode) {
        self.held_keys.remove(&key);
    }

    //--- Mouse Buttons ----------------------------------------------------

    pub fn on_button_down(&mut self, button: MouseButton) {
        self.buttons_down.insert(button);
    }

    /// Releases a button. Returns `true` if it had been pressed, i.e. the
    /// release completes a click.
    pub fn on_button_up(&mut self, button: MouseButton) -> bool {
        self.buttons_down.remove(&button)
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.held_keys.contains(&key)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Returns an iterator over all held keys.
    pub fn held_keys(&self) -> impl Iterator<Item = &KeyCode> {
        self.held_keys.iter()
    }

    /// Pointer position in normalized device coordinates.
    pub fn pointer_ndc(&self) -> Vec2 {
        self.pointer_ndc
    }

    /// Viewport size in pixels.
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }
}

//=== Debug Trait =========================================================

impl fmt::Debug for InputTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let held: Vec<_> = self.held_keys.iter().map(|k| format!("{:?}", k)).collect();

        f.debug_struct("InputTracker")
            .field("pointer_ndc", &self.pointer_ndc)
            .field("viewport", &self.viewport)
            .field("held", &held)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
