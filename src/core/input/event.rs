//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level input events.
//
// This module abstracts away platform-specific input (e.g. Winit)
// into a unified, viewer-friendly format consumed by the input tracker,
// the camera controller and the interaction state.
//
// Responsibilities:
// - Represent keyboard, pointer, wheel and viewport events in a stable,
//   portable way
// - Normalise key identifiers case-insensitively ("W" and "w" are the
//   same held key)
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    PlatformEvent channel
//         ↓
//    Viewer (applies events in arrival order)
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left). Releasing it is a click.
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== KeyCode =============================================================

/// Keyboard key identifier.
///
/// Letter keys are identified by the character they stand for, not by
/// their case: a shifted `W` and a plain `w` both map to [`KeyCode::KeyW`].
///
/// Coverage:
/// - Alphanumeric keys (A-Z, 0-9)
/// - Arrow keys
/// - Common special keys (Space, Enter, Escape, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

impl KeyCode {
    /// Resolves a key name as reported by a keyboard layout.
    ///
    /// Single characters are matched case-insensitively. Named keys use
    /// their conventional names (`"ArrowUp"`, `" "`/`"Space"`, `"Enter"`).
    /// Anything else maps to [`KeyCode::Unidentified`].
    pub fn from_key_name(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c);
        }

        match name {
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            "Space" => KeyCode::Space,
            "Enter" => KeyCode::Enter,
            "Escape" => KeyCode::Escape,
            "Tab" => KeyCode::Tab,
            "Backspace" => KeyCode::Backspace,
            "Delete" => KeyCode::Delete,
            _ => KeyCode::Unidentified,
        }
    }

    fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            '0' => KeyCode::Digit0, '1' => KeyCode::Digit1,
            '2' => KeyCode::Digit2, '3' => KeyCode::Digit3,
            '4' => KeyCode::Digit4, '5' => KeyCode::Digit5,
            '6' => KeyCode::Digit6, '7' => KeyCode::Digit7,
            '8' => KeyCode::Digit8, '9' => KeyCode::Digit9,

            'a' => KeyCode::KeyA, 'b' => KeyCode::KeyB, 'c' => KeyCode::KeyC,
            'd' => KeyCode::KeyD, 'e' => KeyCode::KeyE, 'f' => KeyCode::KeyF,
            'g' => KeyCode::KeyG, 'h' => KeyCode::KeyH, 'i' => KeyCode::KeyI,
            'j' => KeyCode::KeyJ, 'k' => KeyCode::KeyK, 'l' => KeyCode::KeyL,
            'm' => KeyCode::KeyM, 'n' => KeyCode::KeyN, 'o' => KeyCode::KeyO,
            'p' => KeyCode::KeyP, 'q' => KeyCode::KeyQ, 'r' => KeyCode::KeyR,
            's' => KeyCode::KeyS, 't' => KeyCode::KeyT, 'u' => KeyCode::KeyU,
            'v' => KeyCode::KeyV, 'w' => KeyCode::KeyW, 'x' => KeyCode::KeyX,
            'y' => KeyCode::KeyY, 'z' => KeyCode::KeyZ,

            ' ' => KeyCode::Space,
            '\t' => KeyCode::Tab,
            '\r' | '\n' => KeyCode::Enter,

            _ => KeyCode::Unidentified,
        }
    }
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Events are applied by the viewer strictly in arrival order, so a click
/// always sees the pointer position of the last `MouseMoved` before it.
///
/// # Event Types
///
/// - **KeyDown/KeyUp**: Keyboard level changes
/// - **MouseButtonDown/MouseButtonUp**: Mouse button changes (left release = click)
/// - **MouseMoved**: Cursor position in pixels, top-left origin
/// - **Wheel**: Vertical scroll, pixels, positive = scroll toward the user (zoom out)
/// - **Resized**: New viewport size in pixels
/// - **Unidentified**: Unknown/unsupported events (ignored)
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },

    /// Mouse button pressed.
    MouseButtonDown { button: MouseButton },

    /// Mouse button released.
    MouseButtonUp { button: MouseButton },

    /// Mouse cursor moved to a new position (pixels, top-left origin).
    MouseMoved { x: f32, y: f32 },

    /// Wheel scrolled, in pixel-equivalent units.
    Wheel { delta_y: f32 },

    /// Viewport resized (pixels).
    Resized { width: u32, height: u32 },

    /// Unrecognized or unsupported event.
    Unidentified,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // Key Name Normalisation
    //=====================================================================

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(KeyCode::from_key_name("w"), KeyCode::KeyW);
        assert_eq!(KeyCode::from_key_name("W"), KeyCode::KeyW);
        assert_eq!(KeyCode::from_key_name("d"), KeyCode::from_key_name("D"));
    }

    #[test]
    fn digits_map_to_digit_keys() {
        assert_eq!(KeyCode::from_key_name("0"), KeyCode::Digit0);
        assert_eq!(KeyCode::from_key_name("9"), KeyCode::Digit9);
    }

    #[test]
    fn named_keys_resolve() {
        assert_eq!(KeyCode::from_key_name("ArrowUp"), KeyCode::ArrowUp);
        assert_eq!(KeyCode::from_key_name(" "), KeyCode::Space);
        assert_eq!(KeyCode::from_key_name("Escape"), KeyCode::Escape);
    }

    #[test]
    fn unknown_names_are_unidentified() {
        assert_eq!(KeyCode::from_key_name("F13"), KeyCode::Unidentified);
        assert_eq!(KeyCode::from_key_name("é"), KeyCode::Unidentified);
        assert_eq!(KeyCode::from_key_name(""), KeyCode::Unidentified);
    }

    //=====================================================================
    // Event Equality
    //=====================================================================

    #[test]
    fn events_compare_by_payload() {
        assert_eq!(
            InputEvent::MouseMoved { x: 1.0, y: 2.0 },
            InputEvent::MouseMoved { x: 1.0, y: 2.0 }
        );
        assert_ne!(
            InputEvent::MouseMoved { x: 1.0, y: 2.0 },
            InputEvent::MouseMoved { x: 3.0, y: 2.0 }
        );
        assert_ne!(
            InputEvent::KeyDown { key: KeyCode::KeyA },
            InputEvent::KeyUp { key: KeyCode::KeyA }
        );
    }
}
