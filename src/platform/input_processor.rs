//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into engine InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (engine type) → channel
//
// Keys resolve from the logical key first (the text the layout produces,
// case-insensitive), then fall back to the physical key position. Keys
// neither can name are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, MouseScrollDelta},
    keyboard::{Key, KeyCode as WinitKeyCode, NamedKey, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, MouseButton};

//=== InputProcessor ======================================================

/// Converts Winit events to engine InputEvents.
pub(crate) struct InputProcessor;

impl InputProcessor {
    /// Pixel distance of one wheel "line" notch.
    pub(crate) const PIXELS_PER_LINE: f32 = 100.0;

    pub(crate) fn new() -> Self {
        Self
    }

    //--- Event Processing -------------------------------------------------

    /// Converts Winit KeyEvent to InputEvent (filters unmapped keys).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        let key = resolve_key(&key_event.logical_key, key_event.physical_key);

        if matches!(key, KeyCode::Unidentified) {
            return None;
        }

        Some(match key_event.state {
            ElementState::Pressed => InputEvent::KeyDown { key },
            ElementState::Released => InputEvent::KeyUp { key },
        })
    }

    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = MouseButton::from(button);

        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button },
            ElementState::Released => InputEvent::MouseButtonUp { button },
        }
    }

    /// Creates a mouse move event (window pixels, origin top-left).
    pub(crate) fn process_mouse_move(&self, x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMoved { x, y }
    }

    /// Converts a wheel delta to pixel units, positive = scroll toward the
    /// user (zoom out).
    pub(crate) fn process_wheel(&self, delta: MouseScrollDelta) -> InputEvent {
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, lines) => -lines * Self::PIXELS_PER_LINE,
            MouseScrollDelta::PixelDelta(position) => -position.y as f32,
        };
        InputEvent::Wheel { delta_y }
    }

    pub(crate) fn process_resize(&self, size: PhysicalSize<u32>) -> InputEvent {
        InputEvent::Resized {
            width: size.width,
            height: size.height,
        }
    }
}

//--- Key Resolution ------------------------------------------------------

/// Logical key text first, then the physical position.
fn resolve_key(logical: &Key, physical: PhysicalKey) -> KeyCode {
    let from_logical = match logical {
        Key::Character(text) => KeyCode::from_key_name(text.as_str()),
        Key::Named(named) => KeyCode::from(*named),
        _ => KeyCode::Unidentified,
    };

    if from_logical != KeyCode::Unidentified {
        return from_logical;
    }

    match physical {
        PhysicalKey::Code(code) => KeyCode::from(code),
        _ => KeyCode::Unidentified,
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Named logical keys the engine distinguishes.
impl From<NamedKey> for KeyCode {
    fn from(named: NamedKey) -> Self {
        match named {
            NamedKey::ArrowUp => KeyCode::ArrowUp,
            NamedKey::ArrowDown => KeyCode::ArrowDown,
            NamedKey::ArrowLeft => KeyCode::ArrowLeft,
            NamedKey::ArrowRight => KeyCode::ArrowRight,
            NamedKey::Space => KeyCode::Space,
            NamedKey::Enter => KeyCode::Enter,
            NamedKey::Escape => KeyCode::Escape,
            NamedKey::Tab => KeyCode::Tab,
            NamedKey::Backspace => KeyCode::Backspace,
            NamedKey::Delete => KeyCode::Delete,
            _ => KeyCode::Unidentified,
        }
    }
}

/// Converts Winit physical key codes to engine key codes.
///
/// Maps A-Z, 0-9, arrows, and common special keys. Unmapped keys (F13-F24,
/// numpad, media keys) return `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------

            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::keyboard::NativeKeyCode;

    fn character(text: &str) -> Key {
        Key::Character(text.into())
    }

    //--- Key Resolution ---------------------------------------------------

    #[test]
    fn logical_text_is_case_insensitive() {
        let physical = PhysicalKey::Code(WinitKeyCode::KeyW);
        assert_eq!(resolve_key(&character("w"), physical), KeyCode::KeyW);
        assert_eq!(resolve_key(&character("W"), physical), KeyCode::KeyW);
    }

    #[test]
    fn logical_text_wins_over_physical_position() {
        // AZERTY: the key in the QWERTY "A" position types "q".
        let key = resolve_key(&character("q"), PhysicalKey::Code(WinitKeyCode::KeyA));
        assert_eq!(key, KeyCode::KeyQ);
    }

    #[test]
    fn named_arrows_resolve() {
        let physical = PhysicalKey::Unidentified(NativeKeyCode::Unidentified);
        assert_eq!(resolve_key(&Key::Named(NamedKey::ArrowLeft), physical), KeyCode::ArrowLeft);
        assert_eq!(resolve_key(&Key::Named(NamedKey::Space), physical), KeyCode::Space);
    }

    #[test]
    fn falls_back_to_physical_key() {
        // Non-Latin layouts produce text the engine can't name.
        let key = resolve_key(&character("ц"), PhysicalKey::Code(WinitKeyCode::KeyW));
        assert_eq!(key, KeyCode::KeyW);
    }

    #[test]
    fn unknown_everywhere_is_unidentified() {
        let key = resolve_key(
            &Key::Named(NamedKey::F13),
            PhysicalKey::Code(WinitKeyCode::F13),
        );
        assert_eq!(key, KeyCode::Unidentified);
    }

    //--- Mouse ------------------------------------------------------------

    #[test]
    fn mouse_button_press_and_release() {
        let processor = InputProcessor::new();

        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed),
            InputEvent::MouseButtonDown { button: MouseButton::Left }
        );
        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Back, ElementState::Released),
            InputEvent::MouseButtonUp { button: MouseButton::Other }
        );
    }

    #[test]
    fn mouse_move_correct() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.process_mouse_move(100.5, 200.25),
            InputEvent::MouseMoved { x: 100.5, y: 200.25 }
        );
    }

    //--- Wheel ------------------------------------------------------------

    #[test]
    fn line_scroll_up_zooms_in() {
        let processor = InputProcessor::new();
        let event = processor.process_wheel(MouseScrollDelta::LineDelta(0.0, 1.0));
        assert_eq!(event, InputEvent::Wheel { delta_y: -100.0 });
    }

    #[test]
    fn pixel_scroll_passes_through_inverted() {
        let processor = InputProcessor::new();
        let event = processor.process_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -53.0)));
        assert_eq!(event, InputEvent::Wheel { delta_y: 53.0 });
    }

    #[test]
    fn resize_carries_physical_size() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.process_resize(PhysicalSize::new(1024, 768)),
            InputEvent::Resized { width: 1024, height: 768 }
        );
    }
}
