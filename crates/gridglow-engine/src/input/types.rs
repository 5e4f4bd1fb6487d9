use std::fmt;

/// Keys the runtime reports by name.
///
/// Only keys with a binding are named; every other physical key arrives as
/// `Unknown` carrying the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    D,
    R,
    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Key::Escape => "Esc",
            Key::ArrowUp => "Up",
            Key::ArrowDown => "Down",
            Key::ArrowLeft => "Left",
            Key::ArrowRight => "Right",
            Key::PageUp => "PgUp",
            Key::PageDown => "PgDn",
            Key::D => "D",
            Key::R => "R",
            Key::Unknown(code) => return write!(f, "key#{code}"),
        };
        f.write_str(name)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Command on macOS, Windows key elsewhere.
    pub meta: bool,
}

/// Input events after translation from the platform layer.
///
/// Pointer coordinates are logical pixels with a top-left origin, +Y down.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: f32, y: f32 },
    PointerLeft,

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        repeat: bool,
    },
    ModifiersChanged(Modifiers),

    Focused(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_are_short() {
        assert_eq!(Key::PageUp.to_string(), "PgUp");
        assert_eq!(Key::D.to_string(), "D");
        assert_eq!(Key::Unknown(42).to_string(), "key#42");
    }
}
