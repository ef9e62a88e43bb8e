//! Inbound pointer and keyboard events.

/// Key relevant to the sketch area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Delete,
    Other,
}

/// A key press with the modifier state the sketch area cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    /// Keyboard focus is in a text entry, which consumes its own shortcuts
    pub in_text_entry: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            in_text_entry: false,
        }
    }

    pub fn ctrl(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: true,
            in_text_entry: false,
        }
    }
}

/// Pointer and key events, in widget pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchEvent {
    ButtonPress { x: i32, y: i32 },
    Motion { x: i32, y: i32 },
    ButtonRelease { x: i32, y: i32 },
    /// Pointer left the widget
    Leave,
    Key(KeyPress),
}
