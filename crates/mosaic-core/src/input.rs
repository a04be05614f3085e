use bitflags::bitflags;

use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

bitflags! {
    /// Modifier keys held while an event was produced.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3; // Cmd on Mac, Win key on Windows
    }
}

impl Modifiers {
    pub fn shift(self) -> bool {
        self.contains(Modifiers::SHIFT)
    }
}

/// Keys the widgets tell apart. Everything else arrives as `Other` with the
/// host's key code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Escape,
    Home,
    End,
    Other(u32),
}

impl Key {
    /// Keys that close the current screen. Widgets never swallow these.
    pub fn is_close_key(&self) -> bool {
        matches!(self, Key::Escape)
    }
}

#[derive(Clone, Debug)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Pointer events as produced by the host. Positions are in the same
/// coordinate space as the bounds of the receiving container.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    Press {
        position: Point,
        button: MouseButton,
    },
    Release {
        position: Point,
        button: MouseButton,
    },
    Click {
        position: Point,
    },
    Drag {
        last: Point,
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    /// Positive `delta` is the wheel moving away from the user.
    Wheel {
        position: Point,
        delta: i32,
        modifiers: Modifiers,
    },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Press { position, .. }
            | PointerEvent::Release { position, .. }
            | PointerEvent::Click { position }
            | PointerEvent::Drag { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Wheel { position, .. } => *position,
        }
    }
}

#[derive(Clone, Debug)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
}
