pub use crate::component::{Anchor, Component, ComponentState};
pub use crate::error::AtlasError;
pub use crate::geometry::{Padding, Point, Rect, Size};
pub use crate::icon::{IconHandle, IconRegister, IconRegistry, IconTable, TextureAtlas};
pub use crate::input::{InputEvent, Key, KeyEvent, Modifiers, MouseButton, PointerEvent};
