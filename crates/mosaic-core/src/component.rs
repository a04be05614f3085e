//! # Component contract
//!
//! Mosaic widgets live inside a component tree owned by the host. The tree
//! itself (layout and event routing) is not modelled here; widgets only
//! see their parent through the small [`Component`] trait and keep their own
//! flags in a [`ComponentState`].

use bitflags::bitflags;

use crate::{Padding, Point, Size};

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ComponentState: u8 {
        const VISIBLE = 1 << 0;
        const DISABLED = 1 << 1;
        const HOVERED = 1 << 2;
        const FOCUSED = 1 << 3;
    }
}

impl Default for ComponentState {
    fn default() -> Self {
        ComponentState::VISIBLE
    }
}

impl ComponentState {
    pub fn is_visible(self) -> bool {
        self.contains(ComponentState::VISIBLE)
    }
    pub fn is_disabled(self) -> bool {
        self.contains(ComponentState::DISABLED)
    }
    pub fn is_hovered(self) -> bool {
        self.contains(ComponentState::HOVERED)
    }
    pub fn is_focused(self) -> bool {
        self.contains(ComponentState::FOCUSED)
    }
}

/// What a child widget may ask of its parent.
pub trait Component {
    fn size(&self) -> Size;

    fn width(&self) -> i32 {
        self.size().width
    }

    fn height(&self) -> i32 {
        self.size().height
    }

    fn z_index(&self) -> i32 {
        0
    }

    fn is_hovered(&self) -> bool {
        false
    }

    /// Called by containers that track the cursor themselves. Components that
    /// get hover from elsewhere can ignore it.
    fn set_hovered(&mut self, _hovered: bool) {}
}

bitflags! {
    /// Which parent edge a child position is measured from.
    ///
    /// No flag means top-left. Horizontal and vertical flags combine, e.g.
    /// `Anchor::BOTTOM | Anchor::RIGHT`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Anchor: u8 {
        const RIGHT = 1 << 0;
        const CENTER = 1 << 1;
        const BOTTOM = 1 << 2;
        const MIDDLE = 1 << 3;
    }
}

impl Anchor {
    /// Resolves `offset` into a position relative to the parent's top-left,
    /// measured inside the parent's padding.
    pub fn resolve(self, offset: Point, size: Size, parent: Size, padding: Padding) -> Point {
        let x = if self.contains(Anchor::RIGHT) {
            parent.width - padding.horizontal - size.width + offset.x
        } else if self.contains(Anchor::CENTER) {
            (parent.width - size.width) / 2 + offset.x
        } else {
            padding.horizontal + offset.x
        };
        let y = if self.contains(Anchor::BOTTOM) {
            parent.height - padding.vertical - size.height + offset.y
        } else if self.contains(Anchor::MIDDLE) {
            (parent.height - size.height) / 2 + offset.y
        } else {
            padding.vertical + offset.y
        };
        Point::new(x, y)
    }
}
