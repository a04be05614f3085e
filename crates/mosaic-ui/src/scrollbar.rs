//! # Scrollbar control
//!
//! A [`ScrollBar`] is a thin strip along the bottom (horizontal) or right
//! (vertical) edge of a [`ScrollParent`]. It holds no offset of its own: every
//! query reads the parent, every scroll writes the parent.
//!
//! The only state a bar keeps is geometry (thickness, thumb length, pixel
//! bias) and its flags. Two flags matter to scrolling:
//!
//! - `disabled`: the content fits, scrolling is impossible.
//! - `visible`: cleared together with `disabled`, but only for auto-hide bars.
//!
//! Both are recomputed by [`ScrollBar::update_scrollbar`], which the owning
//! container calls whenever its content changes.
//!
//! Methods that need the bar of the other orientation take it as `sibling`.
//! A visible sibling shortens this bar by its own thickness and reserves that
//! many pixels of the viewport when scrolling.

use std::fmt;

use mosaic_core::{
    Anchor, ComponentState, Key, KeyEvent, Modifiers, MouseButton, Padding, Point, Rect, Size,
};

use crate::scroll::ScrollParent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn other(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("HORIZONTAL"),
            Orientation::Vertical => f.write_str("VERTICAL"),
        }
    }
}

/// Construction parameters for a [`ScrollBar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollBarConfig {
    /// Width of a vertical bar, height of a horizontal one.
    pub thickness: i32,
    /// Thumb size along the bar.
    pub thumb_length: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub auto_hide: bool,
}

impl Default for ScrollBarConfig {
    fn default() -> Self {
        Self {
            thickness: 10,
            thumb_length: 15,
            offset_x: 0,
            offset_y: 0,
            auto_hide: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrollBar {
    orientation: Orientation,
    thickness: i32,
    thumb_length: i32,
    offset: Point,
    auto_hide: bool,
    state: ComponentState,
}

impl ScrollBar {
    pub fn new(orientation: Orientation) -> Self {
        Self::with_config(orientation, ScrollBarConfig::default())
    }

    pub fn with_config(orientation: Orientation, config: ScrollBarConfig) -> Self {
        Self {
            orientation,
            thickness: config.thickness,
            thumb_length: config.thumb_length,
            offset: Point::new(config.offset_x, config.offset_y),
            auto_hide: config.auto_hide,
            state: ComponentState::default(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    pub fn thumb_length(&self) -> i32 {
        self.thumb_length
    }

    pub fn state(&self) -> ComponentState {
        self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.state.is_disabled()
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn is_hovered(&self) -> bool {
        self.state.is_hovered()
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused()
    }

    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    /// Takes effect on the next [`update_scrollbar`](Self::update_scrollbar).
    pub fn set_auto_hide(&mut self, auto_hide: bool) {
        self.auto_hide = auto_hide;
    }

    pub fn set_scroll_size(&mut self, thickness: i32, thumb_length: i32) {
        self.thickness = thickness;
        self.thumb_length = thumb_length;
    }

    /// Pixel bias added to the anchored position.
    pub fn set_offset(&mut self, dx: i32, dy: i32) {
        self.offset = Point::new(dx, dy);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.state.set(ComponentState::VISIBLE, visible);
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.state.set(ComponentState::HOVERED, hovered);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.state.set(ComponentState::FOCUSED, focused);
    }

    fn has_visible_sibling(sibling: Option<&ScrollBar>) -> bool {
        sibling.is_some_and(|s| s.is_visible())
    }

    /// Pixels of viewport taken by a visible sibling.
    fn reserved(&self, sibling: Option<&ScrollBar>) -> i32 {
        if Self::has_visible_sibling(sibling) {
            self.thickness
        } else {
            0
        }
    }

    pub fn width<P: ScrollParent + ?Sized>(&self, parent: &P, sibling: Option<&ScrollBar>) -> i32 {
        match self.orientation {
            Orientation::Horizontal => parent.width() - self.reserved(sibling),
            Orientation::Vertical => self.thickness,
        }
    }

    pub fn height<P: ScrollParent + ?Sized>(&self, parent: &P, sibling: Option<&ScrollBar>) -> i32 {
        match self.orientation {
            Orientation::Horizontal => self.thickness,
            Orientation::Vertical => parent.height() - self.reserved(sibling),
        }
    }

    /// Extent along the scrolling axis.
    pub fn length<P: ScrollParent + ?Sized>(&self, parent: &P, sibling: Option<&ScrollBar>) -> i32 {
        match self.orientation {
            Orientation::Horizontal => self.width(parent, sibling),
            Orientation::Vertical => self.height(parent, sibling),
        }
    }

    pub fn size<P: ScrollParent + ?Sized>(&self, parent: &P, sibling: Option<&ScrollBar>) -> Size {
        Size::new(self.width(parent, sibling), self.height(parent, sibling))
    }

    /// Drawn just above the parent.
    pub fn z_index<P: ScrollParent + ?Sized>(&self, parent: &P) -> i32 {
        parent.z_index() + 5
    }

    /// Position relative to the parent's top-left corner.
    ///
    /// The anchor measures inside the parent's padding; the padding terms in
    /// the anchored offset cancel it so the bar hugs the parent's outer edge.
    pub fn position<P: ScrollParent + ?Sized>(
        &self,
        parent: &P,
        sibling: Option<&ScrollBar>,
    ) -> Point {
        let vp = parent.vertical_padding();
        let hp = parent.horizontal_padding();
        let (anchored, anchor) = match self.orientation {
            Orientation::Horizontal => (self.offset.offset(-hp, vp), Anchor::BOTTOM),
            Orientation::Vertical => (self.offset.offset(hp, -vp), Anchor::RIGHT),
        };
        let padding = Padding::new(hp, vp);
        anchor.resolve(anchored, self.size(parent, sibling), parent.size(), padding)
    }

    /// Bounds relative to the parent's top-left corner.
    pub fn rect<P: ScrollParent + ?Sized>(&self, parent: &P, sibling: Option<&ScrollBar>) -> Rect {
        Rect::new(self.position(parent, sibling), self.size(parent, sibling))
    }

    /// Current scroll fraction of the parent along this bar's axis.
    pub fn offset<P: ScrollParent + ?Sized>(&self, parent: &P) -> f32 {
        match self.orientation {
            Orientation::Horizontal => parent.offset_x(),
            Orientation::Vertical => parent.offset_y(),
        }
    }

    /// Writes `offset`, clamped to `[0, 1]`, into the parent. Does nothing
    /// while disabled. NaN scrolls to the start.
    pub fn scroll_to<P: ScrollParent + ?Sized>(
        &self,
        parent: &mut P,
        sibling: Option<&ScrollBar>,
        offset: f32,
    ) {
        if self.is_disabled() {
            return;
        }
        let offset = if offset.is_nan() {
            0.0
        } else {
            offset.clamp(0.0, 1.0)
        };
        let reserved = self.reserved(sibling);
        log::debug!(
            "{} scrollbar: scroll to {offset} (reserved {reserved}px)",
            self.orientation
        );
        match self.orientation {
            Orientation::Horizontal => parent.set_offset_x(offset, reserved),
            Orientation::Vertical => parent.set_offset_y(offset, reserved),
        }
    }

    pub fn scroll_by<P: ScrollParent + ?Sized>(
        &self,
        parent: &mut P,
        sibling: Option<&ScrollBar>,
        amount: f32,
    ) {
        let target = self.offset(parent) + amount;
        self.scroll_to(parent, sibling, target);
    }

    /// Recomputes `disabled` (and `visible` for auto-hide bars) from the
    /// parent's content size, resetting the offset when needed.
    ///
    /// The offset is reset to 0 whenever the disabled state is about to flip,
    /// before the new state is applied. Going from disabled to enabled the
    /// reset is therefore ignored and the stored offset survives.
    pub fn update_scrollbar<P: ScrollParent + ?Sized>(
        &mut self,
        parent: &mut P,
        sibling: Option<&ScrollBar>,
    ) {
        let delta = self.reserved(sibling);
        let (offset, hide) = match self.orientation {
            Orientation::Horizontal => (
                parent.offset_x(),
                parent.content_width() <= parent.width() - delta,
            ),
            Orientation::Vertical => (
                parent.offset_y(),
                parent.content_height() <= parent.height() - delta,
            ),
        };

        if hide != self.is_disabled() || offset < 0.0 {
            self.scroll_to(parent, sibling, 0.0);
        }
        if offset > 1.0 {
            self.scroll_to(parent, sibling, 1.0);
        }
        if hide != self.is_disabled() {
            log::debug!(
                "{} scrollbar: {}",
                self.orientation,
                if hide { "disabled" } else { "enabled" }
            );
        }
        self.state.set(ComponentState::DISABLED, hide);
        if self.auto_hide {
            self.set_visible(!hide);
        }
    }

    /// Jumps so the thumb centers on `local`, given relative to the bar.
    fn scroll_to_cursor<P: ScrollParent + ?Sized>(
        &self,
        parent: &mut P,
        sibling: Option<&ScrollBar>,
        local: Point,
    ) {
        let track = self.length(parent, sibling) - self.thumb_length - 2;
        let along = match self.orientation {
            Orientation::Horizontal => local.x,
            Orientation::Vertical => local.y,
        };
        let pos = along - self.thumb_length / 2;
        if track <= 0 {
            self.scroll_to(parent, sibling, 0.0);
        } else {
            self.scroll_to(parent, sibling, pos as f32 / track as f32);
        }
    }

    /// `local` is relative to the bar's top-left corner.
    pub fn on_button_press<P: ScrollParent + ?Sized>(
        &self,
        parent: &mut P,
        sibling: Option<&ScrollBar>,
        local: Point,
        button: MouseButton,
    ) -> bool {
        if button != MouseButton::Left {
            return false;
        }
        self.scroll_to_cursor(parent, sibling, local);
        true
    }

    pub fn on_click(&self) -> bool {
        true
    }

    /// Only scrolls while focused, but always claims left-button drags.
    pub fn on_drag<P: ScrollParent + ?Sized>(
        &self,
        parent: &mut P,
        sibling: Option<&ScrollBar>,
        local: Point,
        button: MouseButton,
    ) -> bool {
        if button != MouseButton::Left {
            return false;
        }
        if self.is_focused() {
            self.scroll_to_cursor(parent, sibling, local);
        }
        true
    }

    /// Shift turns the vertical wheel into a horizontal one. A hovered bar
    /// takes the wheel on either axis.
    pub fn on_scroll_wheel<P: ScrollParent + ?Sized>(
        &self,
        parent: &mut P,
        sibling: Option<&ScrollBar>,
        delta: i32,
        modifiers: Modifiers,
    ) -> bool {
        if self.is_horizontal() != modifiers.shift() && !self.is_hovered() {
            return false;
        }
        let step = parent.scroll_step();
        self.scroll_by(parent, sibling, -(delta as f32) * step);
        true
    }

    /// Home and End jump to either end while the bar or its parent is hovered.
    pub fn on_key<P: ScrollParent + ?Sized>(
        &self,
        parent: &mut P,
        sibling: Option<&ScrollBar>,
        event: &KeyEvent,
    ) -> bool {
        if event.key.is_close_key() {
            return false;
        }
        if !self.is_hovered() && !parent.is_hovered() {
            return false;
        }
        if self.is_horizontal() != event.modifiers.shift() {
            return false;
        }
        match event.key {
            Key::Home => self.scroll_to(parent, sibling, 0.0),
            Key::End => self.scroll_to(parent, sibling, 1.0),
            _ => return false,
        }
        true
    }

    pub fn property_string<P: ScrollParent + ?Sized>(&self, parent: &P) -> String {
        let content = match self.orientation {
            Orientation::Horizontal => parent.content_width(),
            Orientation::Vertical => parent.content_height(),
        };
        format!(
            "{} | O={}({}) | visible={} disabled={} auto_hide={}",
            self.orientation,
            self.offset(parent),
            content,
            self.is_visible(),
            self.is_disabled(),
            self.auto_hide
        )
    }
}
