//! # Scroll model
//!
//! Mosaic keeps scroll position as a pair of *fractions* in `[0, 1]`, one per
//! axis, stored by the scrollable container itself. Scrollbars never own the
//! offset: they read it from the container and write it back through
//! [`Scrollable::set_offset_x`] / [`Scrollable::set_offset_y`], together with
//! the number of pixels a visible scrollbar of the other axis takes away from
//! the viewport.
//!
//! [`ScrollContainer`] is the stock implementation: fixed size, explicit
//! content size, and a pixel scroll position derived from the fractions.

use mosaic_core::{Component, Padding, Point, Size};

/// Capability of containers whose content can be scrolled.
pub trait Scrollable {
    fn offset_x(&self) -> f32;
    fn offset_y(&self) -> f32;
    /// `reserved` is the viewport width in pixels hidden behind a vertical
    /// scrollbar.
    fn set_offset_x(&mut self, offset: f32, reserved: i32);
    /// `reserved` is the viewport height in pixels hidden behind a horizontal
    /// scrollbar.
    fn set_offset_y(&mut self, offset: f32, reserved: i32);
    fn content_width(&self) -> i32;
    fn content_height(&self) -> i32;
    fn vertical_padding(&self) -> i32;
    fn horizontal_padding(&self) -> i32;
    /// Fraction moved per wheel notch.
    fn scroll_step(&self) -> f32;
}

/// Parents a scrollbar can be attached to.
pub trait ScrollParent: Component + Scrollable {}

impl<T: Component + Scrollable + ?Sized> ScrollParent for T {}

pub const DEFAULT_SCROLL_STEP: f32 = 0.05;

#[derive(Clone, Debug)]
pub struct ScrollContainer {
    size: Size,
    padding: Padding,
    content: Size,
    offset_x: f32,
    offset_y: f32,
    reserved_x: i32,
    reserved_y: i32,
    scroll_step: f32,
    z_index: i32,
    hovered: bool,
}

impl ScrollContainer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            padding: Padding::default(),
            content: Size::default(),
            offset_x: 0.0,
            offset_y: 0.0,
            reserved_x: 0,
            reserved_y: 0,
            scroll_step: DEFAULT_SCROLL_STEP,
            z_index: 0,
            hovered: false,
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_content_size(mut self, content: Size) -> Self {
        self.content = content;
        self
    }

    pub fn with_scroll_step(mut self, step: f32) -> Self {
        self.scroll_step = step;
        self
    }

    pub fn with_z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_content_size(&mut self, content: Size) {
        self.content = content;
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Pixel translation applied to the content when drawing.
    pub fn scroll_position(&self) -> Point {
        let max_x = (self.content.width - self.size.width + self.reserved_x).max(0);
        let max_y = (self.content.height - self.size.height + self.reserved_y).max(0);
        Point::new(
            (max_x as f32 * self.offset_x).round() as i32,
            (max_y as f32 * self.offset_y).round() as i32,
        )
    }
}

impl Component for ScrollContainer {
    fn size(&self) -> Size {
        self.size
    }

    fn z_index(&self) -> i32 {
        self.z_index
    }

    fn is_hovered(&self) -> bool {
        self.hovered
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }
}

impl Scrollable for ScrollContainer {
    fn offset_x(&self) -> f32 {
        self.offset_x
    }

    fn offset_y(&self) -> f32 {
        self.offset_y
    }

    fn set_offset_x(&mut self, offset: f32, reserved: i32) {
        self.offset_x = offset;
        self.reserved_x = reserved;
    }

    fn set_offset_y(&mut self, offset: f32, reserved: i32) {
        self.offset_y = offset;
        self.reserved_y = reserved;
    }

    fn content_width(&self) -> i32 {
        self.content.width
    }

    fn content_height(&self) -> i32 {
        self.content.height
    }

    fn vertical_padding(&self) -> i32 {
        self.padding.vertical
    }

    fn horizontal_padding(&self) -> i32 {
        self.padding.horizontal
    }

    fn scroll_step(&self) -> f32 {
        self.scroll_step
    }
}
