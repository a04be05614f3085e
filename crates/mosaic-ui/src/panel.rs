//! # Scroll panel
//!
//! [`ScrollPanel`] owns a scrollable container and up to one scrollbar per
//! orientation. Bars never look each other up: the panel hands each bar its
//! sibling when calling into it, and content changes reach the bars by way of
//! [`ScrollPanel::update_content`].
//!
//! ```rust
//! use mosaic_core::*;
//! use mosaic_ui::*;
//!
//! let content = ScrollContainer::new(Size::new(100, 60)).with_content_size(Size::new(100, 240));
//! let mut panel = ScrollPanel::new(content)
//!     .with_scrollbar(Orientation::Vertical, ScrollBarConfig::default());
//!
//! panel.scroll_to(Orientation::Vertical, 0.5);
//! assert_eq!(panel.content().offset_y(), 0.5);
//!
//! // shrinking the content disables the bar and resets the offset
//! panel.update_content(|c| c.set_content_size(Size::new(100, 40)));
//! assert!(panel.scrollbar(Orientation::Vertical).is_some_and(|b| b.is_disabled()));
//! assert_eq!(panel.content().offset_y(), 0.0);
//! ```

use smallvec::SmallVec;

use mosaic_core::prelude::*;

use crate::scroll::ScrollParent;
use crate::scrollbar::{Orientation, ScrollBar, ScrollBarConfig};

// Three passes cover both bars flipping: the last one only confirms.
const MAX_UPDATE_PASSES: usize = 3;

pub struct ScrollPanel<C: ScrollParent> {
    content: C,
    origin: Point,
    horizontal: Option<ScrollBar>,
    vertical: Option<ScrollBar>,
}

impl<C: ScrollParent> ScrollPanel<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            origin: Point::ZERO,
            horizontal: None,
            vertical: None,
        }
    }

    pub fn with_scrollbar(mut self, orientation: Orientation, config: ScrollBarConfig) -> Self {
        self.attach(orientation, config);
        self
    }

    /// Where the panel sits in the coordinate space of incoming events.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.origin, self.content.size())
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn into_content(self) -> C {
        self.content
    }

    /// Attaches a new bar, replacing any bar of the same orientation.
    pub fn attach(&mut self, orientation: Orientation, config: ScrollBarConfig) {
        let previous = self.slot_mut(orientation).replace(ScrollBar::with_config(orientation, config));
        if previous.is_some() {
            log::debug!("{orientation} scrollbar replaced");
        }
        self.on_content_update();
    }

    pub fn detach(&mut self, orientation: Orientation) -> Option<ScrollBar> {
        let bar = self.slot_mut(orientation).take();
        if bar.is_some() {
            log::debug!("{orientation} scrollbar detached");
        }
        self.on_content_update();
        bar
    }

    pub fn scrollbar(&self, orientation: Orientation) -> Option<&ScrollBar> {
        match orientation {
            Orientation::Horizontal => self.horizontal.as_ref(),
            Orientation::Vertical => self.vertical.as_ref(),
        }
    }

    fn slot_mut(&mut self, orientation: Orientation) -> &mut Option<ScrollBar> {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    /// Runs `f` on the bar of `orientation` with the content and the other
    /// bar. `None` when no such bar is attached.
    fn with_bar<R>(
        &mut self,
        orientation: Orientation,
        f: impl FnOnce(&mut ScrollBar, &mut C, Option<&ScrollBar>) -> R,
    ) -> Option<R> {
        let (bar, sibling) = match orientation {
            Orientation::Horizontal => (self.horizontal.as_mut(), self.vertical.as_ref()),
            Orientation::Vertical => (self.vertical.as_mut(), self.horizontal.as_ref()),
        };
        let bar = bar?;
        Some(f(bar, &mut self.content, sibling))
    }

    /// Mutates the content, then lets both bars react to the new size.
    pub fn update_content<R>(&mut self, f: impl FnOnce(&mut C) -> R) -> R {
        let out = f(&mut self.content);
        self.on_content_update();
        out
    }

    /// Updates both bars against the current content. A bar that auto-hides
    /// changes the other bar's reservation, so the pass repeats until no
    /// visibility flips. Hidden bars lose focus.
    pub fn on_content_update(&mut self) {
        for _ in 0..MAX_UPDATE_PASSES {
            let before = self.visibility();
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                self.with_bar(orientation, |bar, content, sibling| {
                    bar.update_scrollbar(content, sibling)
                });
            }
            if self.visibility() == before {
                break;
            }
        }
        for bar in [self.horizontal.as_mut(), self.vertical.as_mut()]
            .into_iter()
            .flatten()
        {
            if !bar.is_visible() && bar.is_focused() {
                log::debug!("{} scrollbar hidden, dropping focus", bar.orientation());
                bar.set_focused(false);
            }
        }
    }

    pub fn set_scroll_size(&mut self, orientation: Orientation, thickness: i32, thumb_length: i32) {
        self.with_bar(orientation, |bar, _, _| {
            bar.set_scroll_size(thickness, thumb_length)
        });
        self.on_content_update();
    }

    pub fn set_offset(&mut self, orientation: Orientation, dx: i32, dy: i32) {
        self.with_bar(orientation, |bar, _, _| bar.set_offset(dx, dy));
    }

    pub fn set_auto_hide(&mut self, orientation: Orientation, auto_hide: bool) {
        self.with_bar(orientation, |bar, _, _| bar.set_auto_hide(auto_hide));
        self.on_content_update();
    }

    pub fn scroll_to(&mut self, orientation: Orientation, offset: f32) {
        self.with_bar(orientation, |bar, content, sibling| {
            bar.scroll_to(content, sibling, offset)
        });
    }

    pub fn scroll_by(&mut self, orientation: Orientation, amount: f32) {
        self.with_bar(orientation, |bar, content, sibling| {
            bar.scroll_by(content, sibling, amount)
        });
    }

    /// Bounds of a bar in event coordinates.
    pub fn scrollbar_rect(&self, orientation: Orientation) -> Option<Rect> {
        let bar = self.scrollbar(orientation)?;
        let sibling = self.scrollbar(orientation.other());
        let rect = bar.rect(&self.content, sibling);
        Some(Rect::new(
            rect.origin().offset(self.origin.x, self.origin.y),
            rect.size(),
        ))
    }

    /// Visible bar under `p`, if any.
    fn scrollbar_at(&self, p: Point) -> Option<Orientation> {
        [Orientation::Vertical, Orientation::Horizontal]
            .into_iter()
            .find(|o| {
                self.scrollbar(*o).is_some_and(|b| b.is_visible())
                    && self.scrollbar_rect(*o).is_some_and(|r| r.contains(p))
            })
    }

    /// Hovered bar first, then the others.
    fn dispatch_order(&self) -> SmallVec<[Orientation; 2]> {
        let mut order: SmallVec<[Orientation; 2]> = SmallVec::new();
        for o in [Orientation::Vertical, Orientation::Horizontal] {
            match self.scrollbar(o) {
                Some(bar) if bar.is_visible() => {
                    if bar.is_hovered() {
                        order.insert(0, o);
                    } else {
                        order.push(o);
                    }
                }
                _ => {}
            }
        }
        order
    }

    fn track_cursor(&mut self, p: Point) {
        let over = self.scrollbar_at(p);
        let inside = self.bounds().contains(p);
        for o in [Orientation::Horizontal, Orientation::Vertical] {
            if let Some(bar) = self.slot_mut(o).as_mut() {
                bar.set_hovered(over == Some(o));
            }
        }
        self.content.set_hovered(inside && over.is_none());
    }

    fn set_focus(&mut self, focused: Option<Orientation>) {
        for o in [Orientation::Horizontal, Orientation::Vertical] {
            if let Some(bar) = self.slot_mut(o).as_mut() {
                bar.set_focused(focused == Some(o));
            }
        }
    }

    fn focused(&self) -> Option<Orientation> {
        [Orientation::Vertical, Orientation::Horizontal]
            .into_iter()
            .find(|o| {
                self.scrollbar(*o)
                    .is_some_and(|b| b.is_visible() && b.is_focused())
            })
    }

    fn visibility(&self) -> [Option<bool>; 2] {
        [
            self.horizontal.as_ref().map(ScrollBar::is_visible),
            self.vertical.as_ref().map(ScrollBar::is_visible),
        ]
    }

    /// Converts `p` from event coordinates to coordinates local to the bar.
    fn to_local(&self, orientation: Orientation, p: Point) -> Point {
        match self.scrollbar_rect(orientation) {
            Some(rect) => p - rect.origin(),
            None => p,
        }
    }

    /// Feeds one host event to the bars. Returns `true` when a bar consumed
    /// it; otherwise the host should run its default handling.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Pointer(pe) => self.handle_pointer(pe),
            InputEvent::Key(ke) => self.handle_key(ke),
        }
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        self.track_cursor(event.position());
        match *event {
            PointerEvent::Move { .. } | PointerEvent::Release { .. } => false,
            PointerEvent::Press { position, button } => {
                let target = self.scrollbar_at(position);
                self.set_focus(target);
                let Some(o) = target else {
                    return false;
                };
                let local = self.to_local(o, position);
                self.with_bar(o, |bar, content, sibling| {
                    bar.on_button_press(content, sibling, local, button)
                })
                .unwrap_or(false)
            }
            PointerEvent::Click { position } => self
                .scrollbar_at(position)
                .and_then(|o| self.scrollbar(o))
                .is_some_and(|bar| bar.on_click()),
            PointerEvent::Drag {
                position, button, ..
            } => {
                let Some(o) = self.focused().or_else(|| self.scrollbar_at(position)) else {
                    return false;
                };
                let local = self.to_local(o, position);
                self.with_bar(o, |bar, content, sibling| {
                    bar.on_drag(content, sibling, local, button)
                })
                .unwrap_or(false)
            }
            PointerEvent::Wheel {
                position,
                delta,
                modifiers,
            } => {
                if !self.bounds().contains(position) {
                    return false;
                }
                for o in self.dispatch_order() {
                    let consumed = self
                        .with_bar(o, |bar, content, sibling| {
                            bar.on_scroll_wheel(content, sibling, delta, modifiers)
                        })
                        .unwrap_or(false);
                    if consumed {
                        return true;
                    }
                }
                false
            }
        }
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        for o in self.dispatch_order() {
            let consumed = self
                .with_bar(o, |bar, content, sibling| bar.on_key(content, sibling, event))
                .unwrap_or(false);
            if consumed {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::{ScrollContainer, Scrollable};
    use mosaic_core::{Component, Key, Modifiers, MouseButton, Size};

    fn panel(cw: i32, ch: i32) -> ScrollPanel<ScrollContainer> {
        let content = ScrollContainer::new(Size::new(100, 100))
            .with_content_size(Size::new(cw, ch))
            .with_scroll_step(0.25);
        ScrollPanel::new(content)
            .with_origin(Point::new(20, 10))
            .with_scrollbar(Orientation::Horizontal, ScrollBarConfig::default())
            .with_scrollbar(Orientation::Vertical, ScrollBarConfig::default())
    }

    fn press(x: i32, y: i32) -> InputEvent {
        InputEvent::Pointer(PointerEvent::Press {
            position: Point::new(x, y),
            button: MouseButton::Left,
        })
    }

    fn wheel(x: i32, y: i32, delta: i32, modifiers: Modifiers) -> InputEvent {
        InputEvent::Pointer(PointerEvent::Wheel {
            position: Point::new(x, y),
            delta,
            modifiers,
        })
    }

    fn key(key: Key, modifiers: Modifiers) -> InputEvent {
        InputEvent::Key(KeyEvent::new(key, modifiers))
    }

    #[test]
    fn test_attach_overwrites() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut p = panel(400, 400);
        p.attach(
            Orientation::Vertical,
            ScrollBarConfig {
                thickness: 6,
                ..ScrollBarConfig::default()
            },
        );
        p.attach(
            Orientation::Vertical,
            ScrollBarConfig {
                thickness: 8,
                ..ScrollBarConfig::default()
            },
        );

        assert_eq!(p.scrollbar(Orientation::Vertical).map(|b| b.thickness()), Some(8));
        assert!(p.scrollbar(Orientation::Horizontal).is_some());

        assert!(p.detach(Orientation::Vertical).is_some());
        assert!(p.detach(Orientation::Vertical).is_none());
        assert!(p.scrollbar(Orientation::Vertical).is_none());
    }

    fn auto_hide() -> ScrollBarConfig {
        ScrollBarConfig {
            auto_hide: true,
            ..ScrollBarConfig::default()
        }
    }

    fn is_disabled(p: &ScrollPanel<ScrollContainer>, o: Orientation) -> Option<bool> {
        p.scrollbar(o).map(|b| b.is_disabled())
    }

    fn is_visible(p: &ScrollPanel<ScrollContainer>, o: Orientation) -> Option<bool> {
        p.scrollbar(o).map(|b| b.is_visible())
    }

    #[test]
    fn test_attach_recomputes_sibling() {
        // 95 > 100 - 10 once the vertical bar takes its column
        let mut p = panel(95, 400);
        assert_eq!(is_disabled(&p, Orientation::Horizontal), Some(false));
        assert_eq!(is_disabled(&p, Orientation::Vertical), Some(false));

        p.detach(Orientation::Vertical);
        assert_eq!(is_disabled(&p, Orientation::Horizontal), Some(true));

        p.attach(Orientation::Vertical, ScrollBarConfig::default());
        assert_eq!(is_disabled(&p, Orientation::Horizontal), Some(false));
    }

    #[test]
    fn test_set_scroll_size_recomputes() {
        let mut p = panel(95, 400);
        assert_eq!(is_disabled(&p, Orientation::Horizontal), Some(false));

        // a 4 pixel bar leaves 96 of viewport beside the vertical bar
        p.set_scroll_size(Orientation::Horizontal, 4, 15);
        assert_eq!(is_disabled(&p, Orientation::Horizontal), Some(true));

        p.set_scroll_size(Orientation::Horizontal, 10, 15);
        assert_eq!(is_disabled(&p, Orientation::Horizontal), Some(false));
    }

    #[test]
    fn test_auto_hide_pass_settles() {
        let content = ScrollContainer::new(Size::new(100, 100)).with_content_size(Size::new(95, 400));
        let mut p = ScrollPanel::new(content)
            .with_scrollbar(Orientation::Horizontal, auto_hide())
            .with_scrollbar(Orientation::Vertical, auto_hide());
        assert_eq!(is_visible(&p, Orientation::Horizontal), Some(true));
        assert_eq!(is_visible(&p, Orientation::Vertical), Some(true));

        p.update_content(|c| c.set_content_size(Size::new(95, 50)));

        assert_eq!(is_visible(&p, Orientation::Vertical), Some(false));
        assert_eq!(is_disabled(&p, Orientation::Horizontal), Some(true));
        assert_eq!(is_visible(&p, Orientation::Horizontal), Some(false));

        // growing back shows both again
        p.update_content(|c| c.set_content_size(Size::new(95, 400)));
        assert_eq!(is_visible(&p, Orientation::Vertical), Some(true));
        assert_eq!(is_visible(&p, Orientation::Horizontal), Some(true));
        assert_eq!(is_disabled(&p, Orientation::Horizontal), Some(false));
    }

    #[test]
    fn test_set_auto_hide_hides_disabled_bar() {
        let mut p = panel(400, 50);
        assert_eq!(is_disabled(&p, Orientation::Vertical), Some(true));
        assert_eq!(is_visible(&p, Orientation::Vertical), Some(true));

        p.set_auto_hide(Orientation::Vertical, true);
        assert_eq!(is_visible(&p, Orientation::Vertical), Some(false));
        // no reservation left for the horizontal bar: 400 > 100
        assert_eq!(is_disabled(&p, Orientation::Horizontal), Some(false));
        assert!(p.scrollbar_at(Point::new(115, 50)).is_none());
    }

    #[test]
    fn test_hidden_bar_loses_drag() {
        let content = ScrollContainer::new(Size::new(100, 100)).with_content_size(Size::new(50, 400));
        let mut p = ScrollPanel::new(content).with_scrollbar(Orientation::Vertical, auto_hide());

        assert!(p.handle_input(&press(95, 50)));
        assert!(p.scrollbar(Orientation::Vertical).is_some_and(|b| b.is_focused()));

        p.update_content(|c| c.set_content_size(Size::new(50, 50)));
        assert_eq!(is_visible(&p, Orientation::Vertical), Some(false));
        assert!(!p.scrollbar(Orientation::Vertical).is_some_and(|b| b.is_focused()));

        let drag = InputEvent::Pointer(PointerEvent::Drag {
            last: Point::new(95, 50),
            position: Point::new(50, 50),
            button: MouseButton::Left,
        });
        assert!(!p.handle_input(&drag));
    }

    #[test]
    fn test_update_content_notifies_bars() {
        let mut p = panel(400, 400);
        p.scroll_to(Orientation::Vertical, 0.5);
        p.scroll_to(Orientation::Horizontal, 0.5);

        p.update_content(|c| c.set_content_size(Size::new(400, 50)));

        let v = p.scrollbar(Orientation::Vertical).map(|b| b.is_disabled());
        let h = p.scrollbar(Orientation::Horizontal).map(|b| b.is_disabled());
        assert_eq!(v, Some(true));
        assert_eq!(h, Some(false));
        assert_eq!(p.content().offset_y(), 0.0);
        assert_eq!(p.content().offset_x(), 0.5);
    }

    #[test]
    fn test_scrollbar_rects() {
        let p = panel(400, 400);
        assert_eq!(
            p.scrollbar_rect(Orientation::Vertical),
            Some(Rect::new(Point::new(110, 10), Size::new(10, 90)))
        );
        assert_eq!(
            p.scrollbar_rect(Orientation::Horizontal),
            Some(Rect::new(Point::new(20, 100), Size::new(90, 10)))
        );
    }

    #[test]
    fn test_press_scrolls_and_focuses() {
        let mut p = panel(400, 400);
        p.set_scroll_size(Orientation::Vertical, 10, 16);
        // vertical track: length 90, usable 90 - 16 - 2 = 72, press at local y = 44

        assert!(p.handle_input(&press(115, 10 + 44)));
        assert_eq!(p.content().offset_y(), 0.5);
        assert!(p.scrollbar(Orientation::Vertical).is_some_and(|b| b.is_focused()));

        // pressing the content takes focus away and is not consumed
        assert!(!p.handle_input(&press(50, 50)));
        assert!(!p.scrollbar(Orientation::Vertical).is_some_and(|b| b.is_focused()));
        assert_eq!(p.content().offset_y(), 0.5);
    }

    #[test]
    fn test_drag_follows_focused_bar() {
        let mut p = panel(400, 400);
        p.set_scroll_size(Orientation::Vertical, 10, 16);
        p.handle_input(&press(115, 10 + 8));
        assert_eq!(p.content().offset_y(), 0.0);

        // the cursor may leave the bar while dragging
        let drag = InputEvent::Pointer(PointerEvent::Drag {
            last: Point::new(115, 18),
            position: Point::new(60, 10 + 80),
            button: MouseButton::Left,
        });
        assert!(p.handle_input(&drag));
        assert_eq!(p.content().offset_y(), 1.0);
    }

    #[test]
    fn test_drag_without_focus_not_consumed() {
        let mut p = panel(400, 400);
        let drag = InputEvent::Pointer(PointerEvent::Drag {
            last: Point::new(40, 40),
            position: Point::new(50, 50),
            button: MouseButton::Left,
        });
        assert!(!p.handle_input(&drag));
    }

    #[test]
    fn test_wheel_routing() {
        let mut p = panel(400, 400);

        assert!(p.handle_input(&wheel(50, 50, -1, Modifiers::empty())));
        assert_eq!(p.content().offset_y(), 0.25);
        assert_eq!(p.content().offset_x(), 0.0);

        assert!(p.handle_input(&wheel(50, 50, -2, Modifiers::SHIFT)));
        assert_eq!(p.content().offset_x(), 0.5);
        assert_eq!(p.content().offset_y(), 0.25);

        // outside the panel
        assert!(!p.handle_input(&wheel(300, 300, -1, Modifiers::empty())));
        assert_eq!(p.content().offset_y(), 0.25);
    }

    #[test]
    fn test_wheel_over_hovered_bar() {
        let mut p = panel(400, 400);
        p.scroll_to(Orientation::Vertical, 1.0);

        // shift over the vertical bar still scrolls it
        assert!(p.handle_input(&wheel(115, 50, 1, Modifiers::SHIFT)));
        assert_eq!(p.content().offset_y(), 0.75);
        assert_eq!(p.content().offset_x(), 0.0);
    }

    #[test]
    fn test_keys_need_hover() {
        let mut p = panel(400, 400);
        assert!(!p.handle_input(&key(Key::End, Modifiers::empty())));

        p.handle_input(&InputEvent::Pointer(PointerEvent::Move {
            position: Point::new(50, 50),
        }));
        assert!(p.content().is_hovered());

        assert!(p.handle_input(&key(Key::End, Modifiers::empty())));
        assert_eq!(p.content().offset_y(), 1.0);
        assert!(p.handle_input(&key(Key::End, Modifiers::SHIFT)));
        assert_eq!(p.content().offset_x(), 1.0);
        assert!(p.handle_input(&key(Key::Home, Modifiers::empty())));
        assert_eq!(p.content().offset_y(), 0.0);

        assert!(!p.handle_input(&key(Key::Escape, Modifiers::empty())));
        assert!(!p.handle_input(&key(Key::Other(0x51), Modifiers::empty())));
    }

    #[test]
    fn test_hidden_bar_ignores_input() {
        let content = ScrollContainer::new(Size::new(100, 100)).with_content_size(Size::new(50, 50));
        let mut p = ScrollPanel::new(content).with_scrollbar(
            Orientation::Vertical,
            ScrollBarConfig {
                auto_hide: true,
                ..ScrollBarConfig::default()
            },
        );
        assert!(p.scrollbar(Orientation::Vertical).is_some_and(|b| !b.is_visible()));
        assert!(p.scrollbar_at(Point::new(95, 50)).is_none());
        assert!(!p.handle_input(&wheel(50, 50, -1, Modifiers::empty())));
    }

    #[test]
    fn test_click_consumed_on_bar() {
        let mut p = panel(400, 400);
        let on_bar = InputEvent::Pointer(PointerEvent::Click {
            position: Point::new(115, 50),
        });
        let on_content = InputEvent::Pointer(PointerEvent::Click {
            position: Point::new(50, 50),
        });
        assert!(p.handle_input(&on_bar));
        assert!(!p.handle_input(&on_content));
    }
}
