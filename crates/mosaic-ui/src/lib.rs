//! Scroll containers and scrollbar controls.
//!
//! - `scroll`: the [`Scrollable`] capability and [`ScrollContainer`].
//! - `scrollbar`: the [`ScrollBar`] widget.
//! - `panel`: [`ScrollPanel`], which owns a container and its bars and turns
//!   host input into scroll actions.

pub mod panel;
pub mod scroll;
pub mod scrollbar;

pub use panel::ScrollPanel;
pub use scroll::{DEFAULT_SCROLL_STEP, ScrollContainer, ScrollParent, Scrollable};
pub use scrollbar::{Orientation, ScrollBar, ScrollBarConfig};
