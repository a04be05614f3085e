//! # Mosaic core
//!
//! Host-facing contracts shared by Mosaic widgets. The host (a game client or
//! any other retained GUI runtime) owns drawing and event routing;
//! this crate only describes what widgets need from it:
//!
//! - `geometry`: integer pixel geometry.
//! - `input`: pointer and key events, with modifier flags.
//! - `component`: widget state flags, the parent [`Component`] trait, and
//!   [`Anchor`] based positioning.
//! - `icon`: the [`IconRegister`] capability and the [`IconRegistry`] that
//!   drives it during texture stitching.
//!
//! Everything here is single threaded and synchronous. Widgets react to calls
//! made by the host and never block.

pub mod component;
pub mod error;
pub mod geometry;
pub mod icon;
pub mod input;
pub mod prelude;

pub use component::*;
pub use error::*;
pub use geometry::*;
pub use icon::*;
pub use input::*;
