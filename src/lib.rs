//! Immediate-mode shape primitives with hit-testing for drawing boards.
//!
//! The crate is organized around three layers:
//! - [`draw`]: shape primitives (Path, Circle, Text) with defaulted style
//!   records, gradients, grouping helpers, and the [`draw::Board`] scene
//!   container
//! - [`surface`]: the drawing-target capability trait, with a Cairo backend
//!   and a recording test double
//! - [`input`]: pointer-to-surface-local coordinate mapping
//!
//! Rendering is synchronous and single-threaded: each shape's `render` runs
//! to completion and leaves the surface's attribute state exactly as it found
//! it, so shapes can be drawn in any order without leaking style between
//! siblings.

pub mod config;
pub mod draw;
pub mod input;
pub mod surface;
pub mod util;

pub use config::Config;
