//! Board model: a rectangular grid of areas.
//!
//! Each area holds at most one card and at most one thief. Cards leave the
//! board only when claimed.

pub mod area;
pub mod grid;

pub use area::{Area, AreaId, Direction};
pub use grid::Board;
