//! Spincube engine crate.
//!
//! This crate owns the window/GL context, shader, geometry, texture and
//! per-frame rendering pieces used by the demo binary.

pub mod coords;
pub mod device;
pub mod geometry;
pub mod render;
pub mod shader;
pub mod texture;
pub mod time;
pub mod transform;

pub mod logging;
