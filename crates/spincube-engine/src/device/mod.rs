//! Window + GL context bootstrap.
//!
//! This module is responsible for:
//! - initializing GLFW and creating the window
//! - making the context current and loading GL entry points
//! - reporting driver strings and enabling the fixed GL state

mod context;

pub use context::{ContextConfig, GlContext};
