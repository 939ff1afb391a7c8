use std::ffi::CStr;

use anyhow::{Context as _, Result};
use gl::types::GLenum;
use glfw::Context as _;

use crate::coords::Viewport;

/// Window/context configuration.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    pub title: String,
    pub initial_size: Viewport,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            title: "My spinning cube".to_string(),
            initial_size: Viewport::new(640, 480),
        }
    }
}

/// Owns the GLFW instance, the window, and its event receiver.
///
/// Construction makes the GL context current on the calling thread; GL
/// calls are valid only afterwards, and only on that thread.
pub struct GlContext {
    pub glfw: glfw::Glfw,
    pub window: glfw::PWindow,
    pub events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlContext {
    /// Initializes GLFW, opens the window and loads GL entry points.
    ///
    /// No context-version or profile hints are set: the `#version 130`
    /// shaders need the default (compatibility) context. Any failure here
    /// is fatal to the caller; there is no retry.
    pub fn create(config: ContextConfig) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors).context("could not start GLFW")?;

        let (mut window, events) = glfw
            .create_window(
                config.initial_size.width as u32,
                config.initial_size.height as u32,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .context("could not open window with GLFW")?;

        window.set_size_polling(true);
        window.make_current();

        gl::load_with(|s| window.get_proc_address(s));

        log::info!("GL vendor: {}", gl_string(gl::VENDOR));
        log::info!("GL renderer: {}", gl_string(gl::RENDERER));
        log::info!("OpenGL version: {}", gl_string(gl::VERSION));
        log::info!("GLSL version: {}", gl_string(gl::SHADING_LANGUAGE_VERSION));
        log::info!(
            "starting viewport: (width: {}, height: {})",
            config.initial_size.width,
            config.initial_size.height
        );

        // Depth test is enabled once and never toggled; a smaller depth
        // value means closer to the viewer.
        unsafe {
            gl::Enable(gl::DEPTH_TEST);
            gl::DepthFunc(gl::LESS);
        }

        Ok(Self {
            glfw,
            window,
            events,
        })
    }
}

fn gl_string(name: GLenum) -> String {
    unsafe {
        let s = gl::GetString(name);
        if s.is_null() {
            return "(unavailable)".to_string();
        }
        CStr::from_ptr(s.cast()).to_string_lossy().into_owned()
    }
}
