use std::path::Path;

use anyhow::Result;
use glfw::{Action, Context as _, Key};

use spincube_engine::device::{ContextConfig, GlContext};
use spincube_engine::geometry::CubeMesh;
use spincube_engine::logging::{self, LoggingConfig};
use spincube_engine::render::Scene;
use spincube_engine::shader::{self, Diagnostics};
use spincube_engine::texture::{CubeTexture, TEXTURE_PATH};
use spincube_engine::time::RenderClock;

fn main() -> Result<()> {
    logging::init_logging(LoggingConfig::default());

    // Bootstrap failures propagate out of main: diagnostic on stderr,
    // exit status 1.
    let config = ContextConfig::default();
    let initial_size = config.initial_size;
    let mut ctx = GlContext::create(config)?;

    let program = shader::build_program(Diagnostics::Permissive)?;
    let mesh = CubeMesh::upload();
    let texture = CubeTexture::load(Path::new(TEXTURE_PATH));

    let mut scene = Scene {
        program,
        mesh,
        texture,
        viewport: initial_size,
    };

    let clock = RenderClock::start();

    // Poll input, render, present, poll OS events. A close request (window
    // close or Escape) is observed at the top of the next iteration.
    while !ctx.window.should_close() {
        process_input(&mut ctx.window);

        scene.render(clock.elapsed() as f32);

        ctx.window.swap_buffers();

        ctx.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&ctx.events) {
            handle_window_event(&mut scene, event);
        }
    }

    Ok(())
}

/// Escape signals the window to close; the loop exits on its next
/// condition check, not immediately.
fn process_input(window: &mut glfw::Window) {
    if window.get_key(Key::Escape) == Action::Press {
        window.set_should_close(true);
    }
}

fn handle_window_event(scene: &mut Scene, event: glfw::WindowEvent) {
    if let glfw::WindowEvent::Size(width, height) = event {
        scene.set_viewport(width, height);
        log::info!("viewport resized: (width: {width}, height: {height})");
    }
}
