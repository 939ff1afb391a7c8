//! Per-frame render routine.

use cgmath::Matrix;

use crate::coords::Viewport;
use crate::geometry::CubeMesh;
use crate::shader::CubeProgram;
use crate::texture::CubeTexture;
use crate::transform;

/// GL handles and viewport state, grouped and owned by the main loop.
///
/// Replaces the free-standing globals of the classic demo shape: the loop
/// passes this by reference to the render routine and the resize handler.
pub struct Scene {
    pub program: CubeProgram,
    pub mesh: CubeMesh,
    pub texture: CubeTexture,
    pub viewport: Viewport,
}

impl Scene {
    /// Applies a window resize.
    ///
    /// Rendering re-specifies the GL viewport each frame, so storing the
    /// new size is all that is needed.
    pub fn set_viewport(&mut self, width: i32, height: i32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Draws one frame at `time` seconds since startup.
    ///
    /// Requires a current GL context. The buffer swap is left to the
    /// caller.
    pub fn render(&self, time: f32) {
        let mv = transform::model_view(time);
        let proj = transform::projection(self.viewport);

        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
            gl::Viewport(0, 0, self.viewport.width, self.viewport.height);

            gl::UseProgram(self.program.id);
            gl::BindVertexArray(self.mesh.vao());
            gl::BindTexture(gl::TEXTURE_2D, self.texture.id());

            // Column-major, no transpose.
            gl::UniformMatrix4fv(self.program.mv_location, 1, gl::FALSE, mv.as_ptr());
            gl::UniformMatrix4fv(self.program.proj_location, 1, gl::FALSE, proj.as_ptr());

            gl::DrawArrays(gl::TRIANGLES, 0, self.mesh.vertex_count());
        }
    }
}
