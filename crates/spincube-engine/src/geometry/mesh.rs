use std::ffi::c_void;
use std::ptr;

use gl::types::{GLsizeiptr, GLuint};

use super::cube;

/// GPU-resident cube geometry.
///
/// Two separate buffers (positions, texcoords) described by attributes 0
/// and 1, both tightly packed. Uploaded once; immutable for the process
/// lifetime, so the handles are released implicitly at exit.
pub struct CubeMesh {
    vao: GLuint,
    // Kept so the buffer handles stay owned alongside the VAO that
    // references them.
    _vbos: [GLuint; 2],
}

impl CubeMesh {
    /// Uploads the cube arrays and records the attribute layout in a VAO.
    ///
    /// Requires a current GL context.
    pub fn upload() -> Self {
        let mut vao = 0;
        let mut vbos = [0; 2];

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);

            gl::GenBuffers(2, vbos.as_mut_ptr());

            // Attribute 0: vertex position (x, y, z)
            let positions: &[u8] = bytemuck::cast_slice(&cube::VERTEX_POSITIONS);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbos[0]);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                positions.len() as GLsizeiptr,
                positions.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
            gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, 0, ptr::null());
            gl::EnableVertexAttribArray(0);

            // Attribute 1: texture coordinates (u, v)
            let texcoords: &[u8] = bytemuck::cast_slice(&cube::TEX_COORDS);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbos[1]);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                texcoords.len() as GLsizeiptr,
                texcoords.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
            gl::VertexAttribPointer(1, 2, gl::FLOAT, gl::FALSE, 0, ptr::null());
            gl::EnableVertexAttribArray(1);

            // The VAO recorded the buffer bindings; leave nothing bound.
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
        }

        Self { vao, _vbos: vbos }
    }

    /// VAO handle bound by the render routine.
    #[inline]
    pub fn vao(&self) -> GLuint {
        self.vao
    }

    /// Vertex count for the draw call.
    #[inline]
    pub fn vertex_count(&self) -> i32 {
        cube::VERTEX_COUNT
    }
}
