//! Fixed shader pair and program build.
//!
//! The sources are compile-time constants. The default build is
//! deliberately permissive: compile and link status are not inspected, and
//! a failed uniform lookup yields a harmless -1 location. [`Diagnostics::Strict`]
//! is an opt-in addition that surfaces compile/link logs; the shipped
//! binary never enables it.

use std::ffi::CString;
use std::ptr;

use anyhow::{Context, Result, bail};
use gl::types::{GLenum, GLint, GLuint};

/// Vertex stage: transforms positions, derives the gradient color from the
/// object-space position, and passes the texcoord through.
pub const VERTEX_SHADER_SRC: &str = "\
#version 130

in vec4 v_pos;
in vec2 tex_coord;

out vec4 vs_color;
out vec2 vs_tex_coord;

uniform mat4 mv_matrix;
uniform mat4 proj_matrix;

void main() {
    gl_Position = proj_matrix * mv_matrix * v_pos;
    vs_color = v_pos * 2.0 + vec4(0.4, 0.4, 0.4, 1.0);
    vs_tex_coord = tex_coord;
}
";

/// Fragment stage: samples the texture where the interpolated texcoord is
/// real (x > 0), and falls back to the gradient color on the sentinel
/// (-1,-1) faces.
pub const FRAGMENT_SHADER_SRC: &str = "\
#version 130

in vec4 vs_color;
in vec2 vs_tex_coord;

out vec4 frag_col;

uniform sampler2D theTexture;

void main() {
    if (vs_tex_coord.x > 0.0) {
        frag_col = texture(theTexture, vs_tex_coord);
    } else {
        frag_col = vs_color;
    }
}
";

/// Shader build diagnostic level.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Diagnostics {
    /// Do not inspect compile/link status; a broken shader surfaces as a
    /// blank draw, not an error.
    Permissive,
    /// Fail the build with the GL info log on compile/link errors.
    Strict,
}

/// Linked program plus the two uniform locations cached for per-frame
/// reuse.
pub struct CubeProgram {
    pub id: GLuint,
    pub mv_location: GLint,
    pub proj_location: GLint,
}

/// Compiles and links the fixed shader pair and resolves the matrix
/// uniforms.
///
/// Requires a current GL context.
pub fn build_program(diagnostics: Diagnostics) -> Result<CubeProgram> {
    let vs = compile(gl::VERTEX_SHADER, VERTEX_SHADER_SRC, diagnostics)
        .context("vertex shader build failed")?;
    let fs = compile(gl::FRAGMENT_SHADER, FRAGMENT_SHADER_SRC, diagnostics)
        .context("fragment shader build failed")?;

    unsafe {
        let program = gl::CreateProgram();
        gl::AttachShader(program, fs);
        gl::AttachShader(program, vs);
        gl::LinkProgram(program);

        // Shader objects are no longer needed once the program is linked.
        gl::DeleteShader(vs);
        gl::DeleteShader(fs);

        if diagnostics == Diagnostics::Strict {
            let mut status = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
            if status == 0 {
                bail!("program link failed: {}", program_info_log(program));
            }
        }

        Ok(CubeProgram {
            id: program,
            mv_location: gl::GetUniformLocation(program, c"mv_matrix".as_ptr()),
            proj_location: gl::GetUniformLocation(program, c"proj_matrix".as_ptr()),
        })
    }
}

fn compile(kind: GLenum, src: &str, diagnostics: Diagnostics) -> Result<GLuint> {
    let source = CString::new(src).context("shader source contains an interior NUL")?;

    unsafe {
        let shader = gl::CreateShader(kind);
        gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
        gl::CompileShader(shader);

        if diagnostics == Diagnostics::Strict {
            let mut status = 0;
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
            if status == 0 {
                bail!("shader compile failed: {}", shader_info_log(shader));
            }
        }

        Ok(shader)
    }
}

fn shader_info_log(shader: GLuint) -> String {
    unsafe {
        let mut len = 0;
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
        let mut buf = vec![0u8; len.max(0) as usize];
        gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buf.as_mut_ptr().cast());
        String::from_utf8_lossy(&buf).trim_end_matches('\0').to_string()
    }
}

fn program_info_log(program: GLuint) -> String {
    unsafe {
        let mut len = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        let mut buf = vec![0u8; len.max(0) as usize];
        gl::GetProgramInfoLog(program, len, ptr::null_mut(), buf.as_mut_ptr().cast());
        String::from_utf8_lossy(&buf).trim_end_matches('\0').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_source_declares_both_matrix_uniforms() {
        assert!(VERTEX_SHADER_SRC.contains("uniform mat4 mv_matrix;"));
        assert!(VERTEX_SHADER_SRC.contains("uniform mat4 proj_matrix;"));
    }

    #[test]
    fn vertex_source_declares_both_attributes() {
        assert!(VERTEX_SHADER_SRC.contains("in vec4 v_pos;"));
        assert!(VERTEX_SHADER_SRC.contains("in vec2 tex_coord;"));
    }

    #[test]
    fn fragment_source_branches_on_the_sentinel() {
        assert!(FRAGMENT_SHADER_SRC.contains("uniform sampler2D theTexture;"));
        assert!(FRAGMENT_SHADER_SRC.contains("vs_tex_coord.x > 0.0"));
    }

    #[test]
    fn sources_are_valid_c_strings() {
        assert!(CString::new(VERTEX_SHADER_SRC).is_ok());
        assert!(CString::new(FRAGMENT_SHADER_SRC).is_ok());
    }
}
