//! Cube face texture.
//!
//! One 2D texture decoded from disk at startup. Decode failure is
//! non-fatal: the texture object keeps its sampling parameters but no
//! pixels, and the draw call stays issuable.

use std::ffi::c_void;
use std::path::Path;

use anyhow::{Context, Result};
use gl::types::GLuint;
use image::RgbImage;

/// Fixed texture path, resolved relative to the working directory at
/// launch.
pub const TEXTURE_PATH: &str = "texture.jpg";

/// GL texture object sampled by the fragment shader.
pub struct CubeTexture {
    id: GLuint,
}

/// Decodes `path` into tightly-packed RGB8 pixels.
///
/// The source channel count is auto-detected by the decoder; the result is
/// always converted to RGB to match the fixed `GL_RGB` upload format.
pub fn decode_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode image {}", path.display()))?;
    Ok(img.to_rgb8())
}

impl CubeTexture {
    /// Creates the texture object and uploads pixels if `path` decodes.
    ///
    /// Requires a current GL context. On decode failure the object is left
    /// un-populated (samples read as zero) and a warning is logged.
    pub fn load(path: &Path) -> Self {
        let mut id = 0;

        unsafe {
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);

            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_BORDER as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_BORDER as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as i32);
        }

        match decode_rgb(path) {
            Ok(pixels) => unsafe {
                gl::TexImage2D(
                    gl::TEXTURE_2D,
                    0,
                    gl::RGB as i32,
                    pixels.width() as i32,
                    pixels.height() as i32,
                    0,
                    gl::RGB,
                    gl::UNSIGNED_BYTE,
                    pixels.as_raw().as_ptr() as *const c_void,
                );
                gl::GenerateMipmap(gl::TEXTURE_2D);
            },
            Err(e) => {
                log::warn!("failed to load texture: {e:#}");
            }
        }

        Self { id }
    }

    /// Texture handle bound by the render routine.
    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoding_a_missing_file_fails_without_panicking() {
        let err = decode_rgb(Path::new("definitely-not-here.jpg"));
        assert!(err.is_err());
    }

    #[test]
    fn texture_path_is_relative() {
        assert!(Path::new(TEXTURE_PATH).is_relative());
    }
}
