//! Model-view and projection matrix computation.
//!
//! Everything here is a pure function of elapsed time and viewport size;
//! the per-frame routine only uploads the results.

use cgmath::{Deg, Matrix4, Vector3, perspective};

use crate::coords::Viewport;

/// Vertical field of view, degrees.
pub const FOV_Y_DEG: f32 = 50.0;
/// Near clipping plane distance.
pub const NEAR_PLANE: f32 = 0.1;
/// Far clipping plane distance.
pub const FAR_PLANE: f32 = 1000.0;

/// Model-view matrix for the cube at `time` seconds since startup.
///
/// Composition order (each step right-multiplied, i.e. expressed in the
/// local frame established by the previous steps):
/// push away from the camera, apply the orbit offset, spin about Y, then
/// spin about X.
pub fn model_view(time: f32) -> Matrix4<f32> {
    let f = time * 0.3;

    let mv = Matrix4::from_translation(Vector3::new(0.0, 0.0, -4.0));
    let mv = mv * Matrix4::from_translation(Vector3::new(
        (2.1 * f).sin() * 0.5,
        (1.7 * f).cos() * 0.5,
        (1.3 * f).sin() * (1.5 * f).cos() * 2.0,
    ));
    let mv = mv * Matrix4::from_angle_y(Deg(time * 45.0));
    mv * Matrix4::from_angle_x(Deg(time * 81.0))
}

/// Perspective projection for the current viewport.
pub fn projection(viewport: Viewport) -> Matrix4<f32> {
    perspective(Deg(FOV_Y_DEG), viewport.aspect(), NEAR_PLANE, FAR_PLANE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat_eq(a: Matrix4<f32>, b: Matrix4<f32>) {
        let a: &[f32; 16] = a.as_ref();
        let b: &[f32; 16] = b.as_ref();
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            assert!(
                (x - y).abs() < 1e-6,
                "element {i} differs: {x} vs {y}"
            );
        }
    }

    // ── model-view ────────────────────────────────────────────────────────

    #[test]
    fn model_view_at_time_zero_is_pure_translation() {
        // At t=0 the orbit offset is (sin 0 * 0.5, cos 0 * 0.5, sin 0 * cos 0 * 2)
        // = (0, 0.5, 0) and both rotations are zero, so the whole thing
        // collapses to translate(0,0,-4) ∘ translate(0,0.5,0).
        let expected = Matrix4::from_translation(Vector3::new(0.0, 0.5, -4.0));
        assert_mat_eq(model_view(0.0), expected);
    }

    #[test]
    fn model_view_rotation_preserves_translation_column() {
        // Rotations are applied in the local frame after both translations,
        // so the translation column is the same as at t=0 apart from the
        // time-varying orbit offset.
        let t = 1.25f32;
        let f = t * 0.3;
        let mv = model_view(t);
        assert!((mv.w.x - (2.1 * f).sin() * 0.5).abs() < 1e-5);
        assert!((mv.w.y - (1.7 * f).cos() * 0.5).abs() < 1e-5);
        assert!((mv.w.z - (-4.0 + (1.3 * f).sin() * (1.5 * f).cos() * 2.0)).abs() < 1e-5);
        assert!((mv.w.w - 1.0).abs() < 1e-6);
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn projection_aspect_term_is_width_over_height() {
        let proj = projection(Viewport::new(800, 600));
        // For a perspective matrix, m[1][1] / m[0][0] equals the aspect ratio.
        assert!((proj.y.y / proj.x.x - 800.0 / 600.0).abs() < 1e-5);
    }

    #[test]
    fn projection_is_symmetric_for_square_viewport() {
        let proj = projection(Viewport::new(512, 512));
        assert!((proj.x.x - proj.y.y).abs() < 1e-6);
    }

    #[test]
    fn projection_encodes_near_and_far_planes() {
        let proj = projection(Viewport::new(640, 480));
        let (n, f) = (NEAR_PLANE, FAR_PLANE);
        assert!((proj.z.z - (f + n) / (n - f)).abs() < 1e-5);
        assert!((proj.w.z - (2.0 * f * n) / (n - f)).abs() < 1e-5);
        assert!((proj.z.w - -1.0).abs() < 1e-6);
        assert_eq!(proj.w.w, 0.0);
    }
}
