/// Viewport size in pixels.
///
/// The render routine treats this as the coordinate basis for the GL
/// viewport and for the projection aspect ratio. The resize handler
/// replaces it wholesale; nothing else mutates it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width over height, as fed to the perspective projection.
    #[inline]
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_dimensions_exactly() {
        let vp = Viewport::new(800, 600);
        assert_eq!(vp.width, 800);
        assert_eq!(vp.height, 600);
    }

    #[test]
    fn positive_dimensions_are_valid() {
        assert!(Viewport::new(640, 480).is_valid());
    }

    #[test]
    fn zero_or_negative_dimensions_are_invalid() {
        assert!(!Viewport::new(0, 480).is_valid());
        assert!(!Viewport::new(640, 0).is_valid());
        assert!(!Viewport::new(-640, 480).is_valid());
    }

    #[test]
    fn aspect_is_width_over_height() {
        assert_eq!(Viewport::new(800, 600).aspect(), 800.0 / 600.0);
        assert_eq!(Viewport::new(512, 512).aspect(), 1.0);
    }
}
