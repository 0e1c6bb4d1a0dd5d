use super::{Vec2, WorldCoords};

/// Window size in pixels.
///
/// Every unit conversion takes the viewport explicitly, so the same shapes can
/// be evaluated against several window sizes (tests, resizes) without any
/// process-wide state. X and Y scale independently; a normalized unit is wider
/// than it is tall on a landscape window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    // ── NDC distances ─────────────────────────────────────────────────────

    #[inline]
    pub fn ndc_dist_x_to_pixels(self, dist: f32) -> f32 {
        (f64::from(dist) * f64::from(self.width) / 2.0) as f32
    }

    #[inline]
    pub fn ndc_dist_y_to_pixels(self, dist: f32) -> f32 {
        (f64::from(dist) * f64::from(self.height) / 2.0) as f32
    }

    #[inline]
    pub fn pixels_to_ndc_dist_x(self, dist: f32) -> f32 {
        (f64::from(dist) / f64::from(self.width) * 2.0) as f32
    }

    #[inline]
    pub fn pixels_to_ndc_dist_y(self, dist: f32) -> f32 {
        (f64::from(dist) / f64::from(self.height) * 2.0) as f32
    }

    /// Converts an x NDC distance to the y NDC distance covering the same number
    /// of pixels. Useful for building shapes that are square on screen.
    #[inline]
    pub fn ndc_x_to_ndc_y(self, dist: f32) -> f32 {
        (f64::from(dist) * f64::from(self.width) / f64::from(self.height)) as f32
    }

    /// Inverse of [`ndc_x_to_ndc_y`](Self::ndc_x_to_ndc_y).
    #[inline]
    pub fn ndc_y_to_ndc_x(self, dist: f32) -> f32 {
        (f64::from(dist) * f64::from(self.height) / f64::from(self.width)) as f32
    }

    /// NDC offset (relative to the screen center) to a pixel offset, +Y up.
    #[inline]
    pub fn ndc_offset_to_pixels(self, offset: Vec2) -> Vec2 {
        Vec2::new(self.ndc_dist_x_to_pixels(offset.x), self.ndc_dist_y_to_pixels(offset.y))
    }

    /// Pixel offset (+Y up) to an NDC offset.
    #[inline]
    pub fn pixel_offset_to_ndc(self, offset: Vec2) -> Vec2 {
        Vec2::new(self.pixels_to_ndc_dist_x(offset.x), self.pixels_to_ndc_dist_y(offset.y))
    }

    // ── world distances ───────────────────────────────────────────────────

    #[inline]
    pub fn pixel_to_world_x(self, px: f32) -> f32 {
        (f64::from(px) / f64::from(self.width)) as f32
    }

    #[inline]
    pub fn pixel_to_world_y(self, py: f32) -> f32 {
        (f64::from(py) / f64::from(self.height)) as f32
    }

    #[inline]
    pub fn world_to_pixel_x(self, wx: f32) -> f32 {
        (f64::from(wx) * f64::from(self.width)) as f32
    }

    #[inline]
    pub fn world_to_pixel_y(self, wy: f32) -> f32 {
        (f64::from(wy) * f64::from(self.height)) as f32
    }

    /// The middle of the screen in world coordinates.
    #[inline]
    pub fn world_middle(self) -> WorldCoords {
        WorldCoords::new(0.5, 0.5)
    }
}
