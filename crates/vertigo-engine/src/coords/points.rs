use super::{Vec2, Viewport};

/// Point in pixels. Origin top-left, +X right, +Y down.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PixelCoords {
    pub x: f32,
    pub y: f32,
}

/// Point in normalized device coordinates.
///
/// Origin at the screen center, +Y up, `[-1, 1]` on both axes regardless of
/// window size. Shapes live in this space; its origin is the pivot of
/// axis rotations.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct NdCoords {
    pub x: f32,
    pub y: f32,
}

/// Point in world-normalized coordinates.
///
/// Origin bottom-left, +Y up, `[0, 1]` on both axes. One world unit is the
/// full window width on X and the full window height on Y.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct WorldCoords {
    pub x: f32,
    pub y: f32,
}

impl PixelCoords {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_ndc(self, viewport: Viewport) -> NdCoords {
        let x = f64::from(self.x) / f64::from(viewport.width) * 2.0 - 1.0;
        let y = 1.0 - f64::from(self.y) / f64::from(viewport.height) * 2.0;
        NdCoords::new(x as f32, y as f32)
    }

    pub fn to_world(self, viewport: Viewport) -> WorldCoords {
        let height = f64::from(viewport.height);
        WorldCoords::new(
            viewport.pixel_to_world_x(self.x),
            ((height - f64::from(self.y)) / height) as f32,
        )
    }
}

impl NdCoords {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub const fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn to_pixels(self, viewport: Viewport) -> PixelCoords {
        let x = f64::from(viewport.width) * (f64::from(self.x) + 1.0) / 2.0;
        let y = f64::from(viewport.height) * (1.0 - f64::from(self.y)) / 2.0;
        PixelCoords::new(x as f32, y as f32)
    }

    /// Both spaces grow +Y up and span the whole window, so this does not
    /// depend on the window size.
    #[inline]
    pub fn to_world(self) -> WorldCoords {
        WorldCoords::new((self.x + 1.0) / 2.0, (self.y + 1.0) / 2.0)
    }
}

impl WorldCoords {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_pixels(self, viewport: Viewport) -> PixelCoords {
        let height = f64::from(viewport.height);
        PixelCoords::new(
            viewport.world_to_pixel_x(self.x),
            (height - f64::from(self.y) * height) as f32,
        )
    }

    #[inline]
    pub fn to_ndc(self) -> NdCoords {
        NdCoords::new(self.x * 2.0 - 1.0, self.y * 2.0 - 1.0)
    }
}

impl From<Vec2> for NdCoords {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<NdCoords> for Vec2 {
    #[inline]
    fn from(p: NdCoords) -> Self {
        p.as_vec2()
    }
}
