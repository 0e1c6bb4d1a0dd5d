use crate::coords::{Vec2, Viewport};

use super::Geometry;

/// Axis-aligned box centered on the local origin (NDC units).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectGeometry {
    pub width: f32,
    pub height: f32,
}

impl RectGeometry {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Corners clockwise from the top-left (+Y up).
    pub fn corners(&self) -> [Vec2; 4] {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        [
            Vec2::new(-hw, hh),  // top left
            Vec2::new(hw, hh),   // top right
            Vec2::new(hw, -hh),  // bottom right
            Vec2::new(-hw, -hh), // bottom left
        ]
    }
}

impl Geometry for RectGeometry {
    fn local_vertices(&self, _viewport: Viewport) -> Vec<Vec2> {
        self.corners().to_vec()
    }

    fn local_exterior(&self, _viewport: Viewport) -> Vec<Vec2> {
        self.corners().to_vec()
    }
}
