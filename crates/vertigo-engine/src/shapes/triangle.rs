use crate::coords::{NdCoords, Vec2, Viewport};

use super::Geometry;

/// Triangle stored as offsets from its centroid, clockwise (+Y up).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleGeometry {
    points: [Vec2; 3],
}

impl TriangleGeometry {
    /// Splits three NDC points into a centroid and centroid-relative offsets.
    ///
    /// Counter-clockwise input is reordered so the exterior loop is always
    /// clockwise.
    pub fn from_points(p1: NdCoords, p2: NdCoords, p3: NdCoords) -> (Self, NdCoords) {
        let centroid = centroid(p1, p2, p3);
        let c = centroid.as_vec2();

        let mut points = [p1.as_vec2() - c, p2.as_vec2() - c, p3.as_vec2() - c];
        if (points[1] - points[0]).cross(points[2] - points[0]) > 0.0 {
            points.swap(1, 2);
        }

        (Self { points }, centroid)
    }

    #[inline]
    pub fn points(&self) -> [Vec2; 3] {
        self.points
    }
}

/// Arithmetic mean of the three points.
pub fn centroid(p1: NdCoords, p2: NdCoords, p3: NdCoords) -> NdCoords {
    NdCoords::new((p1.x + p2.x + p3.x) / 3.0, (p1.y + p2.y + p3.y) / 3.0)
}

impl Geometry for TriangleGeometry {
    fn local_vertices(&self, _viewport: Viewport) -> Vec<Vec2> {
        self.points.to_vec()
    }

    fn local_exterior(&self, _viewport: Viewport) -> Vec<Vec2> {
        self.points.to_vec()
    }
}
