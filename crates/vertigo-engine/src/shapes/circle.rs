use core::f64::consts::TAU;

use crate::coords::{Vec2, Viewport};
use crate::error::ShapeError;

use super::Geometry;

/// Circle centered on the local origin.
///
/// The radius is stored in X-axis NDC units; the Y radius is derived per
/// viewport so the circle stays round on non-square windows.
///
/// `sides` only controls the polygon drawn by the renderer. Collision uses
/// the analytic radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleGeometry {
    radius_x: f32,
    sides: u32,
}

impl CircleGeometry {
    pub fn new(radius_x: f32, sides: u32) -> Result<Self, ShapeError> {
        if sides < 3 {
            return Err(ShapeError::InvalidSides { sides });
        }
        Ok(Self { radius_x, sides })
    }

    #[inline]
    pub fn radius_x(&self) -> f32 {
        self.radius_x
    }

    /// Y radius in NDC covering the same number of pixels as the X radius.
    #[inline]
    pub fn radius_y(&self, viewport: Viewport) -> f32 {
        viewport.pixels_to_ndc_dist_y(viewport.ndc_dist_x_to_pixels(self.radius_x))
    }

    /// Radius in pixels.
    #[inline]
    pub fn radius_pixels(&self, viewport: Viewport) -> f32 {
        viewport.ndc_dist_x_to_pixels(self.radius_x)
    }

    #[inline]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    #[inline]
    pub(crate) fn set_radius(&mut self, radius_x: f32) {
        self.radius_x = radius_x;
    }

    /// `sides` points on the rim, clockwise from the +X direction.
    fn rim(&self, viewport: Viewport) -> Vec<Vec2> {
        let ry = f64::from(self.radius_y(viewport));
        let rx = f64::from(self.radius_x);
        let step = TAU / f64::from(self.sides);

        (0..self.sides)
            .map(|i| {
                let angle = -step * f64::from(i);
                Vec2::new((rx * angle.cos()) as f32, (ry * angle.sin()) as f32)
            })
            .collect()
    }
}

impl Geometry for CircleGeometry {
    /// Triangle fan: center, every rim point, then the first rim point again to
    /// close the fan.
    fn local_vertices(&self, viewport: Viewport) -> Vec<Vec2> {
        let rim = self.rim(viewport);
        let mut out = Vec::with_capacity(rim.len() + 2);
        out.push(Vec2::zero());
        out.extend_from_slice(&rim);
        out.push(rim[0]);
        out
    }

    fn local_exterior(&self, viewport: Viewport) -> Vec<Vec2> {
        self.rim(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fewer_than_three_sides_is_rejected() {
        assert_eq!(CircleGeometry::new(0.1, 2), Err(ShapeError::InvalidSides { sides: 2 }));
        assert_eq!(CircleGeometry::new(0.1, 0), Err(ShapeError::InvalidSides { sides: 0 }));
        assert!(CircleGeometry::new(0.1, 3).is_ok());
    }

    #[test]
    fn fan_layout() {
        let c = CircleGeometry::new(0.2, 8).unwrap();
        let v = c.local_vertices(Viewport::default());
        assert_eq!(v.len(), 8 + 2);
        assert_eq!(v[0], Vec2::zero());
        assert_eq!(v[1], v[9]);
        assert_eq!(c.local_exterior(Viewport::default()).len(), 8);
    }

    #[test]
    fn y_radius_compensates_aspect_ratio() {
        let vp = Viewport::new(1600.0, 900.0);
        let c = CircleGeometry::new(0.1, 32).unwrap();
        // 0.1 NDC on X is 80 px; 80 px on Y is 0.1777.. NDC.
        assert_relative_eq!(c.radius_pixels(vp), 80.0, epsilon = 1e-4);
        assert_relative_eq!(c.radius_y(vp), 80.0 / 450.0, epsilon = 1e-6);
    }

    #[test]
    fn rim_is_round_in_pixels() {
        let vp = Viewport::new(1280.0, 720.0);
        let c = CircleGeometry::new(0.25, 24).unwrap();
        let r = c.radius_pixels(vp);
        for p in c.local_exterior(vp) {
            let px = vp.ndc_offset_to_pixels(p);
            assert_relative_eq!(px.length_squared().sqrt(), r, epsilon = 1e-3);
        }
    }

    #[test]
    fn rim_runs_clockwise() {
        let rim = CircleGeometry::new(0.3, 6).unwrap().local_exterior(Viewport::default());
        for i in 0..rim.len() {
            let a = rim[(i + 1) % rim.len()] - rim[i];
            let b = rim[(i + 2) % rim.len()] - rim[(i + 1) % rim.len()];
            assert!(a.cross(b) < 0.0);
        }
    }
}
