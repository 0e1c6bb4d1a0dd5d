use crate::coords::{NdCoords, Vec2, Viewport};

use super::rotation::rotate_about_origin;

/// Column-major 4×4 matrix as uploaded to shader uniforms.
pub type Mat4 = [[f32; 4]; 4];

/// Position and rotation state of a shape.
///
/// Two rotations are tracked independently:
/// - the *axis angle*: rotation about the scene origin (NDC `(0, 0)`), which
///   moves the shape's center along a circle around the origin
/// - the *local angle*: rotation about the shape's own center, which never
///   moves the center
///
/// A vertex is placed by scaling its shape-local offset by `scale`, rotating
/// it by `axis_angle + local_angle` and adding the center. Rotations are
/// clockwise for positive angles and happen in pixel space.
///
/// `Transform` is a plain value; copying it snapshots the full pose.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    center: NdCoords,
    axis_angle: f32,
    local_angle: f32,
    scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(NdCoords::origin())
    }
}

impl Transform {
    /// Unrotated transform centered at `center`.
    #[inline]
    pub const fn at(center: NdCoords) -> Self {
        Self { center, axis_angle: 0.0, local_angle: 0.0, scale: 1.0 }
    }

    // ── translation ───────────────────────────────────────────────────────

    /// Moves the center to `(x, y)`.
    #[inline]
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.center = NdCoords::new(x, y);
    }

    /// Moves the center by `(dx, dy)`.
    #[inline]
    pub fn shift(&mut self, dx: f32, dy: f32) {
        self.center.x += dx;
        self.center.y += dy;
    }

    #[inline]
    pub fn center(&self) -> NdCoords {
        self.center
    }

    // ── rotation ──────────────────────────────────────────────────────────

    /// Rotates the shape about the scene origin, clockwise for positive `radians`.
    ///
    /// The center orbits the origin and the orientation turns with it.
    pub fn rotate_axis(&mut self, radians: f32, viewport: Viewport) {
        let mut center = [self.center.as_vec2()];
        rotate_about_origin(&mut center, radians, viewport);
        self.center = center[0].into();
        self.axis_angle += radians;
    }

    /// Rotates about the scene origin until the axis angle equals `radians`.
    pub fn set_axis_angle(&mut self, radians: f32, viewport: Viewport) {
        let delta = radians - self.axis_angle;
        self.rotate_axis(delta, viewport);
    }

    /// Rotates the shape about its own center, clockwise for positive `radians`.
    ///
    /// The center and the axis angle are left exactly as they were.
    #[inline]
    pub fn rotate_local(&mut self, radians: f32) {
        self.local_angle += radians;
    }

    /// Rotates about the own center until the local angle equals `radians`.
    #[inline]
    pub fn set_local_angle(&mut self, radians: f32) {
        let delta = radians - self.local_angle;
        self.rotate_local(delta);
    }

    /// Rotates about an arbitrary `pivot`, clockwise for positive `radians`.
    ///
    /// The center orbits the pivot and the shape turns with it. The turn is
    /// booked as local rotation; `axis_angle` only tracks turns about the
    /// scene origin. Pivoting on the center is the same as
    /// [`rotate_local`](Self::rotate_local).
    pub fn rotate_around(&mut self, radians: f32, pivot: NdCoords, viewport: Viewport) {
        let pivot = pivot.as_vec2();
        let mut offset = [self.center.as_vec2() - pivot];
        rotate_about_origin(&mut offset, radians, viewport);
        self.center = (pivot + offset[0]).into();
        self.local_angle += radians;
    }

    /// [`rotate_around`](Self::rotate_around) with the pivot given relative
    /// to the current center.
    pub fn rotate_relative(&mut self, radians: f32, offset: Vec2, viewport: Viewport) {
        let pivot = self.center.as_vec2() + offset;
        self.rotate_around(radians, pivot.into(), viewport);
    }

    #[inline]
    pub fn axis_angle(&self) -> f32 {
        self.axis_angle
    }

    #[inline]
    pub fn local_angle(&self) -> f32 {
        self.local_angle
    }

    // ── scale ─────────────────────────────────────────────────────────────

    /// Uniform scale about the center. Absolute, not cumulative.
    #[inline]
    pub fn set_scale(&mut self, factor: f32) {
        self.scale = factor;
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Total rotation applied to shape-local offsets.
    #[inline]
    pub fn orientation(&self) -> f32 {
        self.axis_angle + self.local_angle
    }

    // ── vertex placement ──────────────────────────────────────────────────

    /// Scales and rotates shape-local offsets, without translation.
    ///
    /// This is the vertex stream handed to the renderable model; the model
    /// matrix supplies the translation.
    pub fn orient(&self, local: &[Vec2], viewport: Viewport) -> Vec<Vec2> {
        let mut out: Vec<Vec2> = local.iter().map(|v| *v * self.scale).collect();
        rotate_about_origin(&mut out, self.orientation(), viewport);
        out
    }

    /// Places shape-local offsets in NDC.
    pub fn apply(&self, local: &[Vec2], viewport: Viewport) -> Vec<Vec2> {
        let center = self.center.as_vec2();
        let mut out = self.orient(local, viewport);
        for v in &mut out {
            *v += center;
        }
        out
    }

    /// Translation to the center, column-major.
    pub fn model_matrix(&self) -> Mat4 {
        [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [self.center.x, self.center.y, 0.0, 1.0],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use core::f32::consts::{FRAC_PI_2, PI, TAU};

    const EPSILON: f32 = 1e-5;
    const ANGLES: [f32; 7] = [0.0, 0.1, -0.7, FRAC_PI_2, PI, 2.5, -TAU];

    fn viewports() -> [Viewport; 3] {
        [Viewport::new(800.0, 600.0), Viewport::new(600.0, 600.0), Viewport::new(1600.0, 900.0)]
    }

    // ── translation ───────────────────────────────────────────────────────

    #[test]
    fn shift_composes() {
        let mut t = Transform::at(NdCoords::new(0.1, 0.2));
        t.shift(0.3, -0.1);
        t.shift(-0.05, 0.4);
        assert_relative_eq!(t.center().x, 0.35, epsilon = EPSILON);
        assert_relative_eq!(t.center().y, 0.5, epsilon = EPSILON);
    }

    #[test]
    fn set_position_is_absolute() {
        let mut t = Transform::at(NdCoords::new(0.9, 0.9));
        t.rotate_axis(1.0, Viewport::default());
        t.set_position(-0.25, 0.5);
        assert_eq!(t.center(), NdCoords::new(-0.25, 0.5));
    }

    // ── axis rotation ─────────────────────────────────────────────────────

    #[test]
    fn axis_rotation_orbits_origin_clockwise() {
        let vp = Viewport::new(600.0, 600.0);
        let mut t = Transform::at(NdCoords::new(0.5, 0.0));
        t.rotate_axis(FRAC_PI_2, vp);
        assert_abs_diff_eq!(t.center().x, 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(t.center().y, -0.5, epsilon = EPSILON);
        assert_eq!(t.axis_angle(), FRAC_PI_2);
    }

    #[test]
    fn axis_rotation_then_inverse_restores() {
        for vp in viewports() {
            for theta in ANGLES {
                let start = Transform::at(NdCoords::new(0.3, -0.4));
                let mut t = start;
                t.rotate_axis(theta, vp);
                t.rotate_axis(-theta, vp);
                assert_abs_diff_eq!(t.center().x, start.center().x, epsilon = EPSILON);
                assert_abs_diff_eq!(t.center().y, start.center().y, epsilon = EPSILON);
                assert_abs_diff_eq!(t.axis_angle(), start.axis_angle(), epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn set_axis_angle_rotates_by_difference() {
        let vp = Viewport::default();
        let mut a = Transform::at(NdCoords::new(0.2, 0.2));
        a.rotate_axis(0.4, vp);
        a.set_axis_angle(1.0, vp);

        let mut b = Transform::at(NdCoords::new(0.2, 0.2));
        b.rotate_axis(1.0, vp);

        assert_relative_eq!(a.axis_angle(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(a.center().x, b.center().x, epsilon = EPSILON);
        assert_abs_diff_eq!(a.center().y, b.center().y, epsilon = EPSILON);
    }

    // ── local rotation ────────────────────────────────────────────────────

    #[test]
    fn local_rotation_keeps_center_and_axis_angle() {
        for vp in viewports() {
            for theta in ANGLES {
                let mut t = Transform::at(NdCoords::new(-0.6, 0.25));
                t.rotate_axis(0.8, vp);
                let before = t;

                t.rotate_local(theta);

                assert_eq!(t.center(), before.center());
                assert_eq!(t.axis_angle(), before.axis_angle());
                assert_relative_eq!(t.local_angle(), before.local_angle() + theta, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn set_local_angle_is_absolute() {
        let mut t = Transform::default();
        t.rotate_local(2.0);
        t.set_local_angle(0.5);
        assert_relative_eq!(t.local_angle(), 0.5, epsilon = 1e-6);
    }

    // ── arbitrary pivots ──────────────────────────────────────────────────

    #[test]
    fn rotate_around_own_center_is_local_rotation() {
        for vp in viewports() {
            for theta in ANGLES {
                let mut a = Transform::at(NdCoords::new(0.35, -0.2));
                a.rotate_axis(0.4, vp);
                let mut b = a;

                a.rotate_around(theta, a.center(), vp);
                b.rotate_local(theta);

                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn rotate_around_origin_places_vertices_like_axis_rotation() {
        let local = [Vec2::new(0.1, 0.05), Vec2::new(-0.1, 0.05), Vec2::new(0.0, -0.1)];
        for vp in viewports() {
            let mut a = Transform::at(NdCoords::new(0.4, 0.3));
            let mut b = a;
            a.rotate_around(1.2, NdCoords::origin(), vp);
            b.rotate_axis(1.2, vp);

            for (p, q) in a.apply(&local, vp).iter().zip(&b.apply(&local, vp)) {
                assert_abs_diff_eq!(p.x, q.x, epsilon = EPSILON);
                assert_abs_diff_eq!(p.y, q.y, epsilon = EPSILON);
            }
            assert_eq!(a.axis_angle(), 0.0);
        }
    }

    #[test]
    fn rotate_around_pivot_half_turn_mirrors_center() {
        let vp = Viewport::new(1600.0, 900.0);
        let mut t = Transform::at(NdCoords::new(0.5, 0.2));
        t.rotate_around(PI, NdCoords::new(0.3, 0.1), vp);
        assert_abs_diff_eq!(t.center().x, 0.1, epsilon = EPSILON);
        assert_abs_diff_eq!(t.center().y, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn rotate_relative_uses_offset_from_center() {
        let vp = Viewport::default();
        let mut a = Transform::at(NdCoords::new(-0.2, 0.4));
        let mut b = a;
        a.rotate_relative(0.9, Vec2::new(0.1, -0.3), vp);
        b.rotate_around(0.9, NdCoords::new(-0.1, 0.1), vp);
        assert_abs_diff_eq!(a.center().x, b.center().x, epsilon = EPSILON);
        assert_abs_diff_eq!(a.center().y, b.center().y, epsilon = EPSILON);
        assert_eq!(a.local_angle(), b.local_angle());
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn scale_is_absolute_and_about_center() {
        let mut t = Transform::at(NdCoords::new(0.5, -0.5));
        t.set_scale(3.0);
        t.set_scale(2.0);
        assert_eq!(t.scale(), 2.0);

        let placed = t.apply(&[Vec2::new(0.1, -0.05)], Viewport::default());
        assert_relative_eq!(placed[0].x, 0.7, epsilon = EPSILON);
        assert_relative_eq!(placed[0].y, -0.6, epsilon = EPSILON);
        assert_eq!(t.center(), NdCoords::new(0.5, -0.5));
    }

    #[test]
    fn scale_commutes_with_rotation() {
        let vp = Viewport::new(1280.0, 720.0);
        let local = [Vec2::new(0.2, 0.1)];
        let mut t = Transform::default();
        t.rotate_local(0.8);
        t.set_scale(1.5);

        let scaled = t.orient(&local, vp);
        t.set_scale(1.0);
        let unscaled = t.orient(&local, vp);
        assert_relative_eq!(scaled[0].x, unscaled[0].x * 1.5, epsilon = EPSILON);
        assert_relative_eq!(scaled[0].y, unscaled[0].y * 1.5, epsilon = EPSILON);
    }

    // ── vertex placement ──────────────────────────────────────────────────

    #[test]
    fn apply_without_rotation_translates() {
        let t = Transform::at(NdCoords::new(0.5, -0.5));
        let placed = t.apply(&[Vec2::new(0.1, 0.2)], Viewport::default());
        assert_relative_eq!(placed[0].x, 0.6, epsilon = EPSILON);
        assert_relative_eq!(placed[0].y, -0.3, epsilon = EPSILON);
    }

    #[test]
    fn apply_matches_rotating_every_vertex_about_origin() {
        let vp = Viewport::new(1024.0, 768.0);
        let local = [Vec2::new(0.1, 0.1), Vec2::new(-0.2, 0.05), Vec2::new(0.0, -0.15)];

        let mut t = Transform::at(NdCoords::new(0.4, 0.1));
        t.rotate_axis(0.9, vp);
        let placed = t.apply(&local, vp);

        // Same thing done literally: place, then rotate each vertex about the origin.
        let mut literal: Vec<Vec2> = local.iter().map(|v| *v + Vec2::new(0.4, 0.1)).collect();
        rotate_about_origin(&mut literal, 0.9, vp);

        for (a, b) in placed.iter().zip(&literal) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = EPSILON);
            assert_abs_diff_eq!(a.y, b.y, epsilon = EPSILON);
        }
    }

    #[test]
    fn model_matrix_carries_center() {
        let t = Transform::at(NdCoords::new(0.25, -0.75));
        let m = t.model_matrix();
        assert_eq!(m[3], [0.25, -0.75, 0.0, 1.0]);
        assert_eq!(m[0], [1.0, 0.0, 0.0, 0.0]);
    }
}
