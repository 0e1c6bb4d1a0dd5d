use core::f64::consts::FRAC_PI_2;

use crate::coords::{Vec2, Viewport};

/// Rounding applied to rotated pixel magnitudes.
///
/// Unrounded results drift by a few ulps per rotation, which shows up as a
/// one-pixel seam where a texture wraps (top row bleeding into the bottom).
const SEAM_ROUNDING: f64 = 10_000_000.0;

#[inline]
fn round_seam(v: f64) -> f64 {
    (v * SEAM_ROUNDING).round() / SEAM_ROUNDING
}

/// Rotates a pixel-space offset about the origin, clockwise for positive
/// `radians`.
///
/// The offset is +Y up. Magnitudes are rounded to 1e-7 pixels.
pub fn rotate_pixel_offset(x: f64, y: f64, radians: f64) -> (f64, f64) {
    let radians = -radians;

    let theta = y.atan2(x);
    let hyp = x.hypot(y);
    let new_theta = FRAC_PI_2 - theta - radians;

    (round_seam(new_theta.sin() * hyp), round_seam(new_theta.cos() * hyp))
}

/// Rotates NDC points about the NDC origin, clockwise for positive `radians`.
///
/// The rotation happens in pixel space so that shapes keep their on-screen
/// proportions on non-square windows.
pub fn rotate_about_origin(points: &mut [Vec2], radians: f32, viewport: Viewport) {
    if radians == 0.0 {
        return;
    }

    for p in points.iter_mut() {
        let px = viewport.ndc_offset_to_pixels(*p);
        let (x, y) = rotate_pixel_offset(f64::from(px.x), f64::from(px.y), f64::from(radians));
        *p = viewport.pixel_offset_to_ndc(Vec2::new(x as f32, y as f32));
    }
}
