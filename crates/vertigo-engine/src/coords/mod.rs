//! Coordinate spaces and unit conversion.
//!
//! Three tagged point types share one window:
//! - [`PixelCoords`]: pixels, origin top-left, +Y down
//! - [`NdCoords`]: normalized device coords, origin center, +Y up, `[-1, 1]`
//! - [`WorldCoords`]: world-normalized, origin bottom-left, +Y up, `[0, 1]`
//!
//! Conversions are pure functions of a [`Viewport`] passed by the caller.

mod points;
mod vec2;
mod viewport;

pub use points::{NdCoords, PixelCoords, WorldCoords};
pub use vec2::Vec2;
pub use viewport::Viewport;
