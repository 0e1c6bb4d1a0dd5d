//! Vertigo engine crate.
//!
//! 2D shapes positioned in normalized device coordinates, rotated about the
//! scene origin or their own center, and tested for overlap with the
//! separating-axis theorem. Rendering is reached only through the
//! [`render::RenderModel`] seam.

pub mod collision;
pub mod coords;
pub mod error;
pub mod logging;
pub mod render;
pub mod shapes;

pub use collision::collides;
pub use coords::{NdCoords, PixelCoords, Vec2, Viewport, WorldCoords};
pub use error::ShapeError;
pub use shapes::{Shape, ShapeKind, Transform};
