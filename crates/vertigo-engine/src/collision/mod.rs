//! Separating-axis collision between shapes.
//!
//! Queries are pure: world vertices and projections are computed into
//! temporaries and the shapes (transforms, vertex buffers, models) are never
//! touched. Touching counts as colliding on every path.

mod range;
mod sat;

pub use range::Range;
pub use sat::{
    candidate_axes, circle_contains_point, circles_collide, collides, fold_angle, point_in_circle,
    polygon_circle_collide, polygons_collide,
};
