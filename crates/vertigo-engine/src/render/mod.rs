//! Renderable-model seam.
//!
//! Shapes never talk to the GPU. They hand their vertex stream to a
//! [`RenderModel`] whenever it changes, ask it to draw with a model matrix,
//! and release it once on close. The GPU-backed implementation lives outside
//! this crate; [`StagingModel`] is the CPU-side implementation used by tools
//! and tests.

mod model;
mod staging;

pub use model::RenderModel;
pub use staging::{ModelStats, ShapeVertex, StagingModel};
