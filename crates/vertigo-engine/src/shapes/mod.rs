//! Shapes and their transforms.
//!
//! A [`Shape`] couples one geometry variant ([`ShapeKind`]) with a
//! [`Transform`], a cached vertex buffer and an optional renderable model.
//!
//! Vertex spaces:
//! - *local*: NDC offsets from the shape's own center, unrotated
//! - *world*: NDC positions after the full transform
//!
//! Extending the shape set:
//! - add a geometry module implementing [`Geometry`]
//! - add a variant to [`ShapeKind`] and route it in the `Geometry` impl below
//! - collision picks it up through `exterior_vertices` as long as it is convex

mod circle;
mod rect;
mod rotation;
mod transform;
mod triangle;

use core::fmt;

use crate::coords::{NdCoords, Vec2, Viewport};
use crate::error::ShapeError;
use crate::render::RenderModel;

pub use circle::CircleGeometry;
pub use rect::RectGeometry;
pub use rotation::{rotate_about_origin, rotate_pixel_offset};
pub use transform::{Mat4, Transform};
pub use triangle::{centroid, TriangleGeometry};

/// Per-variant vertex generation.
pub trait Geometry {
    /// Untransformed vertices in render layout.
    fn local_vertices(&self, viewport: Viewport) -> Vec<Vec2>;

    /// Untransformed boundary loop, clockwise. Consecutive pairs, including
    /// last to first, are the edges.
    fn local_exterior(&self, viewport: Viewport) -> Vec<Vec2>;
}

/// Closed set of supported convex shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeKind {
    Rect(RectGeometry),
    Circle(CircleGeometry),
    Triangle(TriangleGeometry),
}

impl Geometry for ShapeKind {
    fn local_vertices(&self, viewport: Viewport) -> Vec<Vec2> {
        match self {
            ShapeKind::Rect(g) => g.local_vertices(viewport),
            ShapeKind::Circle(g) => g.local_vertices(viewport),
            ShapeKind::Triangle(g) => g.local_vertices(viewport),
        }
    }

    fn local_exterior(&self, viewport: Viewport) -> Vec<Vec2> {
        match self {
            ShapeKind::Rect(g) => g.local_exterior(viewport),
            ShapeKind::Circle(g) => g.local_exterior(viewport),
            ShapeKind::Triangle(g) => g.local_exterior(viewport),
        }
    }
}

/// A positioned, rotatable shape.
///
/// Mutations mark the vertex buffer dirty; [`sync_model`](Self::sync_model)
/// (called by [`draw`](Self::draw)) recomputes it and hands it to the
/// renderable model once. The model is released by [`close`](Self::close),
/// or on drop if the caller forgot.
pub struct Shape {
    kind: ShapeKind,
    transform: Transform,

    /// Oriented local vertices, flattened `x, y` pairs, as last uploaded.
    vertices: Vec<f32>,
    dirty: bool,
    synced_viewport: Option<Viewport>,

    model: Option<Box<dyn RenderModel>>,
    closed: bool,
}

impl Shape {
    fn from_parts(kind: ShapeKind, transform: Transform) -> Self {
        log::debug!("shape created: {kind:?} at {:?}", transform.center());
        Self {
            kind,
            transform,
            vertices: Vec::new(),
            dirty: true,
            synced_viewport: None,
            model: None,
            closed: false,
        }
    }

    // ── construction ──────────────────────────────────────────────────────

    /// Rectangle whose top-left corner is at `top_left` (NDC, +Y up).
    pub fn rect(top_left: NdCoords, width: f32, height: f32) -> Self {
        let center = NdCoords::new(top_left.x + width / 2.0, top_left.y - height / 2.0);
        Self::rect_centered(center, width, height)
    }

    pub fn rect_centered(center: NdCoords, width: f32, height: f32) -> Self {
        Self::from_parts(ShapeKind::Rect(RectGeometry::new(width, height)), Transform::at(center))
    }

    /// Circle with an X-axis NDC radius, drawn as a `sides`-gon.
    ///
    /// Fails with [`ShapeError::InvalidSides`] when `sides < 3`.
    pub fn circle(center: NdCoords, radius_x: f32, sides: u32) -> Result<Self, ShapeError> {
        let geometry = CircleGeometry::new(radius_x, sides)?;
        Ok(Self::from_parts(ShapeKind::Circle(geometry), Transform::at(center)))
    }

    /// Triangle through three NDC points, positioned at their centroid.
    pub fn triangle(p1: NdCoords, p2: NdCoords, p3: NdCoords) -> Self {
        let (geometry, center) = TriangleGeometry::from_points(p1, p2, p3);
        Self::from_parts(ShapeKind::Triangle(geometry), Transform::at(center))
    }

    /// Builder form of [`attach_model`](Self::attach_model).
    pub fn with_model(mut self, model: Box<dyn RenderModel>) -> Self {
        self.attach_model(model);
        self
    }

    /// Hands the shape a renderable model. A previously attached model is
    /// released first.
    pub fn attach_model(&mut self, model: Box<dyn RenderModel>) {
        if let Some(mut old) = self.model.replace(model) {
            old.release();
        }
        self.closed = false;
        self.dirty = true;
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    #[inline]
    pub fn as_circle(&self) -> Option<&CircleGeometry> {
        match &self.kind {
            ShapeKind::Circle(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub fn is_circle(&self) -> bool {
        self.as_circle().is_some()
    }

    /// On-screen circle radius in pixels, including the transform's scale.
    pub fn circle_radius_pixels(&self, viewport: Viewport) -> Option<f32> {
        self.as_circle()
            .map(|c| c.radius_pixels(viewport) * self.transform.scale().abs())
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable transform access. Marks the vertex buffer dirty.
    #[inline]
    pub fn transform_mut(&mut self) -> &mut Transform {
        self.dirty = true;
        &mut self.transform
    }

    #[inline]
    pub fn center(&self) -> NdCoords {
        self.transform.center()
    }

    /// Cached vertex buffer from the last sync.
    #[inline]
    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    #[inline]
    pub fn needs_upload(&self) -> bool {
        self.dirty
    }

    // ── transform forwarding ──────────────────────────────────────────────

    // Translation only changes the model matrix, not the uploaded vertices.

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.transform.set_position(x, y);
    }

    pub fn shift(&mut self, dx: f32, dy: f32) {
        self.transform.shift(dx, dy);
    }

    pub fn rotate_axis(&mut self, radians: f32, viewport: Viewport) {
        self.transform.rotate_axis(radians, viewport);
        self.dirty = true;
    }

    pub fn set_axis_angle(&mut self, radians: f32, viewport: Viewport) {
        self.transform.set_axis_angle(radians, viewport);
        self.dirty = true;
    }

    pub fn rotate_local(&mut self, radians: f32) {
        self.transform.rotate_local(radians);
        self.dirty = true;
    }

    pub fn set_local_angle(&mut self, radians: f32) {
        self.transform.set_local_angle(radians);
        self.dirty = true;
    }

    pub fn rotate_around(&mut self, radians: f32, pivot: NdCoords, viewport: Viewport) {
        self.transform.rotate_around(radians, pivot, viewport);
        self.dirty = true;
    }

    pub fn rotate_relative(&mut self, radians: f32, offset: Vec2, viewport: Viewport) {
        self.transform.rotate_relative(radians, offset, viewport);
        self.dirty = true;
    }

    pub fn set_scale(&mut self, factor: f32) {
        self.transform.set_scale(factor);
        self.dirty = true;
    }

    // ── geometry setters ──────────────────────────────────────────────────

    /// Sets a rectangle's width, keeping its center. Ignored for other shapes.
    ///
    /// A rectangle built with [`rect`](Self::rect) therefore grows on both
    /// sides; its top-left corner moves by half the change.
    pub fn set_width(&mut self, width: f32) {
        match &mut self.kind {
            ShapeKind::Rect(r) => {
                r.width = width;
                self.dirty = true;
            }
            other => log::warn!("set_width ignored on {other:?}"),
        }
    }

    /// Sets a rectangle's height, keeping its center. Ignored for other shapes.
    pub fn set_height(&mut self, height: f32) {
        match &mut self.kind {
            ShapeKind::Rect(r) => {
                r.height = height;
                self.dirty = true;
            }
            other => log::warn!("set_height ignored on {other:?}"),
        }
    }

    /// Sets a circle's X-axis NDC radius. Ignored for other shapes.
    pub fn set_radius(&mut self, radius_x: f32) {
        match &mut self.kind {
            ShapeKind::Circle(c) => {
                c.set_radius(radius_x);
                self.dirty = true;
            }
            other => log::warn!("set_radius ignored on {other:?}"),
        }
    }

    // ── vertices ──────────────────────────────────────────────────────────

    /// Shape-local, untransformed vertices in render layout.
    pub fn calculate_vertices(&self, viewport: Viewport) -> Vec<Vec2> {
        self.kind.local_vertices(viewport)
    }

    /// Render-layout vertices with the full transform applied (NDC).
    pub fn transformed_vertices(&self, viewport: Viewport) -> Vec<Vec2> {
        self.transform.apply(&self.kind.local_vertices(viewport), viewport)
    }

    /// Transformed boundary loop (NDC), clockwise.
    pub fn exterior_vertices(&self, viewport: Viewport) -> Vec<Vec2> {
        self.transform.apply(&self.kind.local_exterior(viewport), viewport)
    }

    /// Angle between the +X axis and every boundary edge, in radians.
    ///
    /// Edge deltas are measured in pixels so the angles are not skewed by the
    /// window's aspect ratio. Values are raw `atan2` output in `(-π, π]`.
    pub fn outside_edge_angles(&self, viewport: Viewport) -> Vec<f64> {
        let exterior = self.exterior_vertices(viewport);
        let n = exterior.len();

        (0..n)
            .map(|i| {
                let delta = viewport.ndc_offset_to_pixels(exterior[(i + 1) % n] - exterior[i]);
                f64::from(delta.y).atan2(f64::from(delta.x))
            })
            .collect()
    }

    // ── rendering seam ────────────────────────────────────────────────────

    /// Recomputes the vertex buffer if the shape changed (or the window was
    /// resized) since the last sync, and uploads it to the model.
    pub fn sync_model(&mut self, viewport: Viewport) {
        if self.closed {
            return;
        }
        if !self.dirty && self.synced_viewport == Some(viewport) {
            return;
        }

        let local = self.kind.local_vertices(viewport);
        self.vertices.clear();
        for v in self.transform.orient(&local, viewport) {
            self.vertices.push(v.x);
            self.vertices.push(v.y);
        }

        if let Some(model) = self.model.as_mut() {
            model.upload_vertices(&self.vertices);
        }

        self.dirty = false;
        self.synced_viewport = Some(viewport);
    }

    /// Syncs the model and asks it to draw with the current model matrix.
    pub fn draw(&mut self, viewport: Viewport) {
        if self.closed {
            log::warn!("draw called on a closed shape");
            return;
        }
        self.sync_model(viewport);

        let matrix = self.transform.model_matrix();
        if let Some(model) = self.model.as_mut() {
            model.render(&matrix);
        }
    }

    /// Releases the renderable model. Further calls do nothing.
    pub fn close(&mut self) {
        if let Some(mut model) = self.model.take() {
            model.release();
            log::debug!("shape closed: {:?}", self.kind);
        }
        self.closed = true;
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Drop for Shape {
    fn drop(&mut self) {
        if self.model.is_some() {
            log::warn!("shape dropped without close(); releasing its model");
            self.close();
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("kind", &self.kind)
            .field("transform", &self.transform)
            .field("dirty", &self.dirty)
            .field("has_model", &self.model.is_some())
            .field("closed", &self.closed)
            .finish()
    }
}
