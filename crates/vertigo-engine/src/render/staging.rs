use std::cell::RefCell;
use std::rc::Rc;

use bytemuck::{Pod, Zeroable};

use crate::shapes::Mat4;

use super::RenderModel;

/// Vertex record in the layout a GPU vertex buffer expects.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    pub pos: [f32; 2],
}

/// Counters shared between a [`StagingModel`] and whoever inspects it.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelStats {
    pub uploads: u32,
    pub draws: u32,
    pub releases: u32,
    /// Vertex count of the last upload.
    pub vertex_count: usize,
    pub last_matrix: Mat4,
}

impl Default for ModelStats {
    fn default() -> Self {
        Self {
            uploads: 0,
            draws: 0,
            releases: 0,
            vertex_count: 0,
            last_matrix: [[0.0; 4]; 4],
        }
    }
}

/// CPU staging buffer standing in for a GPU model.
///
/// Keeps the packed vertex records (what a queue write would copy) and
/// counts uploads, draws and releases. Stats are shared through an `Rc` so
/// they stay observable after the model is boxed into a shape.
#[derive(Debug, Default)]
pub struct StagingModel {
    vertices: Vec<ShapeVertex>,
    stats: Rc<RefCell<ModelStats>>,
    released: bool,
}

impl StagingModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the shared counters.
    pub fn stats(&self) -> Rc<RefCell<ModelStats>> {
        Rc::clone(&self.stats)
    }

    #[inline]
    pub fn vertices(&self) -> &[ShapeVertex] {
        &self.vertices
    }

    /// The staged vertex data as raw bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl RenderModel for StagingModel {
    fn upload_vertices(&mut self, vertices: &[f32]) {
        if self.released {
            log::warn!("upload to a released staging model ignored");
            return;
        }

        self.vertices.clear();
        self.vertices
            .extend(vertices.chunks_exact(2).map(|xy| ShapeVertex { pos: [xy[0], xy[1]] }));

        let mut stats = self.stats.borrow_mut();
        stats.uploads += 1;
        stats.vertex_count = self.vertices.len();
        log::trace!("staged {} vertices ({} bytes)", self.vertices.len(), self.bytes().len());
    }

    fn render(&mut self, model_matrix: &Mat4) {
        if self.released {
            return;
        }
        let mut stats = self.stats.borrow_mut();
        stats.draws += 1;
        stats.last_matrix = *model_matrix;
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.vertices = Vec::new();
        self.stats.borrow_mut().releases += 1;
    }
}
