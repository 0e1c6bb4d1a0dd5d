use crate::shapes::Mat4;

/// Renderer-side owner of a shape's vertex buffer.
///
/// Vertices arrive as flattened `x, y` pairs in NDC, already rotated but not
/// translated. The translation comes in as the model matrix at draw time.
pub trait RenderModel {
    /// Replaces the model's vertex data.
    fn upload_vertices(&mut self, vertices: &[f32]);

    /// Issues a draw with the given column-major model matrix.
    fn render(&mut self, model_matrix: &Mat4);

    /// Frees the underlying resources. Called at most once per model.
    fn release(&mut self);
}
