/// Flat, non-indexed-sharing buffers ready to be uploaded to the renderer.
/// Every triangle owns three consecutive vertex slots, so `indices[k] == k`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HalaRenderBuffers {
  // x, y, z for each of the 3 vertices of each triangle.
  pub vertices: Vec<f32>,
  // The facet normal repeated for each of the 3 vertices.
  pub normals: Vec<f32>,
  pub indices: Vec<u32>,
}

/// The implementation of the render buffers.
impl HalaRenderBuffers {

  /// Create zero-filled buffers for the given number of triangles.
  /// param triangle_count: The number of triangles.
  /// return: The buffers.
  pub fn with_triangle_count(triangle_count: usize) -> Self {
    Self {
      vertices: vec![0.0; triangle_count * 9],
      normals: vec![0.0; triangle_count * 9],
      indices: vec![0; triangle_count * 3],
    }
  }

  /// Get the number of triangles in the buffers.
  /// return: The number of triangles.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Get the number of vertices in the buffers.
  /// return: The number of vertices.
  pub fn vertex_count(&self) -> usize {
    self.indices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

}
