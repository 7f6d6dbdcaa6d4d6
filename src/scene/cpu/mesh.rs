use crate::scene::{
  HalaTriangle,
  HalaExtremePoint,
};

/// Size of the opaque binary STL header.
pub const STL_HEADER_SIZE: usize = 80;

/// The sub-format an STL mesh was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalaStlFormat {
  Binary,
  Text,
}

/// A triangle mesh decoded from an STL file.
/// Triangles are kept in file order.
#[derive(Debug)]
pub struct HalaStlMesh {
  pub format: HalaStlFormat,
  pub header: [u8; STL_HEADER_SIZE],
  pub triangles: Vec<HalaTriangle>,
  pub extreme_point: HalaExtremePoint,
}

/// The Drop implementation of the mesh.
impl Drop for HalaStlMesh {
  fn drop(&mut self) {
    log::debug!("A HalaStlMesh with {} triangles dropped.", self.triangles.len());
  }
}

/// The implementation of the mesh.
impl HalaStlMesh {

  /// Create an empty mesh.
  /// param format: The sub-format being decoded.
  /// param header: The binary header, all zero for text files.
  /// param capacity: The number of triangles to reserve room for.
  /// return: The mesh.
  pub(crate) fn with_capacity(format: HalaStlFormat, header: [u8; STL_HEADER_SIZE], capacity: usize) -> Self {
    Self {
      format,
      header,
      triangles: Vec::with_capacity(capacity),
      extreme_point: HalaExtremePoint::default(),
    }
  }

  /// Append a triangle and update the extreme point.
  /// param triangle: The decoded triangle.
  pub(crate) fn push(&mut self, triangle: HalaTriangle) {
    self.triangles.push(triangle);
    self.extreme_point.encapsulate_triangle(&triangle);
  }

  /// Get the number of triangles.
  /// return: The number of triangles.
  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

  /// Get the radius of a sphere around the origin meant for camera placement.
  /// return: 1.1 times the distance of the most distant vertex.
  pub fn bounding_radius(&self) -> f32 {
    self.extreme_point.bounding_radius()
  }

  /// Check if the mesh has no triangles.
  /// return: True if the mesh is empty, false otherwise.
  pub fn is_empty(&self) -> bool {
    self.triangles.is_empty()
  }

  /// Get the header as text, with trailing NULs and spaces removed.
  /// return: The header text.
  pub fn header_text(&self) -> String {
    String::from_utf8_lossy(&self.header)
      .trim_end_matches(|c: char| c == '\0' || c.is_whitespace())
      .to_string()
  }

}

#[cfg(test)]
mod tests {
  use super::*;
  use glam::Vec3;
  use approx::assert_relative_eq;

  #[test]
  fn push_tracks_extreme_point() {
    let mut mesh = HalaStlMesh::with_capacity(HalaStlFormat::Binary, [0u8; STL_HEADER_SIZE], 2);
    assert!(mesh.is_empty());
    mesh.push(HalaTriangle::new(Vec3::Z, [Vec3::ZERO, Vec3::X, Vec3::Y]));
    mesh.push(HalaTriangle::new(Vec3::Z, [Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0), Vec3::ZERO]));
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.extreme_point.point, Vec3::new(3.0, 4.0, 0.0));
    assert_relative_eq!(mesh.bounding_radius(), 5.5, epsilon = 1e-5);
  }

  #[test]
  fn header_text_strips_padding() {
    let mut header = [0u8; STL_HEADER_SIZE];
    header[..9].copy_from_slice(b"exported ");
    header[9..13].copy_from_slice(b"part");
    let mesh = HalaStlMesh::with_capacity(HalaStlFormat::Binary, header, 0);
    assert_eq!(mesh.header_text(), "exported part");
  }
}
