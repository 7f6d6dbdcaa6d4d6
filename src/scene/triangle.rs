use glam::Vec3;

/// One facet of an STL mesh.
/// The normal is taken verbatim from the file and is not guaranteed to be unit length
/// or to agree with the vertex winding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalaTriangle {
  pub normal: Vec3,
  pub vertices: [Vec3; 3],
}

/// The implementation of the triangle.
impl HalaTriangle {

  /// Create a new triangle.
  /// param normal: The facet normal.
  /// param vertices: The three vertices in file order.
  /// return: The triangle.
  pub fn new(normal: Vec3, vertices: [Vec3; 3]) -> Self {
    Self { normal, vertices }
  }

  /// Create a triangle from the 12 floats of a binary record.
  /// param floats: normal.xyz followed by v0.xyz, v1.xyz, v2.xyz.
  /// return: The triangle.
  pub fn from_floats(floats: &[f32; 12]) -> Self {
    Self {
      normal: Vec3::new(floats[0], floats[1], floats[2]),
      vertices: [
        Vec3::new(floats[3], floats[4], floats[5]),
        Vec3::new(floats[6], floats[7], floats[8]),
        Vec3::new(floats[9], floats[10], floats[11]),
      ],
    }
  }

  /// The arithmetic mean of the three vertices.
  pub fn centroid(&self) -> Vec3 {
    (self.vertices[0] + self.vertices[1] + self.vertices[2]) / 3.0
  }

  /// The midpoints of the edges (v0, v1), (v1, v2) and (v2, v0).
  pub fn edge_midpoints(&self) -> [Vec3; 3] {
    [
      (self.vertices[0] + self.vertices[1]) * 0.5,
      (self.vertices[1] + self.vertices[2]) * 0.5,
      (self.vertices[2] + self.vertices[0]) * 0.5,
    ]
  }

  /// Get the normal implied by the vertex winding.
  /// Both edges are normalized before the cross product, so the result is only unit length
  /// for right-angled facets. Degenerate edges yield a zero vector.
  /// return: The cross product of the normalized edges (v1 - v0) and (v2 - v1).
  pub fn winding_normal(&self) -> Vec3 {
    let edge0 = (self.vertices[1] - self.vertices[0]).normalize_or_zero();
    let edge1 = (self.vertices[2] - self.vertices[1]).normalize_or_zero();
    edge0.cross(edge1)
  }

  /// The vertex with the largest distance from the origin, and its squared distance.
  /// Ties keep the earliest vertex.
  pub fn farthest_vertex(&self) -> (Vec3, f32) {
    let mut farthest = self.vertices[0];
    let mut farthest_sq = farthest.length_squared();
    for vertex in &self.vertices[1..] {
      let dist_sq = vertex.length_squared();
      if dist_sq > farthest_sq {
        farthest = *vertex;
        farthest_sq = dist_sq;
      }
    }
    (farthest, farthest_sq)
  }

}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_relative_eq;

  fn right_triangle() -> HalaTriangle {
    HalaTriangle::new(
      Vec3::Z,
      [Vec3::ZERO, Vec3::X, Vec3::Y],
    )
  }

  #[test]
  fn from_floats_keeps_file_order() {
    let floats = [0.0, 0.0, 1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    let tri = HalaTriangle::from_floats(&floats);
    assert_eq!(tri.normal, Vec3::Z);
    assert_eq!(tri.vertices[0], Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(tri.vertices[2], Vec3::new(7.0, 8.0, 9.0));
  }

  #[test]
  fn centroid_is_vertex_mean() {
    let c = right_triangle().centroid();
    assert_relative_eq!(c.x, 1.0 / 3.0);
    assert_relative_eq!(c.y, 1.0 / 3.0);
    assert_relative_eq!(c.z, 0.0);
  }

  #[test]
  fn edge_midpoints_follow_winding() {
    let mids = right_triangle().edge_midpoints();
    assert_eq!(mids[0], Vec3::new(0.5, 0.0, 0.0));
    assert_eq!(mids[1], Vec3::new(0.5, 0.5, 0.0));
    assert_eq!(mids[2], Vec3::new(0.0, 0.5, 0.0));
  }

  #[test]
  fn winding_normal_ignores_stored_normal() {
    let mut tri = right_triangle();
    tri.normal = Vec3::new(5.0, 5.0, 5.0);
    let n = tri.winding_normal();
    // (1,0,0) x normalize(-1,1,0)
    assert_relative_eq!(n.x, 0.0);
    assert_relative_eq!(n.y, 0.0);
    assert_relative_eq!(n.z, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
  }

  #[test]
  fn degenerate_facet_has_zero_winding_normal() {
    let tri = HalaTriangle::new(Vec3::Z, [Vec3::ONE, Vec3::ONE, Vec3::ONE]);
    assert_eq!(tri.winding_normal(), Vec3::ZERO);
  }

  #[test]
  fn farthest_vertex_picks_largest_norm() {
    let tri = HalaTriangle::new(
      Vec3::Z,
      [Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0), Vec3::ZERO],
    );
    let (v, dist_sq) = tri.farthest_vertex();
    assert_eq!(v, Vec3::new(3.0, 4.0, 0.0));
    assert_relative_eq!(dist_sq, 25.0);
  }
}
