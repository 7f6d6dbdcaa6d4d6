use glam::Vec3;

use super::HalaTriangle;

/// Safety margin applied to the extreme point distance.
pub const BOUNDING_RADIUS_MARGIN: f32 = 1.1;

/// The single most distant vertex seen so far.
/// This is not a bounding box: it only yields a useful radius for meshes roughly centered
/// on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalaExtremePoint {
  pub point: Vec3,
}

/// The default implementation of the extreme point.
impl Default for HalaExtremePoint {
  fn default() -> Self {
    Self { point: Vec3::ZERO }
  }
}

/// Implementation of HalaExtremePoint.
impl HalaExtremePoint {

  /// Create a new HalaExtremePoint instance.
  /// param point: The initial extreme point.
  /// return: The new HalaExtremePoint instance.
  pub fn new(point: Vec3) -> Self {
    Self { point }
  }

  /// Grows the extreme point to cover the given triangle.
  /// Only the triangle's farthest vertex competes with the current point, and only a strictly
  /// larger distance replaces it.
  /// param triangle: The triangle just appended to the mesh.
  pub fn encapsulate_triangle(&mut self, triangle: &HalaTriangle) {
    let (candidate, candidate_sq) = triangle.farthest_vertex();
    if candidate_sq > self.point.length_squared() {
      self.point = candidate;
    }
  }

  /// Get the distance of the extreme point from the origin.
  /// return: The L2 norm of the extreme point.
  pub fn distance(&self) -> f32 {
    self.point.length()
  }

  /// Get the bounding radius derived from the extreme point.
  /// return: 1.1 times the distance of the extreme point.
  pub fn bounding_radius(&self) -> f32 {
    BOUNDING_RADIUS_MARGIN * self.distance()
  }

}
