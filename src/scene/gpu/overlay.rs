use glam::Vec3;

/// One face-normal arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalaNormalArrow {
  pub start: Vec3,
  pub end: Vec3,
}

/// Per-facet overlay data: short line segments showing each facet's orientation, recomputed
/// from the vertex winding, and the midpoints of each facet's three edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HalaNormalOverlay {
  pub arrows: Vec<HalaNormalArrow>,
  // Midpoints of (v0, v1), (v1, v2) and (v2, v0).
  pub edge_midpoints: Vec<[Vec3; 3]>,
}

/// The implementation of the normal overlay.
impl HalaNormalOverlay {

  /// Flatten the arrows into a line list.
  /// return: start.xyz, end.xyz for each arrow.
  pub fn line_vertices(&self) -> Vec<f32> {
    let mut lines = Vec::with_capacity(self.arrows.len() * 6);
    for arrow in self.arrows.iter() {
      lines.extend_from_slice(&arrow.start.to_array());
      lines.extend_from_slice(&arrow.end.to_array());
    }
    lines
  }

  pub fn len(&self) -> usize {
    self.arrows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.arrows.is_empty()
  }

}
