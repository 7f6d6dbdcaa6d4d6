use crate::scene::cpu::HalaStlMesh;
use crate::scene::gpu::{
  HalaRenderBuffers,
  HalaNormalArrow,
  HalaNormalOverlay,
};

/// The most triangles whose sequential u32 indices all fit.
pub const MAX_INDEXED_TRIANGLES: usize = (u32::MAX as usize + 1) / 3;

/// Flattens a decoded mesh into renderer-ready buffers.
pub struct HalaRenderBufferBuilder;

/// The implementation of the render buffer builder.
impl HalaRenderBufferBuilder {

  /// Build the vertex, normal and index buffers of a mesh.
  /// Triangles past `max_triangles` are left out. Shared vertices are not merged, so flat
  /// facet normals stay correct.
  /// param mesh: The mesh.
  /// param max_triangles: The maximum number of triangles to include.
  /// return: The buffers.
  pub fn build(mesh: &HalaStlMesh, max_triangles: usize) -> HalaRenderBuffers {
    let count = Self::triangle_budget(mesh.triangle_count(), max_triangles);
    if count < mesh.triangle_count() {
      log::warn!(
        "The triangle count {} exceeds the maximum triangle count {}.\nOnly the first {} triangles will be built.",
        mesh.triangle_count(), max_triangles.min(MAX_INDEXED_TRIANGLES), count
      );
    }

    let mut buffers = HalaRenderBuffers::with_triangle_count(count);
    for (i, triangle) in mesh.triangles[..count].iter().enumerate() {
      let normal = triangle.normal.to_array();
      for (k, vertex) in triangle.vertices.iter().enumerate() {
        let slot = 3 * i + k;
        buffers.vertices[3 * slot..3 * slot + 3].copy_from_slice(&vertex.to_array());
        buffers.normals[3 * slot..3 * slot + 3].copy_from_slice(&normal);
        buffers.indices[slot] = slot as u32;
      }
    }

    log::debug!("Built render buffers for {} triangles, {} vertices.", count, buffers.vertex_count());
    buffers
  }

  /// Build the face-normal arrows of a mesh.
  /// Each arrow starts at the facet centroid and points along a third of the normal implied by
  /// the vertex winding; the normal stored in the file is ignored.
  /// param mesh: The mesh.
  /// param max_triangles: The maximum number of triangles to include.
  /// return: The overlay.
  pub fn build_normal_overlay(mesh: &HalaStlMesh, max_triangles: usize) -> HalaNormalOverlay {
    let count = Self::triangle_budget(mesh.triangle_count(), max_triangles);
    let arrows = mesh.triangles[..count].iter()
      .map(|triangle| {
        let start = triangle.centroid();
        HalaNormalArrow {
          start,
          end: start + triangle.winding_normal() / 3.0,
        }
      })
      .collect();
    let edge_midpoints = mesh.triangles[..count].iter()
      .map(|triangle| triangle.edge_midpoints())
      .collect();
    HalaNormalOverlay { arrows, edge_midpoints }
  }

  /// Get how many leading triangles are flattened.
  /// param triangle_count: The number of triangles in the mesh.
  /// param max_triangles: The requested cap.
  /// return: The smallest of the two and the u32 index limit.
  fn triangle_budget(triangle_count: usize, max_triangles: usize) -> usize {
    triangle_count.min(max_triangles).min(MAX_INDEXED_TRIANGLES)
  }

}
