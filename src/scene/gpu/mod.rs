pub mod mesh;
pub mod overlay;

pub use mesh::HalaRenderBuffers;
pub use overlay::{
  HalaNormalArrow,
  HalaNormalOverlay,
};
