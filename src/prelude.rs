pub use crate::error::{
  HalaStlError,
  HalaStlErrorKind,
};
pub use crate::config::HalaStlConfig;
pub use crate::scene::{
  HalaTriangle,
  HalaExtremePoint,
};
pub use crate::scene::cpu::{
  HalaStlMesh,
  HalaStlFormat,
  HalaViewCamera,
};
pub use crate::scene::gpu::{
  HalaRenderBuffers,
  HalaNormalArrow,
  HalaNormalOverlay,
};
pub use crate::scene::loader::{
  HalaStlLoader,
  HalaRenderBufferBuilder,
};
pub use crate::viewer::HalaStlViewer;
