pub mod mesh;
pub mod camera;

pub use mesh::{
  HalaStlMesh,
  HalaStlFormat,
  STL_HEADER_SIZE,
};
pub use camera::HalaViewCamera;
