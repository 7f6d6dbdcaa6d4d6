pub mod stl_loader;
pub mod buffer_builder;

pub use stl_loader::HalaStlLoader;
pub use buffer_builder::HalaRenderBufferBuilder;
