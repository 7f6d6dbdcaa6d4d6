pub mod loader;
pub mod triangle;
pub mod bounds;
pub mod cpu;
pub mod gpu;

pub use triangle::HalaTriangle;
pub use bounds::HalaExtremePoint;
