use std::path::Path;

use crate::config::HalaStlConfig;
use crate::error::HalaStlError;
use crate::scene::cpu::{
  HalaStlMesh,
  HalaViewCamera,
};
use crate::scene::gpu::{
  HalaRenderBuffers,
  HalaNormalOverlay,
};
use crate::scene::loader::{
  HalaStlLoader,
  HalaRenderBufferBuilder,
};

/// Everything derived from one successfully loaded file.
struct HalaLoadedModel {
  mesh: HalaStlMesh,
  buffers: HalaRenderBuffers,
  normal_overlay: HalaNormalOverlay,
}

/// The STL viewer state behind the window.
/// Owns the current mesh and its buffers; a reload either replaces all of them or none.
pub struct HalaStlViewer {
  pub config: HalaStlConfig,
  camera: HalaViewCamera,
  model: Option<HalaLoadedModel>,
}

/// The Drop implementation of the viewer.
impl Drop for HalaStlViewer {
  fn drop(&mut self) {
    log::debug!("A HalaStlViewer dropped.");
  }
}

/// The implementation of the viewer.
impl HalaStlViewer {

  /// Create a new viewer with nothing loaded.
  /// param config: The viewer configuration.
  /// return: The viewer.
  pub fn new(config: HalaStlConfig) -> Self {
    let camera = HalaViewCamera::new(&config);
    log::debug!("A HalaStlViewer created.");
    Self {
      config,
      camera,
      model: None,
    }
  }

  /// Open an STL file and make it the displayed model.
  /// On failure the previously displayed model is kept and the error message is meant for the user.
  /// param path: The path of the STL file.
  /// return: The result.
  pub fn open_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), HalaStlError> {
    let path = path.as_ref();
    let mesh = HalaStlLoader::load(path)
      .inspect_err(|err| log::error!("Open STL file \"{}\" failed: {}", path.to_string_lossy(), err))?;

    let limit = self.config.triangle_limit();
    let buffers = HalaRenderBufferBuilder::build(&mesh, limit);
    let normal_overlay = HalaRenderBufferBuilder::build_normal_overlay(&mesh, limit);

    // The old model is released only once the new one is complete.
    self.model = Some(HalaLoadedModel {
      mesh,
      buffers,
      normal_overlay,
    });
    Ok(())
  }

  /// Drop the displayed model, if any.
  pub fn close(&mut self) {
    self.model = None;
  }

  pub fn has_model(&self) -> bool {
    self.model.is_some()
  }

  pub fn mesh(&self) -> Option<&HalaStlMesh> {
    self.model.as_ref().map(|model| &model.mesh)
  }

  pub fn buffers(&self) -> Option<&HalaRenderBuffers> {
    self.model.as_ref().map(|model| &model.buffers)
  }

  /// Get the face-normal arrows of the displayed model.
  /// return: The overlay, or None if nothing is loaded or the arrows are switched off.
  pub fn normal_overlay(&self) -> Option<&HalaNormalOverlay> {
    if !self.config.show_normal_arrows {
      return None;
    }
    self.model.as_ref().map(|model| &model.normal_overlay)
  }

  /// Get the bounding radius of the displayed model.
  /// return: The radius, or None if nothing is loaded.
  pub fn bounding_radius(&self) -> Option<f32> {
    self.mesh().map(|mesh| mesh.bounding_radius())
  }

  pub fn camera(&self) -> &HalaViewCamera {
    &self.camera
  }

  pub fn camera_mut(&mut self) -> &mut HalaViewCamera {
    &mut self.camera
  }

  /// Reset the camera to its initial pose.
  pub fn reset_view(&mut self) {
    self.camera.reset();
  }

}
