use glam::{
  Mat4,
  Vec3,
};

use crate::config::HalaStlConfig;

const DEFAULT_TRANSLATE: f32 = 25.0;
const DEFAULT_ROTATION_X: f32 = 27.2457;
const DEFAULT_ROTATION_Y: f32 = -46.44;
const DEFAULT_ROTATION_Z: f32 = 0.0;

// Degrees of rotation for a drag across the whole viewport.
const DEGREES_PER_VIEWPORT: f32 = 180.0;

// The camera always sits this far behind the zoom translation.
const EYE_OFFSET: f32 = 5.0;

/// The orbit camera of the STL viewer.
/// Rotations are in degrees, the translation is the zoom distance along -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalaViewCamera {
  pub rotation_x: f32,
  pub rotation_y: f32,
  pub rotation_z: f32,
  pub translate: f32,

  pub zoom_speed: f32,
  pub min_translate: f32,
}

/// The default implementation of the view camera.
impl Default for HalaViewCamera {
  fn default() -> Self {
    Self::new(&HalaStlConfig::default())
  }
}

/// The implementation of the view camera.
impl HalaViewCamera {

  /// Create a new camera in its reset pose.
  /// param config: The viewer configuration.
  /// return: The camera.
  pub fn new(config: &HalaStlConfig) -> Self {
    let mut camera = Self {
      rotation_x: 0.0,
      rotation_y: 0.0,
      rotation_z: 0.0,
      translate: 0.0,
      zoom_speed: config.zoom_speed,
      min_translate: config.min_translate,
    };
    camera.reset();
    camera
  }

  /// Restore the initial pose.
  pub fn reset(&mut self) {
    self.translate = DEFAULT_TRANSLATE;
    self.rotation_x = DEFAULT_ROTATION_X;
    self.rotation_y = DEFAULT_ROTATION_Y;
    self.rotation_z = DEFAULT_ROTATION_Z;
  }

  /// Rotate by a drag.
  /// param dx: The horizontal drag as a fraction of the viewport width.
  /// param dy: The vertical drag as a fraction of the viewport height.
  /// param roll: Apply the horizontal drag around Z instead of Y.
  pub fn rotate(&mut self, dx: f32, dy: f32, roll: bool) {
    self.rotation_x += DEGREES_PER_VIEWPORT * dy;
    if roll {
      self.rotation_z += DEGREES_PER_VIEWPORT * dx;
    } else {
      self.rotation_y += DEGREES_PER_VIEWPORT * dx;
    }
  }

  /// Zoom by a wheel delta. Positive deltas move the camera closer.
  /// param delta: The wheel delta.
  pub fn zoom(&mut self, delta: f32) {
    self.translate -= delta * self.zoom_speed;
    if self.translate < self.min_translate {
      self.translate = self.min_translate;
    }
  }

  /// Get the view matrix.
  /// return: T(0, 0, -(translate + 5)) * Rx * Ry * Rz.
  pub fn view_matrix(&self) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -(self.translate + EYE_OFFSET)))
      * Mat4::from_rotation_x(self.rotation_x.to_radians())
      * Mat4::from_rotation_y(self.rotation_y.to_radians())
      * Mat4::from_rotation_z(self.rotation_z.to_radians())
  }

}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_relative_eq;

  #[test]
  fn reset_restores_initial_pose() {
    let mut camera = HalaViewCamera::default();
    camera.rotate(0.5, 0.25, false);
    camera.zoom(40.0);
    camera.reset();
    assert_eq!(camera.translate, 25.0);
    assert_eq!(camera.rotation_x, 27.2457);
    assert_eq!(camera.rotation_y, -46.44);
    assert_eq!(camera.rotation_z, 0.0);
  }

  #[test]
  fn rotate_maps_drag_to_degrees() {
    let mut camera = HalaViewCamera::default();
    camera.rotate(0.5, 0.25, false);
    assert_relative_eq!(camera.rotation_x, 27.2457 + 45.0, epsilon = 1e-4);
    assert_relative_eq!(camera.rotation_y, -46.44 + 90.0, epsilon = 1e-4);

    camera.rotate(0.5, 0.0, true);
    assert_relative_eq!(camera.rotation_z, 90.0);
  }

  #[test]
  fn zoom_is_clamped() {
    let mut camera = HalaViewCamera::default();
    camera.zoom(-120.0);
    assert_relative_eq!(camera.translate, 28.75);
    camera.zoom(100_000.0);
    assert_eq!(camera.translate, 11.0);
  }

  #[test]
  fn view_matrix_pushes_scene_back() {
    let mut camera = HalaViewCamera::default();
    camera.rotation_x = 0.0;
    camera.rotation_y = 0.0;
    let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
    assert_relative_eq!(origin.z, -30.0);
  }
}
