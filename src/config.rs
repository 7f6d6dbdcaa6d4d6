use std::path::Path;

use serde::{
  Deserialize, Serialize
};

use crate::error::{
  HalaStlError,
  HalaStlErrorKind,
};

fn default_zoom_speed() -> f32 {
  0.125 * 0.5 * 0.5
}

fn default_min_translate() -> f32 {
  11.0
}

/// The STL viewer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalaStlConfig {
  // None builds every triangle.
  #[serde(default)]
  pub max_triangles: Option<usize>,
  #[serde(default)]
  pub show_normal_arrows: bool,
  #[serde(default = "default_zoom_speed")]
  pub zoom_speed: f32,
  #[serde(default = "default_min_translate")]
  pub min_translate: f32,
}

impl Default for HalaStlConfig {
  fn default() -> Self {
    HalaStlConfig {
      max_triangles: None,
      show_normal_arrows: false,
      zoom_speed: default_zoom_speed(),
      min_translate: default_min_translate(),
    }
  }
}

/// The implementation of the STL viewer configuration.
impl HalaStlConfig {
  /// Load the configuration from a JSON file.
  /// param path: The path of the JSON file.
  /// return: The configuration.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, HalaStlError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
      .map_err(|err| HalaStlError::new(HalaStlErrorKind::Config, &format!("Read config file \"{:?}\" failed.", path), Some(Box::new(err))))?;
    Self::from_json(&json)
  }

  /// Parse the configuration from a JSON string.
  /// param json: The JSON string.
  /// return: The configuration.
  pub fn from_json(json: &str) -> Result<Self, HalaStlError> {
    serde_json::from_str::<HalaStlConfig>(json)
      .map_err(|err| HalaStlError::new(HalaStlErrorKind::Config, "Parse config failed.", Some(Box::new(err))))
  }

  /// Get the triangle cap for the render buffers.
  /// return: The cap, unbounded if none is configured.
  pub fn triangle_limit(&self) -> usize {
    self.max_triangles.unwrap_or(usize::MAX)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_object_uses_defaults() {
    let config = HalaStlConfig::from_json("{}").unwrap();
    assert_eq!(config, HalaStlConfig::default());
    assert_eq!(config.triangle_limit(), usize::MAX);
    assert_eq!(config.zoom_speed, 0.03125);
  }

  #[test]
  fn fields_override_defaults() {
    let config = HalaStlConfig::from_json(r#"{"max_triangles": 12, "show_normal_arrows": true}"#).unwrap();
    assert_eq!(config.triangle_limit(), 12);
    assert!(config.show_normal_arrows);
    assert_eq!(config.min_translate, 11.0);
  }

  #[test]
  fn malformed_json_is_a_config_error() {
    let err = HalaStlConfig::from_json("{\"max_triangles\": -1}").unwrap_err();
    assert_eq!(err.kind(), HalaStlErrorKind::Config);
  }
}
