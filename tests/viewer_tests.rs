//! Opening, reloading and failing to reload files in the viewer.

use std::io::Write;
use std::path::PathBuf;

use hala_stl::prelude::*;

fn write_file(dir: &tempfile::TempDir, name: &str, data: &[u8]) -> anyhow::Result<PathBuf> {
  let path = dir.path().join(name);
  let mut file = std::fs::File::create(&path)?;
  file.write_all(data)?;
  Ok(path)
}

fn binary_stl(count: u32) -> Vec<u8> {
  let mut data = vec![0u8; 80];
  data.extend_from_slice(&count.to_le_bytes());
  for i in 0..count {
    let x = i as f32;
    let floats = [0.0f32, 0.0, 1.0, x, 0.0, 0.0, x + 1.0, 0.0, 0.0, x, 1.0, 0.0];
    for value in floats {
      data.extend_from_slice(&value.to_le_bytes());
    }
    data.extend_from_slice(&[0u8, 0u8]);
  }
  data
}

#[test]
fn open_builds_buffers() -> anyhow::Result<()> {
  let dir = tempfile::tempdir()?;
  let path = write_file(&dir, "strip.stl", &binary_stl(3))?;

  let mut viewer = HalaStlViewer::new(HalaStlConfig::default());
  assert!(!viewer.has_model());
  viewer.open_file(&path)?;

  assert_eq!(viewer.mesh().map(|mesh| mesh.triangle_count()), Some(3));
  assert_eq!(viewer.buffers().map(|buffers| buffers.indices.len()), Some(9));
  assert!(viewer.bounding_radius().is_some());
  // Arrows are off by default.
  assert!(viewer.normal_overlay().is_none());
  Ok(())
}

#[test]
fn failed_reload_keeps_previous_model() -> anyhow::Result<()> {
  let dir = tempfile::tempdir()?;
  let good = write_file(&dir, "good.stl", &binary_stl(2))?;
  let mut truncated = binary_stl(2);
  truncated.truncate(100);
  let bad = write_file(&dir, "bad.stl", &truncated)?;

  let mut viewer = HalaStlViewer::new(HalaStlConfig::default());
  viewer.open_file(&good)?;

  let err = viewer.open_file(&bad).err().unwrap();
  assert_eq!(err.kind(), HalaStlErrorKind::Triangle(0));
  assert_eq!(viewer.mesh().map(|mesh| mesh.triangle_count()), Some(2));

  let err = viewer.open_file(dir.path().join("nope.stl")).err().unwrap();
  assert_eq!(err.kind(), HalaStlErrorKind::CannotOpen);
  assert_eq!(viewer.buffers().map(|buffers| buffers.triangle_count()), Some(2));
  Ok(())
}

#[test]
fn reload_replaces_model() -> anyhow::Result<()> {
  let dir = tempfile::tempdir()?;
  let first = write_file(&dir, "first.stl", &binary_stl(2))?;
  let second = write_file(&dir, "second.stl", &binary_stl(5))?;

  let mut viewer = HalaStlViewer::new(HalaStlConfig::default());
  viewer.open_file(&first)?;
  viewer.open_file(&second)?;
  assert_eq!(viewer.mesh().map(|mesh| mesh.triangle_count()), Some(5));
  assert_eq!(viewer.buffers().map(|buffers| buffers.vertices.len()), Some(45));

  viewer.close();
  assert!(!viewer.has_model());
  Ok(())
}

#[test]
fn config_caps_buffers_and_enables_arrows() -> anyhow::Result<()> {
  let dir = tempfile::tempdir()?;
  let config_path = write_file(&dir, "viewer.json", br#"{"max_triangles": 2, "show_normal_arrows": true}"#)?;
  let path = write_file(&dir, "strip.stl", &binary_stl(6))?;

  let mut viewer = HalaStlViewer::new(HalaStlConfig::from_file(&config_path)?);
  viewer.open_file(&path)?;

  assert_eq!(viewer.mesh().map(|mesh| mesh.triangle_count()), Some(6));
  assert_eq!(viewer.buffers().map(|buffers| buffers.triangle_count()), Some(2));
  assert_eq!(viewer.normal_overlay().map(|overlay| overlay.len()), Some(2));
  Ok(())
}

#[test]
fn reset_view_restores_camera() {
  let mut viewer = HalaStlViewer::new(HalaStlConfig::default());
  let initial = *viewer.camera();
  viewer.camera_mut().rotate(0.1, 0.2, true);
  viewer.camera_mut().zoom(200.0);
  assert_ne!(*viewer.camera(), initial);
  viewer.reset_view();
  assert_eq!(*viewer.camera(), initial);
}
