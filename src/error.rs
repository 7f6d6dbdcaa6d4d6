use thiserror::Error;

/// What went wrong while loading an STL file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalaStlErrorKind {
  /// The file could not be opened.
  CannotOpen,
  /// Fewer than 80 header bytes.
  Header,
  /// The triangle count could not be read.
  Count,
  /// Short read inside the triangle record with this 0-based index.
  Triangle(usize),
  /// The 1-based text line does not start with "facet normal".
  FacetNormalLine(usize),
  /// The 1-based text line does not start with "vertex".
  VertexLine(usize),
  /// A numeric token on the 1-based text line is missing or malformed.
  Number(usize),
  /// The text input ended at this line before "endsolid".
  UnexpectedEof(usize),
  /// Any other read failure.
  Io,
  /// The configuration could not be read or parsed.
  Config,
}

/// The error type of the hala-stl crate.
#[derive(Error, Debug)]
pub struct HalaStlError {
  msg: String,
  kind: HalaStlErrorKind,
  #[source]
  source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// The implementation of the error type of the hala-stl crate.
impl HalaStlError {
  /// Create a new error.
  /// param kind: The kind of the error.
  /// param msg: The message of the error.
  /// param source: The source of the error.
  /// return: The error.
  pub fn new(kind: HalaStlErrorKind, msg: &str, source: Option<Box<dyn std::error::Error + Send + Sync>>) -> Self {
    Self {
      msg: msg.to_string(),
      kind,
      source,
    }
  }

  pub fn message(&self) -> &str {
    &self.msg
  }

  pub fn kind(&self) -> HalaStlErrorKind {
    self.kind
  }

  /// Get the triangle index a binary decode failed at, if any.
  /// return: The 0-based triangle index.
  pub fn triangle_index(&self) -> Option<usize> {
    match self.kind {
      HalaStlErrorKind::Triangle(index) => Some(index),
      _ => None,
    }
  }

  /// Get the text line a text decode failed at, if any.
  /// return: The 1-based line number.
  pub fn line(&self) -> Option<usize> {
    match self.kind {
      HalaStlErrorKind::FacetNormalLine(line)
      | HalaStlErrorKind::VertexLine(line)
      | HalaStlErrorKind::Number(line)
      | HalaStlErrorKind::UnexpectedEof(line) => Some(line),
      _ => None,
    }
  }
}

impl std::convert::From<std::io::Error> for HalaStlError {
  fn from(err: std::io::Error) -> Self {
    Self {
      msg: format!("Read STL data failed: {}.", err),
      kind: HalaStlErrorKind::Io,
      source: Some(Box::new(err)),
    }
  }
}

/// The implementation Display trait for the error type of the hala-stl crate.
impl std::fmt::Display for HalaStlError {
  /// Format the error.
  /// param f: The formatter.
  /// return: The result.
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.msg)
  }
}
