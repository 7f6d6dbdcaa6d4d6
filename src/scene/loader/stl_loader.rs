use std::path::Path;
use std::fs::File;
use std::io::{
  BufRead,
  BufReader,
  Cursor,
  ErrorKind,
  Read,
};

use glam::Vec3;

use crate::error::{
  HalaStlError,
  HalaStlErrorKind,
};
use crate::scene::HalaTriangle;
use super::super::cpu::mesh::{
  HalaStlMesh,
  HalaStlFormat,
  STL_HEADER_SIZE,
};

/// Text STL files start with exactly these bytes.
/// Binary files whose header happens to start the same way are misread as text.
const TEXT_MAGIC: &[u8; 6] = b"solid ";

// normal + 3 vertices, 3 floats each.
const RECORD_FLOATS_SIZE: usize = 48;
const RECORD_ATTRIBUTE_SIZE: usize = 2;
const RECORD_SIZE: u64 = (RECORD_FLOATS_SIZE + RECORD_ATTRIBUTE_SIZE) as u64;

// Upper bound on triangles reserved up front from an untrusted count.
const MAX_RESERVED_TRIANGLES: usize = 1 << 20;

/// Numbers in text files are separated by whitespace or commas.
fn is_token_separator(c: char) -> bool {
  c.is_whitespace() || c == ','
}

/// The STL loader.
pub struct HalaStlLoader;

/// The implementation of the STL loader.
impl HalaStlLoader {
  /// Load the STL file from the given path.
  /// param path The path of the STL file.
  /// return The loaded mesh.
  pub fn load<P: AsRef<Path>>(path: P) -> Result<HalaStlMesh, HalaStlError> {
    let path = path.as_ref();
    let file = File::open(path)
      .map_err(|err| HalaStlError::new(HalaStlErrorKind::CannotOpen, &format!("Cannot open file \"{}\".", path.to_string_lossy()), Some(Box::new(err))))?;
    let file_size = file.metadata().ok().map(|metadata| metadata.len());

    log::debug!("Loading STL file \"{}\".", path.to_string_lossy());
    let mesh = Self::decode(BufReader::new(file))?;

    if mesh.format == HalaStlFormat::Binary {
      log::debug!("Binary STL header \"{}\".", mesh.header_text());
    }
    if let (HalaStlFormat::Binary, Some(file_size)) = (mesh.format, file_size) {
      let expected_size = (STL_HEADER_SIZE as u64 + 4) + RECORD_SIZE * mesh.triangle_count() as u64;
      if file_size != expected_size {
        log::warn!(
          "STL file \"{}\" is {} bytes but {} triangles need {} bytes.",
          path.to_string_lossy(), file_size, mesh.triangle_count(), expected_size
        );
      }
    }

    log::info!(
      "Loaded STL file \"{}\": {} triangles, bounding radius {}.",
      path.to_string_lossy(), mesh.triangle_count(), mesh.bounding_radius()
    );
    Ok(mesh)
  }

  /// Decode an STL mesh from a byte source of unknown sub-format.
  /// param reader The byte source, read to completion on success.
  /// return The decoded mesh.
  pub fn decode<R: BufRead>(mut reader: R) -> Result<HalaStlMesh, HalaStlError> {
    let mut magic = Vec::with_capacity(TEXT_MAGIC.len());
    (&mut reader).take(TEXT_MAGIC.len() as u64).read_to_end(&mut magic)?;
    let is_text = magic.as_slice() == TEXT_MAGIC;

    // Put the sniffed bytes back in front of the rest.
    let reader = Cursor::new(magic).chain(reader);
    if is_text {
      log::debug!("Decoding text STL.");
      Self::decode_text(reader)
    } else {
      log::debug!("Decoding binary STL.");
      Self::decode_binary(reader)
    }
  }

  /// Decode a binary STL mesh.
  /// Bytes after the declared number of records are not checked.
  /// param reader The byte source positioned at the header.
  /// return The decoded mesh.
  fn decode_binary<R: Read>(mut reader: R) -> Result<HalaStlMesh, HalaStlError> {
    let mut header = [0u8; STL_HEADER_SIZE];
    reader.read_exact(&mut header)
      .map_err(|err| Self::short_read(err, HalaStlErrorKind::Header, "Invalid STL file - could not read the 80 byte header."))?;

    let mut count_bytes = [0u8; 4];
    reader.read_exact(&mut count_bytes)
      .map_err(|err| Self::short_read(err, HalaStlErrorKind::Count, "Invalid STL file - could not read the triangle count."))?;
    let triangle_count = u32::from_le_bytes(count_bytes) as usize;
    log::debug!("Binary STL declares {} triangles.", triangle_count);

    let mut mesh = HalaStlMesh::with_capacity(
      HalaStlFormat::Binary,
      header,
      triangle_count.min(MAX_RESERVED_TRIANGLES));
    let mut record = [0u8; RECORD_FLOATS_SIZE];
    let mut attribute = [0u8; RECORD_ATTRIBUTE_SIZE];
    for index in 0..triangle_count {
      reader.read_exact(&mut record)
        .map_err(|err| Self::short_read(err, HalaStlErrorKind::Triangle(index), &format!("Invalid STL file - could not read triangle {}.", index)))?;

      let mut floats = [0f32; 12];
      for (value, bytes) in floats.iter_mut().zip(record.chunks_exact(4)) {
        *value = f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
      }
      mesh.push(HalaTriangle::from_floats(&floats));

      reader.read_exact(&mut attribute)
        .map_err(|err| Self::short_read(err, HalaStlErrorKind::Triangle(index), &format!("Invalid STL file - could not read the attributes of triangle {}.", index)))?;
    }

    Ok(mesh)
  }

  /// Decode a text STL mesh.
  /// The solid name, "outer loop", "endloop" and "endfacet" lines are skipped unchecked.
  /// param reader The byte source positioned at the "solid" line.
  /// return The decoded mesh.
  fn decode_text<R: BufRead>(reader: R) -> Result<HalaStlMesh, HalaStlError> {
    let mut lines = HalaLineReader::new(reader);
    let mut mesh = HalaStlMesh::with_capacity(HalaStlFormat::Text, [0u8; STL_HEADER_SIZE], 0);

    lines.skip(1)?;
    let mut line = lines.next_line()?;
    while !line.trim_start().starts_with("endsolid") {
      let normal = Self::parse_prefixed(&line, "facet normal", is_token_separator, lines.line_number(), HalaStlErrorKind::FacetNormalLine)?;
      lines.skip(1)?;

      let mut vertices = [Vec3::ZERO; 3];
      for vertex in vertices.iter_mut() {
        let line = lines.next_line()?;
        *vertex = Self::parse_prefixed(&line, "vertex", char::is_whitespace, lines.line_number(), HalaStlErrorKind::VertexLine)?;
      }
      lines.skip(2)?;

      mesh.push(HalaTriangle::new(normal, vertices));
      line = lines.next_line()?;
    }

    Ok(mesh)
  }

  /// Parse a "<prefix> x y z" line.
  /// Tokens are separated by whitespace or commas; anything after the third is ignored.
  /// param line The line.
  /// param prefix The required keyword.
  /// param prefix_end The characters allowed right after the keyword.
  /// param line_number The 1-based number of the line.
  /// param kind The error kind to report a prefix mismatch with.
  /// return The three values.
  fn parse_prefixed(
    line: &str,
    prefix: &str,
    prefix_end: fn(char) -> bool,
    line_number: usize,
    kind: fn(usize) -> HalaStlErrorKind,
  ) -> Result<Vec3, HalaStlError> {
    let rest = line.trim_start().strip_prefix(prefix)
      .filter(|rest| rest.starts_with(prefix_end))
      .ok_or_else(|| HalaStlError::new(
        kind(line_number),
        &format!("Invalid STL file - expected \"{}\" at line {}.", prefix, line_number),
        None))?;

    let mut tokens = rest.split(is_token_separator)
      .filter(|token| !token.is_empty());
    let mut values = [0f32; 3];
    for value in values.iter_mut() {
      let token = tokens.next()
        .ok_or_else(|| HalaStlError::new(
          HalaStlErrorKind::Number(line_number),
          &format!("Invalid STL file - missing number at line {}.", line_number),
          None))?;
      *value = token.parse::<f32>()
        .map_err(|err| HalaStlError::new(
          HalaStlErrorKind::Number(line_number),
          &format!("Invalid STL file - bad number \"{}\" at line {}.", token, line_number),
          Some(Box::new(err))))?;
    }
    Ok(Vec3::from_array(values))
  }

  /// Map a failed fixed-size read to a format error.
  /// End of input becomes `kind`, anything else stays an I/O error.
  /// param err The read error.
  /// param kind The error kind for a short read.
  /// param msg The message for a short read.
  /// return The error.
  fn short_read(err: std::io::Error, kind: HalaStlErrorKind, msg: &str) -> HalaStlError {
    if err.kind() == ErrorKind::UnexpectedEof {
      HalaStlError::new(kind, msg, Some(Box::new(err)))
    } else {
      HalaStlError::from(err)
    }
  }
}

/// Line reader that counts lines and treats end of input as an error.
struct HalaLineReader<R: BufRead> {
  reader: R,
  line_number: usize,
  buffer: Vec<u8>,
}

impl<R: BufRead> HalaLineReader<R> {
  fn new(reader: R) -> Self {
    Self {
      reader,
      line_number: 0,
      buffer: Vec::new(),
    }
  }

  /// The 1-based number of the last line read.
  fn line_number(&self) -> usize {
    self.line_number
  }

  /// Read the next line without its terminator.
  /// Invalid UTF-8 is replaced rather than rejected.
  fn next_line(&mut self) -> Result<String, HalaStlError> {
    self.buffer.clear();
    let read = self.reader.read_until(b'\n', &mut self.buffer)?;
    if read == 0 {
      return Err(HalaStlError::new(
        HalaStlErrorKind::UnexpectedEof(self.line_number),
        &format!("Invalid STL file - unexpected end of file after line {}, \"endsolid\" is missing.", self.line_number),
        None));
    }
    self.line_number += 1;

    let line = String::from_utf8_lossy(&self.buffer);
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
  }

  fn skip(&mut self, count: usize) -> Result<(), HalaStlError> {
    for _ in 0..count {
      self.next_line()?;
    }
    Ok(())
  }
}
