//! This module defines the `NrrdHeader` struct and the parsing of the
//! textual header block of a NRRD file.
//!
//! A NRRD file starts with a text block of `key: value` lines, terminated
//! by a blank line (two consecutive newline characters). The binary voxel
//! data follows immediately after. Parsing therefore yields both the
//! structured header and the byte offset at which voxel data begins, which
//! is all that is needed to address individual voxels with byte-range
//! requests.

use crate::error::{NrrdError, Result};
use crate::typedef::NrrdType;
use crate::util::Endianness;
use std::collections::HashMap;

/// Default number of bytes fetched from the start of the file when looking
/// for the header. Real-world NRRD headers fit comfortably in this window;
/// it is a tunable default, not a guarantee of the format.
pub const HEADER_PREFIX_BYTE_SIZE: u64 = 600;

/// The parsed representation of a NRRD text header.
///
/// Only the fields needed for voxel addressing are coerced into typed
/// values. Any other field is kept verbatim in `extra`. The grid fields
/// are optional at this level; their presence is validated when a voxel
/// lookup is attempted.
#[derive(Debug, Clone, PartialEq)]
pub struct NrrdHeader {
    /// The magic/format identifier line (e.g. `NRRD0004`).
    pub magic: String,
    /// Number of axes of the array.
    pub dimension: Option<u32>,
    /// Axis extents, fastest-varying axis first.
    pub sizes: Option<Vec<u32>>,
    /// World-space displacement per unit step along each voxel axis.
    pub space_directions: Option<Vec<[f64; 3]>>,
    /// World-space position of voxel (0, 0, 0).
    pub space_origin: Option<[f64; 3]>,
    /// Per-axis kind tags (e.g. `domain`).
    pub kinds: Option<Vec<String>>,
    /// Dimension of the world space.
    pub space_dimension: Option<u32>,
    /// Raw scalar type name; resolve it with [`data_type`](Self::data_type).
    pub type_name: Option<String>,
    /// Data encoding; only `raw` can be streamed.
    pub encoding: Option<String>,
    /// Byte order of the voxel data. Little endian when the header does
    /// not say otherwise.
    pub endianness: Endianness,
    /// Unrecognized fields, with raw trimmed values. Repeated keys keep
    /// the last occurrence.
    pub extra: HashMap<String, String>,
}

impl NrrdHeader {
    /// Parse a NRRD header out of the first bytes of a file.
    ///
    /// `prefix` is expected to be a generous slice from the start of the
    /// file (see [`HEADER_PREFIX_BYTE_SIZE`]); it may well extend past the
    /// header into binary data. Returns the header together with the byte
    /// offset at which the binary voxel data begins.
    ///
    /// # Example
    ///
    /// ```
    /// # use nrrd_stream::NrrdHeader;
    /// let text = b"NRRD0004\nsizes: 4 5 6\nencoding: raw\n\n";
    /// let (header, data_offset) = NrrdHeader::from_prefix(text)?;
    /// assert_eq!(header.sizes, Some(vec![4, 5, 6]));
    /// assert_eq!(data_offset, text.len() as u64);
    /// # Ok::<(), nrrd_stream::NrrdError>(())
    /// ```
    pub fn from_prefix(prefix: &[u8]) -> Result<(NrrdHeader, u64)> {
        let data_offset = find_data_offset(prefix).ok_or(NrrdError::HeaderTruncated)?;
        let text = String::from_utf8_lossy(&prefix[..data_offset as usize]);
        let header = parse_header_text(text.trim())?;
        Ok((header, data_offset))
    }

    /// Get the scalar type as a validated enum.
    pub fn data_type(&self) -> Result<NrrdType> {
        let name = self
            .type_name
            .as_deref()
            .ok_or(NrrdError::HeaderIncomplete("type"))?;
        NrrdType::from_name(name).ok_or_else(|| NrrdError::UnknownScalarType(name.to_owned()))
    }
}

/// Scan the raw prefix for the two consecutive newline characters that
/// terminate the header text. Returns the byte offset just past them,
/// where binary data begins.
fn find_data_offset(prefix: &[u8]) -> Option<u64> {
    prefix
        .windows(2)
        .position(|w| w == b"\n\n")
        .map(|i| (i + 2) as u64)
}

fn parse_header_text(text: &str) -> Result<NrrdHeader> {
    let mut lines = text.lines();
    let magic = lines.next().map(str::trim).unwrap_or("");
    if magic.is_empty() {
        return Err(NrrdError::HeaderMalformed(
            "missing magic number line".to_owned(),
        ));
    }

    let mut header = NrrdHeader {
        magic: magic.to_owned(),
        dimension: None,
        sizes: None,
        space_directions: None,
        space_origin: None,
        kinds: None,
        space_dimension: None,
        type_name: None,
        encoding: None,
        endianness: Endianness::LE,
        extra: HashMap::new(),
    };

    for line in lines {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = split_field(line)?;
        match key {
            "sizes" => header.sizes = Some(parse_ints(key, value)?),
            "space directions" => header.space_directions = Some(parse_triples(key, value)?),
            "dimension" => header.dimension = Some(parse_int(key, value)?),
            "space origin" => header.space_origin = Some(parse_triple(key, value)?),
            "kinds" => {
                header.kinds = Some(value.split_whitespace().map(str::to_owned).collect())
            }
            "space dimension" => header.space_dimension = Some(parse_int(key, value)?),
            "type" => header.type_name = Some(value.to_owned()),
            "encoding" => header.encoding = Some(value.to_owned()),
            "endian" => header.endianness = parse_endian(value)?,
            _ => {
                let _ = header.extra.insert(key.to_owned(), value.to_owned());
            }
        }
    }
    Ok(header)
}

/// Split a header line on its first `:` into a trimmed key/value pair.
fn split_field(line: &str) -> Result<(&str, &str)> {
    let sep = line
        .find(':')
        .ok_or_else(|| NrrdError::HeaderMalformed(format!("field line without `:`: {:?}", line)))?;
    Ok((line[..sep].trim(), line[sep + 1..].trim()))
}

fn parse_int(key: &str, value: &str) -> Result<u32> {
    value
        .parse()
        .map_err(|_| NrrdError::HeaderMalformed(format!("bad integer in `{}`: {:?}", key, value)))
}

fn parse_ints(key: &str, value: &str) -> Result<Vec<u32>> {
    value
        .split_whitespace()
        .map(|tok| parse_int(key, tok))
        .collect()
}

fn parse_real(key: &str, value: &str) -> Result<f64> {
    value
        .parse()
        .map_err(|_| NrrdError::HeaderMalformed(format!("bad number in `{}`: {:?}", key, value)))
}

/// Parse a `(a,b,c)` tuple into a 3-vector.
fn parse_triple(key: &str, value: &str) -> Result<[f64; 3]> {
    let inner = value
        .strip_prefix('(')
        .and_then(|v| v.strip_suffix(')'))
        .ok_or_else(|| {
            NrrdError::HeaderMalformed(format!("`{}` is not parenthesized: {:?}", key, value))
        })?;
    let mut parts = inner.split(',');
    let mut triple = [0.0; 3];
    for slot in &mut triple {
        let tok = parts.next().ok_or_else(|| {
            NrrdError::HeaderMalformed(format!("`{}` has fewer than 3 components: {:?}", key, value))
        })?;
        *slot = parse_real(key, tok.trim())?;
    }
    if parts.next().is_some() {
        return Err(NrrdError::HeaderMalformed(format!(
            "`{}` has more than 3 components: {:?}",
            key, value
        )));
    }
    Ok(triple)
}

fn parse_triples(key: &str, value: &str) -> Result<Vec<[f64; 3]>> {
    value
        .split_whitespace()
        .map(|tok| parse_triple(key, tok))
        .collect()
}

fn parse_endian(value: &str) -> Result<Endianness> {
    match value {
        "little" => Ok(Endianness::LE),
        "big" => Ok(Endianness::BE),
        _ => Err(NrrdError::HeaderMalformed(format!(
            "bad `endian` value: {:?}",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::find_data_offset;

    #[test]
    fn data_offset() {
        assert_eq!(find_data_offset(b"NRRD0004\nencoding: raw\n\nXYZ"), Some(24));
        assert_eq!(find_data_offset(b"NRRD0004\nencoding: raw\n"), None);
        assert_eq!(find_data_offset(b""), None);
    }
}
