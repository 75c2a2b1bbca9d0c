//! Streaming access to uncompressed NRRD volumes over HTTP byte ranges.
//!
//! This crate picks single scalar values out of a large NRRD file served
//! by any HTTP server that honors `Range` requests, without downloading
//! the file. Queries are made in world-space coordinates; the crate parses
//! the text header once, builds the world→voxel affine transform from the
//! `space directions` and `space origin` fields, and computes the exact
//! byte range holding the requested voxel.
//!
//! Only volumes with `encoding: raw` and a 3D spatial grid are supported.
//!
//! ```no_run
//! use nrrd_stream::NrrdStreamer;
//! # use nrrd_stream::Result;
//!
//! # fn run() -> Result<()> {
//! let mut streamer = NrrdStreamer::open("http://127.0.0.1:8080/annotation_25_uncomp.nrrd");
//! let value = streamer.value_at([2000.0, 4000.0, 4000.0])?;
//! # Ok(())
//! # }
//! ```
//!
//! The pure pieces are usable on their own, without a session:
//! [`NrrdHeader::from_prefix`] parses header text and finds the data
//! offset, and [`locate_voxel`] turns a header plus world coordinate into
//! a [`ByteRange`] for any transport to fetch.
#![deny(missing_debug_implementations)]
#![warn(missing_docs, unused_extern_crates, trivial_casts, unused_results)]

#[macro_use]
extern crate quick_error;

pub mod affine;
pub mod error;
pub mod header;
pub mod locator;
pub mod streamer;
pub mod transport;
pub mod typedef;
mod util;

pub use crate::error::{NrrdError, Result};
pub use crate::header::{NrrdHeader, HEADER_PREFIX_BYTE_SIZE};
pub use crate::locator::{locate_voxel, ByteRange, VoxelFetch};
pub use crate::streamer::NrrdStreamer;
pub use crate::transport::{FetchRange, HttpRangeFetcher, MemoryRangeFetcher};
pub use crate::typedef::NrrdType;
pub use crate::util::Endianness;
