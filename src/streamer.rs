//! The client session for streaming voxel values out of a remote NRRD
//! file.
//!
//! A [`NrrdStreamer`] owns a byte-range transport and caches the parsed
//! header after the first request, so a session costs one small prefix
//! fetch up front and then exactly one fetch per voxel value. The header
//! is always retrieved and parsed before any voxel fetch that depends on
//! it; that ordering is enforced by sequencing within [`value_at`], not by
//! timing.
//!
//! [`value_at`]: NrrdStreamer::value_at

use crate::error::Result;
use crate::header::{NrrdHeader, HEADER_PREFIX_BYTE_SIZE};
use crate::locator::{locate_voxel, VoxelFetch};
use crate::transport::{FetchRange, HttpRangeFetcher};
use tracing::debug;

/// A client session over one NRRD file.
///
/// # Example
///
/// ```no_run
/// use nrrd_stream::NrrdStreamer;
/// # use nrrd_stream::Result;
///
/// # fn run() -> Result<()> {
/// let mut streamer = NrrdStreamer::open("http://127.0.0.1:8080/annotation_25.nrrd");
/// let value = streamer.value_at([2000.0, 4000.0, 4000.0])?;
/// println!("value: {}", value);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NrrdStreamer<F> {
    transport: F,
    header_window: u64,
    cache: Option<(NrrdHeader, u64)>,
}

impl NrrdStreamer<HttpRangeFetcher> {
    /// Create a session streaming from the given URL over HTTP.
    pub fn open(url: impl Into<String>) -> Self {
        NrrdStreamer::new(HttpRangeFetcher::new(url))
    }
}

impl<F> NrrdStreamer<F>
where
    F: FetchRange,
{
    /// Create a session over an arbitrary byte-range transport.
    pub fn new(transport: F) -> Self {
        NrrdStreamer {
            transport,
            header_window: HEADER_PREFIX_BYTE_SIZE,
            cache: None,
        }
    }

    /// Change the size of the prefix fetched when looking for the header.
    ///
    /// The default ([`HEADER_PREFIX_BYTE_SIZE`]) is plenty for typical
    /// files; raise it if header parsing fails with `HeaderTruncated` on a
    /// file with an unusually long header.
    pub fn set_header_window(&mut self, bytes: u64) {
        self.header_window = bytes;
    }

    /// Access the transport, e.g. to update HTTP headers mid-session.
    pub fn transport_mut(&mut self) -> &mut F {
        &mut self.transport
    }

    /// Retrieve the parsed header and the data byte offset, fetching and
    /// parsing them on the first call and serving the cached copy after
    /// that.
    pub fn header(&mut self) -> Result<(&NrrdHeader, u64)> {
        if self.cache.is_none() {
            let prefix = self.transport.fetch_range(0, self.header_window)?;
            let (header, data_offset) = NrrdHeader::from_prefix(&prefix)?;
            debug!(data_offset, magic = %header.magic, "parsed NRRD header");
            self.cache = Some((header, data_offset));
        }
        let (header, data_offset) = self
            .cache
            .as_ref()
            .expect("header cache was populated above");
        Ok((header, *data_offset))
    }

    /// Drop the cached header so the next call fetches it again. Needed
    /// only if the target file changed underneath the session.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// Resolve a world coordinate to the byte range and scalar type of its
    /// voxel, without fetching the value.
    pub fn locate(&mut self, world: [f64; 3]) -> Result<VoxelFetch> {
        let (header, data_offset) = self.header()?;
        locate_voxel(header, data_offset, world)
    }

    /// Fetch and decode the voxel value at a world coordinate.
    ///
    /// A failed lookup leaves the cached header untouched, so further
    /// queries on the same session remain valid.
    pub fn value_at(&mut self, world: [f64; 3]) -> Result<f64> {
        let (fetch, endianness) = {
            let (header, data_offset) = self.header()?;
            (locate_voxel(header, data_offset, world)?, header.endianness)
        };
        let bytes = self
            .transport
            .fetch_range(fetch.range.start, fetch.range.end)?;
        debug!(voxel = ?fetch.voxel, start = fetch.range.start, "fetched voxel bytes");
        fetch.datatype.read_scalar(&bytes[..], endianness)
    }
}
