//! Byte-range transport abstraction and implementations.
//!
//! Fetching is the only I/O this crate performs, and it all goes through
//! the [`FetchRange`] trait: once to retrieve the header prefix and once
//! per voxel value. [`HttpRangeFetcher`] is the production implementation;
//! [`MemoryRangeFetcher`] serves tests and already-buffered files.

use crate::error::Result;
use reqwest::header::{HeaderMap, RANGE};
use std::io;
use tracing::debug;

/// A source of file contents addressable by inclusive byte ranges.
pub trait FetchRange {
    /// Fetch the bytes in `[start, end]` (both inclusive). Implementations
    /// may return fewer bytes if the range extends past the end of the
    /// file, matching HTTP range semantics.
    fn fetch_range(&self, start: u64, end: u64) -> Result<Vec<u8>>;
}

/// Fetches byte ranges from a URL with HTTP `Range` requests.
///
/// Caller-supplied headers (e.g. authorization tokens) are sent with every
/// request, merged with the `Range` header.
#[derive(Debug)]
pub struct HttpRangeFetcher {
    client: reqwest::blocking::Client,
    url: String,
    extra_headers: HeaderMap,
}

impl HttpRangeFetcher {
    /// Create a fetcher for the given URL with no extra headers.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_headers(url, HeaderMap::new())
    }

    /// Create a fetcher that sends the given headers with every request.
    pub fn with_headers(url: impl Into<String>, extra_headers: HeaderMap) -> Self {
        HttpRangeFetcher {
            client: reqwest::blocking::Client::new(),
            url: url.into(),
            extra_headers,
        }
    }

    /// Replace the extra headers sent with future requests.
    pub fn set_headers(&mut self, extra_headers: HeaderMap) {
        self.extra_headers = extra_headers;
    }

    /// The URL this fetcher reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FetchRange for HttpRangeFetcher {
    fn fetch_range(&self, start: u64, end: u64) -> Result<Vec<u8>> {
        debug!(url = %self.url, start, end, "fetching byte range");
        let response = self
            .client
            .get(&self.url)
            .headers(self.extra_headers.clone())
            .header(RANGE, format!("bytes={}-{}", start, end))
            .send()?
            .error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

/// Serves byte ranges out of an in-memory buffer.
#[derive(Debug, Clone)]
pub struct MemoryRangeFetcher {
    data: Vec<u8>,
}

impl MemoryRangeFetcher {
    /// Wrap a buffer holding a complete NRRD file.
    pub fn new(data: Vec<u8>) -> Self {
        MemoryRangeFetcher { data }
    }
}

impl FetchRange for MemoryRangeFetcher {
    fn fetch_range(&self, start: u64, end: u64) -> Result<Vec<u8>> {
        let len = self.data.len() as u64;
        if start >= len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("range starts at {} but the buffer has {} bytes", start, len),
            )
            .into());
        }
        // clamp like a range-serving HTTP server does
        let end = end.min(len - 1);
        Ok(self.data[start as usize..=end as usize].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::{FetchRange, MemoryRangeFetcher};

    #[test]
    fn memory_ranges() {
        let fetcher = MemoryRangeFetcher::new(vec![10, 20, 30, 40]);
        assert_eq!(fetcher.fetch_range(1, 2).unwrap(), vec![20, 30]);
        assert_eq!(fetcher.fetch_range(2, 100).unwrap(), vec![30, 40]);
        assert!(fetcher.fetch_range(4, 5).is_err());
    }
}
