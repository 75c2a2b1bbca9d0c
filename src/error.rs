//! Error types for header parsing, voxel location and transport.

use std::io::Error as IoError;

quick_error! {
    /// Error type for everything that can go wrong between receiving a
    /// world coordinate and producing a decoded voxel value.
    ///
    /// All failures are reported through this type; the crate never panics
    /// on malformed input and never retries a failed fetch.
    #[derive(Debug)]
    pub enum NrrdError {
        /// The double-newline header terminator was not found within the
        /// fetched prefix window.
        HeaderTruncated {
            display("NRRD header terminator not found in the fetched prefix")
        }
        /// A header line or field value does not follow the NRRD grammar.
        HeaderMalformed(detail: String) {
            display("malformed NRRD header: {}", detail)
        }
        /// A field required for voxel lookup is absent from the header.
        HeaderIncomplete(field: &'static str) {
            display("NRRD header is missing the `{}` field", field)
        }
        /// Only `raw` (uncompressed) encoding can be streamed.
        UnsupportedEncoding(encoding: String) {
            display("cannot stream `{}` encoded data, only `raw` is supported", encoding)
        }
        /// The header's `type` field does not name a known scalar type.
        UnknownScalarType(name: String) {
            display("unknown NRRD scalar type `{}`", name)
        }
        /// The space-direction matrix is not invertible, so no world
        /// coordinate can be mapped back to a voxel.
        DegenerateGeometry {
            display("space directions form a non-invertible matrix")
        }
        /// The resolved voxel coordinate falls outside the volume.
        OutOfVolume(voxel: [i64; 3]) {
            display("voxel position {:?} is outside the volume", voxel)
        }
        /// I/O error while reading fetched bytes.
        Io(err: IoError) {
            from()
            source(err)
            display("I/O error: {}", err)
        }
        /// HTTP transport error.
        Http(err: reqwest::Error) {
            from()
            source(err)
            display("HTTP error: {}", err)
        }
    }
}

/// Alias type for results originating from this crate.
pub type Result<T> = ::std::result::Result<T, NrrdError>;
