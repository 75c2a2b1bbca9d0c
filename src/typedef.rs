//! This module contains the scalar element types defined by the NRRD
//! format, along with the full set of C-style type name aliases that a
//! header's `type` field may use. `NrrdType` also provides a safe means
//! of decoding a single voxel value from raw bytes.

use crate::error::Result;
use crate::util::Endianness;
use std::io::Read;

/// Data type for representing a NRRD scalar element type in a volume.
/// Methods for decoding values of that type from a byte source are also
/// included.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum NrrdType {
    /// signed char
    Int8,
    /// unsigned char
    Uint8,
    /// signed short
    Int16,
    /// unsigned short
    Uint16,
    /// signed int
    Int32,
    /// unsigned int
    Uint32,
    /// signed long long
    Int64,
    /// unsigned long long
    Uint64,
    /// 32 bit float
    Float32,
    /// 64 bit float = double
    Float64,
}

impl NrrdType {
    /// Resolve a `type` field value into a scalar type, accepting every
    /// alias the format defines for each type.
    pub fn from_name(name: &str) -> Option<NrrdType> {
        use NrrdType::*;
        let t = match name {
            "signed char" | "int8" | "int8_t" => Int8,
            "uchar" | "unsigned char" | "uint8" | "uint8_t" => Uint8,
            "short" | "short int" | "signed short" | "signed short int" | "int16"
            | "int16_t" => Int16,
            "ushort" | "unsigned short" | "unsigned short int" | "uint16" | "uint16_t" => Uint16,
            "int" | "signed int" | "int32" | "int32_t" => Int32,
            "uint" | "unsigned int" | "uint32" | "uint32_t" => Uint32,
            "longlong" | "long long" | "long long int" | "signed long long"
            | "signed long long int" | "int64" | "int64_t" => Int64,
            "ulonglong" | "unsigned long long" | "unsigned long long int" | "uint64"
            | "uint64_t" => Uint64,
            "float" => Float32,
            "double" => Float64,
            _ => return None,
        };
        Some(t)
    }

    /// Retrieve the size of an element of this data type, in bytes.
    pub fn size_of(&self) -> usize {
        use NrrdType::*;
        match *self {
            Int8 | Uint8 => 1,
            Int16 | Uint16 => 2,
            Int32 | Uint32 | Float32 => 4,
            Int64 | Uint64 | Float64 => 8,
        }
    }

    /// Decode a single voxel value of this type from a byte source.
    ///
    /// The value is widened to `f64`. Integer values of magnitude above
    /// 2^53 lose precision in the conversion.
    pub fn read_scalar<S>(&self, mut source: S, endianness: Endianness) -> Result<f64>
    where
        S: Read,
    {
        use byteorder::ReadBytesExt;
        let value = match *self {
            NrrdType::Int8 => f64::from(source.read_i8()?),
            NrrdType::Uint8 => f64::from(source.read_u8()?),
            NrrdType::Int16 => f64::from(endianness.read_i16(source)?),
            NrrdType::Uint16 => f64::from(endianness.read_u16(source)?),
            NrrdType::Int32 => f64::from(endianness.read_i32(source)?),
            NrrdType::Uint32 => f64::from(endianness.read_u32(source)?),
            NrrdType::Int64 => endianness.read_i64(source)? as f64,
            NrrdType::Uint64 => endianness.read_u64(source)? as f64,
            NrrdType::Float32 => f64::from(endianness.read_f32(source)?),
            NrrdType::Float64 => endianness.read_f64(source)?,
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::NrrdType;
    use crate::util::Endianness;

    #[test]
    fn aliases() {
        assert_eq!(NrrdType::from_name("uint8"), Some(NrrdType::Uint8));
        assert_eq!(NrrdType::from_name("unsigned char"), Some(NrrdType::Uint8));
        assert_eq!(NrrdType::from_name("uint8_t"), Some(NrrdType::Uint8));
        assert_eq!(
            NrrdType::from_name("signed short int"),
            Some(NrrdType::Int16)
        );
        assert_eq!(
            NrrdType::from_name("unsigned long long int"),
            Some(NrrdType::Uint64)
        );
        assert_eq!(NrrdType::from_name("float"), Some(NrrdType::Float32));
        assert_eq!(NrrdType::from_name("double"), Some(NrrdType::Float64));
        assert_eq!(NrrdType::from_name("block"), None);
    }

    #[test]
    fn sizes() {
        assert_eq!(NrrdType::Uint8.size_of(), 1);
        assert_eq!(NrrdType::Int16.size_of(), 2);
        assert_eq!(NrrdType::Float32.size_of(), 4);
        assert_eq!(NrrdType::Uint64.size_of(), 8);
    }

    #[test]
    fn decode() {
        let bytes = [0x39u8, 0x30];
        let v = NrrdType::Uint16
            .read_scalar(&bytes[..], Endianness::LE)
            .unwrap();
        assert_eq!(v, 12345.0);
        let v = NrrdType::Uint16
            .read_scalar(&bytes[..], Endianness::BE)
            .unwrap();
        assert_eq!(v, 14640.0);

        let bytes = 2.5f64.to_le_bytes();
        let v = NrrdType::Float64
            .read_scalar(&bytes[..], Endianness::LE)
            .unwrap();
        assert_eq!(v, 2.5);
    }
}
