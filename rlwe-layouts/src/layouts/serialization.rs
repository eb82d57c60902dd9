use std::io::{Read, Result, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

/// Serialize a layout type to a byte stream.
///
/// The wire format is type-specific and documented on each implementor.
/// All multi-byte integers are written in little-endian order.
pub trait WriterTo {
    /// Writes the complete serialized representation to `writer` and
    /// returns the number of bytes written.
    ///
    /// For types that also implement [`BinarySize`], the return value
    /// always equals [`BinarySize::binary_size`]; a mismatch indicates a
    /// broken capability implementation, not an I/O condition.
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64>;
}

/// Deserialize a layout type from a byte stream.
///
/// A successful read fully repopulates the receiver; a failed read
/// propagates the error and never reports a partially-overwritten receiver
/// as success.
pub trait ReaderFrom {
    /// Reads and overwrites `self` from `reader`, returning the number of
    /// bytes consumed.
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<u64>;
}

/// Exact serialized size of the object in bytes.
pub trait BinarySize {
    /// Number of bytes a subsequent [`WriterTo::write_to`] will produce.
    /// Consistent across calls for the same logical value and never
    /// mutates state.
    fn binary_size(&self) -> usize;
}

/// One-shot encoding into an owned buffer, byte-identical to the streaming
/// codec. The buffer is allocated with exactly [`BinarySize::binary_size`]
/// bytes of capacity before writing.
pub trait MarshalBinary: WriterTo + BinarySize {
    fn marshal_binary(&self) -> Result<Vec<u8>> {
        let size: usize = self.binary_size();
        let mut buf: Vec<u8> = Vec::with_capacity(size);
        let written: u64 = self.write_to(&mut buf)?;
        assert!(
            written as usize == size,
            "write_to wrote {written} bytes but binary_size() declared {size}"
        );
        Ok(buf)
    }
}

impl<T: WriterTo + BinarySize> MarshalBinary for T {}

/// One-shot decoding from a byte slice generated by
/// [`MarshalBinary::marshal_binary`] or [`WriterTo::write_to`].
pub trait UnmarshalBinary: ReaderFrom {
    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<()> {
        let mut reader: &[u8] = bytes;
        self.read_from(&mut reader)?;
        Ok(())
    }
}

impl<T: ReaderFrom> UnmarshalBinary for T {}

// The closed set of built-in numeric primitives. Anything else stored in a
// container must bring its own implementations of the capability traits.
macro_rules! impl_primitive_codec {
    ($($ty:ty, $write:ident, $read:ident);* $(;)?) => {$(
        impl BinarySize for $ty {
            fn binary_size(&self) -> usize {
                size_of::<$ty>()
            }
        }

        impl WriterTo for $ty {
            fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64> {
                writer.$write::<LittleEndian>(*self)?;
                Ok(size_of::<$ty>() as u64)
            }
        }

        impl ReaderFrom for $ty {
            fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
                *self = reader.$read::<LittleEndian>()?;
                Ok(size_of::<$ty>() as u64)
            }
        }
    )*};
}

impl_primitive_codec!(
    u16, write_u16, read_u16;
    u32, write_u32, read_u32;
    u64, write_u64, read_u64;
    i16, write_i16, read_i16;
    i32, write_i32, read_i32;
    i64, write_i64, read_i64;
    f32, write_f32, read_f32;
    f64, write_f64, read_f64;
);

// Single-byte kinds have no endianness parameter.
macro_rules! impl_byte_codec {
    ($($ty:ty, $write:ident, $read:ident);* $(;)?) => {$(
        impl BinarySize for $ty {
            fn binary_size(&self) -> usize {
                1
            }
        }

        impl WriterTo for $ty {
            fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64> {
                writer.$write(*self)?;
                Ok(1)
            }
        }

        impl ReaderFrom for $ty {
            fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
                *self = reader.$read()?;
                Ok(1)
            }
        }
    )*};
}

impl_byte_codec!(
    u8, write_u8, read_u8;
    i8, write_i8, read_i8;
);
