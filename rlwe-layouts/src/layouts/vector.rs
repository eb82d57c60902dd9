use std::io::{Error, Read, Result, Write};
use std::ops::{Deref, DerefMut};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::layouts::{BinarySize, FillUniform, ReaderFrom, WriterTo};
use crate::source::Source;

/// Homogeneous one-dimensional container.
///
/// Elements are owned exclusively; cloning a `Vector` deep-copies every
/// element. `T` is either one of the built-in numeric primitives or any
/// type implementing the capability traits ([`BinarySize`], [`WriterTo`],
/// [`ReaderFrom`], `Clone`, `PartialEq`) — each container operation bounds
/// only the capability it needs, so an element type missing one is
/// rejected by the compiler at first use.
///
/// Wire format: `[count: u64][element_0]...[element_{count-1}]`, all
/// integers little-endian. An empty vector is a valid value of size 8.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Vector<T>(pub Vec<T>);

impl<T> Vector<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Vector<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.0
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(v: Vec<T>) -> Self {
        Self(v)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

impl<T: BinarySize> BinarySize for Vector<T> {
    fn binary_size(&self) -> usize {
        8 + self.0.iter().map(BinarySize::binary_size).sum::<usize>()
    }
}

impl<T: WriterTo> WriterTo for Vector<T> {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64> {
        writer.write_u64::<LittleEndian>(self.0.len() as u64)?;
        let mut written: u64 = 8;
        for (i, elem) in self.0.iter().enumerate() {
            written += elem
                .write_to(writer)
                .map_err(|e| Error::new(e.kind(), format!("vector element {i}: {e}")))?;
        }
        Ok(written)
    }
}

impl<T: ReaderFrom + Default> ReaderFrom for Vector<T> {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
        let count: usize = reader.read_u64::<LittleEndian>()? as usize;
        // Existing backing storage (and the element buffers it holds) is
        // reused when capacity suffices.
        self.0.resize_with(count, T::default);
        let mut read: u64 = 8;
        for (i, elem) in self.0.iter_mut().enumerate() {
            read += elem
                .read_from(reader)
                .map_err(|e| Error::new(e.kind(), format!("vector element {i}: {e}")))?;
        }
        Ok(read)
    }
}

impl<T: FillUniform> FillUniform for Vector<T> {
    fn fill_uniform(&mut self, source: &mut Source) {
        for elem in self.0.iter_mut() {
            elem.fill_uniform(source);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;
    use crate::layouts::{MarshalBinary, UnmarshalBinary};

    #[test]
    fn binary_size_counts_header_and_elements() {
        let v: Vector<i32> = Vector(vec![1, -2, 3]);
        assert_eq!(v.binary_size(), 8 + 3 * 4);
    }

    #[test]
    fn round_trip() {
        let v: Vector<i32> = Vector(vec![1, -2, 3]);
        let bytes: Vec<u8> = v.marshal_binary().unwrap();
        assert_eq!(bytes.len(), v.binary_size());

        let mut decoded: Vector<i32> = Vector::new();
        decoded.unmarshal_binary(&bytes).unwrap();
        assert_eq!(v, decoded);
    }

    #[test]
    fn empty_round_trip() {
        let v: Vector<u64> = Vector::new();
        assert_eq!(v.binary_size(), 8);

        let bytes: Vec<u8> = v.marshal_binary().unwrap();
        let mut decoded: Vector<u64> = Vector(vec![7, 7, 7]);
        decoded.unmarshal_binary(&bytes).unwrap();
        assert_eq!(v, decoded);
        assert!(decoded.is_empty());
    }

    #[test]
    fn truncated_stream_fails_with_short_read() {
        let v: Vector<i32> = Vector(vec![1, -2, 3]);
        let bytes: Vec<u8> = v.marshal_binary().unwrap();

        let mut decoded: Vector<i32> = Vector::new();
        let err = decoded
            .unmarshal_binary(&bytes[..bytes.len() - 1])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
        assert!(err.to_string().contains("vector element 2"), "{err}");
    }

    #[test]
    fn read_reuses_backing_storage() {
        let bytes: Vec<u8> = Vector::<u16>(vec![1, 2]).marshal_binary().unwrap();

        let mut decoded: Vector<u16> = Vector(Vec::with_capacity(16));
        let ptr = decoded.as_ptr();
        decoded.unmarshal_binary(&bytes).unwrap();
        assert_eq!(decoded.0, vec![1, 2]);
        assert_eq!(decoded.as_ptr(), ptr);
    }

    #[test]
    fn copy_is_independent() {
        let v: Vector<u64> = Vector(vec![10, 20]);
        let mut copy = v.clone();
        assert_eq!(copy, v);
        copy[0] = 99;
        assert_eq!(v.0, vec![10, 20]);
    }
}
