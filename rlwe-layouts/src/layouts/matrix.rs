use std::io::{Error, Read, Result, Write};
use std::ops::{Deref, DerefMut};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::layouts::{BinarySize, FillUniform, ReaderFrom, Vector, WriterTo};
use crate::source::Source;

/// Homogeneous two-dimensional container: a sequence of [`Vector<T>`] rows.
///
/// The outer length is independent of the inner lengths — ragged rows are
/// permitted. After a successful read every slot is populated; there is no
/// notion of an absent element.
///
/// Wire format: `[row_count: u64][Vector<T> row_0]...[Vector<T> row_{n-1}]`.
/// An empty matrix is a valid value of size 8.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Matrix<T>(pub Vec<Vector<T>>);

impl<T> Matrix<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn rows(&self) -> usize {
        self.0.len()
    }
}

impl<T> Deref for Matrix<T> {
    type Target = Vec<Vector<T>>;

    fn deref(&self) -> &Vec<Vector<T>> {
        &self.0
    }
}

impl<T> DerefMut for Matrix<T> {
    fn deref_mut(&mut self) -> &mut Vec<Vector<T>> {
        &mut self.0
    }
}

impl<T> From<Vec<Vec<T>>> for Matrix<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self(rows.into_iter().map(Vector).collect())
    }
}

impl<T: BinarySize> BinarySize for Matrix<T> {
    fn binary_size(&self) -> usize {
        8 + self.0.iter().map(Vector::binary_size).sum::<usize>()
    }
}

impl<T: WriterTo> WriterTo for Matrix<T> {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64> {
        writer.write_u64::<LittleEndian>(self.0.len() as u64)?;
        let mut written: u64 = 8;
        for (i, row) in self.0.iter().enumerate() {
            written += row
                .write_to(writer)
                .map_err(|e| Error::new(e.kind(), format!("matrix row {i}: {e}")))?;
        }
        Ok(written)
    }
}

impl<T: ReaderFrom + Default> ReaderFrom for Matrix<T> {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
        let rows: usize = reader.read_u64::<LittleEndian>()? as usize;
        self.0.resize_with(rows, Vector::default);
        let mut read: u64 = 8;
        for (i, row) in self.0.iter_mut().enumerate() {
            read += row
                .read_from(reader)
                .map_err(|e| Error::new(e.kind(), format!("matrix row {i}: {e}")))?;
        }
        Ok(read)
    }
}

impl<T: FillUniform> FillUniform for Matrix<T> {
    fn fill_uniform(&mut self, source: &mut Source) {
        for row in self.0.iter_mut() {
            row.fill_uniform(source);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;
    use crate::layouts::{MarshalBinary, UnmarshalBinary};

    #[test]
    fn ragged_round_trip() {
        let m: Matrix<u64> = Matrix::from(vec![vec![1, 2, 3], vec![4], vec![]]);
        assert_eq!(m.binary_size(), 8 + (8 + 24) + (8 + 8) + 8);

        let bytes: Vec<u8> = m.marshal_binary().unwrap();
        let mut decoded: Matrix<u64> = Matrix::new();
        decoded.unmarshal_binary(&bytes).unwrap();
        assert_eq!(m, decoded);
    }

    #[test]
    fn empty_round_trip() {
        let m: Matrix<i16> = Matrix::new();
        assert_eq!(m.binary_size(), 8);

        let bytes: Vec<u8> = m.marshal_binary().unwrap();
        let mut decoded: Matrix<i16> = Matrix::from(vec![vec![5]]);
        decoded.unmarshal_binary(&bytes).unwrap();
        assert_eq!(m, decoded);
        assert_eq!(decoded.rows(), 0);
    }

    #[test]
    fn short_read_reports_failing_row() {
        let m: Matrix<u32> = Matrix::from(vec![vec![1], vec![2]]);
        let bytes: Vec<u8> = m.marshal_binary().unwrap();

        let mut decoded: Matrix<u32> = Matrix::new();
        let err = decoded
            .unmarshal_binary(&bytes[..bytes.len() - 2])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
        assert!(err.to_string().contains("matrix row 1"), "{err}");
    }

    #[test]
    fn copy_is_independent() {
        let m: Matrix<i64> = Matrix::from(vec![vec![-1, -2]]);
        let encoding: Vec<u8> = m.marshal_binary().unwrap();

        let mut copy = m.clone();
        assert_eq!(copy, m);
        copy[0][1] = 42;
        assert_eq!(m.marshal_binary().unwrap(), encoding);
    }
}
