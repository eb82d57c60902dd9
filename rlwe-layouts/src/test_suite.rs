//! Generic, reusable checks for the serialization and copy contracts.
//!
//! Downstream crates apply these to every layout they define, the same way
//! the tests in this crate apply them to the containers and ring elements.

use std::fmt::Debug;

use crate::layouts::{BinarySize, FillUniform, MarshalBinary, ReaderFrom, UnmarshalBinary, WriterTo};
use crate::source::Source;

/// Round-trip, size-exactness and short-read check.
///
/// Fills `original` with uniform random content, encodes it, and verifies:
/// - `write_to` writes exactly `binary_size()` bytes;
/// - `marshal_binary` is byte-identical to the streaming codec;
/// - decoding into a default receiver consumes exactly the written bytes
///   and yields a structurally equal value;
/// - decoding a truncated stream fails instead of producing a value.
pub fn test_reader_writer_interface<T>(mut original: T)
where
    T: WriterTo + ReaderFrom + BinarySize + PartialEq + Debug + Clone + Default + FillUniform,
{
    let mut source = Source::new([0u8; 32]);
    original.fill_uniform(&mut source);

    let mut buffer: Vec<u8> = Vec::new();
    let written: u64 = original.write_to(&mut buffer).expect("write_to failed");
    assert_eq!(
        written as usize,
        original.binary_size(),
        "write_to byte count does not match binary_size()"
    );
    assert_eq!(buffer.len(), original.binary_size());
    assert_eq!(
        original.marshal_binary().expect("marshal_binary failed"),
        buffer,
        "marshal_binary is not byte-identical to write_to"
    );

    let mut receiver = T::default();
    let mut reader: &[u8] = &buffer;
    let read: u64 = receiver.read_from(&mut reader).expect("read_from failed");
    assert_eq!(read, written, "read_from did not consume exactly the written bytes");
    assert!(reader.is_empty(), "trailing bytes after read_from");
    assert_eq!(original, receiver, "deserialized object does not match the original");

    let mut truncated = T::default();
    truncated
        .unmarshal_binary(&buffer[..buffer.len() - 1])
        .expect_err("decoding a truncated stream must fail");
}

/// Deep-copy independence check for non-empty values.
///
/// Verifies the copy is structurally equal right after cloning, and that
/// mutating the copy never changes the original's encoding.
pub fn test_copy_independence<T>(mut original: T)
where
    T: WriterTo + BinarySize + PartialEq + Debug + Clone + FillUniform,
{
    let mut source = Source::new([1u8; 32]);
    original.fill_uniform(&mut source);
    let encoding: Vec<u8> = original.marshal_binary().expect("marshal_binary failed");

    let mut copy = original.clone();
    assert_eq!(copy, original, "copy is not structurally equal to the original");

    copy.fill_uniform(&mut source);
    assert_ne!(copy, original, "mutating the copy did not change it");
    assert_eq!(
        original.marshal_binary().expect("marshal_binary failed"),
        encoding,
        "mutating the copy changed the original's encoding"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::{Matrix, Poly, PolyQP, Ring, RingQP, Vector};

    #[test]
    fn vector_of_primitives() {
        test_reader_writer_interface(Vector::<i32>(vec![0; 17]));
        test_copy_independence(Vector::<i32>(vec![0; 17]));
    }

    #[test]
    fn matrix_of_primitives() {
        let m: Matrix<u64> = Matrix::from(vec![vec![0; 8], vec![0; 3], vec![0; 5]]);
        test_reader_writer_interface(m.clone());
        test_copy_independence(m);
    }

    #[test]
    fn empty_containers() {
        test_reader_writer_interface(Vector::<u8>::new());
        test_reader_writer_interface(Matrix::<f64>::new());
    }

    #[test]
    fn ring_elements() {
        let ring = RingQP::new(
            Ring::new(64, vec![0x1fffffffffe00001, 0x1fffffffffc80001]),
            Some(Ring::new(64, vec![0x1fffffffffb40001])),
        );
        test_reader_writer_interface(ring.ring_q().new_poly(1));
        test_reader_writer_interface(ring.new_poly_qp(1, Some(0)));
        test_copy_independence(ring.new_poly_qp(1, Some(0)));
    }

    #[test]
    fn nested_structured_elements() {
        let ring = Ring::new(16, vec![0x1fffffffffe00001]);
        let polys: Vector<Poly> = (0..4).map(|_| ring.new_poly(0)).collect();
        test_reader_writer_interface(polys);

        let pairs: Matrix<PolyQP> = Matrix::from(vec![vec![PolyQP {
            q: ring.new_poly(0),
            p: None,
        }]]);
        test_reader_writer_interface(pairs);
    }
}
