//! Buffered adapters over raw byte channels.
//!
//! The minimal sink interface is [`io::Write`]; the minimal source
//! interface is [`io::Read`]. The helpers here lift a raw channel into a
//! buffering decorator exactly once, at the call boundary — nested writes
//! inside a layout go straight to the writer they were handed, so no
//! per-level wrapping ever happens.
//!
//! Callers that already hold an in-memory or buffered channel (a
//! `&mut Vec<u8>`, a `&[u8]`, a long-lived [`io::BufWriter`]) should call
//! [`WriterTo::write_to`] / [`ReaderFrom::read_from`] directly; that path
//! allocates nothing.

use std::io::{self, BufReader, BufWriter, Read, Write};

use crate::layouts::{ReaderFrom, WriterTo};

/// Writes `value` to `sink` through a [`BufWriter`] scoped to this call.
///
/// The buffer is flushed before returning, so on success every byte has
/// reached the underlying sink. Returns the number of bytes written, which
/// equals `value.binary_size()` for sized layouts.
pub fn write_buffered<T, W>(value: &T, sink: W) -> io::Result<u64>
where
    T: WriterTo + ?Sized,
    W: Write,
{
    let mut writer: BufWriter<W> = BufWriter::new(sink);
    let written: u64 = value.write_to(&mut writer)?;
    writer.flush()?;
    Ok(written)
}

/// Reads `value` from `source` through a [`BufReader`] scoped to this
/// call. Returns the number of bytes consumed.
pub fn read_buffered<T, R>(value: &mut T, source: R) -> io::Result<u64>
where
    T: ReaderFrom + ?Sized,
    R: Read,
{
    let mut reader: BufReader<R> = BufReader::new(source);
    value.read_from(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::{BinarySize, Vector};

    #[test]
    fn write_buffered_flushes_to_the_sink() {
        let v: Vector<u32> = Vector(vec![3, 1, 4, 1, 5]);

        let mut sink: Vec<u8> = Vec::new();
        let written = write_buffered(&v, &mut sink).unwrap();
        assert_eq!(written as usize, v.binary_size());
        // Every byte is visible in the underlying sink once the call
        // returns; nothing is held in the dropped buffer.
        assert_eq!(sink.len(), v.binary_size());
    }

    #[test]
    fn buffered_round_trip() {
        let v: Vector<i64> = Vector(vec![-9, 8, -7]);

        let mut sink: Vec<u8> = Vec::new();
        write_buffered(&v, &mut sink).unwrap();

        let mut decoded: Vector<i64> = Vector::new();
        let read = read_buffered(&mut decoded, sink.as_slice()).unwrap();
        assert_eq!(read as usize, v.binary_size());
        assert_eq!(v, decoded);
    }
}
