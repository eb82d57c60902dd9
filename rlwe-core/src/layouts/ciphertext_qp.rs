use std::io::{Read, Result, Write};

use rlwe_layouts::layouts::{BinarySize, FillUniform, PolyQP, ReaderFrom, RingQP, WriterTo};
use rlwe_layouts::source::Source;

/// Degree-one RLWE ciphertext over the composite modulus Q·P: one
/// (body, mask) pair of ring elements. This is the entry type of gadget
/// matrices.
///
/// Wire format: the two elements concatenated in order.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct CiphertextQP {
    pub value: [PolyQP; 2],
}

impl CiphertextQP {
    pub fn new(ring: &RingQP, level_q: usize, level_p: Option<usize>) -> Self {
        Self {
            value: [
                ring.new_poly_qp(level_q, level_p),
                ring.new_poly_qp(level_q, level_p),
            ],
        }
    }

    pub fn level_q(&self) -> usize {
        self.value[0].level_q()
    }

    pub fn level_p(&self) -> Option<usize> {
        self.value[0].level_p()
    }
}

impl BinarySize for CiphertextQP {
    fn binary_size(&self) -> usize {
        self.value[0].binary_size() + self.value[1].binary_size()
    }
}

impl WriterTo for CiphertextQP {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64> {
        let mut written: u64 = self.value[0].write_to(writer)?;
        written += self.value[1].write_to(writer)?;
        Ok(written)
    }
}

impl ReaderFrom for CiphertextQP {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
        let mut read: u64 = self.value[0].read_from(reader)?;
        read += self.value[1].read_from(reader)?;
        Ok(read)
    }
}

impl FillUniform for CiphertextQP {
    fn fill_uniform(&mut self, source: &mut Source) {
        self.value[0].fill_uniform(source);
        self.value[1].fill_uniform(source);
    }
}
