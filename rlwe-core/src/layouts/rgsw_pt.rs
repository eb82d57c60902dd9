use std::io::{Read, Result, Write};

use rlwe_layouts::layouts::{BinarySize, FillUniform, ReaderFrom, Ring, WriterTo};
use rlwe_layouts::source::Source;

use crate::layouts::GadgetPlaintext;

/// RGSW plaintext: an unencrypted digit-decomposed message. A renamed
/// view of [`GadgetPlaintext`]; every operation delegates to it.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct RGSWPlaintext {
    pub value: GadgetPlaintext,
}

impl RGSWPlaintext {
    /// Allocates a zero-valued plaintext in the NTT and Montgomery domain.
    pub fn new(ring_q: &Ring, level_q: usize, base_two_decomposition: usize) -> Self {
        Self {
            value: GadgetPlaintext::new(ring_q, level_q, base_two_decomposition),
        }
    }

    pub fn level_q(&self) -> usize {
        self.value.level_q()
    }

    pub fn digits(&self) -> usize {
        self.value.digits()
    }
}

impl BinarySize for RGSWPlaintext {
    fn binary_size(&self) -> usize {
        self.value.binary_size()
    }
}

impl WriterTo for RGSWPlaintext {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64> {
        self.value.write_to(writer)
    }
}

impl ReaderFrom for RGSWPlaintext {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
        self.value.read_from(reader)
    }
}

impl FillUniform for RGSWPlaintext {
    fn fill_uniform(&mut self, source: &mut Source) {
        self.value.fill_uniform(source);
    }
}
