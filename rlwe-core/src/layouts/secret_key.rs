use std::io::{Read, Result, Write};

use rlwe_layouts::layouts::{BinarySize, FillUniform, PolyQP, ReaderFrom, RingQP, WriterTo};
use rlwe_layouts::source::Source;

/// RLWE secret key: a single ring element held in NTT and Montgomery form.
///
/// Allocated zero-valued at a chosen level pair and populated in place by
/// the key-generation routine; after that, [`Clone`] is the only
/// sanctioned way to obtain an independent instance.
///
/// Wire format: exactly the encoded ring element, no extra framing.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct SecretKey {
    pub value: PolyQP,
}

impl SecretKey {
    pub fn new(ring: &RingQP, level_q: usize, level_p: Option<usize>) -> Self {
        Self {
            value: ring.new_poly_qp(level_q, level_p),
        }
    }

    /// Level of the modulus Q of the key.
    pub fn level_q(&self) -> usize {
        self.value.level_q()
    }

    /// Level of the auxiliary modulus P, `None` when the key has no P
    /// component.
    pub fn level_p(&self) -> Option<usize> {
        self.value.level_p()
    }
}

impl BinarySize for SecretKey {
    fn binary_size(&self) -> usize {
        self.value.binary_size()
    }
}

impl WriterTo for SecretKey {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64> {
        self.value.write_to(writer)
    }
}

impl ReaderFrom for SecretKey {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
        self.value.read_from(reader)
    }
}

impl FillUniform for SecretKey {
    fn fill_uniform(&mut self, source: &mut Source) {
        self.value.fill_uniform(source);
    }
}
