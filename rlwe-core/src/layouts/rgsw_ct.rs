use std::io::{Error, ErrorKind, Read, Result, Write};

use rlwe_layouts::layouts::{BinarySize, FillUniform, ReaderFrom, RingQP, WriterTo};
use rlwe_layouts::source::Source;

use crate::layouts::{GadgetCiphertext, GadgetLayout};

/// RGSW ciphertext: two gadget ciphertexts, conventionally encrypting
/// `s·m` and `m` for a decomposition of the encrypted secret `s`. The
/// pairing is what enables the external product used by blind rotation.
///
/// Both halves share the same level pair and digit count.
///
/// Wire format: the two halves concatenated with no intervening header.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct RGSWCiphertext {
    pub value: [GadgetCiphertext; 2],
}

impl RGSWCiphertext {
    /// Allocates a zero-valued RGSW ciphertext in the NTT domain.
    pub fn new(ring: &RingQP, layout: GadgetLayout) -> Self {
        Self {
            value: [
                GadgetCiphertext::new(ring, layout),
                GadgetCiphertext::new(ring, layout),
            ],
        }
    }

    /// Level of the modulus Q, read from the first half.
    pub fn level_q(&self) -> usize {
        self.value[0].level_q()
    }

    /// Level of the auxiliary modulus P, read from the first half.
    pub fn level_p(&self) -> Option<usize> {
        self.value[0].level_p()
    }

    pub fn layout(&self) -> GadgetLayout {
        self.value[0].layout()
    }
}

impl BinarySize for RGSWCiphertext {
    fn binary_size(&self) -> usize {
        self.value[0].binary_size() + self.value[1].binary_size()
    }
}

impl WriterTo for RGSWCiphertext {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64> {
        let mut written: u64 = self.value[0].write_to(writer)?;
        written += self.value[1].write_to(writer)?;
        Ok(written)
    }
}

impl ReaderFrom for RGSWCiphertext {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
        let mut read: u64 = self.value[0].read_from(reader)?;
        read += self.value[1].read_from(reader)?;
        if self.value[0].layout() != self.value[1].layout()
            || self.value[0].rns_decomposition_size() != self.value[1].rns_decomposition_size()
        {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "rgsw halves disagree on levels or digit count",
            ));
        }
        Ok(read)
    }
}

impl FillUniform for RGSWCiphertext {
    fn fill_uniform(&mut self, source: &mut Source) {
        self.value[0].fill_uniform(source);
        self.value[1].fill_uniform(source);
    }
}
