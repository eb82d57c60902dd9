use std::io::{Error, ErrorKind, Read, Result, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use rlwe_layouts::layouts::{
    BinarySize, FillUniform, Matrix, ReaderFrom, RingQP, Vector, WriterTo,
};
use rlwe_layouts::source::Source;

use crate::layouts::{CiphertextQP, GadgetLayout};

/// Digit-decomposed encryption of one value: one [`CiphertextQP`] per
/// (RNS block, base-2 digit) pair, used for noise-controlled key
/// switching. Rows of the matrix are the RNS decomposition blocks; the
/// entries of row `i` are the base-2 digits of block `i`, so rows can be
/// ragged.
///
/// Wire format: `[base_two_decomposition: u64][Matrix<CiphertextQP>]`.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct GadgetCiphertext {
    /// Digit width in bits of the base-2 decomposition; 0 means a single
    /// digit per block.
    pub base_two_decomposition: usize,
    pub value: Matrix<CiphertextQP>,
}

impl GadgetCiphertext {
    /// Allocates a zero-valued gadget ciphertext in the NTT domain.
    ///
    /// # Panics
    ///
    /// Panics if a level of `layout` exceeds its chain in `ring`.
    pub fn new(ring: &RingQP, layout: GadgetLayout) -> Self {
        let digits: Vec<usize> = layout.base_two_decomposition_size(ring.ring_q());
        let value: Matrix<CiphertextQP> = Matrix(
            digits
                .iter()
                .map(|&d| {
                    Vector(vec![CiphertextQP::new(ring, layout.level_q, layout.level_p); d])
                })
                .collect(),
        );
        Self {
            base_two_decomposition: layout.base_two_decomposition,
            value,
        }
    }

    /// Level of the modulus Q, read from the first entry.
    pub fn level_q(&self) -> usize {
        self.value[0][0].level_q()
    }

    /// Level of the auxiliary modulus P, read from the first entry.
    pub fn level_p(&self) -> Option<usize> {
        self.value[0][0].level_p()
    }

    /// Number of RNS decomposition blocks (matrix rows).
    pub fn rns_decomposition_size(&self) -> usize {
        self.value.rows()
    }

    pub fn layout(&self) -> GadgetLayout {
        GadgetLayout {
            level_q: self.level_q(),
            level_p: self.level_p(),
            base_two_decomposition: self.base_two_decomposition,
        }
    }

    // Every entry sits at the level pair of the first one; enforced after
    // reads so a malformed stream cannot produce an inconsistent gadget.
    fn validate_levels(&self) -> Result<()> {
        let level_q: usize = self.level_q();
        let level_p: Option<usize> = self.level_p();
        for (i, row) in self.value.iter().enumerate() {
            for (j, entry) in row.iter().enumerate() {
                if entry.level_q() != level_q || entry.level_p() != level_p {
                    return Err(Error::new(
                        ErrorKind::InvalidData,
                        format!("gadget entry ({i}, {j}) level does not match entry (0, 0)"),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl BinarySize for GadgetCiphertext {
    fn binary_size(&self) -> usize {
        8 + self.value.binary_size()
    }
}

impl WriterTo for GadgetCiphertext {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64> {
        writer.write_u64::<LittleEndian>(self.base_two_decomposition as u64)?;
        Ok(8 + self.value.write_to(writer)?)
    }
}

impl ReaderFrom for GadgetCiphertext {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
        self.base_two_decomposition = reader.read_u64::<LittleEndian>()? as usize;
        let read: u64 = 8 + self.value.read_from(reader)?;
        if self.value.is_empty() || self.value[0].is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "gadget ciphertext has no entries",
            ));
        }
        self.validate_levels()?;
        Ok(read)
    }
}

impl FillUniform for GadgetCiphertext {
    fn fill_uniform(&mut self, source: &mut Source) {
        self.value.fill_uniform(source);
    }
}
