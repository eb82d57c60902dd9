use std::io::{Read, Result, Write};

use rlwe_layouts::layouts::{BinarySize, FillUniform, Poly, ReaderFrom, Ring, Vector, WriterTo};
use rlwe_layouts::source::Source;

/// Digit-decomposed plaintext: one polynomial over Q per base-2 digit,
/// in NTT and Montgomery form. A plaintext carries no mask and no P
/// component — it is the unencrypted counterpart of a gadget ciphertext.
///
/// With decomposition disabled (digit width 0) the value is a single
/// digit.
///
/// Wire format: the encoded digit vector, no extra framing.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct GadgetPlaintext {
    pub value: Vector<Poly>,
}

impl GadgetPlaintext {
    /// Allocates a zero-valued plaintext with
    /// `ceil(bits(Q at level_q) / base_two_decomposition)` digits.
    pub fn new(ring_q: &Ring, level_q: usize, base_two_decomposition: usize) -> Self {
        let digits: usize = match base_two_decomposition {
            0 => 1,
            base => ring_q.modulus_bits(level_q).div_ceil(base).max(1),
        };
        Self {
            value: (0..digits).map(|_| ring_q.new_poly(level_q)).collect(),
        }
    }

    pub fn level_q(&self) -> usize {
        self.value[0].level()
    }

    /// Number of digits of the decomposition.
    pub fn digits(&self) -> usize {
        self.value.len()
    }
}

impl BinarySize for GadgetPlaintext {
    fn binary_size(&self) -> usize {
        self.value.binary_size()
    }
}

impl WriterTo for GadgetPlaintext {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64> {
        self.value.write_to(writer)
    }
}

impl ReaderFrom for GadgetPlaintext {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
        self.value.read_from(reader)
    }
}

impl FillUniform for GadgetPlaintext {
    fn fill_uniform(&mut self, source: &mut Source) {
        self.value.fill_uniform(source);
    }
}
