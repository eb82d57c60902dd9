mod ciphertext_qp;
mod gadget_ciphertext;
mod gadget_plaintext;
mod rgsw_ct;
mod rgsw_pt;
mod secret_key;

pub use ciphertext_qp::*;
pub use gadget_ciphertext::*;
pub use gadget_plaintext::*;
pub use rgsw_ct::*;
pub use rgsw_pt::*;
pub use secret_key::*;

use rlwe_layouts::layouts::Ring;

/// Allocation-time description of a gadget structure.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct GadgetLayout {
    /// Level of the main modulus chain Q.
    pub level_q: usize,
    /// Level of the auxiliary chain P, `None` when key switching runs
    /// without an auxiliary modulus.
    pub level_p: Option<usize>,
    /// Digit width in bits of the base-2 decomposition; 0 disables it
    /// (single digit per RNS block).
    pub base_two_decomposition: usize,
}

impl GadgetLayout {
    /// Number of RNS decomposition blocks: `ceil((level_q+1)/(level_p+1))`,
    /// an absent P counting as a single-modulus block.
    pub fn rns_decomposition_size(&self) -> usize {
        (self.level_q + 1).div_ceil(self.block_size())
    }

    /// Per-block digit counts of the base-2 decomposition over `ring_q`.
    ///
    /// Block `i` covers the `level_p + 1` consecutive Q-primes starting at
    /// `i * (level_p + 1)`; the last block may cover fewer, so the counts
    /// can be ragged.
    pub fn base_two_decomposition_size(&self, ring_q: &Ring) -> Vec<usize> {
        let block: usize = self.block_size();
        (0..self.rns_decomposition_size())
            .map(|i| {
                if self.base_two_decomposition == 0 {
                    return 1;
                }
                let start: usize = i * block;
                let end: usize = ((i + 1) * block).min(self.level_q + 1);
                let bits: usize = ring_q.moduli()[start..end]
                    .iter()
                    .map(|q| 64 - q.leading_zeros() as usize)
                    .sum();
                bits.div_ceil(self.base_two_decomposition).max(1)
            })
            .collect()
    }

    fn block_size(&self) -> usize {
        self.level_p.map_or(1, |lp| lp + 1)
    }
}
