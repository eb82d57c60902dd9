//! # rlwe-core
//!
//! Cryptographic data model for an RLWE-based homomorphic-encryption
//! library: secret keys, gadget (digit-decomposed) ciphertexts and
//! plaintexts, and the RGSW ciphertexts built from them.
//!
//! Every type here is a thin composition over the `rlwe-layouts` crate:
//! deep copy, structural equality, exact sizing and the streaming codec
//! are defined purely by delegating, in a fixed field order, to each owned
//! sub-object. Because all of them implement the same capability traits,
//! they nest transitively inside the generic containers — a multi-key
//! protocol can serialize a `Vector<RGSWCiphertext>` with no extra code.
//!
//! Key generation, encryption and the evaluation algorithms (external
//! product, blind rotation) live in the scheme layer; the types here are
//! allocated zero-valued in the NTT and Montgomery domain and populated in
//! place by those routines.

pub mod layouts;

#[cfg(test)]
mod tests;
