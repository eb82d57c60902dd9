//! # rlwe-layouts
//!
//! Data layouts and the structured binary serialization framework for an
//! RLWE-based homomorphic-encryption library.
//!
//! Every cryptographic object in the library is a deeply nested,
//! variable-size aggregate of ring elements. This crate provides the
//! machinery those aggregates are built from:
//!
//! - **Capability traits** ([`layouts::WriterTo`], [`layouts::ReaderFrom`],
//!   [`layouts::BinarySize`], plus `Clone`/`PartialEq` for deep copy and
//!   structural equality): orthogonal contracts a type implements so that
//!   the generic containers can operate on it.
//! - **Generic containers** ([`layouts::Vector`], [`layouts::Matrix`]):
//!   homogeneous, exclusively-owning containers with a length-prefixed wire
//!   format, usable with the built-in numeric primitives or with any
//!   capability-implementing element type. Unsupported element types are
//!   rejected at compile time by the trait bounds.
//! - **Ring element layouts** ([`layouts::Poly`], [`layouts::PolyQP`]) and
//!   the chain descriptors ([`layouts::Ring`], [`layouts::RingQP`]). The
//!   polynomial arithmetic itself (NTT, Montgomery reduction, RNS basis
//!   extension) lives in the ring engine; this crate only allocates,
//!   copies, compares and serializes the data.
//! - **Buffered stream adapters** ([`buffer`]): lift a raw byte channel
//!   into a buffering decorator once per top-level codec call.
//! - **Deterministic randomness** ([`source`]) and a generic [`test_suite`]
//!   for the serialization and copy contracts.
//!
//! All multi-byte integers on the wire are little-endian.

pub mod buffer;
pub mod layouts;
pub mod source;
pub mod test_suite;
