use std::fmt;
use std::io::{Error, ErrorKind, Read, Result, Write};

use byteorder::{ReadBytesExt, WriteBytesExt};

use crate::layouts::{BinarySize, FillUniform, Matrix, ReaderFrom, Vector, WriterTo};
use crate::source::Source;

/// Descriptor of one RNS modulus chain: the ring degree and the ordered
/// list of moduli. Polynomial arithmetic over the chain lives in the ring
/// engine; this type only allocates and describes element layouts.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Ring {
    degree: usize,
    moduli: Vec<u64>,
}

impl Ring {
    /// # Panics
    ///
    /// Panics if `degree` is not a power of two or the chain is empty.
    pub fn new(degree: usize, moduli: Vec<u64>) -> Self {
        assert!(
            degree.is_power_of_two(),
            "ring degree {degree} is not a power of two"
        );
        assert!(!moduli.is_empty(), "modulus chain is empty");
        Self { degree, moduli }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn moduli(&self) -> &[u64] {
        &self.moduli
    }

    /// Highest level of the chain: number of moduli minus one.
    pub fn max_level(&self) -> usize {
        self.moduli.len() - 1
    }

    /// Total bit width of the composite modulus up to `level` (inclusive).
    pub fn modulus_bits(&self, level: usize) -> usize {
        assert!(
            level <= self.max_level(),
            "level {level} exceeds max level {}",
            self.max_level()
        );
        self.moduli[..=level]
            .iter()
            .map(|q| 64 - q.leading_zeros() as usize)
            .sum()
    }

    /// Allocates a zero polynomial with `level + 1` RNS rows of `degree`
    /// coefficients each.
    pub fn new_poly(&self, level: usize) -> Poly {
        assert!(
            level <= self.max_level(),
            "level {level} exceeds max level {}",
            self.max_level()
        );
        Poly {
            coeffs: Matrix((0..=level).map(|_| Vector(vec![0u64; self.degree])).collect()),
        }
    }
}

/// RNS polynomial layout: one row of [`Poly::degree`] coefficient words
/// per modulus of the chain. The ring engine keeps coefficients in NTT and
/// Montgomery form; this crate treats them as opaque words.
///
/// Wire format and size are those of the coefficient [`Matrix<u64>`].
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Poly {
    pub coeffs: Matrix<u64>,
}

impl Poly {
    /// Level of the polynomial in its modulus chain: RNS row count minus
    /// one. Only meaningful on allocated polynomials.
    pub fn level(&self) -> usize {
        assert!(!self.coeffs.is_empty(), "level() on an unallocated Poly");
        self.coeffs.rows() - 1
    }

    pub fn degree(&self) -> usize {
        self.coeffs.first().map_or(0, |row| row.len())
    }
}

impl BinarySize for Poly {
    fn binary_size(&self) -> usize {
        self.coeffs.binary_size()
    }
}

impl WriterTo for Poly {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64> {
        self.coeffs.write_to(writer)
    }
}

impl ReaderFrom for Poly {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
        self.coeffs.read_from(reader)
    }
}

impl FillUniform for Poly {
    fn fill_uniform(&mut self, source: &mut Source) {
        self.coeffs.fill_uniform(source);
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "Poly(unallocated)");
        }
        writeln!(f, "Poly(degree={}, level={})", self.degree(), self.level())?;
        for (i, row) in self.coeffs.iter().enumerate() {
            let shown: usize = row.len().min(8);
            write!(f, "  q[{i}]: {:?}", &row[..shown])?;
            if row.len() > shown {
                write!(f, " ... ({} more)", row.len() - shown)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Ring element over the main modulus chain Q and, optionally, the
/// auxiliary chain P used during RNS key switching.
///
/// Wire format: `[has_p: u8][q][p if present]`.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct PolyQP {
    pub q: Poly,
    pub p: Option<Poly>,
}

impl PolyQP {
    pub fn level_q(&self) -> usize {
        self.q.level()
    }

    /// Level of the auxiliary chain, `None` when the element has no P
    /// component.
    pub fn level_p(&self) -> Option<usize> {
        self.p.as_ref().map(Poly::level)
    }
}

impl BinarySize for PolyQP {
    fn binary_size(&self) -> usize {
        1 + self.q.binary_size() + self.p.as_ref().map_or(0, Poly::binary_size)
    }
}

impl WriterTo for PolyQP {
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64> {
        writer.write_u8(self.p.is_some() as u8)?;
        let mut written: u64 = 1 + self.q.write_to(writer)?;
        if let Some(p) = &self.p {
            written += p.write_to(writer)?;
        }
        Ok(written)
    }
}

impl ReaderFrom for PolyQP {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<u64> {
        let has_p: u8 = reader.read_u8()?;
        let mut read: u64 = 1 + self.q.read_from(reader)?;
        match has_p {
            0 => self.p = None,
            1 => {
                // Reuse the previous P buffer when there is one.
                let mut p: Poly = self.p.take().unwrap_or_default();
                read += p.read_from(reader)?;
                self.p = Some(p);
            }
            flag => {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    format!("invalid auxiliary-modulus flag {flag}"),
                ));
            }
        }
        Ok(read)
    }
}

impl FillUniform for PolyQP {
    fn fill_uniform(&mut self, source: &mut Source) {
        self.q.fill_uniform(source);
        if let Some(p) = &mut self.p {
            p.fill_uniform(source);
        }
    }
}

/// Descriptor of the composite ring: the main chain Q and, optionally, the
/// auxiliary chain P.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct RingQP {
    ring_q: Ring,
    ring_p: Option<Ring>,
}

impl RingQP {
    pub fn new(ring_q: Ring, ring_p: Option<Ring>) -> Self {
        if let Some(p) = &ring_p {
            assert!(
                p.degree() == ring_q.degree(),
                "auxiliary chain degree {} does not match main chain degree {}",
                p.degree(),
                ring_q.degree()
            );
        }
        Self { ring_q, ring_p }
    }

    pub fn ring_q(&self) -> &Ring {
        &self.ring_q
    }

    pub fn ring_p(&self) -> Option<&Ring> {
        self.ring_p.as_ref()
    }

    /// Allocates a zero element at `(level_q, level_p)`.
    ///
    /// # Panics
    ///
    /// Panics if a P level is requested but the ring has no auxiliary
    /// chain, or a level exceeds its chain.
    pub fn new_poly_qp(&self, level_q: usize, level_p: Option<usize>) -> PolyQP {
        let p: Option<Poly> = match (level_p, &self.ring_p) {
            (Some(lp), Some(ring_p)) => Some(ring_p.new_poly(lp)),
            (None, _) => None,
            (Some(_), None) => panic!("level_p requested but the ring has no auxiliary chain"),
        };
        PolyQP {
            q: self.ring_q.new_poly(level_q),
            p,
        }
    }
}
