mod matrix;
mod ring;
mod serialization;
mod vector;

pub use matrix::*;
pub use ring::*;
pub use serialization::*;
pub use vector::*;

use rand::RngCore;

use crate::source::Source;

/// Overwrites the receiver's content with uniform random words from
/// `source`, preserving its shape.
///
/// Test-support capability: the generic round-trip checks in
/// [`crate::test_suite`] use it to populate a layout before encoding it.
pub trait FillUniform {
    fn fill_uniform(&mut self, source: &mut Source);
}

macro_rules! impl_fill_uniform_int {
    ($($ty:ty),*) => {$(
        impl FillUniform for $ty {
            fn fill_uniform(&mut self, source: &mut Source) {
                *self = source.next_u64() as $ty;
            }
        }
    )*};
}

impl_fill_uniform_int!(u8, u16, u32, u64, i8, i16, i32, i64);

// Floats are filled with integer-valued samples: exact under round-trip and
// never NaN, which would break structural-equality checks.
impl FillUniform for f32 {
    fn fill_uniform(&mut self, source: &mut Source) {
        *self = source.next_u32() as f32;
    }
}

impl FillUniform for f64 {
    fn fill_uniform(&mut self, source: &mut Source) {
        *self = source.next_u32() as f64;
    }
}
