
use rlwe_layouts::layouts::{Ring, RingQP};

const DEGREE: usize = 64;

// 61-bit NTT-friendly primes, the shape a real modulus chain has.
const MODULI_Q: [u64; 4] = [
    0x10000000006e0001,
    0x1fffffffffe00001,
    0x1fffffffffc80001,
    0x1fffffffffb40001,
];
const MODULI_P: [u64; 2] = [0x1fffffffff500001, 0x1fffffffff380001];

fn test_ring() -> RingQP {
    RingQP::new(
        Ring::new(DEGREE, MODULI_Q.to_vec()),
        Some(Ring::new(DEGREE, MODULI_P.to_vec())),
    )
}
