use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use rlwe_core::layouts::{GadgetLayout, RGSWCiphertext};
use rlwe_layouts::layouts::{FillUniform, MarshalBinary, Ring, RingQP, UnmarshalBinary};
use rlwe_layouts::source::Source;

fn bench_rgsw_serialization(c: &mut Criterion) {
    let ring = RingQP::new(
        Ring::new(1024, vec![0x1fffffffffe00001, 0x1fffffffffc80001]),
        Some(Ring::new(1024, vec![0x1fffffffffb40001])),
    );
    let layout = GadgetLayout {
        level_q: 1,
        level_p: Some(0),
        base_two_decomposition: 0,
    };

    let mut ct = RGSWCiphertext::new(&ring, layout);
    ct.fill_uniform(&mut Source::new([0u8; 32]));
    let bytes: Vec<u8> = ct.marshal_binary().unwrap();

    c.bench_function("rgsw_marshal", |b| {
        b.iter(|| black_box(&ct).marshal_binary().unwrap())
    });

    c.bench_function("rgsw_unmarshal", |b| {
        let mut receiver = RGSWCiphertext::default();
        b.iter(|| {
            receiver.unmarshal_binary(black_box(&bytes)).unwrap();
        })
    });
}

criterion_group!(benches, bench_rgsw_serialization);
criterion_main!(benches);
