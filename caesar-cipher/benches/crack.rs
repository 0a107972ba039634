use caesar_cipher::{crack, encrypt, ReferenceTable};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn crack_benchmark(c: &mut Criterion) {
    let plaintext = "the courier crossed the bridge before dawn carrying a sealed \
                     letter for the garrison commander, and nobody on the road that \
                     morning paid any attention to the quiet rider or the plain \
                     leather satchel on his back"
        .repeat(4);
    let ciphertext = encrypt(&plaintext, 42).unwrap();
    let reference = ReferenceTable::english();

    c.bench_function("crack paragraph", |b| {
        b.iter(|| crack(black_box(&ciphertext), black_box(&reference)))
    });
}

criterion_group!(benches, crack_benchmark);
criterion_main!(benches);
