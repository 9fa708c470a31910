//! Public key recovery benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use eckr::{CurveParameters, Signature, recover_public_keys};
use hex_literal::hex;
use p224::{
    NistP224,
    ecdsa::{SigningKey, signature::hazmat::PrehashSigner},
};
use p256::NistP256;
use sha2::{Digest, Sha256};
use std::hint::black_box;

fn p256_signature() -> Signature<NistP256> {
    Signature::from_scalars(
        hex!("350b1572ff1b72831383c1d7c15c5aba106d62af007551d22bd313f25b1dfba8"),
        hex!("bf58baa28d760df87db5e069bd2dde2080d4dbd03cd76421bdcd1cc58c82ae69"),
    )
    .unwrap()
}

fn p224_signature(digest: &[u8]) -> Signature<NistP224> {
    let signing_key = SigningKey::from_bytes(
        &hex!("d4c5b1ad3b1bc1bd0d8e7a4e4d0e4c5b1a2f3e4d5c6b7a8998a7b6c5").into(),
    )
    .unwrap();
    let sig: p224::ecdsa::Signature = signing_key.sign_prehash(digest).unwrap();
    Signature::try_from(sig).unwrap()
}

fn bench_curve_parameters<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    group.bench_function("curve parameters", |b| {
        b.iter(CurveParameters::<NistP256>::new)
    });
}

fn bench_recover_p256<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let curve = CurveParameters::<NistP256>::new().unwrap();
    let digest = Sha256::digest(b"hello world");
    let signature = p256_signature();

    group.bench_function("P-256", |b| {
        b.iter(|| recover_public_keys(&curve, black_box(&digest), black_box(&signature)))
    });
}

fn bench_recover_p224<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let curve = CurveParameters::<NistP224>::new().unwrap();
    let digest = [0x42u8; 28];
    let signature = p224_signature(&digest);

    group.bench_function("P-224 (Tonelli-Shanks)", |b| {
        b.iter(|| recover_public_keys(&curve, black_box(&digest), black_box(&signature)))
    });
}

fn bench_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("public key recovery");
    bench_curve_parameters(&mut group);
    bench_recover_p256(&mut group);
    bench_recover_p224(&mut group);
    group.finish();
}

criterion_group!(benches, bench_recovery);
criterion_main!(benches);
