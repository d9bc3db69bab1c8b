use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId, Throughput};
use crypto_playground::{
    AsymmetricCipher, DigestHasher, HashAlgorithm, KeyExchange, SignatureService, SymmetricCipher,
};

fn benchmark_symmetric(c: &mut Criterion) {
    let mut group = c.benchmark_group("symmetric");
    let cipher = SymmetricCipher::new();
    let keys = cipher.generate_keys().unwrap();

    group.bench_function("generate_keys", |b| {
        b.iter(|| black_box(cipher.generate_keys().unwrap()));
    });

    for size in [16, 256, 4096] {
        let text = "x".repeat(size);
        let encrypted = cipher.encrypt(&keys.key, &keys.iv, &text).unwrap();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", size), &text, |b, text| {
            b.iter(|| black_box(cipher.encrypt(&keys.key, &keys.iv, text).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("decrypt", size), &encrypted, |b, encrypted| {
            b.iter(|| black_box(cipher.decrypt(&keys.key, &keys.iv, encrypted).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_asymmetric(c: &mut Criterion) {
    let mut group = c.benchmark_group("asymmetric");
    let cipher = AsymmetricCipher::new();
    let pair = cipher.generate_keys().unwrap();
    let encrypted = cipher.encrypt(pair.public(), "benchmark").unwrap();

    group.bench_function("generate_keys", |b| {
        b.iter(|| black_box(cipher.generate_keys().unwrap()));
    });
    group.bench_function("encrypt", |b| {
        b.iter(|| black_box(cipher.encrypt(pair.public(), "benchmark").unwrap()));
    });
    group.bench_function("decrypt", |b| {
        b.iter(|| black_box(cipher.decrypt(pair.private(), &encrypted).unwrap()));
    });

    group.finish();
}

fn benchmark_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");
    let hasher = DigestHasher::new();
    let text = "x".repeat(1024);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for algorithm in HashAlgorithm::ALL {
        group.bench_with_input(BenchmarkId::new("digest", algorithm.name()), &text, |b, text| {
            b.iter(|| black_box(hasher.digest(algorithm, text).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_key_exchange(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_exchange");
    let exchange = KeyExchange::new();
    let alice = exchange.generate_keys().unwrap();
    let bob = exchange.generate_keys().unwrap();

    group.bench_function("generate_keys", |b| {
        b.iter(|| black_box(exchange.generate_keys().unwrap()));
    });
    group.bench_function("derive", |b| {
        b.iter(|| black_box(exchange.derive(bob.public(), alice.private()).unwrap()));
    });

    group.finish();
}

fn benchmark_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature");
    let service = SignatureService::new();
    let pair = service.generate_keys().unwrap();
    let signature = service.sign(pair.private(), "abc").unwrap();

    group.bench_function("sign", |b| {
        b.iter(|| black_box(service.sign(pair.private(), "abc").unwrap()));
    });
    group.bench_function("verify", |b| {
        b.iter(|| black_box(service.verify(pair.public(), "abc", &signature).unwrap()));
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_symmetric, benchmark_asymmetric, benchmark_hash, benchmark_key_exchange, benchmark_signature
);
criterion_main!(benches);
