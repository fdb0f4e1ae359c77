use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lcd_code::field::length_mask;
use lcd_code::{hamming_weight, hermitian_inner_product, multiply_elementwise, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vectors(len: usize, count: usize, seed: u64) -> Vec<Vector> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Vector::from_raw(rng.gen::<u64>() & length_mask(len)))
        .collect()
}

fn bench_inner_products(c: &mut Criterion) {
    let vectors = random_vectors(32, 256, 7);

    c.bench_function("hermitian_inner_product_256x256", |b| {
        b.iter(|| {
            let mut acc = 0u8;
            for &u in &vectors {
                for &v in &vectors {
                    acc ^= hermitian_inner_product(u, v);
                }
            }
            black_box(acc)
        })
    });

    c.bench_function("multiply_and_weigh_256", |b| {
        b.iter(|| {
            vectors
                .windows(2)
                .map(|pair| hamming_weight(multiply_elementwise(pair[0], pair[1])))
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_inner_products);
criterion_main!(benches);
