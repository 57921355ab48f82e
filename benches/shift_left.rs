use bignum_shift::Bignum;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::Rng;

const CAPACITY: usize = 32;
const PREGEN_COUNT: usize = 8192;

fn random_bignum(rng: &mut impl Rng) -> Bignum<CAPACITY> {
    let mut words = [0u64; CAPACITY];
    let used = rng.gen_range(1..=CAPACITY);
    for w in words.iter_mut().take(used) {
        *w = rng.gen();
    }
    Bignum::from_words(words)
}

fn bench_shift_left(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    // inputs are generated up front so the measured loop is only a struct
    // copy plus the shift itself
    let inputs: Vec<(Bignum<CAPACITY>, usize)> = (0..PREGEN_COUNT)
        .map(|_| {
            (
                random_bignum(&mut rng),
                rng.gen_range(0..Bignum::<CAPACITY>::BITS),
            )
        })
        .collect();

    let mut group = c.benchmark_group("shift_left");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("random_2048_bit", |b| {
        b.iter(|| {
            for (num, amount) in &inputs {
                let mut n = *num;
                let _ = black_box(n.shift_left(*amount));
            }
        })
    });
    group.finish();

    let mut group = c.benchmark_group("shift_left_fixed");
    // half-occupied value: every shift below has headroom to succeed
    let mut words = [0u64; CAPACITY];
    for w in words.iter_mut().take(CAPACITY / 2) {
        *w = u64::MAX;
    }
    let value: Bignum<CAPACITY> = Bignum::from_words(words);
    for amount in [1usize, 63, 64, 127] {
        group.bench_function(format!("by_{amount}"), |b| {
            b.iter(|| {
                let mut n = black_box(value);
                let _ = black_box(n.shift_left(amount));
            })
        });
    }
    group.finish();
}

criterion_group!(shift_left_bench, bench_shift_left);
criterion_main!(shift_left_bench);
