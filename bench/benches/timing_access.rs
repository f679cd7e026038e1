use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, SamplingMode,
};

use boolpack::{PackedBoolArray, Word};

const SAMPLE_SIZE: usize = 30;
const WARM_UP_TIME: Duration = Duration::from_secs(5);
const MEASURE_TIME: Duration = Duration::from_secs(10);

const SEED_BITS: u64 = 334;
const SEED_QUERIES: u64 = 114514;

const NUM_BITS: &[usize] = &[1 << 10, 1 << 15, 1 << 20];
const NUM_QUERIES: usize = 1000;

fn gen_random_bits(len: usize, p: f64, seed: u64) -> Vec<bool> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_bool(p)).collect()
}

fn gen_random_ints(len: usize, min: usize, max: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(min..max)).collect()
}

fn criterion_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing_get");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    let max_nbits = *NUM_BITS.last().unwrap();
    let bits = gen_random_bits(max_nbits, 0.5, SEED_BITS);

    perform_get(&mut group, &bits);
}

fn criterion_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing_set");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    let max_nbits = *NUM_BITS.last().unwrap();
    let bits = gen_random_bits(max_nbits, 0.5, SEED_BITS);

    perform_set(&mut group, &bits);
}

fn run_get_queries<W: Word>(pa: &PackedBoolArray<W>, queries: &[usize]) {
    let mut sum = 0;
    for &q in queries {
        sum += pa.get(q).unwrap() as usize;
    }
    if sum == 0 {
        panic!("Should not come.");
    }
}

fn run_set_queries<W: Word>(pa: &mut PackedBoolArray<W>, queries: &[usize]) {
    for &q in queries {
        pa.set(q, q & 1 == 0).unwrap();
    }
}

fn perform_get(group: &mut BenchmarkGroup<WallTime>, bits: &[bool]) {
    for &nbits in NUM_BITS {
        let bits = &bits[..nbits];
        let queries = gen_random_ints(NUM_QUERIES, 0, bits.len(), SEED_QUERIES);

        let nbits_str = format!("n_{nbits}");

        group.bench_function(format!("{nbits_str}/boolpack/u8"), |b| {
            let pa = PackedBoolArray::<u8>::from_bits(bits.iter().cloned());
            b.iter(|| run_get_queries(&pa, &queries));
        });

        group.bench_function(format!("{nbits_str}/boolpack/u32"), |b| {
            let pa = PackedBoolArray::<u32>::from_bits(bits.iter().cloned());
            b.iter(|| run_get_queries(&pa, &queries));
        });

        group.bench_function(format!("{nbits_str}/boolpack/u64"), |b| {
            let pa = PackedBoolArray::<u64>::from_bits(bits.iter().cloned());
            b.iter(|| run_get_queries(&pa, &queries));
        });

        group.bench_function(format!("{nbits_str}/std/Vec<bool>"), |b| {
            let vb = bits.to_vec();
            b.iter(|| {
                let sum = queries.iter().filter(|&&q| vb[q]).count();
                if sum == 0 {
                    panic!("Should not come.");
                }
            });
        });
    }
}

fn perform_set(group: &mut BenchmarkGroup<WallTime>, bits: &[bool]) {
    for &nbits in NUM_BITS {
        let bits = &bits[..nbits];
        let queries = gen_random_ints(NUM_QUERIES, 0, bits.len(), SEED_QUERIES);

        let nbits_str = format!("n_{nbits}");

        group.bench_function(format!("{nbits_str}/boolpack/u8"), |b| {
            let mut pa = PackedBoolArray::<u8>::from_bits(bits.iter().cloned());
            b.iter(|| run_set_queries(&mut pa, &queries));
        });

        group.bench_function(format!("{nbits_str}/boolpack/u32"), |b| {
            let mut pa = PackedBoolArray::<u32>::from_bits(bits.iter().cloned());
            b.iter(|| run_set_queries(&mut pa, &queries));
        });

        group.bench_function(format!("{nbits_str}/boolpack/u64"), |b| {
            let mut pa = PackedBoolArray::<u64>::from_bits(bits.iter().cloned());
            b.iter(|| run_set_queries(&mut pa, &queries));
        });
    }
}

criterion_group!(benches, criterion_get, criterion_set);

criterion_main!(benches);
