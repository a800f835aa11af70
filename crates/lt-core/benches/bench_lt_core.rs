use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lt_core::{brightness, encode_sorted, partition, serialize_record, LevelRecord, DEFAULT_MIN_BUFFER_LEN};

fn bench_brightness(c: &mut Criterion) {
    c.bench_function("brightness_65536", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for g in 0..=255u8 {
                for bl in 0..=255u8 {
                    acc += brightness(black_box(128), g, bl) as u32;
                }
            }
            black_box(acc)
        })
    });
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    group.sample_size(10);
    group.bench_function("full_space", |b| b.iter(|| black_box(partition())));
    group.finish();
}

fn bench_ranges(c: &mut Criterion) {
    let p = partition();
    let bucket = p.level(128).to_vec();
    c.bench_function("encode_sorted_level_128", |b| {
        b.iter(|| black_box(encode_sorted(black_box(&bucket))))
    });

    let rec = LevelRecord::from_sorted(128, &bucket);
    c.bench_function("serialize_level_128", |b| {
        b.iter(|| black_box(serialize_record(black_box(&rec), DEFAULT_MIN_BUFFER_LEN)))
    });
}

criterion_group!(benches, bench_brightness, bench_partition, bench_ranges);
criterion_main!(benches);
