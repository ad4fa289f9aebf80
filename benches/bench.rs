use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fnflow::batch::{
    map_collect_all, map_collect_all_async, map_collect_all_concurrent, map_fail_fast,
};
use fnflow::prelude::*;
use fnflow::pure;
use futures_lite::future::block_on;

fn checked(x: u64) -> Result<u64, String> {
    if x % 5 == 0 {
        Err(format!("{x} is a multiple of five"))
    } else {
        Ok(x.wrapping_mul(31))
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("compose 12", |b| {
        let inc = |x: u64| x + 1;
        let pipeline = (inc, inc, inc, inc, inc, inc, inc, inc, inc, inc, inc, inc).compose();
        b.iter(|| pipeline.apply(black_box(1)))
    });
    c.bench_function("compose3", |b| {
        let pipeline = pure::compose3(|x: u64| x + 1, |x: u64| x * 2, |x: u64| x ^ 7);
        b.iter(|| pipeline.apply(black_box(1)))
    });

    for max in [10u64, 100, 1000] {
        c.bench_function(&format!("map_fail_fast {max}"), |b| {
            b.iter(|| map_fail_fast(checked, 1..black_box(max)))
        });
        c.bench_function(&format!("map_collect_all {max}"), |b| {
            b.iter(|| map_collect_all(checked, 0..black_box(max)))
        });
        c.bench_function(&format!("map_collect_all_concurrent {max}"), |b| {
            b.iter(|| map_collect_all_concurrent(checked, 0..black_box(max)))
        });
        c.bench_function(&format!("map_collect_all_async {max}"), |b| {
            b.iter(|| {
                block_on(map_collect_all_async(
                    |x| std::future::ready(checked(x)),
                    0..black_box(max),
                ))
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
