use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use es_collections::{Map, Set, Value};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> Value {
    Value::from(format!("k{:016x}", n).as_str())
}

fn bench_map_set(c: &mut Criterion) {
    c.bench_function("map_set_1k_unique", |b| {
        let keys: Vec<Value> = lcg(1).take(1_000).map(key).collect();
        b.iter_batched(
            Map::new,
            |m| {
                for (i, k) in keys.iter().enumerate() {
                    m.set(k.clone(), Value::from(i as i32));
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_map_get_hit(c: &mut Criterion) {
    c.bench_function("map_get_hit_1k", |b| {
        let m = Map::new();
        let keys: Vec<Value> = lcg(7).take(1_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.set(k.clone(), Value::from(i as i32));
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k));
        })
    });
}

fn bench_map_get_miss(c: &mut Criterion) {
    c.bench_function("map_get_miss_1k", |b| {
        let m = Map::new();
        for (i, x) in lcg(11).take(1_000).enumerate() {
            m.set(key(x), Value::from(i as i32));
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            let k = key(miss.next().unwrap());
            black_box(m.get(&k));
        })
    });
}

fn bench_set_seed_dedup(c: &mut Criterion) {
    c.bench_function("set_seed_1k_half_dup", |b| {
        // Every value appears twice; seeding must dedup on the fly.
        let values: Vec<Value> = lcg(3)
            .take(500)
            .flat_map(|x| [key(x), key(x)])
            .collect();
        b.iter_batched(
            || values.clone(),
            |vs| black_box(Set::from_values(vs)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_entries_drain(c: &mut Criterion) {
    c.bench_function("map_entries_drain_1k", |b| {
        let m = Map::new();
        for (i, x) in lcg(5).take(1_000).enumerate() {
            m.set(key(x), Value::from(i as i32));
        }
        b.iter(|| {
            let drained: Vec<(Value, Value)> = m.entries().collect();
            black_box(drained)
        })
    });
}

criterion_group!(
    benches,
    bench_map_set,
    bench_map_get_hit,
    bench_map_get_miss,
    bench_set_seed_dedup,
    bench_entries_drain
);
criterion_main!(benches);
