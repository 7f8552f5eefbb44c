use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use slicestore::{create_store, field, Registration, Store};

#[derive(Clone)]
struct State {
    counter: usize,
    name: String,
}

fn state() -> State {
    State {
        counter: 0,
        name: "test".to_string(),
    }
}

fn store_creation_benchmark(c: &mut Criterion) {
    c.bench_function("store_creation", |b| {
        b.iter(|| create_store(black_box(state())));
    });
}

fn slice_dispatch_benchmark(c: &mut Criterion) {
    let store = create_store(state());
    let set = store
        .register(Registration::new(
            field!(State, counter),
            "set",
            |_: &usize, n: usize| n,
        ))
        .unwrap();

    c.bench_function("slice_dispatch", |b| {
        let mut i = 0;
        b.iter(|| {
            set.dispatch(black_box(i));
            i += 1;
        });
    });
}

fn whole_state_dispatch_benchmark(c: &mut Criterion) {
    let store = create_store(state());
    let rename = store
        .case("rename")
        .reduce(|s: &State, name: String| State {
            name,
            ..s.clone()
        })
        .unwrap();

    c.bench_function("whole_state_dispatch", |b| {
        b.iter(|| rename.dispatch(black_box("renamed".to_string())));
    });
}

fn meta_reducer_dispatch_benchmark(c: &mut Criterion) {
    let store = Store::builder(state())
        .meta_reducer(|_: &State, action: &slicestore::Action<'_>, _: &State| {
            black_box(action.kind());
        })
        .build();
    let inc = store
        .slice(field!(State, counter))
        .case("inc")
        .reduce(|n: &usize, ()| n + 1)
        .unwrap();

    c.bench_function("meta_reducer_dispatch", |b| {
        b.iter(|| inc.trigger());
    });
}

fn store_subscribe_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_subscribe");

    for subscriber_count in [1, 10, 100].iter() {
        let store = create_store(state());
        let inc = store
            .slice(field!(State, counter))
            .case("inc")
            .reduce(|n: &usize, ()| n + 1)
            .unwrap();

        for _ in 0..*subscriber_count {
            let _ = store.subscribe(|_| {
                // Empty subscriber
            });
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(subscriber_count),
            subscriber_count,
            |b, _| {
                b.iter(|| inc.trigger());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    store_creation_benchmark,
    slice_dispatch_benchmark,
    whole_state_dispatch_benchmark,
    meta_reducer_dispatch_benchmark,
    store_subscribe_benchmark,
);
criterion_main!(benches);
