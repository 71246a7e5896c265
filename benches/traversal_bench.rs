//! Criterion benchmarks for the traversal cursors.
//!
//! Three shapes stress different paths: a deep superclass chain (frontier
//! churn), a wide diamond lattice (dedup-set pressure), and a flattened
//! member scan (two-level cursor overhead per element).

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use typegraph::model::TypeStore;
use typegraph::query;
use typegraph::types::{MemberDecl, MemberKind, TypeId};

/// A 1000-deep class chain, each class declaring 4 methods and one
/// interface that extends the previous class's interface.
fn deep_chain() -> (TypeStore, TypeId) {
    let mut store = TypeStore::new();
    let mut prev_class: Option<TypeId> = None;
    let mut prev_iface: Option<TypeId> = None;
    let mut start = TypeId::new(0);
    for n in 0..1000 {
        let iface = store.insert_interface(&format!("I{n}"));
        let class = store.insert_class(&format!("C{n}"));
        if let Some(p) = prev_class {
            store.set_super_class(class, p);
        }
        if let Some(p) = prev_iface {
            store.add_interface(iface, p);
        }
        store.add_interface(class, iface);
        for m in 0..4 {
            store.add_method(class, MemberDecl::new(format!("m{n}_{m}"), MemberKind::Method));
        }
        prev_class = Some(class);
        prev_iface = Some(iface);
        start = class;
    }
    (store, start)
}

/// A lattice where every class implements the same 32 interfaces, forcing
/// constant dedup-set hits.
fn wide_lattice() -> (TypeStore, TypeId) {
    let mut store = TypeStore::new();
    let interfaces: Vec<TypeId> = (0..32)
        .map(|n| store.insert_interface(&format!("I{n}")))
        .collect();
    let mut below: Option<TypeId> = None;
    let mut start = TypeId::new(0);
    for n in 0..64 {
        let class = store.insert_class(&format!("C{n}"));
        for &i in &interfaces {
            store.add_interface(class, i);
        }
        if let Some(sub) = below {
            store.set_super_class(sub, class);
        } else {
            start = class;
        }
        below = Some(class);
    }
    (store, start)
}

fn bench_hierarchy_walk(c: &mut Criterion) {
    let (store, start) = deep_chain();
    c.bench_function("hierarchy/deep_chain_full_walk", |b| {
        b.iter(|| {
            let count = query::hierarchy(&store, black_box(start))
                .types()
                .unwrap()
                .count();
            black_box(count)
        })
    });

    c.bench_function("hierarchy/deep_chain_first", |b| {
        b.iter(|| {
            let first = query::hierarchy(&store, black_box(start)).first().unwrap();
            black_box(first)
        })
    });
}

fn bench_dedup_pressure(c: &mut Criterion) {
    let (store, start) = wide_lattice();
    c.bench_function("hierarchy/wide_lattice_dedup", |b| {
        b.iter(|| {
            let count = query::hierarchy(&store, black_box(start))
                .types()
                .unwrap()
                .count();
            black_box(count)
        })
    });
}

fn bench_flattened_members(c: &mut Criterion) {
    let (store, start) = deep_chain();
    c.bench_function("members/deep_chain_scan", |b| {
        b.iter(|| {
            let count = query::hierarchy(&store, black_box(start))
                .methods()
                .unwrap()
                .count();
            black_box(count)
        })
    });

    c.bench_function("members/deep_chain_take_8", |b| {
        b.iter(|| {
            let count = query::hierarchy(&store, black_box(start))
                .methods()
                .unwrap()
                .take(8)
                .count();
            black_box(count)
        })
    });
}

criterion_group!(
    benches,
    bench_hierarchy_walk,
    bench_dedup_pressure,
    bench_flattened_members
);
criterion_main!(benches);
