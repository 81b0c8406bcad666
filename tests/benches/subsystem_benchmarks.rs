//! # Dead-Drop Subsystem Benchmarks
//!
//! | Subsystem | Operation | Shape |
//! |-----------|-----------|-------|
//! | dd-01 Authenticated Map | witness generation + root recomputation | 256 hashes |
//! | dd-02 Message Registry | register / store against a live root | 512 hashes |
//! | dd-02 Flag Codec | encode + decode | O(1) |
//! | dd-03 Batch Reducer | fold per budget slice | O(budget) |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use dd_01_authenticated_map::{KeyWitness, SparseMerkleMap};
use dd_02_message_registry::{
    decode_message, encode_message, FlagSet, InMemoryEventPublisher as RegistryEvents,
    MessageRegistryApi, MessageRegistryService, RegistryConfig,
};
use dd_03_batch_reducer::{
    fold_entries, BatchMessagesApi, BatchMessagesService, InMemoryEventPublisher as ReducerEvents,
    LogEntry, ReducerConfig, SecretMessage,
};
use shared_types::{CallerId, FieldElement};

// ============================================================================
// DD-01: Authenticated Map
// ============================================================================

fn bench_authenticated_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("dd-01-authenticated-map");
    group.measurement_time(Duration::from_secs(5));

    let mut rng = rand::thread_rng();
    let mut map = SparseMerkleMap::new();
    for _ in 0..100 {
        map.set(FieldElement::from_u64(rng.gen()), FieldElement::ONE);
    }
    let key = FieldElement::from_u64(rng.gen());

    group.bench_function("witness", |b| b.iter(|| black_box(map.witness(&key))));

    let witness = map.witness(&key);
    group.bench_function("compute_root_and_key", |b| {
        b.iter(|| black_box(witness.compute_root_and_key(&FieldElement::ZERO)))
    });

    group.finish();
}

// ============================================================================
// DD-02: Message Registry
// ============================================================================

fn bench_message_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("dd-02-message-registry");
    let admin = CallerId([0xAD; 32]);

    group.bench_function("flag_codec_round_trip", |b| {
        let flags = FlagSet::new(true, true, true, false, true, false);
        b.iter(|| {
            let packed = encode_message(black_box(123_456_789), flags).ok();
            black_box(packed.map(decode_message))
        })
    });

    group.bench_function("register_and_store", |b| {
        b.iter_with_setup(
            || {
                let registry = MessageRegistryService::new(
                    RegistryConfig::default(),
                    Arc::new(RegistryEvents::new()),
                );
                let _ = registry.set_admin(&admin);
                (registry, SparseMerkleMap::new())
            },
            |(registry, mut map)| {
                let address = FieldElement::from_u64(42);
                let _ = registry.register(&admin, address, &map.witness(&address));
                map.set(address, FieldElement::ONE);
                if let Ok(encoded) = encode_message(777, FlagSet::default()) {
                    let _ = registry.store_message(
                        &admin,
                        &map.witness(&address),
                        address,
                        FieldElement::ONE,
                        encoded,
                    );
                }
                black_box(registry.state())
            },
        )
    });

    group.finish();
}

// ============================================================================
// DD-03: Batch Reducer
// ============================================================================

fn bench_batch_reducer(c: &mut Criterion) {
    let mut group = c.benchmark_group("dd-03-batch-reducer");
    let admin = CallerId([0xAD; 32]);
    let mut rng = rand::thread_rng();

    for size in [64usize, 1024, 16_384] {
        let entries: Vec<LogEntry> = (0..size)
            .map(|_| LogEntry {
                is_valid: rng.gen_bool(0.8),
                message_number: rng.gen_range(1..1_000_000),
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("fold_entries", size), &entries, |b, entries| {
            b.iter(|| black_box(fold_entries(0, entries)))
        });
    }

    group.bench_function("dispatch_and_reduce_1024", |b| {
        b.iter_with_setup(
            || {
                let reducer = BatchMessagesService::new(
                    ReducerConfig::default(),
                    Arc::new(ReducerEvents::new()),
                );
                let _ = reducer.set_admin(&admin);
                reducer
            },
            |reducer| {
                for n in 1..=1024u64 {
                    let message = SecretMessage::with_valid_checksum(n, 100, 123, 5345);
                    let _ = reducer.dispatch(&admin, &message, n - 1);
                }
                black_box(reducer.run_reduce(&admin, false).ok())
            },
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_authenticated_map,
    bench_message_registry,
    bench_batch_reducer,
);
criterion_main!(benches);
