//! # Integration Test Flows
//!
//! Registry and reducer driven together through their inbound ports, with a
//! caller-side `SparseMerkleMap` standing in for the off-chain map holder.
//!
//! ## Flows Tested:
//!
//! 1. **Registry lifecycle**: capacity, stale re-registration, message history
//! 2. **Optimistic concurrency**: two writers on one snapshot, one commits
//! 3. **Log path**: reduction determinism, split batches, replay safety
//! 4. **Runtime wiring**: environment config through to a running container

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Barrier};

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};

    use dd_01_authenticated_map::{MapWitness, SparseMerkleMap};
    use dd_02_message_registry::{
        encode_message, FlagSet, InMemoryEventPublisher as RegistryEvents, MessageRegistryApi,
        MessageRegistryService, RegistryConfig, RegistryError, WitnessFault,
    };
    use dd_03_batch_reducer::{
        BatchMessagesApi, BatchMessagesService, InMemoryEventPublisher as ReducerEvents,
        ReducerConfig, SecretMessage,
    };
    use node_runtime::container::load_config_from;
    use node_runtime::SubsystemContainer;
    use shared_types::{CallerId, FieldElement};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type Registry = MessageRegistryService<Arc<RegistryEvents>>;
    type Reducer = BatchMessagesService<Arc<ReducerEvents>>;

    fn admin() -> CallerId {
        CallerId([0xAD; 32])
    }

    fn create_registry(config: RegistryConfig) -> (Registry, Arc<RegistryEvents>) {
        let events = Arc::new(RegistryEvents::new());
        let registry = MessageRegistryService::new(config, events.clone());
        registry.set_admin(&admin()).unwrap();
        (registry, events)
    }

    fn create_reducer(config: ReducerConfig) -> Reducer {
        let reducer = BatchMessagesService::new(config, Arc::new(ReducerEvents::new()));
        reducer.set_admin(&admin()).unwrap();
        reducer
    }

    fn register(registry: &Registry, map: &mut SparseMerkleMap, address: FieldElement) {
        registry
            .register(&admin(), address, &map.witness(&address))
            .unwrap();
        map.set(address, FieldElement::ONE);
    }

    fn store(registry: &Registry, map: &mut SparseMerkleMap, address: FieldElement, payload: u64) -> u64 {
        let encoded = encode_message(u128::from(payload), FlagSet::default()).unwrap();
        let count = registry
            .store_message(&admin(), &map.witness(&address), address, map.get(&address), encoded)
            .unwrap();
        map.set(address, FieldElement::from_u64(payload));
        count
    }

    fn good(message_number: u64) -> SecretMessage {
        SecretMessage::with_valid_checksum(message_number, 100, 123, 5345)
    }

    fn bad(message_number: u64) -> SecretMessage {
        SecretMessage {
            check_sum: 5500,
            ..good(message_number)
        }
    }

    // =============================================================================
    // REGISTRY LIFECYCLE
    // =============================================================================

    #[test]
    fn test_registry_fills_to_capacity() {
        let (registry, _) = create_registry(RegistryConfig::default());
        let mut map = SparseMerkleMap::new();

        for agent in 1..=100u64 {
            register(&registry, &mut map, FieldElement::from_u64(agent * 7919));
        }
        assert_eq!(registry.state().address_count, 100);

        let extra = FieldElement::from_u64(1);
        assert_eq!(
            registry.register(&admin(), extra, &map.witness(&extra)),
            Err(RegistryError::CapacityExceeded { max: 100 })
        );
        assert_eq!(registry.state().map_root, map.root());
    }

    #[test]
    fn test_stale_reregistration_rejected() {
        let (registry, _) = create_registry(RegistryConfig::default());
        let mut map = SparseMerkleMap::new();
        let address = FieldElement::from_u64(77);
        let stale = map.witness(&address);

        register(&registry, &mut map, address);
        register(&registry, &mut map, FieldElement::from_u64(78));

        assert_eq!(
            registry.register(&admin(), address, &stale),
            Err(RegistryError::StaleOrInvalidWitness(WitnessFault::RootMismatch))
        );
        assert_eq!(registry.state().address_count, 2);
    }

    #[test]
    fn test_message_history_matches_reference_map() {
        let (registry, events) = create_registry(RegistryConfig::default());
        let mut map = SparseMerkleMap::new();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        let agents: Vec<FieldElement> = (0..10u64)
            .map(|i| FieldElement::from_u64(0xA000 + i))
            .collect();
        for agent in &agents {
            register(&registry, &mut map, *agent);
        }

        let mut messaged = std::collections::HashSet::new();
        for _ in 0..40 {
            let agent = agents[rng.gen_range(0..agents.len())];
            let payload = rng.gen_range(2..u64::MAX);
            let count = store(&registry, &mut map, agent, payload);
            messaged.insert(agent);
            assert_eq!(count, messaged.len() as u64);
        }

        let state = registry.state();
        assert_eq!(state.map_root, map.root());
        assert_eq!(state.messages_received, messaged.len() as u64);
        assert_eq!(events.message_counts().len(), 40);
    }

    #[test]
    fn test_store_with_flags_keeps_payload_only() {
        let (registry, _) = create_registry(RegistryConfig::default());
        let mut map = SparseMerkleMap::new();
        let address = FieldElement::from_u64(5);
        register(&registry, &mut map, address);

        let flags = FlagSet::new(true, true, true, true, false, false);
        let encoded = encode_message(9000, flags).unwrap();
        registry
            .store_message(&admin(), &map.witness(&address), address, FieldElement::ONE, encoded)
            .unwrap();
        map.set(address, FieldElement::from_u64(9000));

        assert_eq!(registry.state().map_root, map.root());
    }

    // =============================================================================
    // OPTIMISTIC CONCURRENCY
    // =============================================================================

    #[test]
    fn test_concurrent_registrations_one_commits() {
        let (registry, _) = create_registry(RegistryConfig::default());
        let map = SparseMerkleMap::new();

        let a = FieldElement::from_u64(1);
        let b = FieldElement::from_u64(2);
        let jobs: Vec<(FieldElement, MapWitness)> = vec![(a, map.witness(&a)), (b, map.witness(&b))];
        let barrier = Barrier::new(jobs.len());

        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = jobs
                .iter()
                .map(|(address, witness)| {
                    let registry = &registry;
                    let barrier = &barrier;
                    scope.spawn(move || {
                        barrier.wait();
                        registry.register(&admin(), *address, witness)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
        assert!(results.iter().any(|r| matches!(
            r,
            Err(RegistryError::StaleOrInvalidWitness(WitnessFault::RootMismatch))
        )));
        assert_eq!(registry.state().address_count, 1);
    }

    #[test]
    fn test_concurrent_stores_one_commits() {
        let (registry, _) = create_registry(RegistryConfig::default());
        let mut map = SparseMerkleMap::new();
        let address = FieldElement::from_u64(3);
        register(&registry, &mut map, address);

        let witness = map.witness(&address);
        let first = encode_message(100, FlagSet::default()).unwrap();
        let second = encode_message(200, FlagSet::default()).unwrap();

        assert!(registry
            .store_message(&admin(), &witness, address, FieldElement::ONE, first)
            .is_ok());
        assert_eq!(
            registry.store_message(&admin(), &witness, address, FieldElement::ONE, second),
            Err(RegistryError::StaleOrInvalidWitness(WitnessFault::RootMismatch))
        );

        // Retry from a fresh snapshot succeeds and counts as an update
        map.set(address, FieldElement::from_u64(100));
        let count = registry
            .store_message(&admin(), &map.witness(&address), address, FieldElement::from_u64(100), second)
            .unwrap();
        assert_eq!(count, 1);
    }

    // =============================================================================
    // LOG PATH
    // =============================================================================

    #[test]
    fn test_log_path_never_touches_registry() {
        let (registry, _) = create_registry(RegistryConfig::default());
        let reducer = create_reducer(ReducerConfig::default());
        let mut map = SparseMerkleMap::new();
        register(&registry, &mut map, FieldElement::from_u64(11));
        let before = registry.state();

        reducer.dispatch(&admin(), &good(1), 0).unwrap();
        reducer.dispatch(&admin(), &bad(2), 1).unwrap();
        reducer.run_reduce(&admin(), false).unwrap();

        assert_eq!(registry.state(), before);
    }

    #[test]
    fn test_reduction_determinism() {
        let reducer = create_reducer(ReducerConfig::default());

        for (i, message) in [good(1), good(2), good(3), good(4), bad(5)].iter().enumerate() {
            reducer.dispatch(&admin(), message, i as u64).unwrap();
        }
        assert_eq!(reducer.run_reduce(&admin(), false).unwrap().message_number, 4);

        for (i, message) in [good(1), good(2), good(3), bad(4)].iter().enumerate() {
            reducer.dispatch(&admin(), message, i as u64).unwrap();
        }
        assert_eq!(reducer.run_reduce(&admin(), false).unwrap().message_number, 3);
    }

    #[test]
    fn test_escape_hatches_on_log_path() {
        let reducer = create_reducer(ReducerConfig::default());

        // Duplicate with garbage fields still counts as valid
        let duplicate = SecretMessage {
            message_number: 9,
            agent_id: 99_999,
            agent_x_location: -5,
            agent_y_location: 0,
            check_sum: 0,
        };
        reducer.dispatch(&admin(), &duplicate, 9).unwrap();

        let agent_zero = SecretMessage {
            agent_id: 0,
            ..bad(12)
        };
        reducer.dispatch(&admin(), &agent_zero, 0).unwrap();

        assert_eq!(reducer.run_reduce(&admin(), false).unwrap().message_number, 12);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// No entry is folded twice, whatever the budget and call pattern.
        #[test]
        fn prop_cursor_safety(
            batches in prop::collection::vec(
                prop::collection::vec((1u64..1_000, any::<bool>()), 0..8),
                1..6,
            ),
            budget in 1usize..5,
        ) {
            let reducer = create_reducer(ReducerConfig { max_actions_per_reduce: budget });
            let mut folded = 0u64;
            let mut expected = 0u64;
            let mut first = true;

            for batch in &batches {
                for (number, valid) in batch {
                    let message = if *valid { good(*number) } else { bad(*number) };
                    reducer.dispatch(&admin(), &message, 0).unwrap();
                    if *valid {
                        expected = expected.max(*number);
                    }
                }
                let outcome = reducer.run_reduce(&admin(), !first).unwrap();
                folded += outcome.folded;
                first = false;
            }
            loop {
                let outcome = reducer.run_reduce(&admin(), true).unwrap();
                folded += outcome.folded;
                if outcome.pending == 0 {
                    break;
                }
            }

            prop_assert_eq!(folded, reducer.action_count());
            prop_assert_eq!(reducer.pending_actions(), 0);
            prop_assert_eq!(reducer.state().message_number, expected);
        }
    }

    // =============================================================================
    // RUNTIME WIRING
    // =============================================================================

    #[test]
    fn test_runtime_from_environment() {
        let admin_hex = "ad".repeat(32);
        let config = load_config_from(|key| match key {
            "DD_MAX_ADDRESSES" => Some("2".to_string()),
            "DD_ADMIN_ID" => Some(admin_hex.clone()),
            _ => None,
        });
        let admin_id = config.security.admin_id.unwrap();
        assert_eq!(admin_id, admin());

        let container = SubsystemContainer::new(config);
        container.bootstrap_admin(&admin_id).unwrap();

        let mut map = SparseMerkleMap::new();
        for agent in [1u64, 2] {
            let address = FieldElement::from_u64(agent);
            container
                .registry
                .register(&admin_id, address, &map.witness(&address))
                .unwrap();
            map.set(address, FieldElement::ONE);
        }

        let third = FieldElement::from_u64(3);
        assert_eq!(
            container.registry.register(&admin_id, third, &map.witness(&third)),
            Err(RegistryError::CapacityExceeded { max: 2 })
        );
        assert_eq!(container.registry_events.events().len(), 2);
    }
}
