//! # Demo Session
//!
//! Drives both subsystems through one scripted session. The runtime plays
//! the off-chain caller: it keeps its own copy of the authenticated map and
//! derives every witness from it.

use anyhow::{ensure, Context, Result};
use tracing::info;

use dd_01_authenticated_map::SparseMerkleMap;
use dd_02_message_registry::{encode_message, FlagSet, MessageRegistryApi};
use dd_03_batch_reducer::{BatchMessagesApi, SecretMessage};
use shared_types::{CallerId, FieldElement};

use crate::container::SubsystemContainer;

/// Agent addresses registered by the demo.
pub const DEMO_AGENTS: [u64; 3] = [0x1001, 0x1002, 0x1003];

/// Summary of a demo session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Registered addresses.
    pub address_count: u64,
    /// Addresses holding a message.
    pub messages_received: u64,
    /// Final reducer aggregate.
    pub message_number: u64,
    /// Entries dispatched.
    pub actions: u64,
}

/// Run the scripted session as `admin`, which must already be bootstrapped.
pub fn run_demo(container: &SubsystemContainer, admin: &CallerId) -> Result<DemoReport> {
    let mut map = SparseMerkleMap::new();

    for agent in DEMO_AGENTS {
        let address = FieldElement::from_u64(agent);
        container
            .registry
            .register(admin, address, &map.witness(&address))
            .with_context(|| format!("registering agent {agent:#x}"))?;
        map.set(address, FieldElement::ONE);
    }

    let flags = FlagSet::new(false, true, true, true, false, false);
    for (i, agent) in DEMO_AGENTS.iter().enumerate() {
        let address = FieldElement::from_u64(*agent);
        let payload = 5000 + i as u64;
        let encoded = encode_message(u128::from(payload), flags)?;
        container
            .registry
            .store_message(admin, &map.witness(&address), address, map.get(&address), encoded)
            .with_context(|| format!("storing message for agent {agent:#x}"))?;
        map.set(address, FieldElement::from_u64(payload));
    }

    let registry = container.registry.state();
    ensure!(registry.map_root == map.root(), "registry root diverged from local map");

    let messages = [
        SecretMessage::with_valid_checksum(1, 100, 123, 5345),
        SecretMessage::with_valid_checksum(2, 2999, 14000, 19000),
        SecretMessage::with_valid_checksum(3, 0, 0, 0),
        SecretMessage {
            check_sum: 1,
            ..SecretMessage::with_valid_checksum(4, 100, 123, 5345)
        },
    ];
    let mut prev = 0;
    for message in &messages {
        container.reducer.dispatch(admin, message, prev)?;
        prev = message.message_number;
    }

    let mut outcome = container.reducer.run_reduce(admin, false)?;
    while outcome.pending > 0 {
        outcome = container.reducer.run_reduce(admin, true)?;
    }

    let report = DemoReport {
        address_count: registry.address_count,
        messages_received: registry.messages_received,
        message_number: outcome.message_number,
        actions: container.reducer.action_count(),
    };
    info!(?report, "Demo session complete");
    Ok(report)
}
