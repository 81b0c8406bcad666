//! # Sparse Merkle Map
//!
//! In-memory reference map producing [`MapWitness`] values.
//!
//! Only non-empty nodes are stored; any absent node is the empty subtree
//! root for its height. Setting a slot to zero removes it.

use crate::domain::{empty_subtree_roots, MapWitness, WitnessNode, MAP_DEPTH};
use shared_crypto::keccak_pair;
use shared_types::{FieldElement, Hash};
use std::collections::HashMap;

/// Depth-256 sparse Merkle map keyed by [`FieldElement`].
#[derive(Clone, Debug, Default)]
pub struct SparseMerkleMap {
    /// Non-zero slot values.
    leaves: HashMap<FieldElement, FieldElement>,
    /// Non-empty interior nodes by (height, key with low `height` bits cleared).
    nodes: HashMap<(usize, FieldElement), Hash>,
}

impl SparseMerkleMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current root.
    pub fn root(&self) -> Hash {
        self.node_at(MAP_DEPTH, FieldElement::ZERO)
    }

    /// Slot value (`FieldElement::ZERO` if unset).
    pub fn get(&self, key: &FieldElement) -> FieldElement {
        self.leaves.get(key).copied().unwrap_or(FieldElement::ZERO)
    }

    /// Number of non-zero slots.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Returns `true` if no slot is set.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Write `value` at `key` and rehash the path to the root.
    pub fn set(&mut self, key: FieldElement, value: FieldElement) {
        if value.is_zero() {
            self.leaves.remove(&key);
        } else {
            self.leaves.insert(key, value);
        }

        let empty = empty_subtree_roots();
        let mut current: Hash = value.0;

        for level in 0..MAP_DEPTH {
            let sibling = self.node_at(level, Self::sibling_prefix(&key, level));
            let parent = if key.bit(level) {
                keccak_pair(&sibling, &current)
            } else {
                keccak_pair(&current, &sibling)
            };

            let slot = (level + 1, key.with_low_bits_cleared(level + 1));
            if parent == empty[level + 1] {
                self.nodes.remove(&slot);
            } else {
                self.nodes.insert(slot, parent);
            }
            current = parent;
        }
    }

    /// Witness for `key` against the current root.
    pub fn witness(&self, key: &FieldElement) -> MapWitness {
        let path = (0..MAP_DEPTH)
            .map(|level| {
                let sibling = self.node_at(level, Self::sibling_prefix(key, level));
                if key.bit(level) {
                    WitnessNode::left(sibling)
                } else {
                    WitnessNode::right(sibling)
                }
            })
            .collect();
        MapWitness::new(path)
    }

    fn sibling_prefix(key: &FieldElement, level: usize) -> FieldElement {
        key.with_bit(level, !key.bit(level))
            .with_low_bits_cleared(level)
    }

    fn node_at(&self, height: usize, prefix: FieldElement) -> Hash {
        if height == 0 {
            return self.get(&prefix).0;
        }
        self.nodes
            .get(&(height, prefix))
            .copied()
            .unwrap_or(empty_subtree_roots()[height])
    }
}
