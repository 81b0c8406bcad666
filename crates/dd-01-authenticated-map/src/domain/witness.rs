//! # Key Witnesses
//!
//! Merkle path from a single slot up to the root of a depth-256 sparse map.
//!
//! # Algorithm
//!
//! 1. Start with the claimed slot value as the current node
//! 2. For each level `l` from the leaves upward:
//!    - If sibling is on the left: node = Keccak(sibling || node), key bit `l` = 1
//!    - If sibling is on the right: node = Keccak(node || sibling), key bit `l` = 0
//! 3. The final node is the root; the collected bits are the key

use crate::domain::errors::MapError;
use crate::ports::KeyWitness;
use serde::{Deserialize, Serialize};
use shared_crypto::keccak_pair;
use shared_types::{FieldElement, Hash, FIELD_BITS};
use std::sync::OnceLock;

/// Height of the map. One level per key bit.
pub const MAP_DEPTH: usize = FIELD_BITS;

/// Position of a sibling relative to the path node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Sibling is the left child.
    Left,
    /// Sibling is the right child.
    Right,
}

/// One level of a witness path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessNode {
    /// Sibling subtree root.
    pub sibling: Hash,
    /// Where the sibling sits.
    pub position: Position,
}

impl WitnessNode {
    /// Sibling on the left (path node is a right child).
    pub fn left(sibling: Hash) -> Self {
        Self {
            sibling,
            position: Position::Left,
        }
    }

    /// Sibling on the right (path node is a left child).
    pub fn right(sibling: Hash) -> Self {
        Self {
            sibling,
            position: Position::Right,
        }
    }
}

/// Witness for one map slot, leaf level first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapWitness {
    /// Path nodes, index 0 is the leaf's sibling.
    pub path: Vec<WitnessNode>,
}

impl MapWitness {
    /// Wrap a path.
    pub fn new(path: Vec<WitnessNode>) -> Self {
        Self { path }
    }
}

impl KeyWitness for MapWitness {
    fn compute_root_and_key(&self, value: &FieldElement) -> Result<(Hash, FieldElement), MapError> {
        if self.path.len() != MAP_DEPTH {
            return Err(MapError::MalformedWitness {
                expected: MAP_DEPTH,
                got: self.path.len(),
            });
        }

        let mut current: Hash = value.0;
        let mut key = FieldElement::ZERO;

        for (level, node) in self.path.iter().enumerate() {
            current = match node.position {
                Position::Left => {
                    key = key.with_bit(level, true);
                    keccak_pair(&node.sibling, &current)
                }
                Position::Right => keccak_pair(&current, &node.sibling),
            };
        }

        Ok((current, key))
    }
}

/// Roots of empty subtrees, indexed by height (`0` = empty leaf).
pub fn empty_subtree_roots() -> &'static [Hash; MAP_DEPTH + 1] {
    static ROOTS: OnceLock<[Hash; MAP_DEPTH + 1]> = OnceLock::new();
    ROOTS.get_or_init(|| {
        let mut roots = [[0u8; 32]; MAP_DEPTH + 1];
        for height in 1..=MAP_DEPTH {
            roots[height] = keccak_pair(&roots[height - 1], &roots[height - 1]);
        }
        roots
    })
}

/// Root of a map with every slot unset.
pub fn empty_root() -> Hash {
    empty_subtree_roots()[MAP_DEPTH]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_witness_for(key: FieldElement) -> MapWitness {
        let roots = empty_subtree_roots();
        let path = (0..MAP_DEPTH)
            .map(|level| {
                if key.bit(level) {
                    WitnessNode::left(roots[level])
                } else {
                    WitnessNode::right(roots[level])
                }
            })
            .collect();
        MapWitness::new(path)
    }

    #[test]
    fn test_empty_witness_reproduces_empty_root() {
        let key = FieldElement::from_u64(0xBEEF);
        let witness = empty_witness_for(key);

        let (root, recovered) = witness.compute_root_and_key(&FieldElement::ZERO).unwrap();
        assert_eq!(root, empty_root());
        assert_eq!(recovered, key);
    }

    #[test]
    fn test_different_value_changes_root() {
        let witness = empty_witness_for(FieldElement::from_u64(9));
        let (before, _) = witness.compute_root_and_key(&FieldElement::ZERO).unwrap();
        let (after, _) = witness.compute_root_and_key(&FieldElement::ONE).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn test_short_witness_rejected() {
        let witness = MapWitness::new(vec![WitnessNode::right([0u8; 32])]);
        let result = witness.compute_root_and_key(&FieldElement::ZERO);
        assert_eq!(
            result,
            Err(MapError::MalformedWitness {
                expected: MAP_DEPTH,
                got: 1
            })
        );
    }

    #[test]
    fn test_empty_roots_chain() {
        let roots = empty_subtree_roots();
        assert_eq!(roots[0], [0u8; 32]);
        assert_eq!(roots[1], keccak_pair(&[0u8; 32], &[0u8; 32]));
        assert_ne!(roots[MAP_DEPTH], roots[MAP_DEPTH - 1]);
    }

    #[test]
    fn test_witness_serde_round_trip() {
        let witness = empty_witness_for(FieldElement::from_u64(3));
        let json = serde_json::to_string(&witness).unwrap();
        let back: MapWitness = serde_json::from_str(&json).unwrap();
        assert_eq!(witness, back);
    }
}
