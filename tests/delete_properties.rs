//! Property-based tests for deletion.
//!
//! Every tree is built by insertion and checked against a `BTreeSet` model.

use std::collections::BTreeSet;

use degree_btree::BTree;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

// =============================================================================
// Strategies
// =============================================================================

fn arbitrary_degree() -> impl Strategy<Value = usize> {
    2usize..=6
}

fn arbitrary_keys() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(0u16..512, 0..200)
}

fn build(t: usize, keys: &[u16]) -> BTree<u16> {
    let mut btree = BTree::new(t);
    for key in keys {
        btree.insert(*key);
    }
    btree
}

// =============================================================================
// Invariants hold and membership matches the model after every delete
// =============================================================================

proptest! {
    #[test]
    fn prop_delete_preserves_invariants_and_membership(
        t in arbitrary_degree(),
        keys in arbitrary_keys(),
        deletes in prop::collection::vec(0u16..512, 0..200),
    ) {
        let mut btree = build(t, &keys);
        let mut model: BTreeSet<u16> = keys.iter().copied().collect();

        for key in &deletes {
            btree.delete(key);
            model.remove(key);

            prop_assert_eq!(btree.validate(), Ok(()));
            prop_assert!(!btree.search(key));
            prop_assert_eq!(btree.len(), model.len());
        }

        prop_assert_eq!(btree.traverse(), model.into_iter().collect::<Vec<_>>());
    }
}

// =============================================================================
// Deleting an absent key changes nothing
// =============================================================================

proptest! {
    #[test]
    fn prop_delete_absent_key_is_noop(
        t in arbitrary_degree(),
        keys in arbitrary_keys(),
        absent in 512u16..1024,
    ) {
        let mut btree = build(t, &keys);
        let before = btree.clone();

        btree.delete(&absent);

        prop_assert_eq!(btree, before);
    }
}

// =============================================================================
// Deleting twice is the same as deleting once
// =============================================================================

proptest! {
    #[test]
    fn prop_delete_is_idempotent(
        t in arbitrary_degree(),
        keys in arbitrary_keys(),
        victim in 0u16..512,
    ) {
        let mut once = build(t, &keys);
        once.delete(&victim);

        let mut twice = once.clone();
        twice.delete(&victim);

        prop_assert_eq!(once, twice);
    }
}

// =============================================================================
// Seeded stress: shuffled inserts, shuffled deletes
// =============================================================================

#[test]
fn shuffled_delete_stress() {
    let mut rng = StdRng::seed_from_u64(0x5EED_B7EE);

    for t in 2..=8 {
        let count = rng.random_range(500..2_000u32);
        let mut keys: Vec<u32> = (0..count).collect();
        keys.shuffle(&mut rng);

        let mut btree = BTree::new(t);
        for key in &keys {
            btree.insert(*key);
        }
        assert_eq!(btree.validate(), Ok(()));

        keys.shuffle(&mut rng);
        for (removed, key) in keys.iter().enumerate() {
            btree.delete(key);
            assert!(!btree.search(key));
            assert_eq!(btree.len(), keys.len() - removed - 1);
            if removed % 50 == 0 {
                assert_eq!(btree.validate(), Ok(()));
            }
        }

        assert!(btree.is_empty());
    }
}
