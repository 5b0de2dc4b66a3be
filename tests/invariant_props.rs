//! Property tests: arbitrary insert sequences against a `BTreeSet` model.

use std::collections::BTreeSet;

use proptest::prelude::*;

use ordtree::{OrderedTree, TreeStatsTrait};

proptest! {
    #[test]
    fn invariants_hold_after_every_insert(keys in prop::collection::vec(any::<i16>(), 0..300)) {
        let mut tree = OrderedTree::new();
        for key in keys {
            tree.insert(key);
            prop_assert!(tree.validate().is_ok());
        }
    }

    #[test]
    fn matches_btree_set(
        keys in prop::collection::vec(0u32..500, 0..400),
        probes in prop::collection::vec(0u32..600, 0..50),
    ) {
        let mut tree = OrderedTree::new();
        let mut model = BTreeSet::new();
        for key in keys {
            let expected = if model.insert(key) { None } else { Some(key) };
            prop_assert_eq!(tree.insert(key), expected);
        }
        prop_assert_eq!(tree.size(), model.len());
        prop_assert!(tree.iter().eq(model.iter()));
        for probe in probes {
            prop_assert_eq!(tree.find(&probe), model.get(&probe));
        }
    }

    #[test]
    fn height_is_logarithmic(keys in prop::collection::vec(any::<u64>(), 1..1000)) {
        let tree: OrderedTree<u64> = keys.into_iter().collect();
        let stats = tree.get_tree_stats();
        let bound = 2.0 * ((tree.size() + 1) as f64).log2();
        prop_assert!((stats.max_height as f64) <= bound);
    }

    #[test]
    fn duplicates_never_change_size(
        keys in prop::collection::vec(0u8..32, 1..200),
        override_mode in any::<bool>(),
    ) {
        let mut tree = OrderedTree::with_override_mode(override_mode);
        tree.extend(keys.iter().copied());
        let size = tree.size();
        let rotations = tree.rotations();
        for key in &keys {
            prop_assert_eq!(tree.insert(*key), Some(*key));
        }
        prop_assert_eq!(tree.size(), size);
        prop_assert_eq!(tree.rotations(), rotations);
    }
}
