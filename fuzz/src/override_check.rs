#![no_main]

use std::cmp::Ordering;
use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use ordtree::OrderedTree;

/// Ordered by `key` alone, so an equal key can carry a different `val`.
#[derive(Arbitrary, Clone, Copy, Debug)]
struct Pair {
    key: u8,
    val: u32,
}

impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Pair {}

impl PartialOrd for Pair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

fuzz_target!(|input: (bool, Vec<Pair>)| {
    let (override_mode, pairs) = input;
    let mut tree = OrderedTree::with_override_mode(override_mode);
    let mut bt_map = BTreeMap::<u8, u32>::new();

    for pair in pairs {
        let previous = tree.insert(pair).map(|p| p.val);
        let expected = match bt_map.get(&pair.key).copied() {
            Some(stored) if override_mode => {
                bt_map.insert(pair.key, pair.val);
                Some(stored)
            }
            Some(stored) => Some(stored),
            None => {
                bt_map.insert(pair.key, pair.val);
                None
            }
        };
        assert_eq!(previous, expected);
    }

    for (key, val) in bt_map.iter() {
        let probe = Pair { key: *key, val: 0 };
        let stored = tree.find(&probe).map(|p| p.val);
        assert_eq!(stored, Some(*val), "Stored value for key {key} differs");
    }
    assert_eq!(tree.size(), bt_map.len());
    assert!(tree.validate().is_ok());
});
