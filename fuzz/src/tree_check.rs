#![no_main]

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use ordtree::OrderedTree;

#[derive(Arbitrary, Debug)]
enum SetMethod {
    Find { key: u16 },
    Insert { key: u16 },
    ToggleOverride,
}

fuzz_target!(|methods: Vec<SetMethod>| {
    let mut tree = OrderedTree::<u16>::new();
    let mut bt_set = BTreeSet::<u16>::new();

    for m_c in methods.chunks(1024) {
        for m in m_c {
            match m {
                SetMethod::Find { key } => {
                    assert_eq!(tree.find(key), bt_set.get(key));
                }
                SetMethod::Insert { key } => {
                    let expected = if bt_set.insert(*key) { None } else { Some(*key) };
                    let inserted = tree.insert(*key);
                    assert_eq!(inserted, expected);
                }
                SetMethod::ToggleOverride => {
                    let mode = tree.override_mode();
                    tree.set_override_mode(!mode);
                }
            }
        }
        if let Err(e) = tree.validate() {
            panic!("Invariant broken after {} keys: {e}", tree.size());
        }
    }

    assert_eq!(tree.size(), bt_set.len());
    assert!(tree.iter().eq(bt_set.iter()));
});
