use std::collections::BTreeSet;

use avl_tree::{AvlTree, Order};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(i32),
    Delete(i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-64i32..64).prop_map(Op::Insert),
        2 => (-64i32..64).prop_map(Op::Delete),
    ]
}

fn build(keys: &[i32]) -> AvlTree {
    let mut tree = AvlTree::new();
    for &k in keys {
        tree.insert(k).unwrap();
    }
    tree
}

proptest! {
    #[test]
    fn invariants_survive_any_sequence(ops in prop::collection::vec(op(), 0..200)) {
        let mut tree = AvlTree::new();
        let mut model = BTreeSet::new();
        for op in ops {
            match op {
                Op::Insert(k) => prop_assert_eq!(tree.insert(k).unwrap(), model.insert(k)),
                Op::Delete(k) => prop_assert_eq!(tree.delete(k), model.remove(&k)),
            }
            prop_assert_eq!(tree.assert_valid(), Ok(()));
        }

        let expected: Vec<i32> = model.iter().copied().collect();
        prop_assert_eq!(tree.traverse(Order::In), expected);
        prop_assert_eq!(tree.len(), model.len());
        for k in -70..70 {
            prop_assert_eq!(tree.search(k), model.contains(&k));
        }
    }

    #[test]
    fn height_stays_logarithmic(keys in prop::collection::btree_set(any::<i32>(), 1..300)) {
        let keys: Vec<i32> = keys.into_iter().collect();
        let tree = build(&keys);
        let bound = 1.45 * ((keys.len() + 2) as f64).log2();
        prop_assert!((tree.height() as f64) < bound);
    }

    #[test]
    fn duplicate_insert_is_idempotent(
        keys in prop::collection::vec(-100i32..100, 1..60),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree = build(&keys);
        let before_pre = tree.traverse(Order::Pre);
        let before_in = tree.traverse(Order::In);

        let dup = keys[pick.index(keys.len())];
        prop_assert!(!tree.insert(dup).unwrap());
        prop_assert_eq!(tree.traverse(Order::Pre), before_pre);
        prop_assert_eq!(tree.traverse(Order::In), before_in);
    }

    #[test]
    fn insert_then_delete_restores_key_set(
        keys in prop::collection::vec(-100i32..100, 0..60),
        extra in 100i32..200,
    ) {
        let mut tree = build(&keys);
        let before = tree.traverse(Order::In);

        prop_assert!(tree.insert(extra).unwrap());
        prop_assert!(tree.delete(extra));
        prop_assert_eq!(tree.traverse(Order::In), before);
        prop_assert_eq!(tree.assert_valid(), Ok(()));
    }

    #[test]
    fn in_order_is_strictly_ascending(keys in prop::collection::vec(any::<i32>(), 0..200)) {
        let tree = build(&keys);
        let walk = tree.traverse(Order::In);
        prop_assert!(walk.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn delete_of_absent_key_changes_nothing(
        keys in prop::collection::vec(-100i32..100, 0..60),
        absent in 1000i32..2000,
    ) {
        let mut tree = build(&keys);
        let rows = tree.visualize();
        prop_assert!(!tree.delete(absent));
        prop_assert_eq!(tree.visualize(), rows);
    }

    #[test]
    fn traversals_visit_every_key_once(keys in prop::collection::btree_set(-500i32..500, 0..100)) {
        let keys: Vec<i32> = keys.into_iter().collect();
        let tree = build(&keys);
        for order in Order::ALL {
            let mut walk = tree.traverse(order);
            walk.sort_unstable();
            prop_assert_eq!(&walk, &keys);
        }
        let mut rows: Vec<i32> = tree.visualize().iter().map(|r| r.key).collect();
        rows.reverse();
        prop_assert_eq!(rows, keys);
    }
}
