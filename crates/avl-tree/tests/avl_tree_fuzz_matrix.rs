//! Long randomized insert/delete workloads checked against `BTreeSet`.

use std::collections::BTreeSet;

use avl_tree::{AvlTree, Order};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

fn workload(seed: u64, steps: usize, key_range: i32) {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut tree = AvlTree::new();
    let mut model = BTreeSet::new();

    for step in 0..steps {
        let key = rng.gen_range(-key_range..key_range);
        if rng.gen_bool(0.55) {
            assert_eq!(tree.insert(key).unwrap(), model.insert(key), "seed {seed} step {step}");
        } else {
            assert_eq!(tree.delete(key), model.remove(&key), "seed {seed} step {step}");
        }
        if let Err(e) = tree.assert_valid() {
            panic!("seed {seed} step {step}: {e}");
        }
    }

    let expected: Vec<i32> = model.into_iter().collect();
    assert_eq!(tree.traverse(Order::In), expected);
}

#[test]
fn fuzz_small_key_space() {
    for seed in 0..20 {
        workload(seed, 500, 32);
    }
}

#[test]
fn fuzz_wide_key_space() {
    for seed in 100..105 {
        workload(seed, 2_000, 1_000);
    }
}

#[test]
fn fuzz_drain_to_empty() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(7);
    let mut tree = AvlTree::new();
    let mut keys: Vec<i32> = (0..400).collect();
    for &k in &keys {
        tree.insert(k).unwrap();
    }

    // Fisher-Yates so deletions hit the tree in random order.
    for i in (1..keys.len()).rev() {
        let j = rng.gen_range(0..=i);
        keys.swap(i, j);
    }
    for k in keys {
        assert!(tree.delete(k));
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}
