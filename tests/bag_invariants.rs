//! Bag invariants of spec §8: weight_sum tracks the sum of weights, size
//! matches the number of lookupable entries, and over-capacity eviction
//! preserves size == capacity.

use nars_core::bag::{priority_weight, Bag};
use nars_core::generic::MinimalPCG32;
use nars_core::sentence::Budget;
use rand::SeedableRng;

fn rng(seed: u64) -> MinimalPCG32 {
    MinimalPCG32::from_seed(seed.to_le_bytes())
}

#[test]
fn weight_sum_matches_the_sum_of_live_weights_after_a_mixed_sequence() {
    let mut bag: Bag<u32, ()> = Bag::new(5, 1.0, rng(1));
    for i in 0..5u32 {
        bag.put(i, (), Budget::new(0.1 * (i as f64 + 1.0), 0.8, 0.5)).unwrap();
    }
    bag.strengthen(&2, 0.3);
    bag.decay(&0);
    let _ = bag.take_using_key(&1);

    let expected: f64 = bag.iter().map(|(_, _, b)| priority_weight(b.priority(), 1.0)).sum();
    assert!((bag.weight_sum() - expected).abs() < 1e-9);
    assert_eq!(bag.len(), 4);
}

#[test]
fn over_capacity_eviction_preserves_capacity_as_an_upper_bound() {
    let mut bag: Bag<u32, ()> = Bag::new(3, 1.0, rng(2));
    for i in 0..10u32 {
        let _ = bag.put(i, (), Budget::new((i as f64 % 7.0) / 7.0, 0.8, 0.5)).unwrap();
        assert!(bag.len() <= bag.capacity());
    }
    assert_eq!(bag.len(), 3);
}

#[test]
fn peek_sampling_favours_higher_priority_entries() {
    let mut bag: Bag<&'static str, ()> = Bag::new(10, 1.0, rng(3));
    bag.put("hot", (), Budget::new(0.95, 0.9, 0.5)).unwrap();
    bag.put("cold", (), Budget::new(0.01, 0.9, 0.5)).unwrap();

    let mut hot_count = 0;
    for _ in 0..500 {
        if bag.peek() == Some(&"hot") {
            hot_count += 1;
        }
    }
    assert!(hot_count > 400, "expected the high-priority key to dominate sampling, got {hot_count}/500");
}
