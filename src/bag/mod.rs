/*!
The resource-bounded probabilistic priority container (spec §4.5).

Grounded on `otter_sat::generic::index_heap::IndexHeap`: that structure pairs
a dense `Vec` of values with a parallel position array so a value can be
found, reprioritised, or removed in time proportional to the heap depth
rather than a linear scan. [Bag] generalises the same idea to an arbitrary
hashable/orderable key (a [TermHandle](crate::term::TermHandle) or a
[StampId](crate::types::StampId) rather than a dense `usize` atom index), so
the dense position-array indirection of the original collapses into a single
`BTreeSet` ordered by `(priority, key)` -- every item in a Bag is always
"active" (unlike an `IndexHeap` atom, which can be indexed without being on
the heap), so there is no need for the original's separate add/activate
steps either.
*/

mod weight;

pub use weight::priority_weight;

use std::collections::hash_map::Entry as HashEntry;
use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use log::{debug, trace};

use crate::generic::MinimalPCG32;
use crate::sentence::Budget;
use crate::types::err::ErrorKind;

/// A total order over `f64` priorities in `[0,1]`, sound since priorities
/// are always clamped and never NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PriorityKey(f64);

impl Eq for PriorityKey {}
impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

struct Entry<V> {
    value: V,
    budget: Budget,
}

/// A bounded, priority-weighted container of `(K, V)` pairs with a [Budget] each.
pub struct Bag<K, V> {
    capacity: usize,
    items: HashMap<K, Entry<V>>,
    order: BTreeSet<(PriorityKey, K)>,
    weight_sum: f64,
    weight_exponent: f64,
    rng: MinimalPCG32,
}

impl<K: Eq + Hash + Ord + Clone, V> Bag<K, V> {
    pub fn new(capacity: usize, weight_exponent: f64, rng: MinimalPCG32) -> Self {
        Self {
            capacity,
            items: HashMap::new(),
            order: BTreeSet::new(),
            weight_sum: 0.0,
            weight_exponent,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn weight_sum(&self) -> f64 {
        self.weight_sum
    }

    pub fn contains(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    /// Inserts `value` under `key` with `budget`. If the key already exists
    /// this is a caller error (spec §4.5: "reject if item key duplicates an
    /// existing entry (caller's responsibility)"). If insertion pushes the
    /// bag over capacity, the minimum-priority item is evicted and returned.
    pub fn put(&mut self, key: K, value: V, budget: Budget) -> Result<Option<(K, V)>, ErrorKind>
    where
        K: std::fmt::Display,
    {
        if self.items.contains_key(&key) {
            return Err(ErrorKind::InvalidSentence(
                "bag item key duplicates an existing entry".into(),
            ));
        }
        let weight = priority_weight(budget.priority(), self.weight_exponent);
        self.weight_sum += weight;
        self.order.insert((PriorityKey(budget.priority()), key.clone()));
        trace!(target: "bag", "put {key} (priority {:.3})", budget.priority());
        self.items.insert(key, Entry { value, budget });

        if self.items.len() > self.capacity {
            let (PriorityKey(p), evict_key) = self.order.iter().next().cloned().expect("non-empty after insert");
            self.order.remove(&(PriorityKey(p), evict_key.clone()));
            let entry = self.items.remove(&evict_key).expect("key tracked in both maps");
            self.weight_sum -= priority_weight(entry.budget.priority(), self.weight_exponent);
            debug!(target: "bag", "evicted {evict_key} (priority {p:.3}) over capacity {}", self.capacity);
            return Ok(Some((evict_key, entry.value)));
        }
        Ok(None)
    }

    /// Samples a key from the weight distribution (uniform if the total
    /// weight is zero), without removing it.
    pub fn peek(&mut self) -> Option<&K> {
        if self.items.is_empty() {
            return None;
        }
        if self.weight_sum <= 0.0 {
            let index = (self.rng.unit_f64() * self.items.len() as f64) as usize;
            return self.items.keys().nth(index.min(self.items.len() - 1));
        }
        let target = self.rng.unit_f64() * self.weight_sum;
        let mut acc = 0.0;
        for (key, entry) in self.items.iter() {
            acc += priority_weight(entry.budget.priority(), self.weight_exponent);
            if acc >= target {
                return Some(key);
            }
        }
        self.items.keys().last()
    }

    pub fn peek_using_key(&self, key: &K) -> Option<&V> {
        self.items.get(key).map(|entry| &entry.value)
    }

    /// Mutable access to the value stored under `key`, leaving its budget
    /// and priority-order position untouched (mutating the value itself
    /// never affects where the key sits in `order`).
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.items.get_mut(key).map(|entry| &mut entry.value)
    }

    pub fn budget_of(&self, key: &K) -> Option<&Budget> {
        self.items.get(key).map(|entry| &entry.budget)
    }

    /// The currently highest-priority item, without removal.
    pub fn peek_max(&self) -> Option<&K> {
        self.order.iter().next_back().map(|(_, key)| key)
    }

    /// Removes and returns the item under `key`, if present.
    pub fn take_using_key(&mut self, key: &K) -> Option<(V, Budget)> {
        let entry = self.items.remove(key)?;
        self.order.remove(&(PriorityKey(entry.budget.priority()), key.clone()));
        self.weight_sum -= priority_weight(entry.budget.priority(), self.weight_exponent);
        Some((entry.value, entry.budget))
    }

    /// Replaces the stored budget for `key` wholesale.
    pub fn change_priority(&mut self, key: &K, new_budget: Budget) -> bool {
        self.with_budget_mut(key, |budget| *budget = new_budget)
    }

    /// Strengthens `key`'s priority by `amount` (spec §4.5, [Budget::strengthen]).
    pub fn strengthen(&mut self, key: &K, amount: f64) -> bool {
        self.with_budget_mut(key, |budget| budget.strengthen(amount))
    }

    /// Applies forgetting to `key`'s budget (spec §4.5, [Budget::decay]).
    pub fn decay(&mut self, key: &K) -> bool {
        self.with_budget_mut(key, |budget| budget.decay())
    }

    fn with_budget_mut(&mut self, key: &K, f: impl FnOnce(&mut Budget)) -> bool {
        let HashEntry::Occupied(mut occupied) = self.items.entry(key.clone()) else {
            return false;
        };
        let entry = occupied.get_mut();
        let old_priority = entry.budget.priority();
        self.weight_sum -= priority_weight(old_priority, self.weight_exponent);
        f(&mut entry.budget);
        let new_priority = entry.budget.priority();
        self.weight_sum += priority_weight(new_priority, self.weight_exponent);
        self.order.remove(&(PriorityKey(old_priority), key.clone()));
        self.order.insert((PriorityKey(new_priority), key.clone()));
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V, &Budget)> {
        self.items.iter().map(|(k, entry)| (k, &entry.value, &entry.budget))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> MinimalPCG32 {
        MinimalPCG32::from_seed(7u64.to_le_bytes())
    }

    #[test]
    fn put_peek_take_roundtrip() {
        let mut bag: Bag<&'static str, i32> = Bag::new(10, 1.0, rng());
        bag.put("a", 1, Budget::new(0.9, 0.9, 0.5)).unwrap();
        bag.put("b", 2, Budget::new(0.1, 0.9, 0.5)).unwrap();
        assert_eq!(bag.peek_max(), Some(&"a"));
        let (value, _) = bag.take_using_key(&"a").unwrap();
        assert_eq!(value, 1);
        assert!(!bag.contains(&"a"));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut bag: Bag<&'static str, i32> = Bag::new(10, 1.0, rng());
        bag.put("a", 1, Budget::new(0.5, 0.5, 0.5)).unwrap();
        assert!(bag.put("a", 2, Budget::new(0.5, 0.5, 0.5)).is_err());
    }

    #[test]
    fn over_capacity_evicts_minimum_priority() {
        let mut bag: Bag<&'static str, i32> = Bag::new(2, 1.0, rng());
        bag.put("a", 1, Budget::new(0.2, 0.9, 0.5)).unwrap();
        bag.put("b", 2, Budget::new(0.9, 0.9, 0.5)).unwrap();
        let evicted = bag.put("c", 3, Budget::new(0.5, 0.9, 0.5)).unwrap();
        assert_eq!(evicted.map(|(k, _)| k), Some("a"));
        assert_eq!(bag.len(), 2);
        assert!(bag.len() <= bag.capacity());
    }

    #[test]
    fn weight_sum_tracks_changes() {
        let mut bag: Bag<&'static str, i32> = Bag::new(10, 1.0, rng());
        bag.put("a", 1, Budget::new(0.5, 0.9, 0.5)).unwrap();
        bag.put("b", 2, Budget::new(0.5, 0.9, 0.5)).unwrap();
        bag.strengthen(&"a", 0.5);
        let expected: f64 = bag.iter().map(|(_, _, b)| priority_weight(b.priority(), 1.0)).sum();
        assert!((bag.weight_sum() - expected).abs() < 1e-9);
    }

    #[test]
    fn decay_moves_priority_toward_quality() {
        let mut bag: Bag<&'static str, i32> = Bag::new(10, 1.0, rng());
        bag.put("a", 1, Budget::new(0.9, 0.5, 0.1)).unwrap();
        bag.decay(&"a");
        assert!((bag.budget_of(&"a").unwrap().priority() - 0.5).abs() < 1e-9);
    }
}
