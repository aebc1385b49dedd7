//! Bounded belief and desire tables (spec §4.6).

use crate::sentence::{Sentence, Stamp};
use crate::truth::rules::revision;
use crate::types::StampId;

/// A bounded collection of judgments for one concept, kept sorted by
/// descending confidence. Insertion of a judgment whose term matches an
/// existing entry's triggers revision (if the evidential bases are
/// disjoint) rather than a second entry (spec §4.6).
#[derive(Debug, Clone)]
pub struct BeliefTable {
    capacity: usize,
    entries: Vec<Sentence>,
}

impl BeliefTable {
    pub fn new(capacity: usize) -> Self {
        Self { capacity, entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sentence> {
        self.entries.iter()
    }

    pub fn strongest(&self) -> Option<&Sentence> {
        self.entries.first()
    }

    /// Inserts `judgment`, revising against a structurally equal belief with
    /// a disjoint evidential base, issuing the merged stamp's id from
    /// `next_id`. Returns the entry that ended up in the table at that term.
    pub fn insert(
        &mut self,
        judgment: Sentence,
        k: f64,
        next_id: &mut impl FnMut() -> StampId,
        base_cap: usize,
    ) -> &Sentence {
        let Sentence::Judgment { term, truth, stamp } = judgment else {
            panic!("BeliefTable only holds judgments");
        };

        if let Some(existing_index) = self.entries.iter().position(|s| s.term() == &term) {
            let Sentence::Judgment {
                truth: existing_truth,
                stamp: existing_stamp,
                ..
            } = &self.entries[existing_index]
            else {
                unreachable!("belief table entries are always judgments")
            };

            if !stamp.shares_evidence_with(existing_stamp) {
                let merged_truth = revision(*existing_truth, truth, k);
                let merged_stamp = Stamp::derived(next_id(), stamp.occurrence(), "revision", &[existing_stamp, &stamp], base_cap);
                self.entries[existing_index] = Sentence::Judgment {
                    term,
                    truth: merged_truth,
                    stamp: merged_stamp,
                };
            }
        } else {
            self.entries.push(Sentence::Judgment { term, truth, stamp });
        }

        self.entries
            .sort_by(|a, b| b.truth().unwrap().confidence.partial_cmp(&a.truth().unwrap().confidence).unwrap());
        self.entries.truncate(self.capacity);
        self.entries.first().expect("just inserted at least one entry")
    }

    /// Picks a belief at random, uniformly, for pairing against an incoming
    /// task (spec §4.7 step 2: "draw a semantically related belief").
    pub fn pick(&self, unit_draw: f64) -> Option<&Sentence> {
        if self.entries.is_empty() {
            return None;
        }
        let index = ((unit_draw * self.entries.len() as f64) as usize).min(self.entries.len() - 1);
        Some(&self.entries[index])
    }
}

/// The desire-table analogue of [BeliefTable], ordered by descending
/// expectation rather than confidence (spec §4.6).
#[derive(Debug, Clone)]
pub struct DesireTable {
    capacity: usize,
    entries: Vec<Sentence>,
}

impl DesireTable {
    pub fn new(capacity: usize) -> Self {
        Self { capacity, entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sentence> {
        self.entries.iter()
    }

    pub fn strongest(&self) -> Option<&Sentence> {
        self.entries.first()
    }

    pub fn insert(
        &mut self,
        goal: Sentence,
        k: f64,
        next_id: &mut impl FnMut() -> StampId,
        base_cap: usize,
    ) -> &Sentence {
        let Sentence::Goal { term, desire, stamp } = goal else {
            panic!("DesireTable only holds goals");
        };

        if let Some(existing_index) = self.entries.iter().position(|s| s.term() == &term) {
            let Sentence::Goal {
                desire: existing_desire,
                stamp: existing_stamp,
                ..
            } = &self.entries[existing_index]
            else {
                unreachable!("desire table entries are always goals")
            };

            if !stamp.shares_evidence_with(existing_stamp) {
                let merged_desire = revision(*existing_desire, desire, k);
                let merged_stamp = Stamp::derived(next_id(), stamp.occurrence(), "revision", &[existing_stamp, &stamp], base_cap);
                self.entries[existing_index] = Sentence::Goal {
                    term,
                    desire: merged_desire,
                    stamp: merged_stamp,
                };
            }
        } else {
            self.entries.push(Sentence::Goal { term, desire, stamp });
        }

        self.entries
            .sort_by(|a, b| b.expectation().unwrap().partial_cmp(&a.expectation().unwrap()).unwrap());
        self.entries.truncate(self.capacity);
        self.entries.first().expect("just inserted at least one entry")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Interner;
    use crate::truth::TruthValue;

    #[test]
    fn second_disjoint_judgment_revises_in_place() {
        let mut interner = Interner::default();
        let term = interner.atom("bird").unwrap();
        let mut table = BeliefTable::new(7);
        let mut next_id = {
            let mut n = 0u64;
            move || {
                n += 1;
                n
            }
        };

        table.insert(
            Sentence::Judgment { term: term.clone(), truth: TruthValue::new(1.0, 0.9), stamp: Stamp::input(1, None) },
            1.0,
            &mut next_id,
            100,
        );
        table.insert(
            Sentence::Judgment { term: term.clone(), truth: TruthValue::new(0.0, 0.9), stamp: Stamp::input(2, None) },
            1.0,
            &mut next_id,
            100,
        );

        assert_eq!(table.len(), 1);
        let merged = table.strongest().unwrap().truth().unwrap();
        assert!((merged.frequency - 0.5).abs() < 1e-6);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut interner = Interner::default();
        let mut table = BeliefTable::new(2);
        let mut next_id = {
            let mut n = 0u64;
            move || {
                n += 1;
                n
            }
        };
        for (name, c) in [("a", 0.9), ("b", 0.8), ("c", 0.95)] {
            let term = interner.atom(name).unwrap();
            table.insert(
                Sentence::Judgment { term, truth: TruthValue::new(1.0, c), stamp: Stamp::input(next_id(), None) },
                1.0,
                &mut next_id,
                100,
            );
        }
        assert_eq!(table.len(), 2);
    }
}
