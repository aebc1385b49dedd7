//! Stamps: the metadata carried by every sentence (spec §3).

use crate::types::{OccurrenceTime, StampId};

/// Evidential base and interaction history attached to every sentence.
///
/// Evidential bases are capped at construction (spec §3: "a bounded set of
/// premise ids"); callers combining two premises must check
/// [Stamp::shares_evidence_with] first -- the dispatcher does this for them
/// (spec §4.4/§7, `EvidentialOverlap`).
#[derive(Debug, Clone)]
pub struct Stamp {
    id: StampId,
    occurrence: OccurrenceTime,
    evidential_base: Vec<StampId>,
    interacted_with: Vec<StampId>,
    derived_by: Option<&'static str>,
    parents: Vec<StampId>,
}

impl Stamp {
    /// A fresh stamp for input (not derived) sentences: its own id is its
    /// sole evidential base member.
    pub fn input(id: StampId, occurrence: OccurrenceTime) -> Self {
        Self {
            id,
            occurrence,
            evidential_base: vec![id],
            interacted_with: Vec::new(),
            derived_by: None,
            parents: Vec::new(),
        }
    }

    /// A stamp for a sentence derived from `parents`, whose evidential bases
    /// are unioned and capped at `base_cap` (spec §3, §8: "evidential base of
    /// any two-premise derivation is the set union of parents'").
    pub fn derived(
        id: StampId,
        occurrence: OccurrenceTime,
        derived_by: &'static str,
        parents: &[&Stamp],
        base_cap: usize,
    ) -> Self {
        let mut evidential_base: Vec<StampId> = parents.iter().flat_map(|p| p.evidential_base.iter().copied()).collect();
        evidential_base.sort_unstable();
        evidential_base.dedup();
        evidential_base.truncate(base_cap);

        Self {
            id,
            occurrence,
            evidential_base,
            interacted_with: Vec::new(),
            derived_by: Some(derived_by),
            parents: parents.iter().map(|p| p.id).collect(),
        }
    }

    pub fn id(&self) -> StampId {
        self.id
    }

    pub fn occurrence(&self) -> OccurrenceTime {
        self.occurrence
    }

    pub fn is_event(&self) -> bool {
        self.occurrence.is_some()
    }

    pub fn evidential_base(&self) -> &[StampId] {
        &self.evidential_base
    }

    pub fn derived_by(&self) -> Option<&'static str> {
        self.derived_by
    }

    pub fn parents(&self) -> &[StampId] {
        &self.parents
    }

    /// True iff `self` and `other`'s evidential bases share a member. Two
    /// premises with overlapping evidential bases may not be combined by a
    /// two-premise rule (spec §4.3's forbidden input, §7's `EvidentialOverlap`).
    pub fn shares_evidence_with(&self, other: &Stamp) -> bool {
        self.evidential_base.iter().any(|id| other.evidential_base.contains(id))
    }

    /// True iff `self` has already been combined with `other_id` (spec §4.4:
    /// "the two source sentences are marked as mutually interacted").
    pub fn has_interacted_with(&self, other_id: StampId) -> bool {
        self.interacted_with.contains(&other_id)
    }

    /// Records that `self` has now been combined with `other_id`.
    pub fn mark_interacted(&mut self, other_id: StampId) {
        if !self.interacted_with.contains(&other_id) {
            self.interacted_with.push(other_id);
        }
    }
}

/// Issues monotonically increasing [StampId]s. A field of
/// [Engine](crate::context::Engine), never a global counter (spec §5, §9).
#[derive(Debug, Default)]
pub struct StampIssuer {
    next: StampId,
}

impl StampIssuer {
    pub fn issue(&mut self) -> StampId {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_base_is_union_of_parents() {
        let p1 = Stamp::input(1, None);
        let p2 = Stamp::input(2, None);
        let child = Stamp::derived(3, None, "deduction", &[&p1, &p2], 100);
        assert_eq!(child.evidential_base(), &[1, 2]);
    }

    #[test]
    fn disjoint_bases_do_not_share_evidence() {
        let p1 = Stamp::input(1, None);
        let p2 = Stamp::input(2, None);
        assert!(!p1.shares_evidence_with(&p2));
    }

    #[test]
    fn derived_stamps_inherit_overlap() {
        let p1 = Stamp::input(1, None);
        let p2 = Stamp::input(2, None);
        let child = Stamp::derived(3, None, "deduction", &[&p1, &p2], 100);
        assert!(child.shares_evidence_with(&p1));
    }
}
