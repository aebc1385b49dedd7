/*!
Concepts and the memory that holds them (spec §3, §4.6).

Grounded on `otter_sat`'s arena-of-handles design note (spec §9: "use an
arena of concepts and integer handles for cross-references, never owning
pointers"): here the "handle" is a [TermHandle], already a cheap `Rc` clone,
and the arena is a [Bag] rather than a flat `Vec`, since concepts themselves
are subject to the same priority-bounded eviction as everything else in the
engine.
*/

pub mod concept;
pub mod table;

pub use concept::Concept;

use log::{debug, trace};

use crate::bag::Bag;
use crate::config::Config;
use crate::generic::MinimalPCG32;
use crate::sentence::Budget;
use crate::term::{Interner, TermData, TermHandle};

/// One [Bag] of [Concept]s, created lazily on first mention of their term.
pub struct Memory {
    concepts: Bag<TermHandle, Concept>,
}

impl Memory {
    pub fn new(capacity: usize, rng: MinimalPCG32) -> Self {
        Self {
            concepts: Bag::new(capacity, 1.0, rng),
        }
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Looks a concept up by its term's canonical string (spec §4.6: "a
    /// lookup by canonical term string"), without creating one.
    pub fn lookup_canonical(&self, canonical: &str, interner: &Interner) -> Option<&Concept> {
        let term = interner.lookup(canonical)?;
        self.concepts.peek_using_key(&term)
    }

    pub fn contains(&self, term: &TermHandle) -> bool {
        self.concepts.contains(term)
    }

    pub fn get(&self, term: &TermHandle) -> Option<&Concept> {
        self.concepts.peek_using_key(term)
    }

    /// Returns the concept for `term`, creating it (and inserting it into
    /// the bag at a middling budget) if this is its first mention.
    pub fn concept_mut(&mut self, term: &TermHandle, config: &Config, rng_seed: u64) -> &mut Concept {
        if !self.concepts.contains(term) {
            debug!(target: "concept", "creating concept for {term}");
            let concept = Concept::new(term.clone(), config, rng_seed);
            let _ = self.concepts.put(term.clone(), concept, Budget::new(0.5, 0.8, 0.5));
        }
        self.concepts.get_mut(term).expect("just ensured the concept exists")
    }

    pub fn peek(&mut self) -> Option<&TermHandle> {
        self.concepts.peek()
    }

    pub fn peek_max(&self) -> Option<&TermHandle> {
        self.concepts.peek_max()
    }

    /// Creates (if needed) concepts for every immediate structural subterm
    /// of `term` -- subterms of a compound, or the subject/predicate of a
    /// statement -- and links each into `term`'s concept's term-link bag,
    /// and `term`'s concept into each neighbour's (spec §4.6). One level
    /// deep: deeper relations emerge as those subterms are themselves
    /// mentioned and wired on their own turn (a deliberate scoping decision,
    /// recorded in `DESIGN.md`, that bounds the per-task wiring cost).
    pub fn wire_term_links(&mut self, term: &TermHandle, config: &Config, rng_seed: u64) {
        let neighbours = immediate_subterms(term);
        if neighbours.is_empty() {
            return;
        }
        trace!(target: "concept", "wiring {term} to {} immediate subterm(s)", neighbours.len());
        for neighbour in &neighbours {
            self.concept_mut(neighbour, config, rng_seed);
        }
        self.concept_mut(term, config, rng_seed);

        for neighbour in neighbours {
            self.concept_mut(term, config, rng_seed).link_term(neighbour.clone());
            self.concept_mut(&neighbour, config, rng_seed).link_term(term.clone());
        }
    }
}

fn immediate_subterms(term: &TermHandle) -> Vec<TermHandle> {
    match term.data() {
        TermData::Atomic(_) | TermData::Variable(_) | TermData::Array(_) => Vec::new(),
        TermData::Compound(compound) => compound.subterms.clone(),
        TermData::Statement { subject, predicate, .. } => vec![subject.clone(), predicate.clone()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::term_from_string;
    use rand::SeedableRng;

    #[test]
    fn first_mention_creates_a_concept() {
        let mut interner = Interner::default();
        let term = term_from_string("(A-->B)", &mut interner).unwrap();
        let config = Config::default();
        let mut memory = Memory::new(100, MinimalPCG32::from_seed(1u64.to_le_bytes()));
        assert!(!memory.contains(&term));
        memory.concept_mut(&term, &config, 1);
        assert!(memory.contains(&term));
    }

    #[test]
    fn wiring_links_subject_and_predicate() {
        let mut interner = Interner::default();
        let term = term_from_string("(A-->B)", &mut interner).unwrap();
        let a = term_from_string("A", &mut interner).unwrap();
        let config = Config::default();
        let mut memory = Memory::new(100, MinimalPCG32::from_seed(1u64.to_le_bytes()));
        memory.wire_term_links(&term, &config, 1);
        assert!(memory.get(&a).unwrap().term_links().contains(&term));
        assert!(memory.get(&term).unwrap().term_links().contains(&a));
    }
}
