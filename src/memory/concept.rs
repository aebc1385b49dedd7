//! A per-term record of beliefs, desires, and links (spec §3, §4.6).

use crate::bag::Bag;
use crate::config::Config;
use crate::generic::MinimalPCG32;
use crate::memory::table::{BeliefTable, DesireTable};
use crate::term::TermHandle;

/// One concept per distinct term, created lazily on first mention (spec §4.6).
pub struct Concept {
    term: TermHandle,
    beliefs: BeliefTable,
    desires: DesireTable,

    /// Structurally related concepts (subterms, compounds containing this term).
    term_links: Bag<TermHandle, ()>,
    /// Predictive-implication neighbours.
    prediction_links: Bag<TermHandle, ()>,
    /// Abductive/causal neighbours.
    explanation_links: Bag<TermHandle, ()>,
}

impl Concept {
    pub fn new(term: TermHandle, config: &Config, rng_seed: u64) -> Self {
        Self {
            term,
            beliefs: BeliefTable::new(config.belief_table_capacity.value),
            desires: DesireTable::new(config.desire_table_capacity.value),
            term_links: Bag::new(config.term_link_bag_capacity.value, 1.0, seeded_rng(rng_seed, 1)),
            prediction_links: Bag::new(config.prediction_link_bag_capacity.value, 1.0, seeded_rng(rng_seed, 2)),
            explanation_links: Bag::new(config.explanation_link_bag_capacity.value, 1.0, seeded_rng(rng_seed, 3)),
        }
    }

    pub fn term(&self) -> &TermHandle {
        &self.term
    }

    pub fn beliefs(&self) -> &BeliefTable {
        &self.beliefs
    }

    pub fn beliefs_mut(&mut self) -> &mut BeliefTable {
        &mut self.beliefs
    }

    pub fn desires(&self) -> &DesireTable {
        &self.desires
    }

    pub fn desires_mut(&mut self) -> &mut DesireTable {
        &mut self.desires
    }

    pub fn term_links(&self) -> &Bag<TermHandle, ()> {
        &self.term_links
    }

    pub fn term_links_mut(&mut self) -> &mut Bag<TermHandle, ()> {
        &mut self.term_links
    }

    pub fn prediction_links_mut(&mut self) -> &mut Bag<TermHandle, ()> {
        &mut self.prediction_links
    }

    pub fn explanation_links_mut(&mut self) -> &mut Bag<TermHandle, ()> {
        &mut self.explanation_links
    }

    /// Links `neighbour` into this concept's term-link bag at a middling
    /// priority, ignoring a duplicate link (spec §4.6: concepts are wired to
    /// every structural subterm's concept on task entry).
    pub fn link_term(&mut self, neighbour: TermHandle) {
        if !self.term_links.contains(&neighbour) {
            let _ = self.term_links.put(neighbour, (), crate::sentence::Budget::new(0.5, 0.5, 0.5));
        }
    }
}

fn seeded_rng(base_seed: u64, salt: u64) -> MinimalPCG32 {
    use rand::SeedableRng;
    MinimalPCG32::from_seed((base_seed ^ salt.wrapping_mul(0x9E3779B97F4A7C15)).to_le_bytes())
}
