/*!
The engine: the single-owner value holding every piece of mutable state and
the one entry point, [Engine::do_working_cycle], that advances it (spec §4.7,
§5, §9's "make cycle counter, intern table, SELF term fields of an explicit
Engine value, never a process-wide singleton").

Grounded on `otter_sat::context`: the same shape of one struct owning config,
counters, the domain stores, and an rng, built by a `from_config`
constructor. Unlike `otter_sat::context::generic::GenericContext<R: Rng>`,
`Engine` is not generic over its rng -- the crate has exactly one
[MinimalPCG32](crate::generic::MinimalPCG32) source of randomness (see that
type's doc comment), so there is nothing for the type parameter to abstract
over; see `DESIGN.md`.
*/

mod counters;

pub use counters::Counters;

use std::collections::VecDeque;

use log::{debug, info, trace};
use rand::SeedableRng;

use crate::config::Config;
use crate::generic::MinimalPCG32;
use crate::inference::{self, choice};
use crate::memory::{Concept, Memory};
use crate::narsese::{self, ParsedSentence};
use crate::sentence::{Budget, Sentence, StampIssuer, Task};
use crate::term::{Interner, TermHandle};
use crate::types::err::ErrorKind;

/// The engine's lifecycle stage, used by [ConfigOption](crate::config::ConfigOption)
/// to freeze knobs once it is too late to change them safely.
///
/// `otter_sat::context::specific::ContextState` has no total order (it's
/// compared only for equality); `ConfigOption::set` needs `current_state >
/// self.max_state`, so this one additionally derives `PartialOrd`/`Ord` --
/// a deliberate small divergence from the teacher's exact shape, recorded in
/// `DESIGN.md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EngineState {
    /// Before the first cycle: configuration knobs may still be changed.
    Configuration,
    /// After the first cycle has run.
    Running,
}

impl std::fmt::Display for EngineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Running => write!(f, "running"),
        }
    }
}

/// The reasoning core (spec §1-§2): term/sentence model, truth calculus,
/// dispatcher, Bag/Concept/Memory, and the working cycle, all behind one
/// owned value.
pub struct Engine {
    config: Config,
    state: EngineState,
    counters: Counters,
    interner: Interner,
    stamps: StampIssuer,
    memory: Memory,
    experience: crate::bag::Bag<u64, Task>,
    intake: VecDeque<Task>,
    rng: MinimalPCG32,
    self_term: TermHandle,
    /// Terms of outstanding questions, so a derivation matching one can be
    /// recorded as an answer (spec §4.7 step 3).
    questions: Vec<TermHandle>,
    answers: std::collections::HashMap<String, Sentence>,
}

impl Engine {
    /// Builds a fresh engine from `config`, seeding the rng and the SELF term
    /// (spec §9: "initialise the SELF term at engine construction"),
    /// grounded on `otter_sat::context::specific::Context::from_config`.
    pub fn from_config(config: Config) -> Self {
        let rng = MinimalPCG32::from_seed(config.rng_seed.value.to_le_bytes());
        let mut interner = Interner::default();
        let self_term = interner.self_term();
        let memory = Memory::new(config.concept_bag_capacity.value, MinimalPCG32::from_seed((config.rng_seed.value ^ 1).to_le_bytes()));
        let experience = crate::bag::Bag::new(
            config.experience_bag_capacity.value,
            config.priority_weight_exponent.value,
            MinimalPCG32::from_seed((config.rng_seed.value ^ 2).to_le_bytes()),
        );
        let intake_capacity = config.intake_capacity.value;

        info!(target: "cycle", "engine constructed (seed={})", config.rng_seed.value);

        Self {
            config,
            state: EngineState::Configuration,
            counters: Counters::default(),
            interner,
            stamps: StampIssuer::default(),
            memory,
            experience,
            intake: VecDeque::with_capacity(intake_capacity.min(1024)),
            rng,
            self_term,
            questions: Vec::new(),
            answers: std::collections::HashMap::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn cycles_elapsed(&self) -> u64 {
        self.counters.cycles
    }

    pub fn tasks_processed(&self) -> u64 {
        self.counters.tasks_processed
    }

    pub fn self_term(&self) -> &TermHandle {
        &self.self_term
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Looks a concept up by its term (spec §6's `query_concept`).
    pub fn query_concept(&self, term: &TermHandle) -> Option<&Concept> {
        self.memory.get(term)
    }

    /// The best recorded answer to the question `term`, if any (spec §4.7
    /// step 3, §4.3 Choice).
    pub fn answer_for(&self, term: &TermHandle) -> Option<&Sentence> {
        self.answers.get(term.canonical())
    }

    /// Parses and queues one line of input (spec §6's `add_input`).
    ///
    /// Reserved words (`count`, `cycle`, `save`, `load`) are rejected here as
    /// [ErrorKind::ReservedWord] rather than queued -- a cycle-driving
    /// embedder (e.g. `nars_cli`) intercepts them itself before calling this.
    pub fn add_input(&mut self, line: &str) -> Result<(), ErrorKind> {
        let (parsed, occurrence) = narsese::sentence_from_string(line, &mut self.interner)?;
        let occurrence = occurrence.map(|_| self.counters.cycles);
        let id = self.stamps.issue();
        let sentence = parsed_into_sentence(parsed, id, occurrence);

        self.track_if_question(&sentence);

        let budget = Budget::new(0.8, 0.9, initial_quality(&sentence));
        let task = Task::input(sentence, budget);

        if self.intake.len() >= self.config.intake_capacity.value {
            let dropped = self.intake.pop_front();
            debug!(target: "cycle", "intake at capacity, dropping oldest pending input: {:?}", dropped.map(|t| t.sentence().to_string()));
        }
        self.intake.push_back(task);
        Ok(())
    }

    /// Runs exactly one working cycle to completion (spec §4.7, §5's sole
    /// entry point for advancing state). Returns every answer recorded this
    /// cycle.
    pub fn do_working_cycle(&mut self) -> Vec<Sentence> {
        self.state = EngineState::Running;
        let mut new_answers = Vec::new();

        // Step 1: intake.
        if let Some(task) = self.intake.pop_front() {
            let key = task.sentence().stamp().id();
            let budget = *task.budget();
            trace!(target: "cycle", "intake -> experience: {task}");
            let _ = self.experience.put(key, task, budget);
        }

        // Step 2: probabilistic task + concept + belief selection.
        let Some(&task_key) = self.experience.peek() else {
            self.counters.cycles += 1;
            return new_answers;
        };
        let task_key = task_key;
        let task_term = self.experience.peek_using_key(&task_key).unwrap().sentence().term().clone();

        self.memory.wire_term_links(&task_term, &self.config, self.config.rng_seed.value);

        // A task's own judgment/goal is committed to its concept's table as
        // soon as it is processed, input or derived alike -- otherwise an
        // input sentence could never itself be drawn as a belief for a later
        // task to pair against (spec §4.6/§4.7).
        let own_sentence = self.experience.peek_using_key(&task_key).unwrap().sentence().clone();
        self.insert_into_tables(&task_term, own_sentence);

        let concept_term = self.select_concept_term(&task_term);
        let Some(concept_term) = concept_term else {
            self.counters.cycles += 1;
            return new_answers;
        };

        let draw = self.rng.unit_f64();
        let belief = {
            let concept = self.memory.concept_mut(&concept_term, &self.config, self.config.rng_seed.value);
            concept.beliefs().pick(draw).cloned()
        };

        // Step 3: dispatch and insert derivations.
        if let Some(belief) = belief {
            let task_sentence = self.experience.peek_using_key(&task_key).unwrap().sentence().clone();
            let k = self.config.k.value;
            let base_cap = self.config.evidential_base_cap.value;
            let mut next_id = || self.stamps.issue();
            let derivations = inference::dispatch(&task_sentence, &belief, k, base_cap, &mut self.interner, &mut next_id);

            debug!(target: "dispatch", "{} x {} -> {} derivation(s)", task_sentence, belief, derivations.len());

            for derivation in derivations {
                self.record_if_answer(&derivation, &mut new_answers);
                self.insert_derivation(derivation);
            }

            if let Some(task_entry) = self.experience.get_mut(&task_key) {
                task_entry.budget_mut().strengthen(0.1);
            }
            self.memory.concept_mut(&concept_term, &self.config, self.config.rng_seed.value).term_links_mut().strengthen(&task_term, 0.05);
        }

        // Step 4: decay the touched task.
        self.experience.decay(&task_key);

        // Step 5: advance the cycle counter.
        self.counters.cycles += 1;
        self.counters.tasks_processed += 1;
        new_answers
    }

    /// Either the task's own concept or a neighbour reached by walking its
    /// term-links (spec §4.7 step 2).
    ///
    /// [Memory::wire_term_links] only wires one level deep (a statement to
    /// its immediate subterms, not transitively to every other statement
    /// sharing one), so a single hop from a statement task only ever reaches
    /// atom concepts, which never hold a belief worth pairing against. A
    /// second hop -- atom back out to one of *its* other statement
    /// neighbours -- is what actually surfaces a semantically related
    /// statement belief (e.g. `(M-->P)` when the task is `(S-->M)`, both
    /// sharing the subterm `M`); see `DESIGN.md`.
    fn select_concept_term(&mut self, task_term: &TermHandle) -> Option<TermHandle> {
        if self.rng.unit_f64() < 0.3 {
            return Some(task_term.clone());
        }
        let pivot = self
            .memory
            .concept_mut(task_term, &self.config, self.config.rng_seed.value)
            .term_links_mut()
            .peek()
            .cloned();
        let Some(pivot) = pivot else {
            return Some(task_term.clone());
        };
        let neighbour = self
            .memory
            .concept_mut(&pivot, &self.config, self.config.rng_seed.value)
            .term_links_mut()
            .peek()
            .cloned();
        Some(neighbour.unwrap_or(pivot))
    }

    /// Commits `sentence` into its own term's concept's belief or desire
    /// table (a no-op for a question), wiring that concept's term-links
    /// first so the commit is reachable by [select_concept_term](Self::select_concept_term).
    fn insert_into_tables(&mut self, term: &TermHandle, sentence: Sentence) {
        let base_cap = self.config.evidential_base_cap.value;
        let k = self.config.k.value;
        self.memory.wire_term_links(term, &self.config, self.config.rng_seed.value);
        let concept = self.memory.concept_mut(term, &self.config, self.config.rng_seed.value);

        let mut next_id = || self.stamps.issue();
        match sentence {
            Sentence::Judgment { .. } => {
                concept.beliefs_mut().insert(sentence, k, &mut next_id, base_cap);
            }
            Sentence::Goal { .. } => {
                concept.desires_mut().insert(sentence, k, &mut next_id, base_cap);
            }
            Sentence::Question { .. } => {}
        }
    }

    /// Records `sentence`'s term as an outstanding question, so a later
    /// matching judgment is recorded as an answer by [record_if_answer](Self::record_if_answer).
    fn track_if_question(&mut self, sentence: &Sentence) {
        if sentence.is_question() && !self.questions.iter().any(|q| q == sentence.term()) {
            self.questions.push(sentence.term().clone());
        }
    }

    fn insert_derivation(&mut self, derivation: Sentence) {
        self.track_if_question(&derivation);
        let term = derivation.term().clone();
        self.insert_into_tables(&term, derivation.clone());

        let id = self.stamps.issue();
        let budget = Budget::new(derivation.expectation().unwrap_or(0.5), 0.8, 0.5);
        let task = Task::derived(derivation, budget);
        let _ = self.experience.put(id, task, budget);
    }

    /// Records `derivation` as the new best answer if it resolves one of the
    /// outstanding [questions](Self::questions) (spec §4.7 step 3, Choice).
    fn record_if_answer(&mut self, derivation: &Sentence, emitted: &mut Vec<Sentence>) {
        if !derivation.is_judgment() {
            return;
        }
        if !self.questions.iter().any(|q| q == derivation.term()) {
            return;
        }
        let key = derivation.term().canonical().to_string();
        let winner = match self.answers.get(&key) {
            Some(incumbent) => choice::choose(incumbent, derivation).clone(),
            None => derivation.clone(),
        };
        self.answers.insert(key, winner.clone());
        emitted.push(winner);
    }

    /// A named Non-goal (spec §1, §6): the embedding API shape exists, the
    /// body does not.
    pub fn save_memory(&self, _path: &str) -> Result<(), ErrorKind> {
        Err(ErrorKind::Unsupported("disk persistence of memory"))
    }

    /// A named Non-goal (spec §1, §6): the embedding API shape exists, the
    /// body does not.
    pub fn load_memory(&mut self, _path: &str) -> Result<(), ErrorKind> {
        Err(ErrorKind::Unsupported("disk persistence of memory"))
    }
}

fn parsed_into_sentence(parsed: ParsedSentence, id: crate::types::StampId, occurrence: crate::types::OccurrenceTime) -> Sentence {
    parsed.into_sentence(id, occurrence)
}

fn initial_quality(sentence: &Sentence) -> f64 {
    match sentence {
        Sentence::Judgment { truth, .. } => truth.confidence,
        Sentence::Goal { desire, .. } => desire.confidence,
        Sentence::Question { .. } => 0.9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_input_rejects_reserved_words() {
        let mut engine = Engine::from_config(Config::default());
        assert_eq!(engine.add_input("cycle"), Err(ErrorKind::ReservedWord("cycle".into())));
    }

    #[test]
    fn add_input_rejects_malformed_sentences() {
        let mut engine = Engine::from_config(Config::default());
        assert!(engine.add_input("(A-->").is_err());
    }

    #[test]
    fn cycle_runs_without_pending_input() {
        let mut engine = Engine::from_config(Config::default());
        assert!(engine.do_working_cycle().is_empty());
        assert_eq!(engine.cycles_elapsed(), 1);
    }

    #[test]
    fn deduction_scenario_produces_the_expected_answer() {
        let mut engine = Engine::from_config(Config::default());
        engine.add_input("(S-->M). %1.0;0.9%").unwrap();
        engine.do_working_cycle();
        engine.add_input("(M-->P). %1.0;0.9%").unwrap();
        engine.do_working_cycle();
        engine.add_input("(S-->P)?").unwrap();

        let mut found = false;
        for _ in 0..200 {
            engine.do_working_cycle();
            if let Some(term) = engine.interner().lookup("(S-->P)") {
                if let Some(answer) = engine.answer_for(&term) {
                    if let Some(truth) = answer.truth() {
                        if (truth.confidence - 0.81).abs() < 1e-6 {
                            found = true;
                            break;
                        }
                    }
                }
            }
        }
        assert!(found, "expected (S-->P). %1.0;0.81%% to be derived within 200 cycles");
    }

    #[test]
    fn save_and_load_memory_are_unsupported_stubs() {
        let engine = Engine::from_config(Config::default());
        assert_eq!(engine.save_memory("x"), Err(ErrorKind::Unsupported("disk persistence of memory")));
    }
}
