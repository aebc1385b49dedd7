//! Tasks: a [Sentence] wrapped with a [Budget], the unit a [Bag](crate::bag::Bag) stores.

use super::{Budget, Sentence};

/// A sentence plus its resource budget and whether it came directly from
/// input (spec §3: "a sentence wrapped with budget ... and an input-task
/// flag").
#[derive(Debug, Clone)]
pub struct Task {
    sentence: Sentence,
    budget: Budget,
    is_input: bool,
}

impl Task {
    pub fn new(sentence: Sentence, budget: Budget, is_input: bool) -> Self {
        Self { sentence, budget, is_input }
    }

    pub fn input(sentence: Sentence, budget: Budget) -> Self {
        Self::new(sentence, budget, true)
    }

    pub fn derived(sentence: Sentence, budget: Budget) -> Self {
        Self::new(sentence, budget, false)
    }

    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn budget_mut(&mut self) -> &mut Budget {
        &mut self.budget
    }

    pub fn is_input(&self) -> bool {
        self.is_input
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.2};{:.2};{:.2}", self.sentence, self.budget.priority(), self.budget.durability(), self.budget.quality())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence::Stamp;
    use crate::term::Interner;
    use crate::truth::TruthValue;

    #[test]
    fn input_task_is_flagged() {
        let mut interner = Interner::default();
        let term = interner.atom("bird").unwrap();
        let sentence = Sentence::Judgment {
            term,
            truth: TruthValue::new(1.0, 0.9),
            stamp: Stamp::input(0, None),
        };
        let task = Task::input(sentence, Budget::new(0.8, 0.8, 0.5));
        assert!(task.is_input());
    }
}
