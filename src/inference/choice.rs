//! Choice: picking between two candidate answers to a question (spec §4.3, §8).

use crate::sentence::Sentence;

/// Chooses between `incumbent` and `candidate`: the higher confidence when
/// both answer the same statement (structurally equal terms), otherwise the
/// higher expectation (spec §8: "Choice prefers the higher confidence when
/// statements match, the higher expectation otherwise").
pub fn choose<'a>(incumbent: &'a Sentence, candidate: &'a Sentence) -> &'a Sentence {
    if incumbent.term() == candidate.term() {
        let incumbent_confidence = incumbent.truth().or(incumbent.desire()).map(|t| t.confidence);
        let candidate_confidence = candidate.truth().or(candidate.desire()).map(|t| t.confidence);
        match (incumbent_confidence, candidate_confidence) {
            (Some(i), Some(c)) if c > i => return candidate,
            (Some(_), Some(_)) => return incumbent,
            _ => {}
        }
    }
    match (incumbent.expectation(), candidate.expectation()) {
        (Some(i), Some(c)) if c > i => candidate,
        _ => incumbent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence::Stamp;
    use crate::term::{term_from_string, Interner};
    use crate::truth::TruthValue;

    #[test]
    fn prefers_higher_confidence_on_matching_term() {
        let mut interner = Interner::default();
        let term = term_from_string("(A-->B)", &mut interner).unwrap();
        let weak = Sentence::Judgment { term: term.clone(), truth: TruthValue::new(1.0, 0.5), stamp: Stamp::input(1, None) };
        let strong = Sentence::Judgment { term, truth: TruthValue::new(1.0, 0.9), stamp: Stamp::input(2, None) };
        assert_eq!(choose(&weak, &strong).truth().unwrap().confidence, 0.9);
    }

    #[test]
    fn prefers_higher_expectation_on_different_terms() {
        let mut interner = Interner::default();
        let a = term_from_string("(A-->B)", &mut interner).unwrap();
        let b = term_from_string("(C-->D)", &mut interner).unwrap();
        let low = Sentence::Judgment { term: a, truth: TruthValue::new(0.5, 0.5), stamp: Stamp::input(1, None) };
        let high = Sentence::Judgment { term: b, truth: TruthValue::new(1.0, 0.9), stamp: Stamp::input(2, None) };
        assert_eq!(choose(&low, &high).truth().unwrap().frequency, 1.0);
    }
}
