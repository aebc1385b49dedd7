//! The end-to-end scenarios of spec §8, exercised at the dispatcher
//! boundary: literal Narsese premises parsed, fed to `inference::dispatch`,
//! and the derived conclusion's term/truth checked against the literal
//! expected output the specification states. Mirrors
//! `otter_sat/tests/basic.rs`'s one-file-per-topic layout, one `mod` per
//! scenario here since they all share the same small setup.

use nars_core::inference::dispatch;
use nars_core::sentence::{Sentence, Stamp};
use nars_core::term::{term_from_string, Interner};
use nars_core::truth::TruthValue;

fn judgment(text: &str, truth: TruthValue, id: u64, interner: &mut Interner) -> Sentence {
    let term = term_from_string(text, interner).unwrap();
    Sentence::Judgment { term, truth, stamp: Stamp::input(id, None) }
}

fn next_id_from(start: u64) -> impl FnMut() -> u64 {
    let mut n = start;
    move || {
        n += 1;
        n
    }
}

mod deduction {
    use super::*;

    #[test]
    fn s_to_p_with_expected_truth() {
        let mut interner = Interner::default();
        let s1 = judgment("(S-->M)", TruthValue::new(1.0, 0.9), 1, &mut interner);
        let s2 = judgment("(M-->P)", TruthValue::new(1.0, 0.9), 2, &mut interner);
        let mut next_id = next_id_from(10);

        let derivations = dispatch(&s1, &s2, 1.0, 1_000, &mut interner, &mut next_id);

        let conclusion = derivations
            .iter()
            .find(|s| s.term().canonical() == "(S-->P)")
            .expect("deduction should derive (S-->P)");
        let truth = conclusion.truth().unwrap();
        assert!((truth.frequency - 1.0).abs() < 1e-9);
        assert!((truth.confidence - 0.81).abs() < 1e-9);
    }
}

mod induction {
    use super::*;

    #[test]
    fn produces_both_directions_with_expected_confidence() {
        let mut interner = Interner::default();
        let s1 = judgment("(M-->S)", TruthValue::new(1.0, 0.9), 1, &mut interner);
        let s2 = judgment("(M-->P)", TruthValue::new(1.0, 0.9), 2, &mut interner);
        let mut next_id = next_id_from(10);

        let derivations = dispatch(&s1, &s2, 1.0, 1_000, &mut interner, &mut next_id);

        for expected_term in ["(S-->P)", "(P-->S)"] {
            let conclusion = derivations
                .iter()
                .find(|s| s.term().canonical() == expected_term)
                .unwrap_or_else(|| panic!("induction should derive {expected_term}"));
            let truth = conclusion.truth().unwrap();
            assert!((truth.frequency - 1.0).abs() < 1e-9);
            assert!((truth.confidence - 0.447).abs() < 1e-3);
        }
    }
}

mod abduction {
    use super::*;

    #[test]
    fn s_to_p_with_expected_confidence() {
        let mut interner = Interner::default();
        let s1 = judgment("(S-->M)", TruthValue::new(1.0, 0.9), 1, &mut interner);
        let s2 = judgment("(P-->M)", TruthValue::new(1.0, 0.9), 2, &mut interner);
        let mut next_id = next_id_from(10);

        let derivations = dispatch(&s1, &s2, 1.0, 1_000, &mut interner, &mut next_id);

        let conclusion = derivations
            .iter()
            .find(|s| s.term().canonical() == "(S-->P)")
            .expect("abduction should derive (S-->P)");
        let truth = conclusion.truth().unwrap();
        assert!((truth.frequency - 1.0).abs() < 1e-9);
        assert!((truth.confidence - 0.447).abs() < 1e-3);
    }
}

mod revision {
    use super::*;

    #[test]
    fn merges_conflicting_judgments() {
        let mut interner = Interner::default();
        let s1 = judgment("(A-->B)", TruthValue::new(1.0, 0.9), 1, &mut interner);
        let s2 = judgment("(A-->B)", TruthValue::new(0.0, 0.9), 2, &mut interner);
        let mut next_id = next_id_from(10);

        let derivations = dispatch(&s1, &s2, 1.0, 1_000, &mut interner, &mut next_id);

        let conclusion = derivations
            .iter()
            .find(|s| s.term().canonical() == "(A-->B)")
            .expect("revision should merge into (A-->B)");
        let truth = conclusion.truth().unwrap();
        assert!((truth.frequency - 0.5).abs() < 1e-9);
        assert!((truth.confidence - 0.94736).abs() < 1e-4);
    }
}

mod negation_round_trip {
    use super::*;
    use nars_core::inference::immediate;

    #[test]
    fn double_negation_recovers_frequency() {
        let mut interner = Interner::default();
        let sentence = judgment("(A-->B)", TruthValue::new(0.3, 0.7), 1, &mut interner);
        let mut next_id = next_id_from(10);

        let once = immediate::negation(&sentence, &mut interner, &mut next_id, 1_000).unwrap();
        assert_eq!(once.term().canonical(), "(--,(A-->B))");
        let once_truth = once.truth().unwrap();
        assert!((once_truth.frequency - 0.7).abs() < 1e-9);
        assert!((once_truth.confidence - 0.7).abs() < 1e-9);

        let twice = immediate::negation(&once, &mut interner, &mut next_id, 1_000).unwrap();
        assert_eq!(twice.term().canonical(), "(A-->B)");
        assert!((twice.truth().unwrap().frequency - 0.3).abs() < 1e-9);
    }
}

mod temporal_induction {
    use super::*;
    use nars_core::term::Copula;

    #[test]
    fn earlier_event_predictively_implies_later() {
        let mut interner = Interner::default();
        let earlier_term = term_from_string("(A-->B)", &mut interner).unwrap();
        let later_term = term_from_string("(C-->D)", &mut interner).unwrap();
        let earlier = Sentence::Judgment {
            term: earlier_term,
            truth: TruthValue::new(1.0, 0.9),
            stamp: Stamp::input(1, Some(1)),
        };
        let later = Sentence::Judgment {
            term: later_term,
            truth: TruthValue::new(1.0, 0.9),
            stamp: Stamp::input(2, Some(2)),
        };
        let mut next_id = next_id_from(10);

        let derivations = dispatch(&earlier, &later, 1.0, 1_000, &mut interner, &mut next_id);

        let implication = derivations
            .iter()
            .find(|s| matches!(s.term().data(), nars_core::term::TermData::Statement { copula: Copula::PredictiveImplication, .. }))
            .expect("temporal induction should derive a predictive implication");
        let nars_core::term::TermData::Statement { subject, predicate, .. } = implication.term().data() else {
            unreachable!()
        };
        assert_eq!(subject.canonical(), "(A-->B)");
        assert_eq!(predicate.canonical(), "(C-->D)");
    }
}
