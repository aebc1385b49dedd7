//! Classifying which subject/predicate position two statements share (spec §4.3).

use crate::term::TermHandle;

/// Which pair of positions the shared middle term occupies across two
/// statements `s1: subject1 -- predicate1` and `s2: subject2 -- predicate2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedPosition {
    /// `M-->P1`, `M-->P2`: shared subject (spec's "M→P | M→S" row).
    SubjectSubject,
    /// `P1-->M`, `P2-->M`: shared predicate (spec's "P→M | S→M" row).
    PredicatePredicate,
    /// `M-->P1`, `S2-->M`: premise 1's subject is premise 2's predicate
    /// (spec's "M→P | S→M" row, Deduction).
    SubjectPredicate,
    /// `P1-->M`, `M-->S2`: premise 1's predicate is premise 2's subject
    /// (spec's "P→M | M→S" row, Exemplification).
    PredicateSubject,
}

/// The outer terms left over once the middle term is factored out, named to
/// match spec §4.3's table (`S`, `P`), plus which position arrangement they
/// came from.
pub struct Pairing {
    pub position: SharedPosition,
    pub middle: TermHandle,
    pub outer_one: TermHandle,
    pub outer_two: TermHandle,
}

/// Finds the shared middle term between two non-symmetric statements, if
/// any, preferring (in order) subject/subject, predicate/predicate,
/// subject/predicate, predicate/subject -- matching the order spec §4.3's
/// table lists them in. Only one pairing is reported per call since a
/// well-formed pair of distinct statements shares at most one position
/// (sharing more would mean that the two statements are identical, which the
/// dispatcher rejects separately as the Revision case).
pub fn find_shared_position(
    subject1: &TermHandle,
    predicate1: &TermHandle,
    subject2: &TermHandle,
    predicate2: &TermHandle,
) -> Option<Pairing> {
    if subject1 == subject2 {
        return Some(Pairing {
            position: SharedPosition::SubjectSubject,
            middle: subject1.clone(),
            outer_one: predicate1.clone(),
            outer_two: predicate2.clone(),
        });
    }
    if predicate1 == predicate2 {
        return Some(Pairing {
            position: SharedPosition::PredicatePredicate,
            middle: predicate1.clone(),
            outer_one: subject1.clone(),
            outer_two: subject2.clone(),
        });
    }
    if subject1 == predicate2 {
        return Some(Pairing {
            position: SharedPosition::SubjectPredicate,
            middle: subject1.clone(),
            outer_one: predicate1.clone(),
            outer_two: subject2.clone(),
        });
    }
    if predicate1 == subject2 {
        return Some(Pairing {
            position: SharedPosition::PredicateSubject,
            middle: predicate1.clone(),
            outer_one: subject1.clone(),
            outer_two: predicate2.clone(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{term_from_string, Interner};

    #[test]
    fn deduction_shape_is_subject_predicate() {
        let mut interner = Interner::default();
        let m_p = term_from_string("(M-->P)", &mut interner).unwrap();
        let s_m = term_from_string("(S-->M)", &mut interner).unwrap();
        let m = term_from_string("M", &mut interner).unwrap();
        let p = term_from_string("P", &mut interner).unwrap();
        let s = term_from_string("S", &mut interner).unwrap();

        let (subject1, predicate1) = (m.clone(), p.clone());
        let (subject2, predicate2) = (s.clone(), m.clone());
        let pairing = find_shared_position(&subject1, &predicate1, &subject2, &predicate2).unwrap();
        assert_eq!(pairing.position, SharedPosition::SubjectPredicate);
        assert_eq!(pairing.middle, m);
        assert_eq!(pairing.outer_one, p);
        assert_eq!(pairing.outer_two, s);
        let _ = (m_p, s_m);
    }
}
