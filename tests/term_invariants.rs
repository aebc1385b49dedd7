//! Term invariants of spec §8: intern round-trip, canonical-string stability
//! under permutation of order-invariant children, and complexity additivity.

use nars_core::term::{term_from_string, Interner};

#[test]
fn round_trips_through_its_own_canonical_string() {
    let mut interner = Interner::default();
    let term = term_from_string("((&,A,B)-->[C,D])", &mut interner).unwrap();
    let reparsed = term_from_string(term.canonical(), &mut interner).unwrap();
    assert_eq!(term, reparsed);
}

#[test]
fn order_invariant_connector_ignores_input_order() {
    let mut interner = Interner::default();
    let ab = term_from_string("(&,A,B,C)", &mut interner).unwrap();
    let cba = term_from_string("(&,C,B,A)", &mut interner).unwrap();
    assert_eq!(ab, cba);
    assert_eq!(ab.canonical(), cba.canonical());
}

#[test]
fn complexity_is_additive_over_a_compound() {
    let mut interner = Interner::default();
    let a = term_from_string("A", &mut interner).unwrap();
    let b = term_from_string("B", &mut interner).unwrap();
    let compound = term_from_string("(-,A,B)", &mut interner).unwrap();
    assert_eq!(compound.complexity(), 1 + a.complexity() + b.complexity());
}

#[test]
fn structurally_equal_terms_share_identity() {
    let mut interner = Interner::default();
    let first = term_from_string("(S-->M)", &mut interner).unwrap();
    let before = interner.len();
    let second = term_from_string("(S-->M)", &mut interner).unwrap();
    assert_eq!(first, second);
    assert_eq!(interner.len(), before, "reparsing the same term must not allocate a new node");
}

#[test]
fn singleton_set_rewrite_is_idempotent_under_reparsing() {
    let mut interner = Interner::default();
    let set = term_from_string("{A}", &mut interner).unwrap();
    let reparsed = term_from_string(set.canonical(), &mut interner).unwrap();
    assert_eq!(set, reparsed);
}
