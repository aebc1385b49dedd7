/*!
The dispatcher: given one or two sentences, decides which rules apply and in
which orientation, and produces the derived-sentence set (spec §4.4).

Scope: the two-premise table (spec §4.3) is wired for Judgment x Judgment and
Goal x Judgment pairs (spec §2: "the dispatcher cross-products the task's
sentence with the concept's beliefs or desires"). A Goal's desire value is
structurally a [TruthValue] (spec §3), so the same rule functions apply
unchanged; the only difference is which field each premise's value comes from
and that a conclusion with a goal premise is itself a sub-goal, not a belief.
Two goals are never paired -- there is no rule in spec §4.3's table for
combining two desire values, and revision (the one rule that *would* apply to
identical terms) only ever merges two judgments, never a judgment and a goal
about the same term; see `DESIGN.md`. Question propagation is handled
separately, matching §4.4's explicit requirement that it produce
"structurally identical derived questions" rather than route through the
truth calculus at all.
*/

use log::trace;

use super::pairing::{find_shared_position, SharedPosition};
use super::{immediate, temporal};
use crate::sentence::{Sentence, Stamp};
use crate::term::{Copula, Interner, TermData, TermHandle};
use crate::truth::rules;
use crate::truth::TruthValue;
use crate::types::err::ErrorKind;
use crate::types::StampId;

/// Runs the dispatcher on `s1` and `s2`, returning every derivation (spec
/// §4.4). Does not mark the premises as interacted; callers own that (spec
/// §4.4's last step) since stamps are mutated in place -- see
/// [super::mark_interacted].
pub fn dispatch(
    s1: &Sentence,
    s2: &Sentence,
    k: f64,
    base_cap: usize,
    interner: &mut Interner,
    next_id: &mut impl FnMut() -> StampId,
) -> Vec<Sentence> {
    if s1.stamp().shares_evidence_with(s2.stamp()) {
        return Vec::new(); // EvidentialOverlap: a silent no-op (spec §7).
    }
    if s1.stamp().has_interacted_with(s2.stamp().id()) {
        return Vec::new();
    }
    if s1.term().is_degenerate_compound() || s2.term().is_degenerate_compound() {
        return Vec::new();
    }

    if s1.is_question() || s2.is_question() {
        return question_propagation(s1, s2, base_cap, interner, next_id);
    }
    if s1.is_goal() && s2.is_goal() {
        return Vec::new();
    }

    let term1 = s1.term();
    let term2 = s2.term();
    let Some(t1) = sentence_value(s1) else { return Vec::new() };
    let Some(t2) = sentence_value(s2) else { return Vec::new() };
    let stamp1 = s1.stamp();
    let stamp2 = s2.stamp();
    // Exactly one of s1/s2 is a goal here (both-goal was rejected above);
    // a conclusion drawing on a goal premise is itself a sub-goal.
    let goal_conclusion = s1.is_goal() || s2.is_goal();

    let mut out = Vec::new();

    if term1 == term2 {
        if s1.is_judgment() && s2.is_judgment() {
            let merged = rules::revision(t1, t2, k);
            let occurrence = later_occurrence(stamp1, stamp2);
            let stamp = Stamp::derived(next_id(), occurrence, "revision", &[stamp1, stamp2], base_cap);
            out.push(Sentence::Judgment { term: term1.clone(), truth: merged, stamp });
        }
        return finish(out, k, interner, next_id, base_cap);
    }

    let TermData::Statement { copula: copula1, subject: subject1, predicate: predicate1 } = term1.data() else {
        return Vec::new();
    };
    let TermData::Statement { copula: copula2, subject: subject2, predicate: predicate2 } = term2.data() else {
        return Vec::new();
    };

    match (copula1.is_symmetric(), copula2.is_symmetric()) {
        (false, false) => {
            if let Some(pairing) = find_shared_position(subject1, predicate1, subject2, predicate2) {
                out.extend(nonsymmetric_pair(
                    pairing, *copula1, t1, stamp1, *copula2, t2, stamp2, goal_conclusion, k, base_cap, interner, next_id,
                ));
            }
        }
        (true, true) => {
            // Symmetric statements have no real subject/predicate distinction
            // (the interner canonically sorts them), so a shared term can
            // surface in any of the four positions -- all of them resemble.
            if let Some(pairing) = find_shared_position(subject1, predicate1, subject2, predicate2) {
                let truth = rules::resemblance(t1, t2);
                let occurrence = later_occurrence(stamp1, stamp2);
                let stamp = Stamp::derived(next_id(), occurrence, "resemblance", &[stamp1, stamp2], base_cap);
                let conclusion_copula = if copula1.is_higher_order() { Copula::Equivalence } else { Copula::Similarity };
                let term = interner.statement(conclusion_copula, pairing.outer_one, pairing.outer_two);
                out.push(make_sentence(term, truth, stamp, goal_conclusion));
            }
        }
        _ => {
            if let Some(sentence) = analogy_pair(
                *copula1, subject1.clone(), predicate1.clone(), t1, stamp1, *copula2, subject2.clone(), predicate2.clone(), t2, stamp2, goal_conclusion, k, base_cap, interner, next_id,
            ) {
                out.push(sentence);
            }
        }
    }

    out.extend(temporal_pair(s1, s2, k, base_cap, interner, next_id));

    finish(out, k, interner, next_id, base_cap)
}

/// A sentence's (frequency, confidence)-shaped value regardless of kind: a
/// judgment's truth or a goal's desire (spec §3: "structurally identical,
/// distinguished by the carrying sentence kind"). `None` for questions.
fn sentence_value(s: &Sentence) -> Option<TruthValue> {
    s.truth().or_else(|| s.desire())
}

/// Builds the conclusion sentence: a [Sentence::Goal] if either source
/// premise was a goal, a [Sentence::Judgment] otherwise.
fn make_sentence(term: TermHandle, value: TruthValue, stamp: Stamp, goal_conclusion: bool) -> Sentence {
    if goal_conclusion {
        Sentence::Goal { term, desire: value, stamp }
    } else {
        Sentence::Judgment { term, truth: value, stamp }
    }
}

fn later_occurrence(a: &Stamp, b: &Stamp) -> Option<u64> {
    match (a.occurrence(), b.occurrence()) {
        (Some(x), Some(y)) => Some(x.max(y)),
        (Some(x), None) => Some(x),
        (None, Some(y)) => Some(y),
        (None, None) => None,
    }
}

fn conclusion_copula(copula1: Copula, copula2: Copula) -> Copula {
    if copula1.is_higher_order() && copula2.is_higher_order() {
        Copula::Implication
    } else {
        Copula::Inheritance
    }
}

#[allow(clippy::too_many_arguments)]
fn nonsymmetric_pair(
    pairing: super::pairing::Pairing,
    copula1: Copula,
    t1: TruthValue,
    stamp1: &Stamp,
    copula2: Copula,
    t2: TruthValue,
    stamp2: &Stamp,
    goal_conclusion: bool,
    k: f64,
    base_cap: usize,
    interner: &mut Interner,
    next_id: &mut impl FnMut() -> StampId,
) -> Vec<Sentence> {
    let occurrence = later_occurrence(stamp1, stamp2);
    let copula = conclusion_copula(copula1, copula2);
    let mut out = Vec::new();

    let mut push = |term: TermHandle, truth: TruthValue, rule: &'static str, out: &mut Vec<Sentence>| {
        let stamp = Stamp::derived(next_id(), occurrence, rule, &[stamp1, stamp2], base_cap);
        out.push(make_sentence(term, truth, stamp, goal_conclusion));
    };

    match pairing.position {
        SharedPosition::SubjectPredicate => {
            // M-->outer_one (t-of-M-as-subject), outer_two-->M (t-of-M-as-predicate).
            // Deduction: outer_two-->outer_one. Exemplification: outer_one-->outer_two
            // (spec §4.3: both rules apply to this shared position, in opposite
            // directions -- see `DESIGN.md`).
            let deduced = interner.statement(copula, pairing.outer_two.clone(), pairing.outer_one.clone());
            push(deduced, rules::deduction(t1, t2), "deduction", &mut out);
            let exemplified = interner.statement(copula, pairing.outer_one, pairing.outer_two);
            push(exemplified, rules::exemplification(t1, t2, k), "exemplification", &mut out);
        }
        SharedPosition::PredicateSubject => {
            // outer_one-->M (t-of-M-as-predicate), M-->outer_two (t-of-M-as-subject).
            // Deduction: outer_one-->outer_two. Exemplification: outer_two-->outer_one.
            let deduced = interner.statement(copula, pairing.outer_one.clone(), pairing.outer_two.clone());
            push(deduced, rules::deduction(t1, t2), "deduction", &mut out);
            let exemplified = interner.statement(copula, pairing.outer_two, pairing.outer_one);
            push(exemplified, rules::exemplification(t1, t2, k), "exemplification", &mut out);
        }
        SharedPosition::SubjectSubject => {
            // M-->P (t1, outer_one=P), M-->S (t2, outer_two=S) => Induction family.
            let s_to_p = interner.statement(copula, pairing.outer_two.clone(), pairing.outer_one.clone());
            push(s_to_p, rules::induction(t1, t2, k), "induction", &mut out);
            let p_to_s = interner.statement(copula, pairing.outer_one.clone(), pairing.outer_two.clone());
            push(p_to_s, rules::induction(t2, t1, k), "induction", &mut out);

            let symmetric_copula = copula.symmetric_counterpart().unwrap_or(Copula::Similarity);
            let s_iff_p = interner.statement(symmetric_copula, pairing.outer_two.clone(), pairing.outer_one.clone());
            push(s_iff_p, rules::comparison(t1, t2, k), "comparison", &mut out);

            if let Ok(intersection_term) = intersection_conclusion(copula1, copula2, pairing.outer_two.clone(), pairing.outer_one.clone(), pairing.middle.clone(), interner) {
                push(intersection_term, rules::intersection(t1, t2), "intersection", &mut out);
            }
            if let Ok(union_term) = union_conclusion(copula1, copula2, pairing.outer_two.clone(), pairing.outer_one.clone(), pairing.middle.clone(), interner) {
                push(union_term, rules::union(t1, t2), "union", &mut out);
            }
            if let Ok(difference_term) = difference_conclusion(copula1, copula2, pairing.outer_two.clone(), pairing.outer_one.clone(), pairing.middle.clone(), interner) {
                push(difference_term, rules::difference(t1, t2), "difference", &mut out);
            }
            if let Ok(swapped_difference_term) = difference_conclusion(copula1, copula2, pairing.outer_one, pairing.outer_two, pairing.middle, interner) {
                push(swapped_difference_term, rules::difference(t2, t1), "difference", &mut out);
            }
        }
        SharedPosition::PredicatePredicate => {
            // P-->M (t1, outer_one=P), S-->M (t2, outer_two=S) => Abduction family.
            let s_to_p = interner.statement(copula, pairing.outer_two.clone(), pairing.outer_one.clone());
            push(s_to_p, rules::abduction(t1, t2, k), "abduction", &mut out);
            let p_to_s = interner.statement(copula, pairing.outer_one.clone(), pairing.outer_two.clone());
            push(p_to_s, rules::abduction(t2, t1, k), "abduction", &mut out);

            let symmetric_copula = copula.symmetric_counterpart().unwrap_or(Copula::Similarity);
            let s_iff_p = interner.statement(symmetric_copula, pairing.outer_two.clone(), pairing.outer_one.clone());
            push(s_iff_p, rules::comparison(t1, t2, k), "comparison", &mut out);

            // M-->(S∩P): predicate side carries the intersection.
            if let Ok(compound) = intersection_compound(copula1, copula2, pairing.outer_two.clone(), pairing.outer_one.clone(), interner) {
                let term = interner.statement(copula, pairing.middle.clone(), compound);
                push(term, rules::intersection(t1, t2), "intersection", &mut out);
            }
            // M-->(S∪P) and M-->(S-P) / M-->(P-S): the union and both difference orientations.
            if let Ok(compound) = union_compound(copula1, copula2, pairing.outer_two.clone(), pairing.outer_one.clone(), interner) {
                let term = interner.statement(copula, pairing.middle.clone(), compound);
                push(term, rules::union(t1, t2), "union", &mut out);
            }
            if let Ok(compound) = difference_compound(copula1, copula2, pairing.outer_two.clone(), pairing.outer_one.clone(), interner) {
                let term = interner.statement(copula, pairing.middle.clone(), compound);
                push(term, rules::difference(t1, t2), "difference", &mut out);
            }
            if let Ok(compound) = difference_compound(copula1, copula2, pairing.outer_one, pairing.outer_two, interner) {
                let term = interner.statement(copula, pairing.middle, compound);
                push(term, rules::difference(t2, t1), "difference", &mut out);
            }
        }
    }

    out
}

/// Builds `(S <intersection> P) --> M` for the subject-subject case (spec
/// §4.3's "(S∩P)→M"), using extensional intersection for first-order
/// statements and conjunction when both premises are higher-order (per
/// §4.3's "intersection/difference connectives are replaced by
/// conjunction/disjunction" rule).
fn intersection_conclusion(
    copula1: Copula,
    copula2: Copula,
    s: TermHandle,
    p: TermHandle,
    m: TermHandle,
    interner: &mut Interner,
) -> Result<TermHandle, ErrorKind> {
    let compound = intersection_compound(copula1, copula2, s, p, interner)?;
    Ok(interner.statement(Copula::Inheritance, compound, m))
}

fn intersection_compound(copula1: Copula, copula2: Copula, a: TermHandle, b: TermHandle, interner: &mut Interner) -> Result<TermHandle, ErrorKind> {
    let connector = if copula1.is_higher_order() && copula2.is_higher_order() {
        crate::term::Connector::Conjunction
    } else {
        crate::term::Connector::ExtIntersection
    };
    interner.compound(connector, vec![a, b])
}

/// The dual of [intersection_conclusion]: `(S <union> P) --> M` / `M --> (S
/// <union> P)` depending on caller, using intensional intersection for
/// first-order statements and disjunction when both premises are
/// higher-order (spec §4.3's "(S∪P)→M"/"M→(S∪P)").
fn union_conclusion(
    copula1: Copula,
    copula2: Copula,
    s: TermHandle,
    p: TermHandle,
    m: TermHandle,
    interner: &mut Interner,
) -> Result<TermHandle, ErrorKind> {
    let compound = union_compound(copula1, copula2, s, p, interner)?;
    Ok(interner.statement(Copula::Inheritance, compound, m))
}

fn union_compound(copula1: Copula, copula2: Copula, a: TermHandle, b: TermHandle, interner: &mut Interner) -> Result<TermHandle, ErrorKind> {
    let connector = if copula1.is_higher_order() && copula2.is_higher_order() {
        crate::term::Connector::Disjunction
    } else {
        crate::term::Connector::IntIntersection
    };
    interner.compound(connector, vec![a, b])
}

/// `(S <difference> P) --> M` / `M --> (S <difference> P)` (spec §4.3's
/// "(S−P)→M"/"M→(S−P)"). First-order statements use extensional difference;
/// higher-order statements have no dedicated difference connective, so this
/// models `S - P` as `S && (--,P)`, per §4.3's "replaced by
/// conjunction/disjunction" rule.
fn difference_conclusion(
    copula1: Copula,
    copula2: Copula,
    s: TermHandle,
    p: TermHandle,
    m: TermHandle,
    interner: &mut Interner,
) -> Result<TermHandle, ErrorKind> {
    let compound = difference_compound(copula1, copula2, s, p, interner)?;
    Ok(interner.statement(Copula::Inheritance, compound, m))
}

fn difference_compound(copula1: Copula, copula2: Copula, a: TermHandle, b: TermHandle, interner: &mut Interner) -> Result<TermHandle, ErrorKind> {
    if copula1.is_higher_order() && copula2.is_higher_order() {
        let negated_b = interner.compound(crate::term::Connector::Negation, vec![b])?;
        interner.compound(crate::term::Connector::Conjunction, vec![a, negated_b])
    } else {
        interner.compound(crate::term::Connector::ExtDifference, vec![a, b])
    }
}

#[allow(clippy::too_many_arguments)]
fn analogy_pair(
    copula1: Copula,
    subject1: TermHandle,
    predicate1: TermHandle,
    t1: TruthValue,
    stamp1: &Stamp,
    copula2: Copula,
    subject2: TermHandle,
    predicate2: TermHandle,
    t2: TruthValue,
    stamp2: &Stamp,
    goal_conclusion: bool,
    k: f64,
    base_cap: usize,
    interner: &mut Interner,
    next_id: &mut impl FnMut() -> StampId,
) -> Option<Sentence> {
    let _ = k;
    let (asym_copula, asym_subject, asym_predicate, t_asym, sym_subject, sym_predicate, t_sym) = if !copula1.is_symmetric() {
        (copula1, subject1, predicate1, t1, subject2, predicate2, t2)
    } else {
        (copula2, subject2, predicate2, t2, subject1, predicate1, t1)
    };

    let pairing = find_shared_position(&asym_subject, &asym_predicate, &sym_subject, &sym_predicate)?;
    let occurrence = later_occurrence(stamp1, stamp2);
    let stamp = Stamp::derived(next_id(), occurrence, "analogy", &[stamp1, stamp2], base_cap);

    // Substitute the symmetric premise's other term for the shared middle,
    // keeping the asymmetric premise's direction (spec §4.3: "oriented so
    // that the symmetric premise supplies the substitution").
    let (subject, predicate) = match pairing.position {
        SharedPosition::SubjectSubject => (pairing.outer_two, pairing.outer_one),
        SharedPosition::PredicatePredicate => (pairing.outer_one, pairing.outer_two),
        SharedPosition::SubjectPredicate => (pairing.outer_two, pairing.outer_one),
        SharedPosition::PredicateSubject => (pairing.outer_one, pairing.outer_two),
    };
    let term = interner.statement(asym_copula, subject, predicate);
    Some(make_sentence(term, rules::analogy(t_asym, t_sym), stamp, goal_conclusion))
}

/// Temporal specialisation (spec §4.3, §8 scenario 6): when both premises
/// are events, derive a direct implication/equivalence from the earlier
/// event's term to the later's, independent of whether they also share a
/// middle term via the general table above.
fn temporal_pair(
    s1: &Sentence,
    s2: &Sentence,
    k: f64,
    base_cap: usize,
    interner: &mut Interner,
    next_id: &mut impl FnMut() -> StampId,
) -> Vec<Sentence> {
    let (Sentence::Judgment { term: term1, truth: t1, stamp: stamp1 }, Sentence::Judgment { term: term2, truth: t2, stamp: stamp2 }) = (s1, s2) else {
        return Vec::new();
    };
    let (Some(occ1), Some(occ2)) = (stamp1.occurrence(), stamp2.occurrence()) else {
        return Vec::new();
    };

    let (earlier_term, later_term, earlier_truth, later_truth) =
        if temporal::earlier_is_first(occ1, occ2) { (term1.clone(), term2.clone(), *t1, *t2) } else { (term2.clone(), term1.clone(), *t2, *t1) };

    let induction_copula = temporal::induction_copula(occ1, occ2);
    let comparison_copula = temporal::comparison_copula(occ1, occ2);
    let later_occurrence = Some(occ1.max(occ2));

    let induction_term = interner.statement(induction_copula, earlier_term.clone(), later_term.clone());
    let induction_stamp = Stamp::derived(next_id(), later_occurrence, "temporal_induction", &[stamp1, stamp2], base_cap);
    let induction = Sentence::Judgment { term: induction_term, truth: rules::induction(earlier_truth, later_truth, k), stamp: induction_stamp };

    let comparison_term = interner.statement(comparison_copula, earlier_term, later_term);
    let comparison_stamp = Stamp::derived(next_id(), later_occurrence, "temporal_comparison", &[stamp1, stamp2], base_cap);
    let comparison = Sentence::Judgment { term: comparison_term, truth: rules::comparison(earlier_truth, later_truth, k), stamp: comparison_stamp };

    vec![induction, comparison]
}

/// Question propagation (spec §4.4): derives structurally identical
/// questions for every conclusion shape the judgment table would have
/// produced, without computing any truth value.
fn question_propagation(
    s1: &Sentence,
    s2: &Sentence,
    base_cap: usize,
    interner: &mut Interner,
    next_id: &mut impl FnMut() -> StampId,
) -> Vec<Sentence> {
    let TermData::Statement { copula: copula1, subject: subject1, predicate: predicate1 } = s1.term().data() else {
        return Vec::new();
    };
    let TermData::Statement { copula: copula2, subject: subject2, predicate: predicate2 } = s2.term().data() else {
        return Vec::new();
    };
    if copula1.is_symmetric() != copula2.is_symmetric() {
        return Vec::new();
    }
    let Some(pairing) = find_shared_position(subject1, predicate1, subject2, predicate2) else {
        return Vec::new();
    };
    let copula = conclusion_copula(*copula1, *copula2);

    // Mirror the shapes `nonsymmetric_pair` would conclude for this position,
    // without computing any truth value (spec §4.4).
    let shapes: Vec<(TermHandle, TermHandle)> = match pairing.position {
        SharedPosition::SubjectPredicate => {
            vec![(pairing.outer_two.clone(), pairing.outer_one.clone()), (pairing.outer_one.clone(), pairing.outer_two.clone())]
        }
        SharedPosition::PredicateSubject => {
            vec![(pairing.outer_one.clone(), pairing.outer_two.clone()), (pairing.outer_two.clone(), pairing.outer_one.clone())]
        }
        SharedPosition::SubjectSubject | SharedPosition::PredicatePredicate => {
            vec![(pairing.outer_two.clone(), pairing.outer_one.clone()), (pairing.outer_one.clone(), pairing.outer_two.clone())]
        }
    };

    let occurrence = later_occurrence(s1.stamp(), s2.stamp());
    shapes
        .into_iter()
        .map(|(subject, predicate)| {
            let term = interner.statement(copula, subject, predicate);
            let stamp = Stamp::derived(next_id(), occurrence, "question", &[s1.stamp(), s2.stamp()], base_cap);
            Sentence::Question { term, stamp }
        })
        .collect()
}

/// Runs every derived two-premise conclusion back through the one-premise
/// rule set (spec §4.4), mirroring `do_inference_one_premise`'s unconditional
/// Negation plus guarded Conversion/Contraposition -- each guard already lives
/// in [immediate::conversion]/[immediate::contraposition] themselves, so
/// `finish` just calls all three and keeps whatever isn't `None`.
fn finish(derivations: Vec<Sentence>, k: f64, interner: &mut Interner, next_id: &mut impl FnMut() -> StampId, base_cap: usize) -> Vec<Sentence> {
    let mut all = Vec::with_capacity(derivations.len() * 2);
    for derivation in derivations {
        if let Some(negated) = immediate::negation(&derivation, interner, next_id, base_cap) {
            all.push(negated);
        }
        if let Some(converted) = immediate::conversion(&derivation, k, interner, next_id, base_cap) {
            all.push(converted);
        }
        if let Some(contraposed) = immediate::contraposition(&derivation, k, interner, next_id, base_cap) {
            all.push(contraposed);
        }
        all.push(derivation);
    }
    trace!(target: "dispatch", "rule application produced {} derivation(s)", all.len());
    all
}

/// Marks `a` and `b` as mutually interacted, so the dispatcher will not
/// combine them again (spec §4.4's final step).
pub fn mark_interacted(a: &mut Stamp, b: &mut Stamp) {
    let (id_a, id_b) = (a.id(), b.id());
    a.mark_interacted(id_b);
    b.mark_interacted(id_a);
}
