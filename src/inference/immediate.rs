//! One-premise ("immediate") inference rules (spec §4.3).

use crate::sentence::{Sentence, Stamp};
use crate::term::{Compound, Connector, Copula, Interner, TermData, TermHandle};
use crate::truth::rules;
use crate::types::err::ErrorKind;
use crate::types::StampId;

fn derived_stamp(parent: &Stamp, rule: &'static str, next_id: &mut impl FnMut() -> StampId, base_cap: usize) -> Stamp {
    Stamp::derived(next_id(), parent.occurrence(), rule, &[parent], base_cap)
}

/// Negation always applies, to judgments and goals alike (spec §4.3: "Negation (always)").
pub fn negation(
    sentence: &Sentence,
    interner: &mut Interner,
    next_id: &mut impl FnMut() -> StampId,
    base_cap: usize,
) -> Option<Sentence> {
    let negated_term = interner
        .compound(Connector::Negation, vec![sentence.term().clone()])
        .expect("negating a well-formed term always yields a well-formed compound");

    match sentence {
        Sentence::Judgment { truth, stamp, .. } => Some(Sentence::Judgment {
            term: negated_term,
            truth: rules::negation(*truth),
            stamp: derived_stamp(stamp, "negation", next_id, base_cap),
        }),
        Sentence::Goal { desire, stamp, .. } => Some(Sentence::Goal {
            term: negated_term,
            desire: rules::negation(*desire),
            stamp: derived_stamp(stamp, "negation", next_id, base_cap),
        }),
        Sentence::Question { .. } => None,
    }
}

/// Conversion: only for an asymmetric copula and a positive frequency (spec
/// §4.3: "Conversion (only when copula is asymmetric and f > 0)").
pub fn conversion(
    sentence: &Sentence,
    k: f64,
    interner: &mut Interner,
    next_id: &mut impl FnMut() -> StampId,
    base_cap: usize,
) -> Option<Sentence> {
    let truth = sentence.truth()?;
    if truth.frequency <= 0.0 {
        return None;
    }
    let TermData::Statement { copula, subject, predicate } = sentence.term().data() else {
        return None;
    };
    if copula.is_symmetric() {
        return None;
    }
    let swapped = interner.statement(*copula, predicate.clone(), subject.clone());
    Some(Sentence::Judgment {
        term: swapped,
        truth: rules::conversion(truth, k),
        stamp: derived_stamp(sentence.stamp(), "conversion", next_id, base_cap),
    })
}

/// Contraposition: implication only, and only when `f < 1` (spec §4.3).
pub fn contraposition(
    sentence: &Sentence,
    k: f64,
    interner: &mut Interner,
    next_id: &mut impl FnMut() -> StampId,
    base_cap: usize,
) -> Option<Sentence> {
    let truth = sentence.truth()?;
    if truth.frequency >= 1.0 {
        return None;
    }
    let TermData::Statement { copula: Copula::Implication, subject, predicate } = sentence.term().data() else {
        return None;
    };
    let negated_predicate = interner.compound(Connector::Negation, vec![predicate.clone()]).expect("negation always succeeds");
    let negated_subject = interner.compound(Connector::Negation, vec![subject.clone()]).expect("negation always succeeds");
    let conclusion_term = interner.statement(Copula::Implication, negated_predicate, negated_subject);
    Some(Sentence::Judgment {
        term: conclusion_term,
        truth: rules::contraposition(truth, k),
        stamp: derived_stamp(sentence.stamp(), "contraposition", next_id, base_cap),
    })
}

/// Extracts the product side of `sentence`'s statement and the side it's
/// matched against, for either image direction.
fn product_side(term: &TermHandle, want_subject_product: bool) -> Option<(Copula, &Compound, &TermHandle)> {
    let TermData::Statement { copula, subject, predicate } = term.data() else {
        return None;
    };
    let candidate = if want_subject_product { subject } else { predicate };
    let TermData::Compound(compound) = candidate.data() else {
        return None;
    };
    if compound.connector != Connector::Product {
        return None;
    }
    let other = if want_subject_product { predicate } else { subject };
    Some((*copula, compound, other))
}

/// Extensional image: from `(*,a1,...,an)-->relation`, extracts `args[position]`
/// into the subject, leaving a placeholder at its old position in the image
/// compound (spec §9's "placeholder at the position of the extracted term"
/// convention, resolved in `DESIGN.md`).
pub fn extensional_image(
    sentence: &Sentence,
    position: usize,
    interner: &mut Interner,
    next_id: &mut impl FnMut() -> StampId,
    base_cap: usize,
) -> Result<Option<Sentence>, ErrorKind> {
    image(sentence, position, true, Connector::ExtImage, interner, next_id, base_cap)
}

/// Intensional image: the dual of [extensional_image], from `relation-->(*,a1,...,an)`.
pub fn intensional_image(
    sentence: &Sentence,
    position: usize,
    interner: &mut Interner,
    next_id: &mut impl FnMut() -> StampId,
    base_cap: usize,
) -> Result<Option<Sentence>, ErrorKind> {
    image(sentence, position, false, Connector::IntImage, interner, next_id, base_cap)
}

fn image(
    sentence: &Sentence,
    position: usize,
    subject_is_product: bool,
    image_connector: Connector,
    interner: &mut Interner,
    next_id: &mut impl FnMut() -> StampId,
    base_cap: usize,
) -> Result<Option<Sentence>, ErrorKind> {
    let truth = match sentence.truth() {
        Some(t) => t,
        None => return Ok(None),
    };
    let Some((copula, product, relation)) = product_side(sentence.term(), subject_is_product) else {
        return Ok(None);
    };
    if position >= product.subterms.len() {
        return Err(ErrorKind::InvalidTerm("image position out of range".into()));
    }

    let extracted = product.subterms[position].clone();
    let placeholder = interner.atom(Connector::PLACEHOLDER)?;
    let mut image_args = vec![relation.clone()];
    for (index, arg) in product.subterms.iter().enumerate() {
        image_args.push(if index == position { placeholder.clone() } else { arg.clone() });
    }
    let image_term = interner.compound(image_connector, image_args)?;

    let conclusion_term = if subject_is_product {
        interner.statement(copula, extracted, image_term)
    } else {
        interner.statement(copula, image_term, extracted)
    };

    Ok(Some(Sentence::Judgment {
        term: conclusion_term,
        truth,
        stamp: derived_stamp(sentence.stamp(), "image", next_id, base_cap),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::term_from_string;
    use crate::truth::TruthValue;

    fn next_id_fn() -> impl FnMut() -> StampId {
        let mut n = 10u64;
        move || {
            n += 1;
            n
        }
    }

    #[test]
    fn negation_flips_frequency() {
        let mut interner = Interner::default();
        let term = term_from_string("(A-->B)", &mut interner).unwrap();
        let sentence = Sentence::Judgment { term, truth: TruthValue::new(0.3, 0.7), stamp: Stamp::input(1, None) };
        let mut next_id = next_id_fn();
        let negated = negation(&sentence, &mut interner, &mut next_id, 100).unwrap();
        assert!((negated.truth().unwrap().frequency - 0.7).abs() < 1e-12);
    }

    #[test]
    fn conversion_rejects_zero_frequency() {
        let mut interner = Interner::default();
        let term = term_from_string("(A-->B)", &mut interner).unwrap();
        let sentence = Sentence::Judgment { term, truth: TruthValue::new(0.0, 0.7), stamp: Stamp::input(1, None) };
        let mut next_id = next_id_fn();
        assert!(conversion(&sentence, 1.0, &mut interner, &mut next_id, 100).is_none());
    }

    #[test]
    fn extensional_image_extracts_argument() {
        let mut interner = Interner::default();
        let term = term_from_string("((*,a,b)-->R)", &mut interner).unwrap();
        let sentence = Sentence::Judgment { term, truth: TruthValue::new(1.0, 0.9), stamp: Stamp::input(1, None) };
        let mut next_id = next_id_fn();
        let derived = extensional_image(&sentence, 0, &mut interner, &mut next_id, 100).unwrap().unwrap();
        assert_eq!(derived.term().canonical(), "(a-->(/,R,_,b))");
    }
}
