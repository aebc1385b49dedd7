//! Pure functions computing the canonical string and complexity of a
//! [TermData](super::TermData). Never called outside [Interner](super::Interner);
//! kept separate so the string-form rules (spec §6) are visible on their own.

use super::{Compound, TermData};

pub(super) fn canonical_string(data: &TermData) -> String {
    match data {
        TermData::Atomic(a) => a.name().to_string(),
        TermData::Variable(v) => v.canonical_string(),
        TermData::Compound(c) => compound_canonical(c),
        TermData::Statement {
            copula,
            subject,
            predicate,
        } => format!("({}{}{})", subject.canonical(), copula.token(), predicate.canonical()),
        TermData::Array(a) => a.canonical_string(),
    }
}

fn compound_canonical(c: &Compound) -> String {
    if let Some((open, close)) = c.connector.bracket_pair() {
        let inner = c
            .subterms
            .iter()
            .map(|t| t.canonical().to_string())
            .collect::<Vec<_>>()
            .join(",");
        return format!("{open}{inner}{close}");
    }
    let inner = c
        .subterms
        .iter()
        .map(|t| t.canonical().to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("({},{inner})", c.connector.token())
}

pub(super) fn complexity(data: &TermData) -> usize {
    match data {
        TermData::Atomic(_) => 1,
        TermData::Variable(v) => 1 + v.dependencies().len(),
        TermData::Compound(c) => 1 + c.subterms.iter().map(|t| t.complexity()).sum::<usize>(),
        TermData::Statement { subject, predicate, .. } => {
            1 + subject.complexity() + predicate.complexity()
        }
        TermData::Array(_) => 1,
    }
}
