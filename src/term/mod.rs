/*!
Terms: the closed set of Narsese term variants, their canonical string form,
structural complexity, and the interning table which guarantees structural
equality implies identity.

The 'canonical' implementation pattern follows the teacher's trait-plus-
canonical-structure split (see e.g. `otter_sat::structures::clause`): here
there is a single closed [Term] enum rather than a trait, since terms (unlike
literals/clauses) have no alternate representations worth abstracting over.

# Interning

Invariant 1 of the specification requires that structurally equal terms
share identity. This is implemented by [Interner]: every term is built
through [Interner::intern], which looks the term's canonical string up in a
table before allocating. [TermHandle] is a cheap `Rc` clone of the shared
node; equality and hashing on [TermHandle] delegate to the canonical string,
which is sound (two interned handles are `Rc::ptr_eq` iff their canonical
strings match) and convenient (no need to dereference before comparing).
*/

mod array;
mod atom;
mod canonical;
mod compound;
mod connector;
mod copula;
mod intern;
mod parse;
mod simplify;
mod variable;

pub use array::ArrayTerm;
pub use atom::{Atom, SELF_NAME};
pub use compound::Compound;
pub use connector::Connector;
pub use copula::Copula;
pub use intern::Interner;
pub use parse::term_from_string;
pub use variable::{Variable, VariableKind};

use std::rc::Rc;

/// The closed set of term variants.
#[derive(Debug)]
pub enum TermData {
    /// A bare word over the fixed alphanumeric alphabet.
    Atomic(Atom),

    /// A named variable, optionally dependent on a list of independent variables.
    Variable(Variable),

    /// A term connector applied to an ordered list of subterms.
    Compound(Compound),

    /// A distinguished binary compound: a copula plus subject and predicate.
    Statement {
        copula: Copula,
        subject: TermHandle,
        predicate: TermHandle,
    },

    /// An N-dimensional (1-3) named term whose subterms are indexed element terms.
    Array(ArrayTerm),
}

/// A single interned term node: its data, canonical string, and complexity.
///
/// Never constructed outside [Interner::intern]; the canonical string is
/// computed once, at construction, and never recomputed.
#[derive(Debug)]
pub struct TermNode {
    pub data: TermData,
    canonical: String,
    complexity: usize,
}

impl TermNode {
    /// The canonical string form of the term.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The syntactic complexity of the term (spec invariant 4).
    pub fn complexity(&self) -> usize {
        self.complexity
    }

    /// True iff the term is an operation: a statement whose subject is a
    /// product with [SELF](Atom) as its first element (spec invariant 5).
    pub fn is_operation(&self) -> bool {
        let TermData::Statement { subject, .. } = &self.data else {
            return false;
        };
        let TermData::Compound(Compound {
            connector: Connector::Product,
            subterms,
        }) = &subject.data
        else {
            return false;
        };
        matches!(subterms.first().map(|t| &t.data), Some(TermData::Atomic(a)) if a.name() == SELF_NAME)
    }

    /// True iff the term is a degenerate compound: a top-level term
    /// connector rather than a statement. Used by the dispatcher to reject
    /// non-statement premises (spec §4.4).
    pub fn is_degenerate_compound(&self) -> bool {
        matches!(self.data, TermData::Compound(_))
    }
}

/// A shared, interned term. Cheap to clone; equality and hashing delegate to
/// the canonical string, which is unique per invariant 1.
#[derive(Debug, Clone)]
pub struct TermHandle(pub(crate) Rc<TermNode>);

impl TermHandle {
    pub fn data(&self) -> &TermData {
        &self.0.data
    }

    pub fn canonical(&self) -> &str {
        self.0.canonical()
    }

    pub fn complexity(&self) -> usize {
        self.0.complexity()
    }

    pub fn is_operation(&self) -> bool {
        self.0.is_operation()
    }

    pub fn is_degenerate_compound(&self) -> bool {
        self.0.is_degenerate_compound()
    }

    pub fn node(&self) -> &Rc<TermNode> {
        &self.0
    }
}

impl PartialEq for TermHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || self.0.canonical == other.0.canonical
    }
}
impl Eq for TermHandle {}

impl std::hash::Hash for TermHandle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.canonical.hash(state)
    }
}

impl PartialOrd for TermHandle {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for TermHandle {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.canonical.cmp(&other.0.canonical)
    }
}

impl std::fmt::Display for TermHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_identity() {
        let mut interner = Interner::default();
        let a = term_from_string("(A-->B)", &mut interner).unwrap();
        let b = term_from_string(a.canonical(), &mut interner).unwrap();
        assert_eq!(a, b);
        assert!(Rc::ptr_eq(a.node(), b.node()));
    }

    #[test]
    fn complexity_additivity() {
        let mut interner = Interner::default();
        let a = term_from_string("A", &mut interner).unwrap();
        let b = term_from_string("B", &mut interner).unwrap();
        let stmt = term_from_string("(A-->B)", &mut interner).unwrap();
        assert_eq!(stmt.complexity(), 1 + a.complexity() + b.complexity());
    }
}
