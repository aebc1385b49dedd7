/*!
The intern table.

Every term is built through one of [Interner]'s smart constructors, which
canonicalise (order-invariant children sorted, singleton sets rewritten per
invariant 3) before looking the canonical string up in the table. A cache
hit returns a clone of the existing [TermHandle] (a cheap `Rc` bump); a miss
allocates a fresh [TermNode](super::TermNode).

Grounded on `otter_sat`'s pattern of keeping all context-local state as
fields of an explicit struct rather than process-wide statics (spec §9):
an `Interner` is a field of [Memory](crate::memory::Memory) /
[Engine](crate::context::Engine), never a global.
*/

use std::collections::HashMap;
use std::rc::Rc;

use log::trace;

use crate::types::err::ErrorKind;

use super::{
    array::ArrayTerm, atom::Atom, canonical, compound::Compound, connector::Connector,
    copula::Copula, variable::Variable, variable::VariableKind, TermData, TermHandle, TermNode,
    SELF_NAME,
};

/// The process... no: the engine-local table mapping canonical strings to
/// shared term nodes.
#[derive(Default)]
pub struct Interner {
    table: HashMap<String, TermHandle>,
}

impl Interner {
    /// Looks up `data`'s canonical string in the table, returning the shared
    /// handle on a hit or allocating (and registering) a fresh node on a miss.
    fn intern(&mut self, data: TermData) -> TermHandle {
        let key = canonical::canonical_string(&data);
        if let Some(existing) = self.table.get(&key) {
            return existing.clone();
        }
        let complexity = canonical::complexity(&data);
        let node = TermHandle(Rc::new(TermNode {
            data,
            canonical: key.clone(),
            complexity,
        }));
        trace!(target: "term", "interned new term {key}");
        self.table.insert(key, node.clone());
        node
    }

    /// Looks an already-interned term up by its canonical string, without
    /// constructing anything.
    pub fn lookup(&self, canonical: &str) -> Option<TermHandle> {
        self.table.get(canonical).cloned()
    }

    /// The number of distinct terms interned so far.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn atom(&mut self, name: &str) -> Result<TermHandle, ErrorKind> {
        if !Atom::is_well_formed(name) {
            return Err(ErrorKind::InvalidTerm(format!("'{name}' is not a well-formed atom")));
        }
        Ok(self.intern(TermData::Atomic(Atom::new(name))))
    }

    /// The distinguished SELF term (spec invariant 5).
    pub fn self_term(&mut self) -> TermHandle {
        self.atom(SELF_NAME).expect("SELF is a well-formed atom name")
    }

    pub fn variable(
        &mut self,
        name: &str,
        kind: VariableKind,
        dependencies: Vec<TermHandle>,
    ) -> Result<TermHandle, ErrorKind> {
        if kind != VariableKind::Dependent && !dependencies.is_empty() {
            return Err(ErrorKind::InvalidTerm(
                "only dependent variables carry a dependency list".into(),
            ));
        }
        Ok(self.intern(TermData::Variable(Variable::new(name, kind, dependencies))))
    }

    /// Builds a non-set compound, sorting subterms if `connector` is
    /// [order-invariant](Connector::is_order_invariant).
    pub fn compound(&mut self, connector: Connector, mut subterms: Vec<TermHandle>) -> Result<TermHandle, ErrorKind> {
        if connector.bracket_pair().is_some() {
            return self.set(connector, subterms);
        }
        if connector == Connector::Negation && subterms.len() != 1 {
            return Err(ErrorKind::InvalidTerm("negation takes exactly one subterm".into()));
        }
        if matches!(connector, Connector::ExtImage | Connector::IntImage) {
            let placeholders = subterms
                .iter()
                .filter(|t| matches!(t.data(), TermData::Atomic(a) if a.name() == Connector::PLACEHOLDER))
                .count();
            if placeholders != 1 {
                return Err(ErrorKind::InvalidTerm(
                    "an image requires exactly one placeholder marker".into(),
                ));
            }
        }
        if subterms.is_empty() {
            return Err(ErrorKind::InvalidTerm("a compound requires at least one subterm".into()));
        }
        if connector.is_order_invariant() {
            subterms.sort();
        }
        if let Some(rewritten) = super::simplify::simplify(connector, &subterms) {
            return Ok(self.intern(rewritten));
        }
        Ok(self.intern(TermData::Compound(Compound::new(connector, subterms))))
    }

    /// Builds a set term, applying the singleton-set rewrite of invariant 3
    /// when there is more than one element.
    pub fn set(&mut self, set_connector: Connector, elements: Vec<TermHandle>) -> Result<TermHandle, ErrorKind> {
        if elements.is_empty() {
            return Err(ErrorKind::InvalidTerm("a set requires at least one element".into()));
        }
        if elements.len() == 1 {
            return Ok(self.intern(TermData::Compound(Compound::new(set_connector, elements))));
        }
        let outer = match set_connector {
            Connector::ExtensionalSet => Connector::IntIntersection,
            Connector::IntensionalSet => Connector::ExtIntersection,
            _ => return Err(ErrorKind::InvalidTerm("not a set connector".into())),
        };
        let mut singletons: Vec<TermHandle> = elements
            .into_iter()
            .map(|e| self.intern(TermData::Compound(Compound::new(set_connector, vec![e]))))
            .collect();
        singletons.sort();
        self.compound(outer, singletons)
    }

    /// Builds a statement, ordering subject/predicate canonically when the
    /// copula is [symmetric](Copula::is_symmetric) (spec invariant 2 extended
    /// to symmetric copulas, recorded in `DESIGN.md`).
    pub fn statement(&mut self, copula: Copula, subject: TermHandle, predicate: TermHandle) -> TermHandle {
        let (subject, predicate) = if copula.is_symmetric() && predicate < subject {
            (predicate, subject)
        } else {
            (subject, predicate)
        };
        self.intern(TermData::Statement {
            copula,
            subject,
            predicate,
        })
    }

    pub fn array(&mut self, array: ArrayTerm) -> Result<TermHandle, ErrorKind> {
        if !array.is_well_formed() {
            return Err(ErrorKind::InvalidTerm(format!(
                "array term '{}' is malformed (dimensions out of 1-3 or index out of [-1,1])",
                array.name()
            )));
        }
        Ok(self.intern(TermData::Array(array)))
    }
}
