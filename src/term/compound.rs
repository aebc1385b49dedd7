//! Compound terms: a connector applied to an ordered list of subterms.

use super::{Connector, TermHandle};

/// A term connector applied to an ordered list of subterms.
///
/// For [order-invariant](Connector::is_order_invariant) connectors the list
/// is stored in canonical (lexicographic) order; see [super::canonical].
#[derive(Debug, Clone)]
pub struct Compound {
    pub connector: Connector,
    pub subterms: Vec<TermHandle>,
}

impl Compound {
    pub fn new(connector: Connector, subterms: Vec<TermHandle>) -> Self {
        Self { connector, subterms }
    }

    /// The position of the [placeholder](Connector::PLACEHOLDER) marker
    /// within an image's subterms, if this is an image compound.
    pub fn placeholder_position(&self) -> Option<usize> {
        if !matches!(self.connector, Connector::ExtImage | Connector::IntImage) {
            return None;
        }
        self.subterms.iter().position(|t| {
            matches!(t.data(), super::TermData::Atomic(a) if a.name() == Connector::PLACEHOLDER)
        })
    }
}
