//! Structural-rewrite hooks for compound terms (spec §4.1, §9).
//!
//! Singleton-set normalisation and canonical ordering of order-invariant
//! children are fully implemented elsewhere ([Interner::set](super::Interner::set),
//! [Connector::is_order_invariant]). The other rewrite cases the
//! specification reserves a hook for have no specified rewrite rule (spec
//! §9: "the correct rewrite rules there are not specified... do not infer
//! intent"), so [simplify] is called but is a deliberate no-op for all of
//! them today.

use super::{Connector, TermData, TermHandle};

/// Attempts a structural rewrite of `connector(subterms)` before interning.
/// `None` means "intern as given"; called from [Interner::compound](super::Interner::compound).
pub(super) fn simplify(_connector: Connector, _subterms: &[TermHandle]) -> Option<TermData> {
    // TODO(double negation): (--,(--,t)) should presumably collapse to t
    // (or to t with a transformed truth-value); the exact target form is
    // not specified in the source this was distilled from.
    // TODO(self-difference): A-A / A~A likely reduces to a degenerate
    // form; not specified.
    // TODO(intersection idempotence): A&A / A|A == A is plausible but not
    // specified as a required rewrite.
    //
    // The image-placeholder convention (one `_` marker at the position of
    // the extracted term) is already enforced at construction time in
    // `Interner::compound`, not here -- that one *is* specified, and
    // preserved bit-exactly.
    None
}
