/*!
Error types used in the library.

- Most of these surface only at the parse or dispatch boundary; the rule
  layer itself treats [RuleNotApplicable](ErrorKind::RuleNotApplicable) and
  [EvidentialOverlap](ErrorKind::EvidentialOverlap) as silent no-ops (an
  empty derivation list), never as a propagated error --- see
  [inference::dispatch](crate::inference::dispatch).
- Invariant violations in the term model (a malformed interned term, a
  statement missing a subject/predicate) are programming errors and are not
  represented here; they panic, per the design of the library.
*/

use crate::term::TermHandle;

/// A union of varied error kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    /// The input string could not be parsed as a well-formed term.
    InvalidTerm(String),

    /// The input string could not be parsed as a well-formed sentence.
    InvalidSentence(String),

    /// Two premises were passed to a two-premise rule with overlapping evidential bases.
    ///
    /// Treated as a silent no-op by [the dispatcher](crate::inference::dispatch), listed here
    /// so callers working directly with rule functions can observe it.
    EvidentialOverlap,

    /// The rule does not apply to the given premise(s) (e.g. conversion on a symmetric copula).
    ///
    /// Treated as a silent no-op by [the dispatcher](crate::inference::dispatch).
    RuleNotApplicable,

    /// A bag was at capacity; the carried item is the one evicted to make room.
    ///
    /// Not fatal --- insertion still succeeded.
    BagFull,

    /// No concept exists for the requested term.
    UnknownConcept(TermHandle),

    /// The reserved input word was used where Narsese was expected.
    ReservedWord(String),

    /// The requested action is a named Non-goal of the engine (e.g. disk persistence).
    Unsupported(&'static str),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTerm(s) => write!(f, "invalid term: {s}"),
            Self::InvalidSentence(s) => write!(f, "invalid sentence: {s}"),
            Self::EvidentialOverlap => write!(f, "premises share an evidential base"),
            Self::RuleNotApplicable => write!(f, "rule is not applicable to the given premise(s)"),
            Self::BagFull => write!(f, "bag is at capacity"),
            Self::UnknownConcept(t) => write!(f, "no concept for term {t:?}"),
            Self::ReservedWord(s) => write!(f, "'{s}' is a reserved word, not Narsese"),
            Self::Unsupported(what) => write!(f, "{what} is not supported by this engine"),
        }
    }
}

impl std::error::Error for ErrorKind {}
