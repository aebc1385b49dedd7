/*!
Sentences: judgments, goals, and questions, each carrying a [Stamp], plus the
[Task]/[Budget] wrapper used when a sentence is held in a [Bag](crate::bag::Bag).
*/

mod budget;
mod stamp;
mod task;

pub use budget::Budget;
pub use stamp::{Stamp, StampIssuer};
pub use task::Task;

use crate::term::TermHandle;
use crate::truth::{DesireValue, TruthValue};

/// A sentence: the term-level content plus the value (if any) it carries.
///
/// Sentences are immutable once created; derivations are always fresh
/// values (spec §3's lifecycle note).
#[derive(Debug, Clone)]
pub enum Sentence {
    /// An assertion with a [TruthValue].
    Judgment {
        term: TermHandle,
        truth: TruthValue,
        stamp: Stamp,
    },

    /// A desire with a [DesireValue] (structurally a [TruthValue]).
    Goal {
        term: TermHandle,
        desire: DesireValue,
        stamp: Stamp,
    },

    /// A query: a term and a stamp, no value.
    Question { term: TermHandle, stamp: Stamp },
}

impl Sentence {
    pub fn term(&self) -> &TermHandle {
        match self {
            Self::Judgment { term, .. } | Self::Goal { term, .. } | Self::Question { term, .. } => term,
        }
    }

    pub fn stamp(&self) -> &Stamp {
        match self {
            Self::Judgment { stamp, .. } | Self::Goal { stamp, .. } | Self::Question { stamp, .. } => stamp,
        }
    }

    pub fn stamp_mut(&mut self) -> &mut Stamp {
        match self {
            Self::Judgment { stamp, .. } | Self::Goal { stamp, .. } | Self::Question { stamp, .. } => stamp,
        }
    }

    pub fn truth(&self) -> Option<TruthValue> {
        match self {
            Self::Judgment { truth, .. } => Some(*truth),
            _ => None,
        }
    }

    pub fn desire(&self) -> Option<DesireValue> {
        match self {
            Self::Goal { desire, .. } => Some(*desire),
            _ => None,
        }
    }

    pub fn is_question(&self) -> bool {
        matches!(self, Self::Question { .. })
    }

    pub fn is_judgment(&self) -> bool {
        matches!(self, Self::Judgment { .. })
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, Self::Goal { .. })
    }

    /// The expectation of a judgment's truth or a goal's desire; `None` for questions.
    pub fn expectation(&self) -> Option<f64> {
        match self {
            Self::Judgment { truth, .. } => Some(truth.expectation()),
            Self::Goal { desire, .. } => Some(desire.expectation()),
            Self::Question { .. } => None,
        }
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Judgment { term, truth, .. } => write!(f, "{term}. {truth}"),
            Self::Goal { term, desire, .. } => write!(f, "{term}! {desire}"),
            Self::Question { term, .. } => write!(f, "{term}?"),
        }
    }
}
