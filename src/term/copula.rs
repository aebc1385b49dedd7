//! Copulas: the binary relation of a [statement](super::TermData::Statement).

/// The copula of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Copula {
    /// `-->`
    Inheritance,
    /// `<->`
    Similarity,
    /// `==>`
    Implication,
    /// `<=>`
    Equivalence,
    /// `=/>`: predictive implication (subject precedes predicate).
    PredictiveImplication,
    /// `=|>`: concurrent implication (subject and predicate co-occur).
    ConcurrentImplication,
    /// `=\>`: retrospective implication (subject follows predicate).
    RetrospectiveImplication,
    /// `</>`: predictive equivalence.
    PredictiveEquivalence,
    /// `<|>`: concurrent equivalence.
    ConcurrentEquivalence,
}

impl Copula {
    pub fn token(self) -> &'static str {
        match self {
            Self::Inheritance => "-->",
            Self::Similarity => "<->",
            Self::Implication => "==>",
            Self::Equivalence => "<=>",
            Self::PredictiveImplication => "=/>",
            Self::ConcurrentImplication => "=|>",
            Self::RetrospectiveImplication => "=\\>",
            Self::PredictiveEquivalence => "</>",
            Self::ConcurrentEquivalence => "<|>",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "-->" => Self::Inheritance,
            "<->" => Self::Similarity,
            "==>" => Self::Implication,
            "<=>" => Self::Equivalence,
            "=/>" => Self::PredictiveImplication,
            "=|>" => Self::ConcurrentImplication,
            "=\\>" => Self::RetrospectiveImplication,
            "</>" => Self::PredictiveEquivalence,
            "<|>" => Self::ConcurrentEquivalence,
            _ => return None,
        })
    }

    /// True for the copulas whose premises commute (spec §4.3's `<->`): the
    /// subject and predicate play a symmetric role.
    pub fn is_symmetric(self) -> bool {
        matches!(
            self,
            Self::Similarity | Self::Equivalence | Self::PredictiveEquivalence | Self::ConcurrentEquivalence
        )
    }

    /// True iff this is a higher-order (implication-class) copula, as opposed
    /// to a first-order (inheritance-class) one. Used by the dispatcher to
    /// decide whether intersection/difference connectives are replaced by
    /// conjunction/disjunction (spec §4.3).
    pub fn is_higher_order(self) -> bool {
        matches!(
            self,
            Self::Implication
                | Self::Equivalence
                | Self::PredictiveImplication
                | Self::ConcurrentImplication
                | Self::RetrospectiveImplication
                | Self::PredictiveEquivalence
                | Self::ConcurrentEquivalence
        )
    }

    /// True iff this copula carries a temporal relation (predictive, concurrent, retrospective).
    pub fn is_temporal(self) -> bool {
        matches!(
            self,
            Self::PredictiveImplication
                | Self::ConcurrentImplication
                | Self::RetrospectiveImplication
                | Self::PredictiveEquivalence
                | Self::ConcurrentEquivalence
        )
    }

    /// The symmetric counterpart of an asymmetric copula in the same family
    /// (inheritance <-> similarity, implication <-> equivalence, predictive
    /// implication <-> predictive equivalence, concurrent implication <->
    /// concurrent equivalence), used by Comparison (spec §4.3).
    pub fn symmetric_counterpart(self) -> Option<Self> {
        Some(match self {
            Self::Inheritance => Self::Similarity,
            Self::Implication => Self::Equivalence,
            Self::PredictiveImplication => Self::PredictiveEquivalence,
            Self::ConcurrentImplication => Self::ConcurrentEquivalence,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Copula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
