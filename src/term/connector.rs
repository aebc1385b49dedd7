//! Term connectors: the fixed symbol table of compound-forming operators.

/// A term connector, applied to an ordered list of subterms to form a [compound](super::Compound).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    /// `&`: extensional intersection.
    ExtIntersection,
    /// `|`: intensional intersection.
    IntIntersection,
    /// `-`: extensional difference.
    ExtDifference,
    /// `~`: intensional difference.
    IntDifference,
    /// `*`: product.
    Product,
    /// `/`: extensional image, with a single placeholder marker among its subterms.
    ExtImage,
    /// `\`: intensional image, with a single placeholder marker among its subterms.
    IntImage,
    /// `--`: negation. Exactly one subterm.
    Negation,
    /// `&&`: conjunction.
    Conjunction,
    /// `||`: disjunction.
    Disjunction,
    /// `&/`: sequential conjunction (temporally ordered).
    SequentialConjunction,
    /// `&|`: parallel conjunction (temporally unordered).
    ParallelConjunction,
    /// `{...}`: extensional set.
    ExtensionalSet,
    /// `[...]`: intensional set.
    IntensionalSet,
}

impl Connector {
    /// The wire-format token for this connector, as used inside `(connector,a,b,...)`.
    ///
    /// Set connectors are not written this way (they use bracket pairs directly);
    /// see [Connector::bracket_pair].
    pub fn token(self) -> &'static str {
        match self {
            Self::ExtIntersection => "&",
            Self::IntIntersection => "|",
            Self::ExtDifference => "-",
            Self::IntDifference => "~",
            Self::Product => "*",
            Self::ExtImage => "/",
            Self::IntImage => "\\",
            Self::Negation => "--",
            Self::Conjunction => "&&",
            Self::Disjunction => "||",
            Self::SequentialConjunction => "&/",
            Self::ParallelConjunction => "&|",
            Self::ExtensionalSet | Self::IntensionalSet => {
                unreachable!("set connectors are written with bracket pairs, not tokens")
            }
        }
    }

    /// The enclosing bracket pair for set connectors.
    pub fn bracket_pair(self) -> Option<(char, char)> {
        match self {
            Self::ExtensionalSet => Some(('{', '}')),
            Self::IntensionalSet => Some(('[', ']')),
            _ => None,
        }
    }

    /// The dual set connector (extensional <-> intensional), used by the
    /// singleton-set rewrite of invariant 3.
    pub fn dual_set(self) -> Option<Self> {
        match self {
            Self::ExtensionalSet => Some(Self::IntensionalSet),
            Self::IntensionalSet => Some(Self::ExtensionalSet),
            _ => None,
        }
    }

    /// True for the connectors whose subterms are stored in canonical
    /// (lexicographic) order at construction time (spec invariant 2).
    pub fn is_order_invariant(self) -> bool {
        matches!(
            self,
            Self::ExtIntersection
                | Self::IntIntersection
                | Self::ParallelConjunction
                | Self::ExtensionalSet
                | Self::IntensionalSet
        )
    }

    /// Parses a connector from its wire-format token (see [Connector::token]).
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "&" => Self::ExtIntersection,
            "|" => Self::IntIntersection,
            "-" => Self::ExtDifference,
            "~" => Self::IntDifference,
            "*" => Self::Product,
            "/" => Self::ExtImage,
            "\\" => Self::IntImage,
            "--" => Self::Negation,
            "&&" => Self::Conjunction,
            "||" => Self::Disjunction,
            "&/" => Self::SequentialConjunction,
            "&|" => Self::ParallelConjunction,
            _ => return None,
        })
    }

    /// The image placeholder marker, written `_` and used as a subterm of an
    /// [ExtImage](Self::ExtImage)/[IntImage](Self::IntImage) compound to mark
    /// the position of the extracted term (spec §9's preserved convention).
    pub const PLACEHOLDER: &'static str = "_";
}

impl std::fmt::Display for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExtensionalSet | Self::IntensionalSet => Ok(()),
            other => write!(f, "{}", other.token()),
        }
    }
}
