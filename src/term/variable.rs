//! Variable terms: name, kind, and optional dependency list.

use super::TermHandle;

/// The kind of a variable term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VariableKind {
    /// `#name`, or `#name(dep1,dep2)` when dependent.
    Independent,

    /// `#name(dep1,dep2)`: depends on the listed independent variables.
    Dependent,

    /// `?name`: a query variable.
    Query,
}

/// A variable term: a name, a kind, and (for dependent variables) the
/// independent variables it depends on.
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    kind: VariableKind,
    dependencies: Vec<TermHandle>,
}

impl Variable {
    pub fn new(name: impl Into<String>, kind: VariableKind, dependencies: Vec<TermHandle>) -> Self {
        Self {
            name: name.into(),
            kind,
            dependencies,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    pub fn dependencies(&self) -> &[TermHandle] {
        &self.dependencies
    }

    /// The sigil used to write this kind of variable in Narsese.
    pub fn sigil(&self) -> char {
        match self.kind {
            VariableKind::Independent | VariableKind::Dependent => '#',
            VariableKind::Query => '?',
        }
    }

    pub fn canonical_string(&self) -> String {
        if self.dependencies.is_empty() {
            format!("{}{}", self.sigil(), self.name)
        } else {
            let deps = self
                .dependencies
                .iter()
                .map(|d| d.canonical().to_string())
                .collect::<Vec<_>>()
                .join(",");
            format!("{}{}({})", self.sigil(), self.name, deps)
        }
    }
}
