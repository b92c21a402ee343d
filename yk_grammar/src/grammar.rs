/**
 * Symbol-resolved grammar, as handed between the preparation passes.
 */

use std::collections::BTreeSet;
use crate::rule::{Rule, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Named,
    Hidden,
    Auxiliary,
    Anonymous,
}

/// A named production. Its position in `Grammar::variables` is its
/// nonterminal index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub kind: VariableKind,
    pub rule: Rule,
}

impl Variable {
    pub fn new(name: &str, kind: VariableKind, rule: Rule) -> Self {
        Self{ name: name.into(), kind, rule }
    }

    pub fn named(name: &str, rule: Rule) -> Self {
        Self::new(name, VariableKind::Named, rule)
    }

    pub fn hidden(name: &str, rule: Rule) -> Self {
        Self::new(name, VariableKind::Hidden, rule)
    }

    pub fn auxiliary(name: &str, rule: Rule) -> Self {
        Self::new(name, VariableKind::Auxiliary, rule)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalToken {
    pub name: String,
    pub kind: VariableKind,
    pub corresponding_internal_token: Option<Symbol>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    pub variables: Vec<Variable>,
    pub extra_tokens: BTreeSet<Symbol>,
    pub expected_conflicts: BTreeSet<BTreeSet<Symbol>>,
    pub external_tokens: Vec<ExternalToken>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variables(variables: Vec<Variable>) -> Self {
        Self{ variables, ..Self::default() }
    }

    /// The variable a nonterminal symbol refers to.
    pub fn variable(&self, symbol: Symbol) -> Option<&Variable> {
        if symbol.is_non_terminal() {
            self.variables.get(symbol.index)
        }
        else {
            None
        }
    }

    pub fn symbol_of(&self, name: &str) -> Option<Symbol> {
        self.variables.iter()
            .position(|v| v.name == name)
            .map(Symbol::non_terminal)
    }
}
