/**
 * Replaces repetitions with left-recursive auxiliary nonterminals.
 *
 * Every `Repeat(x)` becomes a reference to a fresh variable
 *
 *   aux ::= aux x' | x'
 *
 * where `x'` is `x` with its own repetitions already expanded. Structurally
 * identical repetitions share one auxiliary variable, even across different
 * named rules.
 */

use std::collections::HashMap;
use tracing::{debug, trace};
use crate::grammar::{Grammar, Variable, VariableKind};
use crate::rule::{Rule, Symbol};

pub struct RepeatExpander {
    // Index of the first synthesized variable
    offset: usize,
    rule_name: String,
    repeat_count: usize,
    existing_repeats: HashMap<Rule, Symbol>,
    aux_variables: Vec<Variable>,
}

impl RepeatExpander {
    pub fn with_offset(offset: usize) -> Self {
        Self{
            offset,
            rule_name: String::new(),
            repeat_count: 0,
            existing_repeats: HashMap::new(),
            aux_variables: Vec::new(),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn auxiliary_variables(&self) -> &[Variable] {
        &self.aux_variables
    }

    pub fn into_auxiliary_variables(self) -> Vec<Variable> {
        self.aux_variables
    }

    /// Expands the repetitions in the rule of the variable called `name`.
    /// Synthesized variables are named after it.
    pub fn expand(&mut self, rule: &Rule, name: &str) -> Rule {
        self.rule_name = name.into();
        self.repeat_count = 0;
        self.apply(rule)
    }

    fn apply(&mut self, rule: &Rule) -> Rule {
        match rule {
            Rule::Blank => Rule::Blank,

            Rule::Symbol(sym) => Rule::Symbol(*sym),

            Rule::Choice(elements) => {
                let elements: Vec<_> = elements.iter().map(|e| self.apply(e)).collect();
                Rule::choice(elements)
            },

            Rule::Seq{ left, right } => Rule::Seq{
                left: Box::new(self.apply(left)),
                right: Box::new(self.apply(right)),
            },

            Rule::Repeat(inner) => {
                if let Some(sym) = self.existing_repeats.get(rule) {
                    trace!(rule = %self.rule_name, symbol = sym.index, "reusing repeat");
                    return Rule::Symbol(*sym);
                }

                let inner = self.apply(inner);
                debug_assert!(!inner.contains_repeat(), "repeat left in expanded rule {:?}", inner);
                let index = self.aux_variables.len();
                self.repeat_count += 1;
                let helper_name = format!("{}_repeat{}", self.rule_name, self.repeat_count);
                let repeat_symbol = Symbol::non_terminal(self.offset + index);

                debug!(rule = %self.rule_name, helper = %helper_name, symbol = repeat_symbol.index,
                    "synthesized repeat helper");

                self.existing_repeats.insert(rule.clone(), repeat_symbol);
                self.aux_variables.push(Variable::new(
                    &helper_name,
                    VariableKind::Auxiliary,
                    Rule::Choice(vec![
                        Rule::Seq{
                            left: Box::new(Rule::Symbol(repeat_symbol)),
                            right: Box::new(inner.clone()),
                        },
                        inner,
                    ]),
                ));
                Rule::Symbol(repeat_symbol)
            },

            Rule::Metadata{ rule, params } => Rule::Metadata{
                rule: Box::new(self.apply(rule)),
                params: params.clone(),
            },
        }
    }
}

/// Returns an equivalent grammar without `Repeat` nodes. Original variables
/// keep their indices, the synthesized ones are appended after them.
pub fn expand_repeats(grammar: &Grammar) -> Grammar {
    let mut result = Grammar{
        variables: grammar.variables.clone(),
        extra_tokens: grammar.extra_tokens.clone(),
        expected_conflicts: grammar.expected_conflicts.clone(),
        external_tokens: grammar.external_tokens.clone(),
    };

    let mut expander = RepeatExpander::with_offset(result.variables.len());
    for variable in result.variables.iter_mut() {
        variable.rule = expander.expand(&variable.rule, &variable.name);
    }

    let aux_variables = expander.into_auxiliary_variables();
    debug!(variables = result.variables.len(), auxiliary = aux_variables.len(), "expanded repeats");
    result.variables.extend(aux_variables);
    result
}
