/**
 * Rule and grammar generation strategies.
 */

use std::ops::Range;
use yk_grammar::{Grammar, Rule, Symbol, Variable, VariableKind};
use crate::rnd::Rnd;

pub trait RuleGenStrategy {
    /// Generates a rule body that may reference nonterminals below
    /// `variables`.
    fn generate(&self, rnd: &mut Rnd, variables: usize) -> Rule;
}

fn random_leaf(rnd: &mut Rnd, terminals: usize, variables: usize) -> Rule {
    if rnd.chance(0.1) {
        Rule::Blank
    }
    else if variables > 0 && rnd.chance(0.3) {
        Rule::Symbol(Symbol::non_terminal(rnd.index(&(0..variables))))
    }
    else {
        Rule::Symbol(Symbol::terminal(rnd.index(&(0..terminals))))
    }
}

// Every rule variant, up to a depth
pub struct RandomRuleGenerator {
    terminals: usize,
    depth: usize,
}

impl RandomRuleGenerator {
    pub fn with_terminals_and_depth(terminals: usize, depth: usize) -> Self {
        assert!(terminals > 0);
        Self{ terminals, depth }
    }

    fn generate_at(&self, rnd: &mut Rnd, depth: usize, variables: usize) -> Rule {
        if depth == 0 {
            return random_leaf(rnd, self.terminals, variables);
        }
        match rnd.index(&(0..6)) {
            0 => random_leaf(rnd, self.terminals, variables),
            1 => {
                let n = rnd.index(&(2..4));
                let elements: Vec<_> = (0..n).map(|_| self.generate_at(rnd, depth - 1, variables)).collect();
                Rule::choice(elements)
            },
            2 => Rule::Seq{
                left: Box::new(self.generate_at(rnd, depth - 1, variables)),
                right: Box::new(self.generate_at(rnd, depth - 1, variables)),
            },
            3 | 4 => Rule::repeat(self.generate_at(rnd, depth - 1, variables)),
            _ => {
                let inner = self.generate_at(rnd, depth - 1, variables);
                if rnd.chance(0.5) {
                    Rule::prec_left(rnd.precedence(&(-2..3)), inner)
                }
                else {
                    let is_named = rnd.chance(0.5);
                    Rule::alias(inner, "alias", is_named)
                }
            },
        }
    }
}

impl RuleGenStrategy for RandomRuleGenerator {
    fn generate(&self, rnd: &mut Rnd, variables: usize) -> Rule {
        self.generate_at(rnd, self.depth, variables)
    }
}

// Draws from a small pool so the same repeat shows up many times
pub struct SharedRepeatGenerator {
    pool: Vec<Rule>,
    len: Range<usize>,
}

impl SharedRepeatGenerator {
    pub fn with_pool_and_len(pool: Vec<Rule>, len: Range<usize>) -> Self {
        assert!(pool.len() > 0);
        Self{ pool, len }
    }
}

impl RuleGenStrategy for SharedRepeatGenerator {
    fn generate(&self, rnd: &mut Rnd, _variables: usize) -> Rule {
        let len = rnd.index(&self.len);
        let elements: Vec<_> = (0..len).map(|_| rnd.pick(&self.pool).clone()).collect();
        Rule::seq(elements)
    }
}

pub struct RandomRule {
    strats: Vec<Box<dyn RuleGenStrategy>>,
}

impl RandomRule {
    pub fn new() -> Self {
        Self{ strats: Vec::new() }
    }

    pub fn add<G>(&mut self, g: G) where G : RuleGenStrategy + 'static {
        self.strats.push(Box::new(g));
    }
}

impl RuleGenStrategy for RandomRule {
    fn generate(&self, rnd: &mut Rnd, variables: usize) -> Rule {
        rnd.pick(&self.strats).generate(rnd, variables)
    }
}

pub fn default_strategy() -> RandomRule {
    let t = |i| Rule::Symbol(Symbol::terminal(i));
    let mut strat = RandomRule::new();
    strat.add(RandomRuleGenerator::with_terminals_and_depth(4, 4));
    strat.add(RandomRuleGenerator::with_terminals_and_depth(2, 6));
    strat.add(SharedRepeatGenerator::with_pool_and_len(vec![
        Rule::repeat(t(0)),
        Rule::repeat(Rule::seq(vec![t(1), Rule::repeat(t(0))])),
        Rule::prec(1, Rule::repeat(t(2))),
        Rule::repeat0(t(3)),
        t(4),
    ], 1..5));
    strat
}

/// Generates a grammar with a random number of variables, each body drawn
/// from `strat`. Bodies may reference any of the grammar's variables.
pub fn generate_grammar<S>(rnd: &mut Rnd, strat: &S, variables: &Range<usize>) -> Grammar
    where S : RuleGenStrategy {

    let count = rnd.index(variables);
    let mut grammar = Grammar::new();
    for i in 0..count {
        let kind = if rnd.chance(0.2) { VariableKind::Hidden } else { VariableKind::Named };
        let name = if kind == VariableKind::Hidden { format!("_rule{}", i) } else { format!("rule{}", i) };
        grammar.variables.push(Variable::new(&name, kind, strat.generate(rnd, count)));
    }
    if rnd.chance(0.5) {
        grammar.extra_tokens.insert(Symbol::terminal(rnd.index(&(0..4))));
    }
    if count > 1 && rnd.chance(0.3) {
        let conflict = vec![Symbol::non_terminal(0), Symbol::non_terminal(count - 1)];
        grammar.expected_conflicts.insert(conflict.into_iter().collect());
    }
    grammar
}
