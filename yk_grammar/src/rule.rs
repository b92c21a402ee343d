/**
 * Rule tree representation of production bodies.
 */

// Symbols

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SymbolKind {
    Terminal,
    NonTerminal,
    External,
}

/// A resolved reference to a terminal, a nonterminal (the index of a grammar
/// variable) or an externally scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    pub index: usize,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn terminal(index: usize) -> Self {
        Self{ index, kind: SymbolKind::Terminal }
    }

    pub fn non_terminal(index: usize) -> Self {
        Self{ index, kind: SymbolKind::NonTerminal }
    }

    pub fn external(index: usize) -> Self {
        Self{ index, kind: SymbolKind::External }
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == SymbolKind::Terminal
    }

    pub fn is_non_terminal(&self) -> bool {
        self.kind == SymbolKind::NonTerminal
    }

    pub fn is_external(&self) -> bool {
        self.kind == SymbolKind::External
    }
}

// Metadata

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias {
    pub value: String,
    pub is_named: bool,
}

/// Out-of-band annotations attached to a subtree. Later passes read these,
/// rewriting passes carry them along untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MetadataParams {
    pub precedence: Option<i32>,
    pub dynamic_precedence: i32,
    pub associativity: Option<Associativity>,
    pub is_token: bool,
    pub is_string: bool,
    pub is_active: bool,
    pub is_main_token: bool,
    pub alias: Option<Alias>,
}

// Rules

/// A production body. Equality and hashing are structural, two rules are
/// the same if their trees are the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    Blank,

    Symbol(Symbol),

    Choice(Vec<Rule>),

    Seq{
        left: Box<Rule>,
        right: Box<Rule>,
    },

    /// One or more repetitions of the inner rule.
    Repeat(Box<Rule>),

    Metadata{
        rule: Box<Rule>,
        params: MetadataParams,
    },
}

impl Rule {
    pub fn symbol(symbol: Symbol) -> Self {
        Rule::Symbol(symbol)
    }

    /// Builds a choice, flattening nested choices and dropping alternatives
    /// that are already present. A single remaining alternative is returned
    /// as-is.
    pub fn choice<I>(rules: I) -> Self where I : IntoIterator<Item = Rule> {
        let mut elements = Vec::new();
        for rule in rules {
            add_choice_element(&mut elements, rule);
        }
        if elements.len() == 1 {
            elements.swap_remove(0)
        }
        else {
            Rule::Choice(elements)
        }
    }

    /// Builds a left-nested sequence, skipping blanks.
    pub fn seq<I>(rules: I) -> Self where I : IntoIterator<Item = Rule> {
        let mut result = Rule::Blank;
        for rule in rules {
            if rule.is_blank() {
                continue;
            }
            result = if result.is_blank() {
                rule
            }
            else {
                Rule::Seq{ left: Box::new(result), right: Box::new(rule) }
            };
        }
        result
    }

    pub fn repeat(rule: Rule) -> Self {
        Rule::Repeat(Box::new(rule))
    }

    pub fn metadata(rule: Rule, params: MetadataParams) -> Self {
        Rule::Metadata{ rule: Box::new(rule), params }
    }

    pub fn optional(rule: Rule) -> Self {
        Self::choice(vec![rule, Rule::Blank])
    }

    /// Zero or more repetitions.
    pub fn repeat0(rule: Rule) -> Self {
        Self::choice(vec![Self::repeat(rule), Rule::Blank])
    }

    pub fn prec(precedence: i32, rule: Rule) -> Self {
        Self::metadata(rule, MetadataParams{ precedence: Some(precedence), ..Default::default() })
    }

    pub fn prec_left(precedence: i32, rule: Rule) -> Self {
        Self::metadata(rule, MetadataParams{
            precedence: Some(precedence),
            associativity: Some(Associativity::Left),
            ..Default::default()
        })
    }

    pub fn prec_right(precedence: i32, rule: Rule) -> Self {
        Self::metadata(rule, MetadataParams{
            precedence: Some(precedence),
            associativity: Some(Associativity::Right),
            ..Default::default()
        })
    }

    pub fn prec_dynamic(precedence: i32, rule: Rule) -> Self {
        Self::metadata(rule, MetadataParams{ dynamic_precedence: precedence, ..Default::default() })
    }

    pub fn token(rule: Rule) -> Self {
        Self::metadata(rule, MetadataParams{ is_token: true, ..Default::default() })
    }

    pub fn alias(rule: Rule, value: &str, is_named: bool) -> Self {
        Self::metadata(rule, MetadataParams{
            alias: Some(Alias{ value: value.into(), is_named }),
            ..Default::default()
        })
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Rule::Blank => true,
            _ => false,
        }
    }

    pub fn contains_repeat(&self) -> bool {
        match self {
            Rule::Blank | Rule::Symbol(_) => false,
            Rule::Choice(elements) => elements.iter().any(|e| e.contains_repeat()),
            Rule::Seq{ left, right } => left.contains_repeat() || right.contains_repeat(),
            Rule::Repeat(_) => true,
            Rule::Metadata{ rule, .. } => rule.contains_repeat(),
        }
    }

    /// Every symbol referenced in the tree, left to right.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut result = Vec::new();
        self.collect_symbols(&mut result);
        result
    }

    fn collect_symbols(&self, result: &mut Vec<Symbol>) {
        match self {
            Rule::Blank => {},
            Rule::Symbol(sym) => result.push(*sym),
            Rule::Choice(elements) => {
                for e in elements {
                    e.collect_symbols(result);
                }
            },
            Rule::Seq{ left, right } => {
                left.collect_symbols(result);
                right.collect_symbols(result);
            },
            Rule::Repeat(rule) => rule.collect_symbols(result),
            Rule::Metadata{ rule, .. } => rule.collect_symbols(result),
        }
    }
}

impl From<Symbol> for Rule {
    fn from(symbol: Symbol) -> Self {
        Rule::Symbol(symbol)
    }
}

fn add_choice_element(elements: &mut Vec<Rule>, rule: Rule) {
    match rule {
        Rule::Choice(nested) => {
            for element in nested {
                add_choice_element(elements, element);
            }
        },
        other => {
            if !elements.contains(&other) {
                elements.push(other);
            }
        },
    }
}
