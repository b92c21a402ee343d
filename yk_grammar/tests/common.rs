
use yk_grammar::{Rule, Symbol};

pub fn assert_iter_eq<I1, I2>(mut i1: I1, mut i2: I2)
    where I1 : Iterator, I2 : Iterator,
    <I1 as Iterator>::Item : PartialEq<<I2 as Iterator>::Item> + std::fmt::Debug,
    <I2 as Iterator>::Item : std::fmt::Debug {
    loop {
        match (i1.next(), i2.next()) {
            (Some(a), Some(b)) => assert_eq!(a, b),
            (None, None) => return,
            (Some(a), None) => panic!("RHS terminates early ({:?})!", a),
            (None, Some(b)) => panic!("LHS terminates early ({:?})!", b),
        }
    }
}

// Shorthands for writing rule trees

pub fn t(i: usize) -> Rule {
    Rule::Symbol(Symbol::terminal(i))
}

pub fn nt(i: usize) -> Rule {
    Rule::Symbol(Symbol::non_terminal(i))
}

pub fn seq(left: Rule, right: Rule) -> Rule {
    Rule::Seq{ left: Box::new(left), right: Box::new(right) }
}

pub fn repeat(rule: Rule) -> Rule {
    Rule::repeat(rule)
}

/// The body synthesized for a repetition of `inner` replaced by `nt(index)`.
pub fn repeat_body(index: usize, inner: Rule) -> Rule {
    Rule::Choice(vec![seq(nt(index), inner.clone()), inner])
}
