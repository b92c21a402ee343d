/**
 * Properties every repeat expansion has to satisfy.
 */

use std::collections::HashSet;
use anyhow::{bail, ensure, Result};
use yk_grammar::{expand_repeats, Grammar, Rule, Symbol, VariableKind};

fn collect_repeats<'a>(rule: &'a Rule, result: &mut HashSet<&'a Rule>) {
    match rule {
        Rule::Blank | Rule::Symbol(_) => {},
        Rule::Choice(elements) => {
            for e in elements {
                collect_repeats(e, result);
            }
        },
        Rule::Seq{ left, right } => {
            collect_repeats(left, result);
            collect_repeats(right, result);
        },
        Rule::Repeat(inner) => {
            result.insert(rule);
            collect_repeats(inner, result);
        },
        Rule::Metadata{ rule, .. } => collect_repeats(rule, result),
    }
}

/// Expands `grammar` and checks the result, returning the expanded grammar.
pub fn check_expansion(grammar: &Grammar) -> Result<Grammar> {
    let result = expand_repeats(grammar);
    let offset = grammar.variables.len();

    ensure!(result.extra_tokens == grammar.extra_tokens, "extra tokens changed");
    ensure!(result.expected_conflicts == grammar.expected_conflicts, "expected conflicts changed");
    ensure!(result.external_tokens == grammar.external_tokens, "external tokens changed");
    ensure!(result.variables.len() >= offset, "variables were dropped");

    for (i, (before, after)) in grammar.variables.iter().zip(result.variables.iter()).enumerate() {
        ensure!(before.name == after.name && before.kind == after.kind,
            "variable {} moved ({} became {})", i, before.name, after.name);
        if !before.rule.contains_repeat() {
            ensure!(before.rule == after.rule, "repeat-free rule {} was rewritten", before.name);
        }
    }

    for (i, variable) in result.variables.iter().enumerate() {
        ensure!(!variable.rule.contains_repeat(), "{} still contains a repeat", variable.name);
        for sym in variable.rule.symbols() {
            if sym.is_non_terminal() {
                ensure!(sym.index < result.variables.len(),
                    "{} references missing variable {}", variable.name, sym.index);
            }
        }
        if i < offset {
            continue;
        }

        ensure!(variable.kind == VariableKind::Auxiliary, "{} is not auxiliary", variable.name);
        match &variable.rule {
            Rule::Choice(elements) if elements.len() == 2 => match &elements[0] {
                Rule::Seq{ left, right } => {
                    ensure!(**left == Rule::Symbol(Symbol::non_terminal(i)),
                        "{} does not recurse on itself", variable.name);
                    ensure!(**right == elements[1], "{} repeats a different rule", variable.name);
                },
                other => bail!("{} has unexpected recursive branch {:?}", variable.name, other),
            },
            other => bail!("{} has unexpected body {:?}", variable.name, other),
        }
    }

    let mut repeats = HashSet::new();
    for variable in &grammar.variables {
        collect_repeats(&variable.rule, &mut repeats);
    }
    ensure!(repeats.len() == result.variables.len() - offset,
        "{} distinct repeats produced {} helpers", repeats.len(), result.variables.len() - offset);

    // Helper bodies may be renormalized, but nothing new is synthesized
    let again = expand_repeats(&result);
    ensure!(again.variables.len() == result.variables.len(), "second expansion synthesized helpers");
    ensure!(again.variables[..offset] == result.variables[..offset], "second expansion rewrote variables");
    Ok(result)
}
