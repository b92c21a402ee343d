/**
 * Grammar representation and the preparation passes run on it before parser
 * tables are built.
 */

extern crate tracing;

pub mod rule;
pub mod grammar;
mod expand_repeats;

pub use rule::{Rule, Symbol, SymbolKind, MetadataParams, Associativity, Alias};
pub use grammar::{Grammar, Variable, VariableKind, ExternalToken};
pub use expand_repeats::{RepeatExpander, expand_repeats};
