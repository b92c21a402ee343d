extern crate yk_grammar;
extern crate rand;

mod rnd;
mod rule_gen;
mod check;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use rnd::{Rnd, seed_from_system_time};
use rule_gen::*;
use check::check_expansion;

const DEFAULT_ITERATIONS: usize = 1000;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    // yk_grammar_fuzzer [iterations] [seed]
    let mut args = std::env::args().skip(1);
    let iterations = match args.next() {
        Some(s) => s.parse::<usize>().with_context(|| format!("invalid iteration count '{}'", s))?,
        None => DEFAULT_ITERATIONS,
    };
    let seed = match args.next() {
        Some(s) => s.parse::<u64>().with_context(|| format!("invalid seed '{}'", s))?,
        None => seed_from_system_time(),
    };

    let strat = default_strategy();
    let mut helpers = 0;
    for i in 0..iterations {
        let mut rnd = Rnd::with_seed(seed.wrapping_add(i as u64));
        let grammar = generate_grammar(&mut rnd, &strat, &(1..8));
        let expanded = check_expansion(&grammar)
            .with_context(|| format!("property violated with seed {}", rnd.seed()))?;
        helpers += expanded.variables.len() - grammar.variables.len();
    }

    info!(iterations, seed, helpers, "fuzzing finished");
    println!("{} grammars checked from seed {}, {} helpers synthesized", iterations, seed, helpers);
    Ok(())
}
