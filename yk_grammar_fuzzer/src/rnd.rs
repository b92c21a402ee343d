/**
 * Seeded randomness for grammar generation. Every grammar is generated from
 * its own `Rnd`, so a failing grammar can be rebuilt from its seed alone.
 */

use std::ops::Range;
use std::time::SystemTime;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

pub fn seed_from_system_time() -> u64 {
    SystemTime::now().duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub struct Rnd {
    seed: u64,
    rng: Mcg128Xsl64,
}

impl Rnd {
    pub fn with_seed(seed: u64) -> Self {
        Self{ seed, rng: Mcg128Xsl64::seed_from_u64(seed) }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn index(&mut self, r: &Range<usize>) -> usize {
        self.rng.gen_range(r.start, r.end)
    }

    pub fn precedence(&mut self, r: &Range<i32>) -> i32 {
        self.rng.gen_range(r.start, r.end)
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }

    pub fn pick<'a, T>(&mut self, s: &'a [T]) -> &'a T {
        assert!(!s.is_empty());
        let idx = self.index(&(0..s.len()));
        &s[idx]
    }
}
