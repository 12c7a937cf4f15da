//! Relation generation.
//!
//! Tables start at 0 and grow by a pseudo-random gap per key, so they are
//! strictly increasing by construction and overlap sparsely.

use leapjoin_core::{Key, Result, SortedTable};

/// Simple LCG for reproducible pseudo-random numbers
#[derive(Clone, Debug)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        // Low bits of an LCG cycle quickly; use the high half.
        self.state >> 32
    }

    /// Returns a value in `0..bound`. `bound` must be positive.
    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// Generates `size` keys starting at 0 with gaps uniform in `1..=max_gap`.
pub fn generate_table(size: usize, max_gap: u32, rng: &mut Lcg) -> Result<SortedTable> {
    let mut keys = Vec::with_capacity(size);
    let mut cur: Key = 0;
    for i in 0..size {
        if i > 0 {
            cur += 1 + rng.below(u64::from(max_gap)) as Key;
        }
        keys.push(cur);
    }
    SortedTable::new(keys)
}

/// Shuffles keys in place (Fisher-Yates).
pub fn shuffle(keys: &mut [Key], rng: &mut Lcg) {
    for i in (1..keys.len()).rev() {
        let j = rng.below(i as u64 + 1) as usize;
        keys.swap(i, j);
    }
}
