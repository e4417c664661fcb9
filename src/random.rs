//! The random choices the maze generators make, behind a trait so a run can be
//! replayed from a seed or a scripted sequence.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

pub trait RandomChoice {
    /// A uniformly chosen integer in the inclusive range `low..=high`.
    ///
    /// `low` must not be greater than `high`.
    fn uniform_int_range(&mut self, low: usize, high: usize) -> usize;

    /// Put `items` into a uniformly chosen order.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Pick one of two options with equal chance.
    fn coin_flip(&mut self) -> bool {
        self.uniform_int_range(0, 1) == 0
    }
}

impl<R: Rng> RandomChoice for R {
    fn uniform_int_range(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..=high)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        SliceRandom::shuffle(items, self);
    }
}

/// The generator used when no particular source is injected: seeded when a seed is
/// given so runs can be repeated, otherwise seeded from the operating system.
pub fn maze_rng(seed: Option<u64>) -> XorShiftRng {
    match seed {
        Some(s) => XorShiftRng::seed_from_u64(s),
        None => XorShiftRng::from_entropy(),
    }
}

/// Replays a fixed list of values as choices, cycling when it runs out.
///
/// Each value is folded into the requested range, so `[0]` always chooses the low end.
/// An empty script always chooses the low end too.
#[derive(Debug, Clone)]
pub struct ScriptedChoices {
    script: Vec<usize>,
    next: usize,
}

impl ScriptedChoices {
    pub fn new(script: Vec<usize>) -> ScriptedChoices {
        ScriptedChoices { script, next: 0 }
    }

    /// How many choices have been made so far.
    pub fn choices_made(&self) -> usize {
        self.next
    }
}

impl RandomChoice for ScriptedChoices {
    fn uniform_int_range(&mut self, low: usize, high: usize) -> usize {
        let raw = if self.script.is_empty() {
            0
        } else {
            self.script[self.next % self.script.len()]
        };
        self.next += 1;
        low + raw % (high - low + 1)
    }

    // Fisher-Yates driven by the script.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.uniform_int_range(0, i);
            items.swap(i, j);
        }
    }
}
