//! Dice - The random source a battle draws from

use rand::Rng;
use std::collections::VecDeque;

/// Uniform integer source over a closed range
pub trait Dice {
    /// Roll an integer uniformly distributed over `[low, high]`
    fn roll(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + ?Sized> Dice for R {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }
}

/// Dice that replay a fixed sequence of results
///
/// Each value is clamped into the requested range. Once the sequence runs
/// out every roll returns `low`.
#[derive(Debug, Clone, Default)]
pub struct LoadedDice {
    rolls: VecDeque<u32>,
}

impl LoadedDice {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        LoadedDice {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Rolls not yet consumed
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        match self.rolls.pop_front() {
            Some(value) => value.clamp(low, high),
            None => low,
        }
    }
}
