//! Linear scan shared by first fit, best fit and worst fit
//!
//! The three policies walk the blocks in index order and keep a running
//! candidate. They differ only in whether a later eligible block replaces
//! the current candidate:
//! - First fit: never (the first eligible block wins, scan stops early)
//! - Best fit: when its leftover is strictly smaller
//! - Worst fit: when its leftover is strictly larger
//!
//! Strict comparisons keep the lowest index on ties.

use crate::allocator::PlacementPolicy;
use crate::block::Block;

/// Which eligible block a linear scan prefers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// First eligible block in index order
    First,
    /// Smallest leftover space
    Tightest,
    /// Largest leftover space
    Loosest,
}

impl Preference {
    /// Whether a candidate with `leftover` replaces the current best
    fn replaces(self, leftover: u64, best: u64) -> bool {
        match self {
            Preference::First => false,
            Preference::Tightest => leftover < best,
            Preference::Loosest => leftover > best,
        }
    }
}

/// Select the eligible block preferred by `preference`
///
/// Eligible means unallocated with `size >= request`. Returns `None` when no
/// block is eligible (including an empty block list).
pub fn select_eligible(blocks: &[Block], request: u64, preference: Preference) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;

    for (index, block) in blocks.iter().enumerate() {
        if !block.fits(request) {
            continue;
        }

        let leftover = block.leftover(request);
        match best {
            None => {
                best = Some((index, leftover));
                if preference == Preference::First {
                    break;
                }
            }
            Some((_, best_leftover)) if preference.replaces(leftover, best_leftover) => {
                best = Some((index, leftover));
            }
            Some(_) => {}
        }
    }

    best.map(|(index, _)| index)
}

/// Stateless linear-scan policy
#[derive(Debug, Clone, Copy)]
pub struct LinearScan {
    preference: Preference,
}

impl LinearScan {
    pub fn new(preference: Preference) -> Self {
        LinearScan { preference }
    }

    pub fn first_fit() -> Self {
        Self::new(Preference::First)
    }

    pub fn best_fit() -> Self {
        Self::new(Preference::Tightest)
    }

    pub fn worst_fit() -> Self {
        Self::new(Preference::Loosest)
    }

    pub fn preference(&self) -> Preference {
        self.preference
    }
}

impl PlacementPolicy for LinearScan {
    fn place(&mut self, blocks: &[Block], request: u64) -> Option<usize> {
        select_eligible(blocks, request, self.preference)
    }
}
