//! Next-fit placement
//!
//! Scans circularly starting at a cursor: `cursor, cursor+1, ..., n-1, 0, ...,
//! cursor-1`. After a successful placement the cursor moves to the block
//! following the chosen one. A full circle without a match leaves the cursor
//! where it was.

use crate::allocator::PlacementPolicy;
use crate::block::Block;

/// Next-fit policy with a trial-local cursor
#[derive(Debug, Clone, Default)]
pub struct NextFit {
    cursor: usize,
}

impl NextFit {
    /// Cursor starts at block 0
    pub fn new() -> Self {
        NextFit { cursor: 0 }
    }

    /// Index where the next scan starts
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl PlacementPolicy for NextFit {
    fn place(&mut self, blocks: &[Block], request: u64) -> Option<usize> {
        let n = blocks.len();
        if n == 0 {
            return None;
        }

        // Guard against a policy reused on a shorter block list
        let start = self.cursor % n;

        let found = (0..n)
            .map(|step| (start + step) % n)
            .find(|&index| blocks[index].fits(request))?;

        self.cursor = (found + 1) % n;
        Some(found)
    }

    fn cursor(&self) -> Option<usize> {
        Some(self.cursor)
    }
}
