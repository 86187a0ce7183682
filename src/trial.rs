//! Results of running one placement strategy over a workload

use crate::allocator::Strategy;
use crate::block::{Block, ProcessRequest};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened to a single process request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Placed in the block at this 0-based index
    Allocated { block: usize },
    /// No eligible block existed when the request arrived
    Unallocated,
}

/// A process request paired with its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub process: ProcessRequest,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl ProcessOutcome {
    /// 0-based block index, if allocated
    pub fn block(&self) -> Option<usize> {
        match self.outcome {
            Outcome::Allocated { block } => Some(block),
            Outcome::Unallocated => None,
        }
    }
}

impl fmt::Display for ProcessOutcome {
    /// Log line as reported to users (block numbers are 1-based)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Allocated { block } => write!(
                f,
                "Allocated process {} in block {}",
                self.process.size,
                block + 1
            ),
            Outcome::Unallocated => write!(f, "{} cannot be allocated.", self.process.size),
        }
    }
}

/// One complete run of one strategy over a freshly reset block list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trial {
    pub strategy: Strategy,
    /// Final block state
    pub blocks: Vec<Block>,
    /// Per-process outcomes in arrival order
    pub outcomes: Vec<ProcessOutcome>,
    /// Final cursor for strategies that keep one (next fit)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<usize>,
}

impl Trial {
    /// Per-block internal fragmentation, 0 for free blocks
    pub fn fragmentation(&self) -> Vec<u64> {
        self.blocks.iter().map(Block::fragmentation).collect()
    }

    /// Log lines in arrival order
    pub fn log_lines(&self) -> Vec<String> {
        self.outcomes.iter().map(ToString::to_string).collect()
    }

    /// Outcome for the process with this arrival index
    pub fn outcome_of(&self, process: usize) -> Option<&ProcessOutcome> {
        self.outcomes.get(process)
    }

    /// Requests that found no block
    pub fn unallocated(&self) -> impl Iterator<Item = &ProcessRequest> {
        self.outcomes
            .iter()
            .filter(|o| o.outcome == Outcome::Unallocated)
            .map(|o| &o.process)
    }

    pub fn allocated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.block().is_some()).count()
    }

    pub fn total_fragmentation(&self) -> u64 {
        saturating_total(self.blocks.iter().map(Block::fragmentation))
    }

    /// Summary statistics for this trial
    ///
    /// Totals saturate at `u64::MAX`; validated workloads never reach it.
    pub fn stats(&self) -> TrialStats {
        let total_capacity = saturating_total(self.blocks.iter().map(|b| b.size));
        let occupied: Vec<&Block> = self.blocks.iter().filter(|b| b.is_allocated()).collect();
        let occupied_capacity = saturating_total(occupied.iter().map(|b| b.size));
        let placed = saturating_total(occupied.iter().filter_map(|b| b.process()).map(|p| p.size));

        let allocated = self.allocated_count();

        TrialStats {
            strategy: self.strategy,
            total_capacity,
            occupied_blocks: occupied.len(),
            allocated,
            rejected: self.outcomes.len() - allocated,
            internal_fragmentation: self.total_fragmentation(),
            free_capacity: total_capacity.saturating_sub(occupied_capacity),
            utilization: if occupied_capacity == 0 {
                0.0
            } else {
                placed as f64 / occupied_capacity as f64
            },
        }
    }
}

fn saturating_total(sizes: impl Iterator<Item = u64>) -> u64 {
    sizes.fold(0, u64::saturating_add)
}

/// Statistics about a single trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialStats {
    pub strategy: Strategy,
    /// Sum of all block sizes
    pub total_capacity: u64,
    pub occupied_blocks: usize,
    /// Processes placed
    pub allocated: usize,
    /// Processes that found no block
    pub rejected: usize,
    /// Unused space inside occupied blocks
    pub internal_fragmentation: u64,
    /// Sum of sizes of blocks left unoccupied
    pub free_capacity: u64,
    /// Placed bytes over occupied capacity (0.0 when nothing is occupied)
    pub utilization: f64,
}
