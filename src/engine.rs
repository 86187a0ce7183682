//! Allocator engine: runs placement strategies over a pristine block set
//!
//! The engine owns the original block sizes and the process requests for one
//! input session. Every trial starts from [`AllocatorEngine::pristine_blocks`],
//! so trials never observe each other's occupancy.

use crate::allocator::Strategy;
use crate::block::{blocks_from_sizes, Block, ProcessRequest};
use crate::trial::{Outcome, ProcessOutcome, Trial, TrialStats};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Session state shared by all trials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatorEngine {
    /// Original configuration, never mutated
    pristine: Vec<Block>,
    requests: Vec<ProcessRequest>,
}

impl AllocatorEngine {
    /// Create an engine for one input session
    pub fn new(block_sizes: &[u64], process_sizes: &[u64]) -> Self {
        AllocatorEngine {
            pristine: blocks_from_sizes(block_sizes),
            requests: ProcessRequest::sequence(process_sizes),
        }
    }

    /// Fresh copy of the original blocks, all unallocated
    pub fn pristine_blocks(&self) -> Vec<Block> {
        self.pristine.clone()
    }

    pub fn requests(&self) -> &[ProcessRequest] {
        &self.requests
    }

    pub fn block_sizes(&self) -> Vec<u64> {
        self.pristine.iter().map(|b| b.size).collect()
    }

    /// Run one strategy over a fresh copy of the blocks
    pub fn run(&self, strategy: Strategy) -> Trial {
        let mut blocks = self.pristine_blocks();
        let mut policy = strategy.policy();
        let mut outcomes = Vec::with_capacity(self.requests.len());

        debug!(
            "Running {} over {} blocks and {} requests",
            strategy,
            blocks.len(),
            self.requests.len()
        );

        for &request in &self.requests {
            let outcome = match policy.place(&blocks, request.size) {
                Some(index) => {
                    blocks[index].assign(request);
                    debug!(
                        "{}: process {} (size {}) -> block {}",
                        strategy,
                        request.id,
                        request.size,
                        index + 1
                    );
                    Outcome::Allocated { block: index }
                }
                None => {
                    debug!(
                        "{}: process {} (size {}) not allocated",
                        strategy, request.id, request.size
                    );
                    Outcome::Unallocated
                }
            };

            outcomes.push(ProcessOutcome {
                process: request,
                outcome,
            });
        }

        let trial = Trial {
            strategy,
            blocks,
            outcomes,
            cursor: policy.cursor(),
        };

        info!(
            "{} placed {}/{} processes, internal fragmentation {}",
            strategy,
            trial.allocated_count(),
            trial.outcomes.len(),
            trial.total_fragmentation()
        );

        trial
    }

    /// Run the given strategies in order, each on its own fresh copy
    pub fn run_selected(&self, strategies: &[Strategy]) -> Comparison {
        Comparison {
            trials: strategies.iter().map(|&s| self.run(s)).collect(),
        }
    }

    /// Run first, best, worst and next fit
    pub fn run_all(&self) -> Comparison {
        self.run_selected(&Strategy::ALL)
    }
}

/// The trials of one input session, in run order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub trials: Vec<Trial>,
}

impl Comparison {
    /// Trial for a strategy (first one if it was run more than once)
    pub fn get(&self, strategy: Strategy) -> Option<&Trial> {
        self.trials.iter().find(|t| t.strategy == strategy)
    }

    pub fn stats(&self) -> Vec<TrialStats> {
        self.trials.iter().map(Trial::stats).collect()
    }

    /// Strategy that placed the most processes; earlier trials win ties
    pub fn most_allocated(&self) -> Option<Strategy> {
        self.trials
            .iter()
            .fold(None::<&Trial>, |best, t| match best {
                Some(b) if b.allocated_count() >= t.allocated_count() => Some(b),
                _ => Some(t),
            })
            .map(|t| t.strategy)
    }

    /// Strategy with the least internal fragmentation; earlier trials win ties
    pub fn least_fragmentation(&self) -> Option<Strategy> {
        self.trials
            .iter()
            .fold(None::<&Trial>, |best, t| match best {
                Some(b) if b.total_fragmentation() <= t.total_fragmentation() => Some(b),
                _ => Some(t),
            })
            .map(|t| t.strategy)
    }
}
