//! Fixed partitions and the process requests placed into them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Arrival index of a process request (0-based)
pub type ProcessId = usize;

/// A process size request in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// Position in the request sequence
    pub id: ProcessId,
    /// Requested size
    pub size: u64,
}

impl ProcessRequest {
    pub fn new(id: ProcessId, size: u64) -> Self {
        ProcessRequest { id, size }
    }

    /// Build requests from raw sizes, numbering them by arrival
    pub fn sequence(sizes: &[u64]) -> Vec<ProcessRequest> {
        sizes
            .iter()
            .enumerate()
            .map(|(id, &size)| ProcessRequest::new(id, size))
            .collect()
    }
}

/// Occupancy of a single block
///
/// Transitions only from `Unallocated` to `Allocated` within a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Occupant {
    #[default]
    Unallocated,
    Allocated(ProcessRequest),
}

/// A fixed partition of memory
///
/// The size is set once and never changes; the block is never split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Partition size
    pub size: u64,
    /// Who, if anyone, holds this block
    pub occupant: Occupant,
}

impl Block {
    /// Create an unallocated block
    pub fn new(size: u64) -> Self {
        Block {
            size,
            occupant: Occupant::Unallocated,
        }
    }

    pub fn is_allocated(&self) -> bool {
        matches!(self.occupant, Occupant::Allocated(_))
    }

    /// Unallocated and large enough for `request`
    pub fn fits(&self, request: u64) -> bool {
        !self.is_allocated() && self.size >= request
    }

    /// Space left over if `request` were placed here
    pub fn leftover(&self, request: u64) -> u64 {
        self.size.saturating_sub(request)
    }

    /// The process holding this block, if any
    pub fn process(&self) -> Option<ProcessRequest> {
        match self.occupant {
            Occupant::Allocated(process) => Some(process),
            Occupant::Unallocated => None,
        }
    }

    /// Internal fragmentation: unused space inside an occupied block, 0 when free
    pub fn fragmentation(&self) -> u64 {
        match self.occupant {
            Occupant::Allocated(process) => self.size.saturating_sub(process.size),
            Occupant::Unallocated => 0,
        }
    }

    /// Mark the block as held by `process`
    ///
    /// Callers only assign blocks for which [`Block::fits`] holds.
    pub(crate) fn assign(&mut self, process: ProcessRequest) {
        debug_assert!(self.fits(process.size), "block already taken or too small");
        self.occupant = Occupant::Allocated(process);
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.occupant {
            Occupant::Allocated(process) => write!(f, "[{}]", process.size),
            Occupant::Unallocated => write!(f, "[ ]"),
        }
    }
}

/// Build an unallocated block list from raw sizes
pub fn blocks_from_sizes(sizes: &[u64]) -> Vec<Block> {
    sizes.iter().map(|&size| Block::new(size)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_creation() {
        let block = Block::new(300);
        assert_eq!(block.size, 300);
        assert_eq!(block.occupant, Occupant::Unallocated);
        assert!(!block.is_allocated());
        assert_eq!(block.fragmentation(), 0);
    }

    #[test]
    fn test_block_fits() {
        let mut block = Block::new(300);
        assert!(block.fits(300));
        assert!(block.fits(1));
        assert!(!block.fits(301));

        block.assign(ProcessRequest::new(0, 100));
        assert!(!block.fits(1)); // Taken blocks never fit
    }

    #[test]
    fn test_fragmentation_after_assign() {
        let mut block = Block::new(500);
        block.assign(ProcessRequest::new(3, 212));

        assert!(block.is_allocated());
        assert_eq!(block.fragmentation(), 288);
        assert_eq!(block.process(), Some(ProcessRequest::new(3, 212)));
    }

    #[test]
    fn test_exact_fit_has_no_fragmentation() {
        let mut block = Block::new(200);
        block.assign(ProcessRequest::new(0, 200));
        assert_eq!(block.fragmentation(), 0);
    }

    #[test]
    fn test_display() {
        let mut block = Block::new(500);
        assert_eq!(block.to_string(), "[ ]");

        block.assign(ProcessRequest::new(0, 212));
        assert_eq!(block.to_string(), "[212]");
    }

    #[test]
    fn test_request_sequence_keeps_arrival_order() {
        let requests = ProcessRequest::sequence(&[212, 417, 112]);
        let ids: Vec<_> = requests.iter().map(|r| r.id).collect();
        let sizes: Vec<_> = requests.iter().map(|r| r.size).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(sizes, vec![212, 417, 112]);
    }
}
