//! # partition-sim - Fixed-Partition Allocation Simulator
//!
//! `partition-sim` places a sequence of process requests into a fixed set of
//! memory blocks and reports which block served each request and how much
//! space was wasted inside it. Blocks are never split, merged or freed.
//!
//! Four placement policies are provided:
//!
//! - **First fit**: lowest-index block that is large enough
//! - **Best fit**: block leaving the least space over
//! - **Worst fit**: block leaving the most space over
//! - **Next fit**: first fit, starting after the previous placement and wrapping around
//!
//! Each policy runs as an independent trial over a fresh copy of the
//! original blocks, so results are directly comparable.
//!
//! ## Quick Start
//!
//! ```rust
//! use partition_sim::{AllocatorEngine, Strategy};
//!
//! let engine = AllocatorEngine::new(&[100, 500, 200, 300, 600], &[212, 417, 112, 426]);
//!
//! let best = engine.run(Strategy::BestFit);
//! assert_eq!(best.log_lines()[0], "Allocated process 212 in block 4");
//! assert_eq!(best.fragmentation(), vec![0, 83, 88, 88, 174]);
//!
//! let first = engine.run(Strategy::FirstFit);
//! assert_eq!(first.log_lines()[3], "426 cannot be allocated.");
//! ```
//!
//! ## Comparing All Policies
//!
//! ```rust
//! use partition_sim::{report, AllocatorEngine};
//!
//! let engine = AllocatorEngine::new(&[100, 500, 200, 300, 600], &[212, 417, 112, 426]);
//! let comparison = engine.run_all();
//!
//! let text = report::render_report(&engine.pristine_blocks(), engine.requests(), &comparison);
//! assert!(text.contains("Next Fit Algorithm:"));
//! ```

pub mod allocator;
pub mod block;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod report;
pub mod trial;

pub use allocator::{PlacementPolicy, Strategy};
pub use block::{Block, Occupant, ProcessId, ProcessRequest};
pub use config::{SimulationConfig, Workload};
pub use engine::{AllocatorEngine, Comparison};
pub use error::{Result, SimError};
pub use trial::{Outcome, ProcessOutcome, Trial, TrialStats};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
