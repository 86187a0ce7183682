//! Placement policies for fixed partitions
//!
//! Four classical policies are provided:
//! - First fit, best fit and worst fit share one linear scan ([`scan`]) and
//!   differ only in which eligible block they prefer
//! - Next fit ([`next_fit`]) scans circularly from a cursor that persists
//!   across requests within a trial

pub mod next_fit;
pub mod scan;

use crate::block::Block;
use crate::error::SimError;
use next_fit::NextFit;
use scan::LinearScan;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placement policy trait
///
/// Chooses the block that should serve a request. Implementations only pick;
/// the caller marks the chosen block as occupied.
pub trait PlacementPolicy {
    /// Pick an unallocated block with `size >= request`, or `None` if there is none
    fn place(&mut self, blocks: &[Block], request: u64) -> Option<usize>;

    /// Policy-internal cursor, for policies that keep one
    fn cursor(&self) -> Option<usize> {
        None
    }
}

/// The four placement strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    FirstFit,
    BestFit,
    WorstFit,
    NextFit,
}

impl Strategy {
    /// All strategies in report order
    pub const ALL: [Strategy; 4] = [
        Strategy::FirstFit,
        Strategy::BestFit,
        Strategy::WorstFit,
        Strategy::NextFit,
    ];

    /// Create a fresh policy for one trial
    pub fn policy(self) -> Box<dyn PlacementPolicy> {
        match self {
            Strategy::FirstFit => Box::new(LinearScan::first_fit()),
            Strategy::BestFit => Box::new(LinearScan::best_fit()),
            Strategy::WorstFit => Box::new(LinearScan::worst_fit()),
            Strategy::NextFit => Box::new(NextFit::new()),
        }
    }

    /// Display name used in report headings ("First Fit")
    pub fn title(self) -> &'static str {
        match self {
            Strategy::FirstFit => "First Fit",
            Strategy::BestFit => "Best Fit",
            Strategy::WorstFit => "Worst Fit",
            Strategy::NextFit => "Next Fit",
        }
    }

    /// Kebab-case name ("first-fit")
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::FirstFit => "first-fit",
            Strategy::BestFit => "best-fit",
            Strategy::WorstFit => "worst-fit",
            Strategy::NextFit => "next-fit",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first-fit" | "first_fit" | "first" | "ff" => Ok(Strategy::FirstFit),
            "best-fit" | "best_fit" | "best" | "bf" => Ok(Strategy::BestFit),
            "worst-fit" | "worst_fit" | "worst" | "wf" => Ok(Strategy::WorstFit),
            "next-fit" | "next_fit" | "next" | "nf" => Ok(Strategy::NextFit),
            _ => Err(SimError::UnknownStrategy(s.to_string())),
        }
    }
}
