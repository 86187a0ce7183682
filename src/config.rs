//! Workload configuration
//!
//! A workload is the pair of ordered size lists for one input session. It can
//! be loaded from a TOML or JSON file:
//!
//! ```toml
//! block_sizes = [100, 500, 200, 300, 600]
//! process_sizes = [212, 417, 112, 426]
//! strategies = ["first-fit", "best-fit"]   # optional, defaults to all four
//! ```

use crate::allocator::Strategy;
use crate::engine::AllocatorEngine;
use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Block and process sizes for one input session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub block_sizes: Vec<u64>,
    pub process_sizes: Vec<u64>,
}

impl Workload {
    /// Create a validated workload
    ///
    /// # Errors
    ///
    /// Returns `InvalidBlockSize` or `InvalidProcessSize` for the first zero size,
    /// and `CapacityOverflow` when the block sizes do not sum within a `u64`.
    pub fn new(block_sizes: Vec<u64>, process_sizes: Vec<u64>) -> Result<Self> {
        let workload = Workload {
            block_sizes,
            process_sizes,
        };
        workload.validate()?;
        Ok(workload)
    }

    /// Check that every size is positive and the total capacity is representable
    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self.block_sizes.iter().position(|&size| size == 0) {
            return Err(SimError::InvalidBlockSize {
                index,
                size: self.block_sizes[index],
            });
        }
        if let Some(index) = self.process_sizes.iter().position(|&size| size == 0) {
            return Err(SimError::InvalidProcessSize {
                index,
                size: self.process_sizes[index],
            });
        }
        self.block_sizes
            .iter()
            .try_fold(0u64, |total, &size| total.checked_add(size))
            .ok_or(SimError::CapacityOverflow)?;
        Ok(())
    }

    pub fn engine(&self) -> AllocatorEngine {
        AllocatorEngine::new(&self.block_sizes, &self.process_sizes)
    }
}

/// Workload plus the strategies to run over it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct SimulationConfig {
    #[serde(flatten)]
    pub workload: Workload,

    pub strategies: Vec<Strategy>,
}

/// On-disk layout; both size lists are required and unknown keys are rejected
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    block_sizes: Vec<u64>,
    process_sizes: Vec<u64>,
    #[serde(default = "default_strategies")]
    strategies: Vec<Strategy>,
}

impl From<ConfigFile> for SimulationConfig {
    fn from(file: ConfigFile) -> Self {
        SimulationConfig {
            workload: Workload {
                block_sizes: file.block_sizes,
                process_sizes: file.process_sizes,
            },
            strategies: file.strategies,
        }
    }
}

fn default_strategies() -> Vec<Strategy> {
    Strategy::ALL.to_vec()
}

impl SimulationConfig {
    pub fn new(workload: Workload) -> Self {
        SimulationConfig {
            workload,
            strategies: default_strategies(),
        }
    }

    /// Parse and validate a TOML config
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(s)?;
        config.workload.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(s)?;
        config.workload.validate()?;
        Ok(config)
    }

    /// Load a config file; `.json` files are parsed as JSON, anything else as TOML
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading workload config from {:?}", path);

        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }
}

/// Parse a comma- or whitespace-separated size list ("100, 500 200")
pub fn parse_size_list(s: &str) -> Result<Vec<u64>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u64>()
                .map_err(|_| SimError::InvalidInput(format!("'{}' is not a valid size", token)))
        })
        .collect()
}
