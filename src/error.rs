use thiserror::Error;

/// Errors raised while acquiring a workload or rendering a report.
///
/// Placement itself never fails: a process that fits nowhere is an
/// ordinary [`Outcome::Unallocated`](crate::trial::Outcome::Unallocated).
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid block size at block {index}: {size} (sizes must be positive)")]
    InvalidBlockSize { index: usize, size: u64 },

    #[error("Invalid process size at process {index}: {size} (sizes must be positive)")]
    InvalidProcessSize { index: usize, size: u64 },

    #[error("Total block capacity exceeds {max}", max = u64::MAX)]
    CapacityOverflow,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected end of input while reading {0}")]
    UnexpectedEof(String),

    #[error("Unknown strategy '{0}' (expected first-fit, best-fit, worst-fit or next-fit)")]
    UnknownStrategy(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
