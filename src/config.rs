//! Configuration Module
//!
//! Handles loading the cache configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::CacheError;

// == Capacity Policy ==
/// How entry weights are computed for the command session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    /// Every entry weighs 1; capacity is an entry count
    #[default]
    Count,
    /// Entries weigh their key plus value length in bytes
    Bytes,
    /// Entries weigh the shallow size of the value type
    TypeSize,
}

impl FromStr for CapacityPolicy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" => Ok(Self::Count),
            "bytes" => Ok(Self::Bytes),
            "type" => Ok(Self::TypeSize),
            other => Err(CacheError::InvalidConfig(format!(
                "unknown capacity policy '{}', expected count, bytes or type",
                other
            ))),
        }
    }
}

impl fmt::Display for CapacityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Count => "count",
            Self::Bytes => "bytes",
            Self::TypeSize => "type",
        };
        f.write_str(name)
    }
}

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Entry count or total weight the cache can hold, depending on `policy`
    pub capacity: u64,
    /// Weight policy
    pub policy: CapacityPolicy,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LRU_CAPACITY` - Capacity (default: 1000)
    /// - `LRU_POLICY` - `count`, `bytes` or `type` (default: count)
    ///
    /// Unparseable values fall back to the default with a warning.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env_or_default("LRU_CAPACITY", defaults.capacity),
            policy: env_or_default("LRU_POLICY", defaults.policy),
        }
    }
}

// == Env Parsing ==
/// Reads and parses an environment variable, warning when it is set but unusable.
fn env_or_default<T>(name: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    let Ok(raw) = env::var(name) else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(err) => {
            warn!(
                "Invalid {} value '{}' ({}), using default {}",
                name, raw, err, default
            );
            default
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1000,
            policy: CapacityPolicy::Count,
        }
    }
}
