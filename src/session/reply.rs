//! Reply DTOs for the cache session
//!
//! Each command produces one reply, written as a single JSON line.

use serde::Serialize;

use crate::cache::CacheStats;

/// Reply to a single session command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    /// SET / RESET acknowledgement
    Ok { message: String },
    /// GET / PEEK result
    Value {
        key: String,
        found: bool,
        value: Option<String>,
    },
    /// HAS result
    Exists { key: String, exists: bool },
    /// DEL result
    Deleted { key: String, value: String },
    /// KEYS result, most recently used first
    Keys { keys: Vec<String> },
    /// STATS result
    Stats(StatsReply),
    /// Any failed command
    Error { error: String },
}

impl Reply {
    pub fn ok(message: impl Into<String>) -> Self {
        Reply::Ok {
            message: message.into(),
        }
    }

    pub fn value(key: impl Into<String>, value: Option<String>) -> Self {
        Reply::Value {
            key: key.into(),
            found: value.is_some(),
            value,
        }
    }

    pub fn error(error: impl ToString) -> Self {
        Reply::Error {
            error: error.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error { .. })
    }
}

/// Body of the STATS reply
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReply {
    pub policy: String,
    pub capacity: u64,
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsReply {
    pub fn new(policy: impl Into<String>, capacity: u64, stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self {
            policy: policy.into(),
            capacity,
            stats,
            hit_rate,
        }
    }
}
