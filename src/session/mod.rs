//! Session Module
//!
//! Line-oriented command session over a string cache. The binary reads
//! commands from stdin and writes one JSON reply per line.
//!
//! # Commands
//! - `SET <key> <value...>` - Store a value
//! - `GET <key>` - Retrieve a value, marking it recently used
//! - `PEEK <key>` - Retrieve a value without touching recency
//! - `DEL <key>` - Delete a key
//! - `HAS <key>` - Check for a key
//! - `RESET` - Drop every entry
//! - `STATS` - Cache statistics
//! - `KEYS` - Keys, most recently used first

pub mod command;
pub mod handler;
pub mod reply;

pub use command::{Command, MAX_KEY_LENGTH};
pub use handler::Session;
pub use reply::{Reply, StatsReply};
