//! Bounded LRU - A capacity-bounded in-memory cache
//!
//! Provides a least-recently-used cache whose capacity is either an entry
//! count or a total weight computed per entry.
//!
//! ```
//! use bounded_lru::CacheStore;
//!
//! let mut cache = CacheStore::new(2);
//! cache.set("a", 1).unwrap();
//! cache.set("b", 2).unwrap();
//! cache.get("a");
//! cache.set("c", 3).unwrap(); // evicts "b"
//!
//! assert!(cache.has("a"));
//! assert!(!cache.has("b"));
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod session;

pub use cache::{CacheStats, CacheStore, FnWeigher, TypeSizeWeigher, UnitWeigher, Weigher};
pub use config::{CapacityPolicy, Config};
pub use error::{CacheError, Result};
pub use session::Session;
