//! Cache Module
//!
//! Provides an in-memory LRU cache bounded by entry count or by total weight.

mod entry;
mod lru;
mod stats;
mod store;
mod weigher;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::{Iter, UsageOrder};
pub use stats::CacheStats;
pub use store::CacheStore;
pub use weigher::{FnWeigher, TypeSizeWeigher, UnitWeigher, Weigher};
