//! # policycache
//!
//! Bounded in-memory key/value cache with pluggable eviction policies.
//!
//! ## Architecture
//! - **OrderedList**: Arena doubly-linked list recording insertion/access order (O(1))
//! - **Store**: AHash index from key to list handle, plus the active policy
//! - **EvictionPolicy**: FIFO, LRU, LIFO and Random, all working over the shared list
//! - **Cache**: Single mutex around the store for multi-threaded use
//!
//! ```
//! use policycache::{Cache, Lru};
//!
//! let cache = Cache::new(2, Lru).unwrap();
//! cache.set(1, "one");
//! cache.set(2, "two");
//! cache.get(&1);
//! cache.set(3, "three"); // evicts 2
//!
//! assert_eq!(cache.get(&2), None);
//! assert_eq!(cache.get(&1), Some("one"));
//! ```

#![warn(missing_docs)]

mod cache;
mod error;
mod list;
mod policy;
mod store;

pub use cache::{Cache, DynCache};
pub use error::{Error, Result};
pub use list::{CacheEntry, Handle, Handles, OrderedList};
pub use policy::{EvictionPolicy, Fifo, Lifo, Lru, PolicyKind, RandomPolicy};
pub use store::Store;
