//! # lrucache
//!
//! Fixed-capacity in-memory LRU cache.
//!
//! ## Architecture
//! - **HashMap**: AHash index from key to arena slot (O(1))
//! - **LRU List**: Doubly-linked list threaded through the slot arena (O(1))
//! - **Eviction**: Least recently used entry goes first, one slot at a time
//!
//! Reads promote: [`LruCache::get`] takes `&mut self` and moves the entry
//! to the most-recently-used position. A miss is reported as
//! [`Error::KeyNotFound`], never as a sentinel value.
//!
//! The cache does no locking. Wrap it in a mutex to share it between threads.

#![warn(missing_docs)]

mod error;
mod lru;

pub use error::{Error, Result};
pub use lru::{Iter, LruCache};
