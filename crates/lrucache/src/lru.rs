//! LRU (Least Recently Used) cache implementation
//!
//! Entries live in a slot arena and are threaded into a doubly-linked
//! recency list by slot index. The index maps each key to its slot, so
//! lookup, promotion and eviction are all O(1) with no pointer juggling.
//!
//! ```text
//!   map: key -> slot
//!
//!   head ──► [slot 2] ◄──► [slot 0] ◄──► [slot 3] ◄── tail
//!            MRU                          LRU (next eviction)
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Upper bound on slots reserved up front by [`LruCache::new`]
const MAX_PREALLOC: usize = 4096;

/// Node in the LRU doubly-linked list
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// LRU cache with fixed capacity
///
/// Holds at most [`capacity`](LruCache::capacity) entries. Reading with
/// [`get`](LruCache::get) or writing with [`insert`](LruCache::insert)
/// promotes the entry to most-recently-used; inserting a new key into a
/// full cache first evicts the least-recently-used entry.
///
/// # Example
/// ```
/// use lrucache::{Error, LruCache};
///
/// let mut cache = LruCache::new(2);
/// cache.insert("a", 1);
/// cache.insert("b", 2);
/// assert_eq!(cache.get("a"), Ok(1)); // "a" is now most recently used
///
/// cache.insert("c", 3); // evicts "b"
/// assert_eq!(cache.get("b"), Err(Error::KeyNotFound));
/// assert_eq!(cache.len(), 2);
/// ```
pub struct LruCache<K, V> {
    map: HashMap<K, usize, RandomState>,
    nodes: Vec<Option<Node<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache with the given capacity
    ///
    /// A capacity of 0 is allowed; such a cache never retains an entry.
    pub fn new(capacity: usize) -> Self {
        let reserve = capacity.min(MAX_PREALLOC);

        Self {
            map: HashMap::with_capacity_and_hasher(reserve, RandomState::new()),
            nodes: Vec::with_capacity(reserve),
            head: None,
            tail: None,
            free_list: Vec::new(),
            capacity,
        }
    }

    /// Get a copy of the value for `key`, promoting it to most recently used
    ///
    /// # Returns
    /// * `Ok(V)` - The stored value
    /// * `Err(Error::KeyNotFound)` - The key is not cached; the cache is untouched
    pub fn get<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        let idx = *self.map.get(key).ok_or(Error::KeyNotFound)?;
        self.move_to_front(idx);
        let value = self.nodes[idx].as_ref().map(|node| node.value.clone());
        debug_assert!(value.is_some(), "index points at empty slot {}", idx);
        value.ok_or(Error::KeyNotFound)
    }

    /// Get a reference to the value for `key` without touching recency
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.nodes[idx].as_ref().map(|node| &node.value)
    }

    /// Check whether `key` is cached, without touching recency
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Insert a key-value pair into the cache
    ///
    /// An existing key has its value replaced and is promoted; the entry
    /// count does not change. A new key evicts the least recently used
    /// entry first when the cache is full.
    pub fn insert(&mut self, key: K, value: V) {
        if let Some(&idx) = self.map.get(&key) {
            // Update existing
            if let Some(node) = &mut self.nodes[idx] {
                node.value = value;
            }
            self.move_to_front(idx);
            return;
        }

        if self.capacity == 0 {
            trace!("capacity is zero, insert dropped");
            return;
        }

        if self.map.len() >= self.capacity {
            self.evict();
        }

        let idx = self.alloc_node();
        self.nodes[idx] = Some(Node {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        });
        self.push_front(idx);
        self.map.insert(key, idx);
    }

    /// Remove a key from the cache
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.map.remove(key)?;
        self.unlink(idx);
        self.free_node(idx);
        self.nodes[idx].take().map(|node| node.value)
    }

    /// Remove and return the least recently used entry
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let idx = self.tail?;
        self.unlink(idx);
        let node = self.nodes[idx].take()?;
        self.free_node(idx);
        self.map.remove(&node.key);
        Some((node.key, node.value))
    }

    /// Change the capacity, evicting from the tail when shrinking
    ///
    /// Shrinking releases one slot per eviction, oldest entry first,
    /// until the remaining entries fit. Growing never evicts.
    pub fn resize(&mut self, new_capacity: usize) {
        debug!(
            from = self.capacity,
            to = new_capacity,
            len = self.map.len(),
            "resizing cache"
        );

        // Unused slots go first, then one slot per eviction
        self.capacity = self.capacity.min(self.map.len());
        while self.capacity > new_capacity {
            self.capacity -= 1;
            if self.map.len() > self.capacity {
                self.evict();
            }
        }

        self.capacity = new_capacity;
    }

    /// Clear the cache, keeping its capacity
    pub fn clear(&mut self) {
        debug!(len = self.map.len(), capacity = self.capacity, "clearing cache");

        self.map.clear();
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
    }

    fn evict(&mut self) {
        if self.pop_lru().is_some() {
            trace!(
                capacity = self.capacity,
                len = self.map.len(),
                "evicted least recently used entry"
            );
        }
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return; // Already at front
        }

        self.unlink(idx);
        self.push_front(idx);
    }

    fn push_front(&mut self, idx: usize) {
        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = self.head;
        }

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match &self.nodes[idx] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }

    fn free_node(&mut self, idx: usize) {
        self.free_list.push(idx);
    }
}

impl<K, V> LruCache<K, V> {
    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get the maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate entries from most to least recently used
    ///
    /// Iteration does not promote anything.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.map.len(),
        }
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cache entries in recency order, created by [`LruCache::iter`]
pub struct Iter<'a, K, V> {
    nodes: &'a [Option<Node<K, V>>],
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let nodes = self.nodes;
        let node = nodes[idx].as_ref()?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

#[cfg(test)]
impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Panics if the index and the recency list disagree
    fn assert_invariants(&self) {
        assert!(self.map.len() <= self.capacity, "len exceeds capacity");

        let mut seen = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.nodes[idx].as_ref().expect("linked slot is empty");
            assert_eq!(node.prev, prev, "broken prev link at slot {}", idx);
            assert_eq!(self.map.get(&node.key), Some(&idx), "index points elsewhere");
            seen += 1;
            assert!(seen <= self.map.len(), "list longer than index");
            prev = Some(idx);
            cursor = node.next;
        }

        assert_eq!(self.tail, prev, "tail is not the last linked node");
        assert_eq!(seen, self.map.len(), "list and index sizes differ");
        assert_eq!(
            self.free_list.len() + seen,
            self.nodes.len(),
            "slots leaked from the arena"
        );
    }
}
