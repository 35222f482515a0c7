use lrucache::{Error, LruCache};

#[test]
fn int_single_insert() {
    let mut cache = LruCache::new(1);
    cache.insert(4, 5);
    assert_eq!(cache.get(&4), Ok(5));
}

#[test]
fn int_single_eviction() {
    let mut cache = LruCache::new(1);
    cache.insert(4, 5);
    cache.insert(6, 2);
    assert_eq!(cache.get(&6), Ok(2));
    assert_eq!(cache.get(&4), Err(Error::KeyNotFound));
}

#[test]
fn int_single_modify() {
    let mut cache = LruCache::new(1);
    cache.insert(4, 5);
    cache.insert(4, 3);
    assert_eq!(cache.get(&4), Ok(3));
    assert_eq!(cache.len(), 1);
}

#[test]
fn string_single_insert() {
    let mut cache: LruCache<String, i32> = LruCache::new(1);
    cache.insert("key".to_string(), 5);
    assert_eq!(cache.get("key"), Ok(5));
}

#[test]
fn string_single_eviction() {
    let mut cache: LruCache<String, i32> = LruCache::new(1);
    cache.insert("key1".to_string(), 5);
    cache.insert("key2".to_string(), 2);
    assert_eq!(cache.get("key2"), Ok(2));
    assert_eq!(cache.get("key1"), Err(Error::KeyNotFound));
}

#[test]
fn string_single_modify() {
    let mut cache: LruCache<String, i32> = LruCache::new(1);
    cache.insert("key".to_string(), 5);
    cache.insert("key".to_string(), 3);
    assert_eq!(cache.get("key"), Ok(3));
}

#[test]
fn resize_to_zero() {
    let mut cache = LruCache::new(1);
    cache.insert("key", 5);
    cache.resize(0);
    assert_eq!(cache.get("key"), Err(Error::KeyNotFound));
    assert_eq!(cache.capacity(), 0);

    cache.insert("key", 6);
    assert!(cache.is_empty());
}

#[test]
fn resize_to_one() {
    let mut cache = LruCache::new(2);
    cache.insert("key1", 5);
    cache.insert("key2", 6);
    cache.resize(1);
    assert_eq!(cache.get("key1"), Err(Error::KeyNotFound));
    assert_eq!(cache.get("key2"), Ok(6));
    assert_eq!(cache.len(), 1);
}

#[test]
fn resize_shrink_keeps_most_recent() {
    let mut cache = LruCache::new(3);
    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.insert("c", 3);
    cache.resize(1);

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("c"), Ok(3));
    assert_eq!(cache.get("a"), Err(Error::KeyNotFound));
    assert_eq!(cache.get("b"), Err(Error::KeyNotFound));
}

#[test]
fn clear() {
    let mut cache = LruCache::new(1);
    cache.insert("key", 5);
    cache.clear();
    assert_eq!(cache.get("key"), Err(Error::KeyNotFound));
}

#[test]
fn clear_keeps_capacity() {
    let mut cache = LruCache::new(4);
    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.clear();

    assert_eq!(cache.len(), 0);
    assert_eq!(cache.capacity(), 4);
}

#[test]
fn max_cache_size() {
    let cache: LruCache<String, i32> = LruCache::new(3);
    assert_eq!(cache.capacity(), 3);
}

#[test]
fn max_cache_size_after_size_change() {
    let mut cache: LruCache<String, i32> = LruCache::new(3);
    cache.resize(10);
    assert_eq!(cache.capacity(), 10);
}

#[test]
fn empty_start_size() {
    let cache: LruCache<String, i32> = LruCache::new(5);
    assert_eq!(cache.len(), 0);
    assert!(cache.is_empty());
}

#[test]
fn size_after_insertions() {
    let mut cache = LruCache::new(5);
    cache.insert("key1", 4);
    cache.insert("key2", 3);
    assert_eq!(cache.len(), 2);
}

#[test]
fn size_after_insertions_greater_than_max() {
    let mut cache = LruCache::new(3);
    cache.insert("key1", 4);
    cache.insert("key2", 3);
    cache.insert("key3", 3);
    cache.insert("key4", 3);
    assert_eq!(cache.len(), 3);
    assert_eq!(cache.get("key1"), Err(Error::KeyNotFound));
}

#[test]
fn promotion_prevents_eviction() {
    let mut cache = LruCache::new(2);
    cache.insert("k1", 1);
    cache.insert("k2", 2);
    assert_eq!(cache.get("k1"), Ok(1));
    cache.insert("k3", 3);

    assert_eq!(cache.get("k2"), Err(Error::KeyNotFound));
    assert_eq!(cache.get("k1"), Ok(1));
    assert_eq!(cache.get("k3"), Ok(3));
}

#[test]
fn miss_error_message() {
    let mut cache: LruCache<u64, Vec<u8>> = LruCache::new(8);
    let err = cache.get(&42).unwrap_err();
    assert_eq!(err.to_string(), "Invalid get. Key not found.");
}
