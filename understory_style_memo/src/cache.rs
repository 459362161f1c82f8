// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tree of hash maps addressed by an ordered key path.
//!
//! [`KeyedCache`] stores one value per path. Each path segment selects a
//! child level; the final segment selects a leaf. Reads never create levels,
//! writes create whatever intermediate levels are missing, and nothing is
//! ever removed or overwritten.
//!
//! ```rust
//! use understory_style_memo::KeyedCache;
//!
//! let mut cache = KeyedCache::<u32, &str>::new();
//! cache.insert(&[1, 2], "a").unwrap();
//! cache.insert(&[1, 3], "b").unwrap();
//!
//! assert_eq!(cache.get(&[1, 2]), Some(&"a"));
//! assert_eq!(cache.get(&[1, 3]), Some(&"b"));
//! assert_eq!(cache.get(&[1]), None);
//! assert_eq!(cache.len(), 2);
//! ```

use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

/// Error returned when a write path disagrees with the shape of the tree.
///
/// Paths sharing a prefix must also agree on where leaves sit: a key cannot
/// name both a stored value and a deeper level.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum PathError<K> {
    /// The path has no segments.
    Empty,
    /// A value is already stored at `key` (at `depth`), where the path needs
    /// an intermediate level.
    LeafInPath {
        /// The segment that resolved to a stored value.
        key: K,
        /// Zero-based position of `key` in the path.
        depth: usize,
    },
    /// The final segment names an intermediate level rather than a value.
    BranchAtEnd {
        /// The final segment of the path.
        key: K,
    },
}

impl<K: fmt::Debug> fmt::Debug for PathError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("PathError::Empty"),
            Self::LeafInPath { key, depth } => {
                write!(f, "PathError::LeafInPath {{ key: {key:?}, depth: {depth} }}")
            }
            Self::BranchAtEnd { key } => write!(f, "PathError::BranchAtEnd {{ key: {key:?} }}"),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for PathError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("cache path is empty"),
            Self::LeafInPath { key, depth } => write!(
                f,
                "cache path segment {key:?} at depth {depth} holds a value, not a level"
            ),
            Self::BranchAtEnd { key } => write!(
                f,
                "final cache path segment {key:?} holds a level, not a value"
            ),
        }
    }
}

impl<K: fmt::Debug> core::error::Error for PathError<K> {}

#[derive(Clone, Debug)]
enum Node<K, V> {
    Branch(HashMap<K, Node<K, V>>),
    Leaf(V),
}

/// A write-once cache keyed by variable-length paths.
///
/// # Type Parameters
///
/// - `K`: A path segment. Must be `Copy + Eq + Hash`; segments are compared
///   by value, so identity semantics belong in the key type.
/// - `V`: The stored value.
///
/// Values are never evicted. An entry, once stored, stays for the lifetime of
/// the cache and is never replaced.
#[derive(Clone, Debug)]
pub struct KeyedCache<K, V> {
    root: HashMap<K, Node<K, V>>,
    len: usize,
}

impl<K, V> Default for KeyedCache<K, V> {
    fn default() -> Self {
        Self {
            root: HashMap::new(),
            len: 0,
        }
    }
}

impl<K, V> KeyedCache<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored values.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no value has been stored.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the value stored at `path`.
    ///
    /// Returns `None` as soon as a segment is missing, if a value is reached
    /// before the path ends, if the path ends on an intermediate level, or if
    /// the path is empty.
    #[must_use]
    pub fn get(&self, path: &[K]) -> Option<&V> {
        let (last, prefix) = path.split_last()?;
        let mut level = &self.root;
        for key in prefix {
            match level.get(key)? {
                Node::Branch(children) => level = children,
                Node::Leaf(_) => return None,
            }
        }
        match level.get(last)? {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// Returns `true` if a value is stored at `path`.
    #[must_use]
    pub fn contains(&self, path: &[K]) -> bool {
        self.get(path).is_some()
    }

    /// Stores `value` at `path`, creating any missing levels.
    ///
    /// If a value is already stored at `path` it is kept, `value` is dropped,
    /// and the existing value is returned. A single-segment path stores
    /// directly at the root.
    pub fn insert(&mut self, path: &[K], value: V) -> Result<&V, PathError<K>> {
        self.get_or_insert_with(path, || value)
    }

    /// Returns the value at `path`, computing and storing it first if absent.
    ///
    /// `make` runs only on a miss. Levels are created only when `make` is
    /// about to be stored, never for a lookup that hits.
    pub fn get_or_insert_with(
        &mut self,
        path: &[K],
        make: impl FnOnce() -> V,
    ) -> Result<&V, PathError<K>> {
        let Some((&last, prefix)) = path.split_last() else {
            return Err(PathError::Empty);
        };

        let mut level = &mut self.root;
        for (depth, &key) in prefix.iter().enumerate() {
            let node = level
                .entry(key)
                .or_insert_with(|| Node::Branch(HashMap::new()));
            level = match node {
                Node::Branch(children) => children,
                Node::Leaf(_) => return Err(PathError::LeafInPath { key, depth }),
            };
        }

        let node = match level.entry(last) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                self.len += 1;
                slot.insert(Node::Leaf(make()))
            }
        };
        match node {
            Node::Leaf(value) => Ok(&*value),
            Node::Branch(_) => Err(PathError::BranchAtEnd { key: last }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn get_on_empty_cache_is_absent() {
        let cache = KeyedCache::<u32, u32>::new();
        assert_eq!(cache.get(&[1, 2, 3]), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn empty_path() {
        let mut cache = KeyedCache::<u32, u32>::new();
        assert_eq!(cache.get(&[]), None);
        assert_eq!(cache.insert(&[], 1), Err(PathError::Empty));
        assert!(cache.is_empty());
    }

    #[test]
    fn single_segment_stores_at_root() {
        let mut cache = KeyedCache::new();
        assert_eq!(cache.insert(&['a'], 1), Ok(&1));
        assert_eq!(cache.get(&['a']), Some(&1));
        assert_eq!(cache.root.len(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn get_miss_does_not_create_levels() {
        let mut cache = KeyedCache::<u32, u32>::new();
        assert_eq!(cache.get(&[1, 2, 3]), None);
        assert!(cache.root.is_empty());

        // A later write along the looked-up path is not shadowed by anything.
        cache.insert(&[1, 2, 3], 9).unwrap();
        assert_eq!(cache.get(&[1, 2, 3]), Some(&9));
    }

    #[test]
    fn insert_never_overwrites() {
        let mut cache = KeyedCache::new();
        assert_eq!(cache.insert(&[1, 2], "first"), Ok(&"first"));
        assert_eq!(cache.insert(&[1, 2], "second"), Ok(&"first"));
        assert_eq!(cache.get(&[1, 2]), Some(&"first"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn longer_paths_extend_without_disturbing_siblings() {
        let mut cache = KeyedCache::new();
        cache.insert(&[1, 2], 12).unwrap();
        cache.insert(&[1, 3, 4], 134).unwrap();
        cache.insert(&[1, 3, 5, 6], 1356).unwrap();

        assert_eq!(cache.get(&[1, 2]), Some(&12));
        assert_eq!(cache.get(&[1, 3, 4]), Some(&134));
        assert_eq!(cache.get(&[1, 3, 5, 6]), Some(&1356));
        assert_eq!(cache.get(&[1, 3]), None);
        assert_eq!(cache.get(&[1, 3, 5]), None);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn get_or_insert_with_runs_only_on_miss() {
        let mut cache = KeyedCache::new();
        let mut calls = 0;
        for _ in 0..3 {
            let value = cache
                .get_or_insert_with(&[7, 8], || {
                    calls += 1;
                    "v".to_string()
                })
                .unwrap();
            assert_eq!(value, "v");
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn empty_values_are_hits() {
        let mut cache = KeyedCache::<u32, alloc::vec::Vec<u8>>::new();
        cache.insert(&[1], alloc::vec::Vec::new()).unwrap();
        assert_eq!(cache.get(&[1]).map(alloc::vec::Vec::len), Some(0));
        assert!(cache.contains(&[1]));
    }

    #[test]
    fn leaf_in_path_is_rejected() {
        let mut cache = KeyedCache::new();
        cache.insert(&[1, 2], 0).unwrap();

        assert_eq!(
            cache.insert(&[1, 2, 3], 1),
            Err(PathError::LeafInPath { key: 2, depth: 1 })
        );
        assert_eq!(cache.get(&[1, 2, 3]), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn branch_at_end_is_rejected() {
        let mut cache = KeyedCache::new();
        cache.insert(&[1, 2, 3], 0).unwrap();

        assert_eq!(
            cache.insert(&[1, 2], 1),
            Err(PathError::BranchAtEnd { key: 2 })
        );
        assert_eq!(cache.get(&[1, 2]), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn path_error_display() {
        let err = PathError::LeafInPath { key: 4_u8, depth: 0 };
        assert_eq!(
            err.to_string(),
            "cache path segment 4 at depth 0 holds a value, not a level"
        );
        assert_eq!(format!("{:?}", PathError::<u8>::Empty), "PathError::Empty");
    }
}
