//! The main tree implementation.
//!
//! This module contains the `RadixTree` type, which provides the primary API
//! for working with the radix tree data structure. Traversals live in the
//! `walk` module.

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

use crate::node::{Leaf, Node};
use crate::util::longest_prefix;

/// A mutable radix tree mapping byte-string keys to values.
///
/// This Radix Tree (also known as a Patricia Trie) stores shared key prefixes
/// once and keeps its keys in byte-wise lexicographic order, which makes
/// prefix queries, longest-prefix matching and ordered traversal cheap.
///
/// Keys are any type that can be viewed as bytes (`String`, `Vec<u8>`, ...).
/// The original key is kept alongside its value, so ordered queries hand back
/// the caller's key rather than a reconstruction.
///
/// The tree is not synchronized. Wrap it in a lock to share it between
/// threads.
#[derive(Clone)]
pub struct RadixTree<K, V> {
    /// The root node of the tree; its prefix is always empty
    pub(crate) root: Node<K, V>,

    /// The number of values stored in the tree
    size: usize,
}

impl<K, V> RadixTree<K, V> {
    /// Creates a new, empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_map::RadixTree;
    ///
    /// let tree = RadixTree::<String, i32>::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        RadixTree {
            root: Node::new(Vec::new()),
            size: 0,
        }
    }

    /// Returns the number of values stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_map::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert("hello".to_string(), 42);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree contains no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every entry from the tree.
    pub fn clear(&mut self) {
        self.root = Node::new(Vec::new());
        self.size = 0;
    }

    // Descends to the node at which `key` is exhausted, if any
    fn find(&self, key: &[u8]) -> Option<&Node<K, V>> {
        let mut n = &self.root;
        let mut search = key;

        loop {
            let label = match search.first() {
                Some(&label) => label,
                None => return Some(n),
            };

            n = n.get_edge(label)?;
            search = search.strip_prefix(n.prefix.as_slice())?;
        }
    }

    fn find_mut(&mut self, key: &[u8]) -> Option<&mut Node<K, V>> {
        let mut n = &mut self.root;
        let mut search = key;

        loop {
            let label = match search.first() {
                Some(&label) => label,
                None => return Some(n),
            };

            n = n.get_edge_mut(label)?;
            search = search.strip_prefix(n.prefix.as_slice())?;
        }
    }

    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// Only exact matches are reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_map::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("hello".to_string(), 42);
    ///
    /// assert_eq!(tree.get("hello"), Some(&42));
    /// assert_eq!(tree.get("hell"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        self.find(key.as_ref())
            .and_then(|n| n.leaf.as_ref())
            .map(|leaf| &leaf.value)
    }

    /// Retrieves a mutable reference to the value stored for the given key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        self.find_mut(key.as_ref())
            .and_then(|n| n.leaf.as_mut())
            .map(|leaf| &mut leaf.value)
    }

    /// Returns `true` if the tree contains a value for the given key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Finds the longest stored key that is a byte-wise prefix of `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_map::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("foo".to_string(), 1);
    /// tree.insert("foobar".to_string(), 2);
    ///
    /// assert_eq!(tree.longest_prefix("foobarbaz"), Some((&"foobar".to_string(), &2)));
    /// assert_eq!(tree.longest_prefix("fooba"), Some((&"foo".to_string(), &1)));
    /// assert_eq!(tree.longest_prefix("fo"), None);
    /// ```
    pub fn longest_prefix<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        let mut last = None;
        let mut n = &self.root;
        let mut search = key.as_ref();

        loop {
            if let Some(leaf) = &n.leaf {
                last = Some(leaf);
            }

            let label = match search.first() {
                Some(&label) => label,
                None => break,
            };

            n = match n.get_edge(label) {
                Some(child) => child,
                None => break,
            };

            search = match search.strip_prefix(n.prefix.as_slice()) {
                Some(rest) => rest,
                None => break,
            };
        }

        last.map(|leaf| (&leaf.key, &leaf.value))
    }

    /// Returns the entry with the smallest key.
    pub fn minimum(&self) -> Option<(&K, &V)> {
        let mut n = &self.root;

        loop {
            // A node's own leaf sorts before everything below it
            if let Some(leaf) = &n.leaf {
                return Some((&leaf.key, &leaf.value));
            }
            n = &*n.edges.first()?.node;
        }
    }

    /// Returns the entry with the largest key.
    pub fn maximum(&self) -> Option<(&K, &V)> {
        let mut n = &self.root;

        loop {
            if let Some(edge) = n.edges.last() {
                n = &*edge.node;
                continue;
            }
            return n.leaf.as_ref().map(|leaf| (&leaf.key, &leaf.value));
        }
    }

    /// Removes a key from the tree, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_map::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("hello".to_string(), 42);
    ///
    /// assert_eq!(tree.remove("hello"), Some(42));
    /// assert_eq!(tree.remove("hello"), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the tree, returning the stored key and value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        let leaf = remove_at(&mut self.root, key.as_ref())?;
        self.size -= 1;
        Some((leaf.key, leaf.value))
    }

    /// Removes every key starting with `prefix`, returning how many were
    /// removed.
    ///
    /// An empty prefix clears the whole tree. A prefix that matches nothing
    /// removes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_map::RadixTree;
    ///
    /// let mut tree: RadixTree<String, i32> = [("foo", 1), ("foobar", 2), ("bar", 3)]
    ///     .iter()
    ///     .map(|&(k, v)| (k.to_string(), v))
    ///     .collect();
    ///
    /// assert_eq!(tree.remove_prefix("fo"), 2);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn remove_prefix<Q>(&mut self, prefix: &Q) -> usize
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        let prefix = prefix.as_ref();

        let removed = if prefix.is_empty() {
            let removed = self.root.subtree_len();
            self.root.leaf = None;
            self.root.edges.clear();
            removed
        } else {
            prune(&mut self.root, prefix)
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            prefix = %String::from_utf8_lossy(prefix),
            removed,
            "removed prefix"
        );

        self.size -= removed;
        removed
    }
}

impl<K, V> RadixTree<K, V>
where
    K: AsRef<[u8]>,
{
    /// Creates a tree holding every entry of `map`.
    ///
    /// The resulting structure does not depend on the map's iteration order.
    pub fn from_map(map: HashMap<K, V>) -> Self {
        map.into_iter().collect()
    }

    /// Inserts a key-value pair into the tree.
    ///
    /// If the key was already present its value is replaced and the old value
    /// returned; the stored key is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_map::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// assert_eq!(tree.insert("hello".to_string(), 1), None);
    /// assert_eq!(tree.insert("hello".to_string(), 2), Some(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old = insert_at(&mut self.root, key, 0, value);
        if old.is_none() {
            self.size += 1;
        }
        old
    }
}

// Inserts below `n`, whose prefix has already consumed `key[..depth]`
fn insert_at<K, V>(n: &mut Node<K, V>, key: K, depth: usize, value: V) -> Option<V>
where
    K: AsRef<[u8]>,
{
    let search = &key.as_ref()[depth..];

    // Handle key exhaustion
    let label = match search.first() {
        Some(&label) => label,
        None => {
            if let Some(leaf) = &mut n.leaf {
                return Some(std::mem::replace(&mut leaf.value, value));
            }
            n.leaf = Some(Leaf { key, value });
            return None;
        }
    };

    // No edge, create one
    let child = match n.get_edge_mut(label) {
        Some(child) => child,
        None => {
            let prefix = search.to_vec();
            n.add_edge(Node::with_leaf(prefix, key, value));
            return None;
        }
    };

    let common = longest_prefix(search, &child.prefix);
    if common == child.prefix.len() {
        return insert_at(child, key, depth + common, value);
    }

    // The key diverges inside the child's prefix
    child.split(common);
    let rest = search[common..].to_vec();
    if rest.is_empty() {
        child.leaf = Some(Leaf { key, value });
    } else {
        child.add_edge(Node::with_leaf(rest, key, value));
    }
    None
}

// Removes the leaf for `search` below `n`, then collapses the nodes the
// removal left without a leaf and with fewer than two edges
fn remove_at<K, V>(n: &mut Node<K, V>, search: &[u8]) -> Option<Leaf<K, V>> {
    let label = match search.first() {
        Some(&label) => label,
        None => return n.leaf.take(),
    };

    let child = n.get_edge_mut(label)?;
    let rest = search.strip_prefix(child.prefix.as_slice())?;
    let leaf = remove_at(child, rest)?;

    if !child.is_leaf() {
        match child.edges.len() {
            0 => {
                n.remove_edge(label);
            }
            1 => child.merge_child(),
            _ => {}
        }
    }

    Some(leaf)
}

// Discards the subtree under `search` below `n` and returns its leaf count
fn prune<K, V>(n: &mut Node<K, V>, search: &[u8]) -> usize {
    let label = match search.first() {
        Some(&label) => label,
        None => return 0,
    };

    let child = match n.get_edge_mut(label) {
        Some(child) => child,
        None => return 0,
    };

    // The prefix ends inside (or exactly at the end of) the child's prefix,
    // so every key below the child qualifies
    if search.len() <= child.prefix.len() {
        if !child.prefix.starts_with(search) {
            return 0;
        }
        return n
            .remove_edge(label)
            .map_or(0, |discarded| discarded.subtree_len());
    }

    let rest = match search.strip_prefix(child.prefix.as_slice()) {
        Some(rest) => rest,
        None => return 0,
    };

    let removed = prune(child, rest);
    if child.is_degenerate() {
        child.merge_child();
    }
    removed
}

impl<K, V> Default for RadixTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for RadixTree<K, V>
where
    K: AsRef<[u8]>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = RadixTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V> Extend<(K, V)> for RadixTree<K, V>
where
    K: AsRef<[u8]>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> From<HashMap<K, V>> for RadixTree<K, V>
where
    K: AsRef<[u8]>,
{
    fn from(map: HashMap<K, V>) -> Self {
        Self::from_map(map)
    }
}

impl<K, V, Q> Index<&Q> for RadixTree<K, V>
where
    Q: AsRef<[u8]> + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the tree.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in RadixTree"),
        }
    }
}

impl<K, V> fmt::Debug for RadixTree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.walk(|key, value| {
            map.entry(key, value);
            false
        });
        map.finish()
    }
}

// Two trees are equal when they hold the same keys (compared byte-wise) with
// equal values
impl<K, V> PartialEq for RadixTree<K, V>
where
    K: AsRef<[u8]>,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }

        self.entries()
            .into_iter()
            .zip(other.entries())
            .all(|((k1, v1), (k2, v2))| k1.as_ref() == k2.as_ref() && v1 == v2)
    }
}

impl<K, V> Eq for RadixTree<K, V>
where
    K: AsRef<[u8]>,
    V: Eq,
{
}
