//! # Radix Map
//!
//! An ordered, byte-string keyed map implemented as a compressed prefix tree.
//!
//! This crate provides a mutable radix tree (also known as a patricia trie).
//! Keys sharing a prefix share the nodes that spell it, and keys are kept in
//! byte-wise lexicographic order, so the tree answers prefix queries that a
//! hash map cannot.
//!
//! ## Features
//!
//! - **Exact lookup**: `get`, `insert`, `remove` with map-like semantics
//! - **Prefix queries**: longest-prefix match, prefix-scoped walks and bulk
//!   prefix removal
//! - **Ordered access**: minimum, maximum and in-order walks
//! - **Path compression**: single-child chains are always merged, so the node
//!   count stays proportional to the number of keys
//!
//! The `tracing` feature (on by default) emits `trace` events when nodes are
//! split, merged or pruned. The `serde` feature serializes a tree as a map.
//!
//! ## Example
//!
//! ```rust
//! use radix_map::RadixTree;
//!
//! let mut tree = RadixTree::new();
//! tree.insert("foo".to_string(), 1);
//! tree.insert("foobar".to_string(), 2);
//! tree.insert("foozoo".to_string(), 3);
//!
//! assert_eq!(tree.get("foo"), Some(&1));
//! assert_eq!(tree.longest_prefix("foobarbaz"), Some((&"foobar".to_string(), &2)));
//! assert_eq!(tree.minimum(), Some((&"foo".to_string(), &1)));
//! assert_eq!(tree.maximum(), Some((&"foozoo".to_string(), &3)));
//!
//! assert_eq!(tree.remove_prefix("foo"), 3);
//! assert!(tree.is_empty());
//! ```

mod error;
mod node;
#[cfg(feature = "serde")]
mod serde_impl;
mod tree;
mod util;
mod walk;
mod well_formed;

// Re-export public types
pub use crate::error::MalformedTreeError;
pub use crate::tree::RadixTree;
