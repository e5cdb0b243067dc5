//! Errors reported by the structural self-check.
use thiserror::Error;

/// A structural defect found by
/// [`RadixTree::check_invariants`](crate::RadixTree::check_invariants).
///
/// Paths are the concatenated node prefixes from the root down to the
/// offending node. None of these are reachable through the public API; seeing
/// one means the tree has a bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedTreeError {
    /// The root node carries a prefix
    #[error("Root node has a non-empty prefix {prefix:?}")]
    NonEmptyRootPrefix { prefix: Vec<u8> },

    /// Edge labels are not strictly ascending
    #[error("Node at {path:?} has unsorted or duplicate edge labels {labels:?}")]
    UnsortedEdges { path: Vec<u8>, labels: Vec<u8> },

    /// An edge label differs from the first byte of its child's prefix
    #[error("Edge {label:#04x} under {path:?} leads to a node with prefix {prefix:?}")]
    EdgeLabelMismatch {
        path: Vec<u8>,
        label: u8,
        prefix: Vec<u8>,
    },

    /// A non-root node has an empty prefix
    #[error("Node under {path:?} has an empty prefix")]
    EmptyPrefix { path: Vec<u8> },

    /// A non-root node has a single edge and no leaf
    #[error("Node at {path:?} has a single edge and no leaf")]
    DegenerateNode { path: Vec<u8> },

    /// A non-root node has neither a leaf nor edges
    #[error("Node at {path:?} has neither a leaf nor edges")]
    EmptyNode { path: Vec<u8> },

    /// A leaf's stored key does not spell the path leading to it
    #[error("Leaf at {path:?} stores the key {key:?}")]
    LeafKeyMismatch { path: Vec<u8>, key: Vec<u8> },

    /// The recorded size disagrees with the number of leaves
    #[error("Tree records {recorded} entries but holds {actual}")]
    SizeMismatch { recorded: usize, actual: usize },
}
