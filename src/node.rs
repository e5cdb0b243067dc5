//! Internal node implementation for the radix tree.
//!
//! This module contains the `Node`, `Edge` and `Leaf` structures that form the
//! backbone of the tree. Every node is exclusively owned by the edge pointing
//! to it (or by the tree, for the root), so restructuring happens in place.

/// The value-bearing payload of a node.
///
/// Holds the complete original key, not the suffix consumed at the node.
#[derive(Debug, Clone)]
pub(crate) struct Leaf<K, V> {
    pub key: K,
    pub value: V,
}

/// A labeled transition to an owned child node.
#[derive(Debug, Clone)]
pub(crate) struct Edge<K, V> {
    /// First byte of the child's prefix
    pub label: u8,

    pub node: Box<Node<K, V>>,
}

impl<K, V> Edge<K, V> {
    /// Creates an edge to `node`, labeled by the first byte of its prefix.
    ///
    /// # Panics
    ///
    /// Panics if `node` has an empty prefix. Only the root may have one.
    pub fn new(node: Node<K, V>) -> Self {
        match node.prefix.first() {
            Some(&label) => Edge {
                label,
                node: Box::new(node),
            },
            None => panic!("edge to a node with an empty prefix"),
        }
    }
}

/// Internal node type for the radix tree.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    /// Present iff some key terminates exactly at this node
    pub leaf: Option<Leaf<K, V>>,

    /// Bytes consumed between the parent node and this one
    pub prefix: Vec<u8>,

    /// Outgoing edges, sorted ascending by label, labels unique
    pub edges: Vec<Edge<K, V>>,
}

impl<K, V> Node<K, V> {
    /// Creates a new node with the given prefix and no leaf or edges.
    pub fn new(prefix: Vec<u8>) -> Self {
        Node {
            leaf: None,
            prefix,
            edges: Vec::new(),
        }
    }

    /// Creates a new node holding a leaf for `key`.
    pub fn with_leaf(prefix: Vec<u8>, key: K, value: V) -> Self {
        Node {
            leaf: Some(Leaf { key, value }),
            prefix,
            edges: Vec::new(),
        }
    }

    /// Returns whether a key terminates at this node.
    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }

    /// Returns whether this node has a single edge and no leaf.
    ///
    /// Such a node is only allowed at the root.
    pub fn is_degenerate(&self) -> bool {
        self.leaf.is_none() && self.edges.len() == 1
    }

    fn position(&self, label: u8) -> Result<usize, usize> {
        self.edges.binary_search_by_key(&label, |edge| edge.label)
    }

    /// Returns the child reached through the edge labeled `label`.
    pub fn get_edge(&self, label: u8) -> Option<&Node<K, V>> {
        self.position(label)
            .ok()
            .map(|idx| &*self.edges[idx].node)
    }

    pub fn get_edge_mut(&mut self, label: u8) -> Option<&mut Node<K, V>> {
        match self.position(label) {
            Ok(idx) => Some(&mut *self.edges[idx].node),
            Err(_) => None,
        }
    }

    /// Adds an edge to `node`, keeping the edge list sorted.
    ///
    /// # Panics
    ///
    /// Panics if an edge with the same label already exists.
    pub fn add_edge(&mut self, node: Node<K, V>) {
        let edge = Edge::new(node);
        match self.position(edge.label) {
            Ok(_) => panic!("adding duplicate edge {:#04x}", edge.label),
            Err(idx) => self.edges.insert(idx, edge),
        }
    }

    /// Detaches and returns the child under `label`, if any.
    pub fn remove_edge(&mut self, label: u8) -> Option<Box<Node<K, V>>> {
        match self.position(label) {
            Ok(idx) => Some(self.edges.remove(idx).node),
            Err(_) => None,
        }
    }

    /// Splits this node's prefix at `at`.
    ///
    /// This node keeps `prefix[..at]` and becomes an intermediate node without
    /// a leaf; its former leaf, edges and the remaining prefix move to a new
    /// child reached through a single edge.
    ///
    /// # Panics
    ///
    /// Panics if `at` does not fall strictly inside the prefix.
    pub fn split(&mut self, at: usize) {
        assert!(
            at < self.prefix.len(),
            "splitting a prefix of length {} at {}",
            self.prefix.len(),
            at
        );

        let suffix = self.prefix.split_off(at);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            common = %String::from_utf8_lossy(&self.prefix),
            suffix = %String::from_utf8_lossy(&suffix),
            "split node"
        );

        let lower = Node {
            leaf: self.leaf.take(),
            prefix: suffix,
            edges: std::mem::take(&mut self.edges),
        };
        self.add_edge(lower);
    }

    /// Absorbs the sole child into this node, concatenating the prefixes.
    ///
    /// # Panics
    ///
    /// Panics if the node does not have exactly one edge, or holds a leaf.
    pub fn merge_child(&mut self) {
        assert!(self.leaf.is_none(), "merging into a node holding a leaf");
        let child = match self.edges.pop() {
            Some(edge) if self.edges.is_empty() => edge.node,
            _ => panic!("merging a node that does not have exactly one edge"),
        };
        let Node {
            leaf,
            prefix,
            edges,
        } = *child;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            parent = %String::from_utf8_lossy(&self.prefix),
            child = %String::from_utf8_lossy(&prefix),
            "merge node"
        );

        self.prefix.extend_from_slice(&prefix);
        self.leaf = leaf;
        self.edges = edges;
    }

    /// Returns the number of leaves in this subtree.
    pub fn subtree_len(&self) -> usize {
        let mut count = if self.is_leaf() { 1 } else { 0 };

        for edge in &self.edges {
            count += edge.node.subtree_len();
        }

        count
    }

    /// Pre-order walk of this subtree: the node's own leaf first, then edges in
    /// ascending label order. Returns `true` if `f` aborted the walk.
    pub fn walk<F>(&self, f: &mut F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        if let Some(leaf) = &self.leaf {
            if f(&leaf.key, &leaf.value) {
                return true;
            }
        }

        for edge in &self.edges {
            if edge.node.walk(f) {
                return true;
            }
        }

        false
    }
}
