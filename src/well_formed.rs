//! Structural self-check for a radix tree.
//!
//! Walks every node and verifies that the tree is sorted, path-compressed and
//! consistent with its recorded size.

use crate::error::MalformedTreeError;
use crate::node::Node;
use crate::tree::RadixTree;

impl<K, V> RadixTree<K, V>
where
    K: AsRef<[u8]>,
{
    /// Checks the structural invariants of the tree.
    ///
    /// - edges are sorted by label with no duplicates, and each label is the
    ///   first byte of its child's prefix
    /// - the root prefix is empty and no other prefix is
    /// - no node other than the root is missing a leaf while having fewer than
    ///   two edges
    /// - each leaf's key equals the concatenated prefixes leading to it
    /// - [`len`](Self::len) equals the number of leaves
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_map::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("romane".to_string(), 1);
    /// tree.insert("romanus".to_string(), 2);
    /// tree.remove("romane");
    ///
    /// assert!(tree.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<(), MalformedTreeError> {
        if !self.root.prefix.is_empty() {
            return Err(MalformedTreeError::NonEmptyRootPrefix {
                prefix: self.root.prefix.clone(),
            });
        }

        let mut path = Vec::new();
        let actual = check_node(&self.root, &mut path, true)?;
        if actual != self.len() {
            return Err(MalformedTreeError::SizeMismatch {
                recorded: self.len(),
                actual,
            });
        }

        Ok(())
    }
}

// Returns the number of leaves under `node`; `path` holds the bytes consumed
// above it and is restored before returning
fn check_node<K, V>(
    node: &Node<K, V>,
    path: &mut Vec<u8>,
    is_root: bool,
) -> Result<usize, MalformedTreeError>
where
    K: AsRef<[u8]>,
{
    path.extend_from_slice(&node.prefix);

    if !node.edges.windows(2).all(|pair| pair[0].label < pair[1].label) {
        return Err(MalformedTreeError::UnsortedEdges {
            path: path.clone(),
            labels: node.edges.iter().map(|edge| edge.label).collect(),
        });
    }

    if !is_root {
        if node.is_degenerate() {
            return Err(MalformedTreeError::DegenerateNode { path: path.clone() });
        }
        if !node.is_leaf() && node.edges.is_empty() {
            return Err(MalformedTreeError::EmptyNode { path: path.clone() });
        }
    }

    let mut count = 0;
    if let Some(leaf) = &node.leaf {
        if leaf.key.as_ref() != path.as_slice() {
            return Err(MalformedTreeError::LeafKeyMismatch {
                path: path.clone(),
                key: leaf.key.as_ref().to_vec(),
            });
        }
        count += 1;
    }

    for edge in &node.edges {
        match edge.node.prefix.first() {
            None => return Err(MalformedTreeError::EmptyPrefix { path: path.clone() }),
            Some(&first) if first != edge.label => {
                return Err(MalformedTreeError::EdgeLabelMismatch {
                    path: path.clone(),
                    label: edge.label,
                    prefix: edge.node.prefix.clone(),
                })
            }
            Some(_) => {}
        }
        count += check_node(&edge.node, path, false)?;
    }

    path.truncate(path.len() - node.prefix.len());
    Ok(count)
}
