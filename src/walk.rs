//! Ordered traversals over a radix tree.
//!
//! Every walk visits entries in ascending byte-wise key order: a node's own
//! leaf before anything below it, then its edges in ascending label order.
//! The callback returns `true` to stop the walk early.
//!
//! Callbacks run synchronously and only receive shared references, so the
//! tree cannot be modified while a walk is in progress.

use std::collections::HashMap;
use std::hash::Hash;

use crate::node::Node;
use crate::tree::RadixTree;

impl<K, V> RadixTree<K, V> {
    /// Walks every entry of the tree in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_map::RadixTree;
    ///
    /// let tree: RadixTree<String, i32> = ["b", "a", "ab"]
    ///     .iter()
    ///     .enumerate()
    ///     .map(|(i, k)| (k.to_string(), i as i32))
    ///     .collect();
    ///
    /// let mut keys = Vec::new();
    /// tree.walk(|k, _| {
    ///     keys.push(k.clone());
    ///     false
    /// });
    /// assert_eq!(keys, ["a", "ab", "b"]);
    /// ```
    pub fn walk<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.root.walk(&mut f);
    }

    /// Walks every entry whose key starts with `prefix`, in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_map::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("foo".to_string(), 1);
    /// tree.insert("bar".to_string(), 2);
    ///
    /// let mut visited = Vec::new();
    /// tree.walk_prefix("fo", |k, v| {
    ///     visited.push((k.clone(), *v));
    ///     false
    /// });
    /// assert_eq!(visited, [("foo".to_string(), 1)]);
    /// ```
    pub fn walk_prefix<Q, F>(&self, prefix: &Q, mut f: F)
    where
        Q: AsRef<[u8]> + ?Sized,
        F: FnMut(&K, &V) -> bool,
    {
        let mut n = &self.root;
        let mut search = prefix.as_ref();

        loop {
            let label = match search.first() {
                Some(&label) => label,
                None => {
                    n.walk(&mut f);
                    return;
                }
            };

            n = match n.get_edge(label) {
                Some(child) => child,
                None => return,
            };

            if let Some(rest) = search.strip_prefix(n.prefix.as_slice()) {
                search = rest;
            } else if n.prefix.starts_with(search) {
                // The prefix ends inside this node, so its whole subtree matches
                n.walk(&mut f);
                return;
            } else {
                return;
            }
        }
    }

    /// Walks the entries whose keys are prefixes of `path`, from the shortest
    /// to the longest.
    ///
    /// Where [`walk_prefix`](Self::walk_prefix) visits the entries *under* a
    /// prefix, this visits the entries *above* it.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_map::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("/".to_string(), 0);
    /// tree.insert("/api".to_string(), 1);
    /// tree.insert("/api/users".to_string(), 2);
    /// tree.insert("/apiary".to_string(), 3);
    ///
    /// let mut visited = Vec::new();
    /// tree.walk_path("/api/users/7", |k, _| {
    ///     visited.push(k.clone());
    ///     false
    /// });
    /// assert_eq!(visited, ["/", "/api", "/api/users"]);
    /// ```
    pub fn walk_path<Q, F>(&self, path: &Q, mut f: F)
    where
        Q: AsRef<[u8]> + ?Sized,
        F: FnMut(&K, &V) -> bool,
    {
        let mut n = &self.root;
        let mut search = path.as_ref();

        loop {
            if let Some(leaf) = &n.leaf {
                if f(&leaf.key, &leaf.value) {
                    return;
                }
            }

            let label = match search.first() {
                Some(&label) => label,
                None => return,
            };

            n = match n.get_edge(label) {
                Some(child) => child,
                None => return,
            };

            search = match search.strip_prefix(n.prefix.as_slice()) {
                Some(rest) => rest,
                None => return,
            };
        }
    }

    /// Collects references to every entry in key order.
    pub(crate) fn entries(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.len());
        collect_entries(&self.root, &mut out);
        out
    }

    /// Copies every entry of the tree into a `HashMap`.
    pub fn to_map(&self) -> HashMap<K, V>
    where
        K: Hash + Eq + Clone,
        V: Clone,
    {
        let mut out = HashMap::with_capacity(self.len());
        self.walk(|key, value| {
            out.insert(key.clone(), value.clone());
            false
        });
        out
    }
}

// Same order as `Node::walk`, but the references outlive the traversal
fn collect_entries<'a, K, V>(n: &'a Node<K, V>, out: &mut Vec<(&'a K, &'a V)>) {
    if let Some(leaf) = &n.leaf {
        out.push((&leaf.key, &leaf.value));
    }

    for edge in &n.edges {
        collect_entries(&edge.node, out);
    }
}

#[cfg(test)]
mod tests {
    use crate::RadixTree;

    fn tree_of(keys: &[&str]) -> RadixTree<String, usize> {
        keys.iter()
            .enumerate()
            .map(|(i, k)| (k.to_string(), i))
            .collect()
    }

    fn walked(tree: &RadixTree<String, usize>) -> Vec<String> {
        let mut keys = Vec::new();
        tree.walk(|k, _| {
            keys.push(k.clone());
            false
        });
        keys
    }

    fn walked_prefix(tree: &RadixTree<String, usize>, prefix: &str) -> Vec<String> {
        let mut keys = Vec::new();
        tree.walk_prefix(prefix, |k, _| {
            keys.push(k.clone());
            false
        });
        keys
    }

    fn walked_path(tree: &RadixTree<String, usize>, path: &str) -> Vec<String> {
        let mut keys = Vec::new();
        tree.walk_path(path, |k, _| {
            keys.push(k.clone());
            false
        });
        keys
    }

    #[test]
    fn test_walk_order() {
        let tree = tree_of(&["zebra", "apple", "app", "", "banana", "apricot", "b"]);
        assert_eq!(
            walked(&tree),
            ["", "app", "apple", "apricot", "b", "banana", "zebra"]
        );
    }

    #[test]
    fn test_walk_abort() {
        let tree = tree_of(&["a", "b", "c", "d"]);

        let mut keys = Vec::new();
        tree.walk(|k, _| {
            keys.push(k.clone());
            k == "b"
        });
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn test_walk_empty_tree() {
        let tree: RadixTree<String, usize> = RadixTree::new();
        assert!(walked(&tree).is_empty());
        assert!(walked_prefix(&tree, "").is_empty());
        assert!(walked_path(&tree, "abc").is_empty());
    }

    #[test]
    fn test_walk_prefix() {
        let tree = tree_of(&[
            "foobar", "foo", "foobaz", "fooz", "bar", "f", "fo", "zip",
        ]);

        assert_eq!(walked_prefix(&tree, "foo"), ["foo", "foobar", "foobaz", "fooz"]);
        assert_eq!(walked_prefix(&tree, "foob"), ["foobar", "foobaz"]);
        assert_eq!(walked_prefix(&tree, "fooba"), ["foobar", "foobaz"]);
        assert_eq!(walked_prefix(&tree, "foobaz"), ["foobaz"]);
        assert_eq!(walked_prefix(&tree, "f").len(), 6);
        assert_eq!(walked_prefix(&tree, "").len(), 8);
        assert!(walked_prefix(&tree, "foobarx").is_empty());
        assert!(walked_prefix(&tree, "q").is_empty());
        assert!(walked_prefix(&tree, "foox").is_empty());
    }

    #[test]
    fn test_walk_prefix_inside_node_prefix() {
        let tree = tree_of(&["foobar", "foobaz", "qux"]);

        // "fo" ends inside the stored "fooba" prefix
        assert_eq!(walked_prefix(&tree, "fo"), ["foobar", "foobaz"]);
        assert!(walked_prefix(&tree, "fox").is_empty());
    }

    #[test]
    fn test_walk_prefix_abort() {
        let tree = tree_of(&["aa", "ab", "ac", "b"]);

        let mut count = 0;
        tree.walk_prefix("a", |_, _| {
            count += 1;
            count == 2
        });
        assert_eq!(count, 2);
    }

    #[test]
    fn test_walk_path() {
        let tree = tree_of(&["", "foo", "foobar", "foobarbaz", "fooqux", "fo"]);

        assert_eq!(
            walked_path(&tree, "foobarba"),
            ["", "fo", "foo", "foobar"]
        );
        assert_eq!(walked_path(&tree, "foo"), ["", "fo", "foo"]);
        assert_eq!(walked_path(&tree, "x"), [""]);

        // Keys below the final node are not visited
        assert_eq!(walked_path(&tree, "f"), [""]);
    }

    #[test]
    fn test_walk_path_abort() {
        let tree = tree_of(&["a", "ab", "abc"]);

        let mut keys = Vec::new();
        tree.walk_path("abcd", |k, _| {
            keys.push(k.clone());
            k == "ab"
        });
        assert_eq!(keys, ["a", "ab"]);
    }

    #[test]
    fn test_to_map_round_trip() {
        let tree = tree_of(&["x", "xy", "xyz"]);
        let map = tree.to_map();

        assert_eq!(map.len(), 3);
        assert_eq!(map["x"], 0);
        assert_eq!(map["xy"], 1);
        assert_eq!(map["xyz"], 2);

        let rebuilt = RadixTree::from_map(map);
        assert_eq!(rebuilt, tree);
        assert_eq!(walked(&rebuilt), walked(&tree));
    }

    #[test]
    fn test_entries() {
        let tree = tree_of(&["b", "a"]);
        let entries = tree.entries();
        assert_eq!(entries, [(&"a".to_string(), &1), (&"b".to_string(), &0)]);
    }
}
