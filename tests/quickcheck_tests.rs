//! Property tests comparing the tree against a `BTreeMap` model.
use std::collections::{BTreeMap, HashMap};

use quickcheck::{quickcheck, Arbitrary, Gen};
use radix_map::RadixTree;

/// A short key over a three-letter alphabet, so that keys share prefixes often
#[derive(Clone, Debug)]
struct Key(Vec<u8>);

impl Arbitrary for Key {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 7;
        Key((0..len).map(|_| *g.choose(b"abc").unwrap()).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Key))
    }
}

#[derive(Clone, Debug)]
enum Op {
    Insert(Key, u8),
    Remove(Key),
    RemovePrefix(Key),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 5 {
            0 | 1 => Op::Insert(Key::arbitrary(g), u8::arbitrary(g)),
            2 | 3 => Op::Remove(Key::arbitrary(g)),
            _ => Op::RemovePrefix(Key::arbitrary(g)),
        }
    }
}

type Model = BTreeMap<Vec<u8>, u8>;

fn build(keys: &[Key]) -> (RadixTree<Vec<u8>, u8>, Model) {
    let mut tree = RadixTree::new();
    let mut model = BTreeMap::new();
    for (i, key) in keys.iter().enumerate() {
        tree.insert(key.0.clone(), i as u8);
        model.insert(key.0.clone(), i as u8);
    }
    (tree, model)
}

fn walked(tree: &RadixTree<Vec<u8>, u8>) -> Vec<(Vec<u8>, u8)> {
    let mut out = Vec::new();
    tree.walk(|k, v| {
        out.push((k.clone(), *v));
        false
    });
    out
}

fn agrees(tree: &RadixTree<Vec<u8>, u8>, model: &Model) -> bool {
    let expected: Vec<(Vec<u8>, u8)> = model.iter().map(|(k, v)| (k.clone(), *v)).collect();
    tree.check_invariants().is_ok()
        && tree.len() == model.len()
        && walked(tree) == expected
        && model.iter().all(|(k, v)| tree.get(k) == Some(v))
}

quickcheck! {
    fn prop_ops_match_model(ops: Vec<Op>) -> bool {
        let mut tree = RadixTree::new();
        let mut model = Model::new();

        for op in ops {
            let same = match op {
                Op::Insert(key, value) => {
                    tree.insert(key.0.clone(), value) == model.insert(key.0, value)
                }
                Op::Remove(key) => tree.remove(&key.0) == model.remove(&key.0),
                Op::RemovePrefix(key) => {
                    let before = model.len();
                    model.retain(|k, _| !k.starts_with(&key.0));
                    tree.remove_prefix(&key.0) == before - model.len()
                }
            };
            if !same || !agrees(&tree, &model) {
                return false;
            }
        }
        true
    }

    fn prop_get_misses_absent_keys(keys: Vec<Key>, probe: Key) -> bool {
        let (tree, model) = build(&keys);
        tree.get(&probe.0) == model.get(&probe.0)
            && tree.contains_key(&probe.0) == model.contains_key(&probe.0)
    }

    fn prop_walk_prefix_matches_model(keys: Vec<Key>, prefix: Key) -> bool {
        let (tree, model) = build(&keys);

        let mut visited = Vec::new();
        tree.walk_prefix(&prefix.0, |k, v| {
            visited.push((k.clone(), *v));
            false
        });

        let expected: Vec<(Vec<u8>, u8)> = model
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix.0))
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        visited == expected
    }

    fn prop_walk_path_matches_model(keys: Vec<Key>, path: Key) -> bool {
        let (tree, model) = build(&keys);

        let mut visited = Vec::new();
        tree.walk_path(&path.0, |k, _| {
            visited.push(k.clone());
            false
        });

        let expected: Vec<Vec<u8>> = model
            .keys()
            .filter(|k| path.0.starts_with(k))
            .cloned()
            .collect();
        visited == expected
    }

    fn prop_longest_prefix_matches_model(keys: Vec<Key>, query: Key) -> bool {
        let (tree, model) = build(&keys);

        let expected = model
            .iter()
            .filter(|(k, _)| query.0.starts_with(k))
            .max_by_key(|(k, _)| k.len());
        tree.longest_prefix(&query.0) == expected
    }

    fn prop_minimum_maximum_match_model(keys: Vec<Key>) -> bool {
        let (tree, model) = build(&keys);
        tree.minimum() == model.iter().next() && tree.maximum() == model.iter().next_back()
    }

    fn prop_insert_remove_is_inverse(keys: Vec<Key>, key: Key, value: u8) -> bool {
        let (mut tree, model) = build(&keys);
        if model.contains_key(&key.0) {
            return true;
        }

        tree.insert(key.0.clone(), value);
        tree.remove(&key.0) == Some(value) && agrees(&tree, &model)
    }

    fn prop_to_map_round_trip(keys: Vec<Key>) -> bool {
        let (tree, model) = build(&keys);

        let map: HashMap<Vec<u8>, u8> = tree.to_map();
        let rebuilt = RadixTree::from_map(map.clone());

        map.len() == model.len()
            && rebuilt == tree
            && model.keys().all(|k| rebuilt.get(k) == tree.get(k))
            && agrees(&rebuilt, &model)
    }
}

#[test]
fn insertion_order_does_not_matter() {
    fn prop(keys: Vec<Key>) -> bool {
        let (tree, _) = build(&keys);
        let (reversed, _) = build(&keys.iter().rev().cloned().collect::<Vec<_>>());

        // Values differ by position, so compare the key sets only
        let forward: Vec<Vec<u8>> = walked(&tree).into_iter().map(|(k, _)| k).collect();
        let backward: Vec<Vec<u8>> = walked(&reversed).into_iter().map(|(k, _)| k).collect();
        forward == backward
    }
    quickcheck(prop as fn(Vec<Key>) -> bool);
}
