//! `serde` support, enabled by the `serde` feature.
//!
//! A tree serializes as a map in ascending key order and deserializes from any
//! map, inserting entries one at a time.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::RadixTree;

impl<K, V> Serialize for RadixTree<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        let mut result = Ok(());
        self.walk(|key, value| {
            result = map.serialize_entry(key, value);
            result.is_err()
        });
        result?;
        map.end()
    }
}

struct RadixTreeVisitor<K, V> {
    marker: PhantomData<fn() -> RadixTree<K, V>>,
}

impl<'de, K, V> Visitor<'de> for RadixTreeVisitor<K, V>
where
    K: Deserialize<'de> + AsRef<[u8]>,
    V: Deserialize<'de>,
{
    type Value = RadixTree<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut tree = RadixTree::new();
        while let Some((key, value)) = access.next_entry()? {
            tree.insert(key, value);
        }
        Ok(tree)
    }
}

impl<'de, K, V> Deserialize<'de> for RadixTree<K, V>
where
    K: Deserialize<'de> + AsRef<[u8]>,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RadixTreeVisitor {
            marker: PhantomData,
        })
    }
}
