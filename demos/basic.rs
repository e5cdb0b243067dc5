//! Examples of using the radix tree
use radix_map::RadixTree;

fn main() {
    // Create a new tree with string keys
    let mut tree = RadixTree::new();

    // Insert some values
    tree.insert("hello".to_string(), 1);
    tree.insert("help".to_string(), 2);
    tree.insert("world".to_string(), 3);

    // Check values
    assert_eq!(tree.get("hello"), Some(&1));
    assert_eq!(tree.get("world"), Some(&3));
    assert_eq!(tree.get("missing"), None);

    // Updating a key hands back the old value
    assert_eq!(tree.insert("hello".to_string(), 10), Some(1));

    // Keys come out in order
    println!("All entries:");
    tree.walk(|key, value| {
        println!("  {} → {}", key, value);
        false
    });

    println!("\nEntries under \"hel\":");
    tree.walk_prefix("hel", |key, value| {
        println!("  {} → {}", key, value);
        false
    });

    // Drop a whole subtree at once
    let removed = tree.remove_prefix("hel");
    println!("\nRemoved {} entries, {} left", removed, tree.len());
}

#[test]
fn test_prefix_queries() {
    let mut tree = RadixTree::new();
    tree.insert("hello".to_string(), 1);
    tree.insert("help".to_string(), 2);
    tree.insert("world".to_string(), 3);

    let mut under = Vec::new();
    tree.walk_prefix("hel", |key, _| {
        under.push(key.clone());
        false
    });
    assert_eq!(under, ["hello", "help"]);

    assert_eq!(tree.longest_prefix("helpful"), Some((&"help".to_string(), &2)));
    assert_eq!(tree.remove_prefix("hel"), 2);
    assert_eq!(tree.len(), 1);
}
