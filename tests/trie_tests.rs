//! End-to-end behavior of the trie family: construction, lookup, views,
//! mutation, pruning and the string layer.

use seqtrie::{MutableStringTrie, MutableTrie, StringTrie, Trie, TrieEntry, TrieError, TrieSet};

fn sample() -> Vec<(Vec<i32>, &'static str)> {
    vec![
        (vec![1, 2, 3], "A"),
        (vec![1, 2, 4], "B"),
        (vec![2, 3, 4, 5], "C"),
    ]
}

#[test]
fn lookup_and_containment() {
    let trie = Trie::from_items(0, sample());
    assert_eq!(trie.get([1, 2, 4]), Some("B"));
    assert_eq!(trie.get([1, 2]), None);
    assert_eq!(trie.lookup([2, 3, 4, 5]), Ok("C"));
    assert_eq!(trie.lookup([2, 3, 4]), Err(TrieError::KeyNotFound));
    assert!(trie.contains([1, 2, 3]));
    assert!(!trie.contains([1, 2]));
    assert!(!trie.contains([9]));
    assert_eq!(trie.len(), 3);
}

#[test]
fn top_level_iteration_is_in_insertion_order() {
    let trie = Trie::from_items(0, sample());
    assert_eq!(trie.keys().collect::<Vec<_>>(), vec![1, 2]);

    let sub = trie.get_subtrie([1, 2]).unwrap();
    assert_eq!(sub.keys().collect::<Vec<_>>(), vec![3, 4]);
}

#[test]
fn subtrie_lookup_composes_with_whole_key_lookup() {
    let trie = Trie::from_items(0, sample());
    for (key, value) in sample() {
        for cut in 0..=key.len() {
            let (prefix, suffix) = key.split_at(cut);
            let sub = trie.get_subtrie(prefix.iter().copied()).unwrap();
            assert_eq!(sub.get(suffix.iter().copied()), Some(value));
        }
    }
}

#[test]
fn items_distinguish_terminal_values_by_type() {
    let trie = Trie::from_items(0, [(vec![1], "v"), (vec![1, 2], "w")]);
    let sub = trie.get_subtrie([1]).unwrap();

    // Terminal entry first, labeled with the marker; children follow.
    assert_eq!(sub.keys().collect::<Vec<_>>(), vec![0, 2]);

    let items: Vec<(i32, TrieEntry<i32, &str>)> = sub.items().collect();
    assert_eq!(items.len(), 2);
    match &items[0] {
        (token, TrieEntry::Value(v)) => {
            assert_eq!(*token, 0);
            assert_eq!(*v, "v");
        }
        (_, TrieEntry::Subtrie(_)) => panic!("terminal entry should come first"),
    }
    match &items[1] {
        (token, TrieEntry::Subtrie(child)) => {
            assert_eq!(*token, 2);
            assert_eq!(child.value(), Some("w"));
        }
        (_, TrieEntry::Value(_)) => panic!("child entry expected"),
    }
}

#[test]
fn a_marker_colliding_with_a_real_token_stays_harmless() {
    // Token 0 is also the marker value; lookups are unaffected.
    let trie = Trie::from_items(0, [(vec![0, 1], "x"), (vec![0], "y")]);
    assert_eq!(trie.get([0, 1]), Some("x"));
    assert_eq!(trie.get([0]), Some("y"));
    assert_eq!(trie.len(), 2);
}

#[test]
fn set_and_delete_follow_the_worked_example() {
    let mut trie = MutableTrie::from_items(0, sample());

    assert_eq!(trie.set([4, 5, 6], "N"), None);
    assert_eq!(trie.get([4, 5, 6]), Some("N"));

    assert_eq!(trie.delete([1, 2, 3]), Ok("A"));
    assert_eq!(trie.get([1, 2, 3]), None);
    // (1, 2, 4) still exists, so 2 remains reachable under (1,).
    let under_one: Vec<i32> = trie.get_subtrie([1]).unwrap().keys().collect();
    assert!(under_one.contains(&2));

    assert_eq!(trie.delete([1, 2, 3]), Err(TrieError::KeyNotFound));
}

#[test]
fn deleting_the_last_key_through_a_node_prunes_it() {
    let mut trie = MutableTrie::from_items(0, sample());
    trie.delete([1, 2, 3]).unwrap();
    trie.delete([1, 2, 4]).unwrap();
    // Nothing remains under 1; the whole branch is gone.
    assert_eq!(trie.keys().collect::<Vec<_>>(), vec![2]);
    assert!(trie.get_subtrie([1]).is_err());
    assert_eq!(trie.len(), 1);
}

#[test]
fn mutation_through_any_view_is_visible_through_all() {
    let mut parent = MutableTrie::from_items(0, sample());
    let mut view = parent.get_subtrie([1, 2]).unwrap();

    view.set([6], "via-view");
    assert_eq!(parent.get([1, 2, 6]), Some("via-view"));

    parent.set([1, 2, 7], "via-parent");
    assert_eq!(view.get([7]), Some("via-parent"));

    view.delete([3]).unwrap();
    assert_eq!(parent.get([1, 2, 3]), None);

    let frozen = parent.view();
    parent.set([1, 2, 8], "late");
    assert_eq!(frozen.get([1, 2, 8]), Some("late"));
}

#[test]
fn a_pruned_view_stays_alive_but_detached() {
    let mut trie = MutableTrie::from_items(0, [(vec![1, 2], "x")]);
    let mut orphan = trie.get_subtrie([1]).unwrap();

    trie.delete([1, 2]).unwrap();
    assert!(trie.is_empty());
    // The edge to 2 was removed before this node was unlinked.
    assert!(orphan.is_empty());

    // Further writes land in the detached subgraph only.
    orphan.set([7], "island");
    assert_eq!(orphan.get([7]), Some("island"));
    assert_eq!(trie.get([1, 7]), None);
}

#[test]
fn empty_keys_and_prefixes_are_legal() {
    let mut trie = MutableTrie::new(0u8);
    let empty: [u8; 0] = [];

    assert_eq!(trie.set(empty, "at-root"), None);
    assert_eq!(trie.get(empty), Some("at-root"));
    assert_eq!(trie.value(), Some("at-root"));

    let whole = trie.get_subtrie(empty).unwrap();
    assert_eq!(whole.get(empty), Some("at-root"));

    assert_eq!(trie.delete(empty), Ok("at-root"));
    assert_eq!(trie.get(empty), None);
}

#[test]
fn prefixes_enumerate_every_path_in_preorder() {
    let trie = Trie::from_items(0, sample());
    let paths: Vec<Vec<i32>> = trie.prefixes().collect();
    assert_eq!(
        paths,
        vec![
            vec![1],
            vec![1, 2],
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![2],
            vec![2, 3],
            vec![2, 3, 4],
            vec![2, 3, 4, 5],
        ]
    );
}

#[test]
fn prefixes_from_yields_proper_extensions_only() {
    let trie = Trie::from_items(0, sample());
    let extensions: Vec<Vec<i32>> = trie.prefixes_from([1, 2]).unwrap().collect();
    assert_eq!(extensions, vec![vec![1, 2, 3], vec![1, 2, 4]]);
    assert!(trie.prefixes_from([9]).is_err());
}

#[test]
fn trie_set_membership_and_prefix_queries() {
    let set = TrieSet::from_keys(0, [vec![1, 2, 3], vec![1, 4], vec![5]]);
    assert!(set.contains([1, 2, 3]));
    assert!(set.contains([5]));
    assert!(!set.contains([1, 2]));
    assert!(set.is_prefix([1, 2]));
    assert!(set.is_prefix([1]));
    assert!(!set.is_prefix([1, 3]));
    assert_eq!(set.len(), 3);
    assert_eq!(set.keys().collect::<Vec<_>>(), vec![1, 5]);
}

#[test]
fn string_layer_round_trips() {
    let mut trie = MutableStringTrie::new();
    assert_eq!(trie.set("trie", 1), None);
    assert_eq!(trie.set("tried", 2), None);
    assert_eq!(trie.set("trie", 10), Some(1));

    assert_eq!(trie.get("trie"), Some(10));
    assert!(trie.contains("tried"));
    assert!(!trie.contains("tri"));

    let sub = trie.get_subtrie("tri").unwrap();
    assert_eq!(sub.get("ed"), Some(2));

    assert_eq!(trie.delete("trie"), Ok(10));
    assert_eq!(trie.get("tried"), Some(2));
    assert_eq!(trie.delete("trie"), Err(TrieError::KeyNotFound));
}

#[test]
fn string_prefixes_and_views() {
    let trie = StringTrie::from_items([("car", 1), ("cart", 2), ("do", 3)]);
    let prefixes: Vec<String> = trie.prefixes().collect();
    assert_eq!(prefixes, ["c", "ca", "car", "cart", "d", "do"]);

    let extensions: Vec<String> = trie.prefixes_from("car").unwrap().collect();
    assert_eq!(extensions, ["cart"]);

    let mut source = MutableStringTrie::from_items([("ab", 1)]);
    let reader = source.view();
    source.set("ac", 2);
    assert_eq!(reader.get("ac"), Some(2));
}
