//! A membership-only trie over token sequences.

use std::hash::Hash;

use crate::iter::{Keys, Prefixes};
use crate::map::Trie;

/// A set of token sequences, backed by a [`Trie`] with `()` values.
///
/// Beyond whole-key membership, a trie set answers the prefix question
/// a flat set cannot: [`TrieSet::is_prefix`] tests whether a sequence
/// names a valid path, complete key or not.
#[derive(Debug)]
pub struct TrieSet<K> {
    map: Trie<K, ()>,
}

impl<K: Clone> Clone for TrieSet<K> {
    /// Clones the handle, not the graph.
    fn clone(&self) -> Self {
        TrieSet {
            map: self.map.clone(),
        }
    }
}

impl<K> TrieSet<K>
where
    K: Clone + Eq + Hash,
{
    /// Builds a set from key sequences. Duplicates collapse.
    pub fn from_keys<I, T>(terminal_marker: K, keys: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = K>,
    {
        TrieSet {
            map: Trie::from_items(terminal_marker, keys.into_iter().map(|key| (key, ()))),
        }
    }

    /// Whether `key` is a member (whole-key match only).
    pub fn contains(&self, key: impl IntoIterator<Item = K>) -> bool {
        self.map.contains(key)
    }

    /// Whether `key` names a valid path, whether or not a member ends
    /// there.
    pub fn is_prefix(&self, key: impl IntoIterator<Item = K>) -> bool {
        self.map.get_subtrie(key).is_ok()
    }

    /// The top-level tokens, in insertion order. See [`Trie::keys`].
    pub fn keys(&self) -> Keys<K> {
        self.map.keys()
    }

    /// Every path descending from the root. See [`Trie::prefixes`].
    pub fn prefixes(&self) -> Prefixes<K, ()> {
        self.map.prefixes()
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
