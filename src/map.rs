//! The read-only trie core: construction, lookup and subtrie views.

use std::hash::Hash;
use std::rc::Rc;

use crate::error::TrieError;
use crate::iter::{Items, Keys, Prefixes};
use crate::node::{Node, NodeRef};

/// A prefix-tree map from token sequences to values.
///
/// `Trie` is a read-only handle onto a shared node graph. Handles are
/// cheap to clone, and a clone aliases the same graph rather than copying
/// it; the same holds for the views returned by [`Trie::get_subtrie`] and
/// yielded by [`Trie::items`]. Handles hold `Rc`s internally and are
/// therefore neither `Send` nor `Sync`; concurrent use must be
/// serialized by the caller.
///
/// The `terminal_marker` passed at construction labels the terminal entry
/// of a node when it is surfaced through [`Trie::keys`] and
/// [`Trie::items`]. Terminal values are stored in a dedicated slot per
/// node, never under the marker token, so a key containing the marker
/// value cannot corrupt the structure.
///
/// # Example
///
/// ```rust
/// use seqtrie::Trie;
///
/// let trie = Trie::from_items(0, [
///     (vec![1, 2, 3], "A"),
///     (vec![1, 2, 4], "B"),
/// ]);
/// assert_eq!(trie.get([1, 2, 3]), Some("A"));
/// assert_eq!(trie.get([1, 2]), None);
///
/// let sub = trie.get_subtrie([1, 2]).unwrap();
/// assert_eq!(sub.get([4]), Some("B"));
/// ```
#[derive(Debug)]
pub struct Trie<K, V> {
    pub(crate) node: NodeRef<K, V>,
    pub(crate) marker: K,
}

impl<K: Clone, V> Clone for Trie<K, V> {
    /// Clones the handle, not the graph: the clone is a view of the same
    /// nodes.
    fn clone(&self) -> Self {
        Trie {
            node: Rc::clone(&self.node),
            marker: self.marker.clone(),
        }
    }
}

impl<K, V> Trie<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Builds a trie from `(key, value)` pairs.
    ///
    /// Each key sequence is decomposed one token at a time, creating
    /// intermediate nodes as needed, and the value is stored in the
    /// terminal slot of the final node. A later pair whose key repeats an
    /// earlier one overwrites only that terminal slot. The empty key
    /// sequence is legal and stores its value at the root.
    ///
    /// Maps iterate as `(key, value)` pairs, so this constructor covers
    /// dictionary input as well.
    pub fn from_items<I, T>(terminal_marker: K, items: I) -> Self
    where
        I: IntoIterator<Item = (T, V)>,
        T: IntoIterator<Item = K>,
    {
        let root = Node::new_ref();
        for (key, value) in items {
            let node = descend_or_create(&root, key);
            node.borrow_mut().value = Some(value);
        }
        Trie {
            node: root,
            marker: terminal_marker,
        }
    }

    /// Returns the value stored under `key`, or `None` if the full path
    /// (including its terminal slot) is absent.
    ///
    /// Reaching a live internal node that has no terminal value is a miss
    /// like any other; chain `unwrap_or` for a defaulting lookup.
    pub fn get(&self, key: impl IntoIterator<Item = K>) -> Option<V>
    where
        V: Clone,
    {
        self.descend(key).and_then(|node| node.borrow().value.clone())
    }

    /// Returns the value stored under `key`, or
    /// [`TrieError::KeyNotFound`].
    pub fn lookup(&self, key: impl IntoIterator<Item = K>) -> Result<V, TrieError>
    where
        V: Clone,
    {
        self.get(key).ok_or(TrieError::KeyNotFound)
    }

    /// Whether `key` is stored as a complete key.
    ///
    /// A strict prefix of a stored key is not contained, even though its
    /// path exists.
    pub fn contains(&self, key: impl IntoIterator<Item = K>) -> bool {
        self.descend(key)
            .is_some_and(|node| node.borrow().value.is_some())
    }

    /// Returns a live view of the subtrie rooted at `prefix`, or
    /// [`TrieError::PrefixNotFound`] if any token along it is absent.
    ///
    /// The view shares storage with `self`; no copying occurs. Unlike
    /// [`Trie::get`], the prefix need not end at a stored key. The empty
    /// prefix yields a sibling view of this node.
    ///
    /// ```rust
    /// use seqtrie::Trie;
    ///
    /// let trie = Trie::from_items(0, [(vec![1, 2, 3], "A")]);
    /// let sub = trie.get_subtrie([1]).unwrap();
    /// assert_eq!(sub.get([2, 3]), Some("A"));
    /// assert!(trie.get_subtrie([9]).is_err());
    /// ```
    pub fn get_subtrie(&self, prefix: impl IntoIterator<Item = K>) -> Result<Self, TrieError> {
        let node = self.descend(prefix).ok_or(TrieError::PrefixNotFound)?;
        Ok(Trie {
            node,
            marker: self.marker.clone(),
        })
    }

    /// The value stored at this node itself, if this view's root ends a
    /// complete key. Equivalent to `get` of the empty sequence.
    pub fn value(&self) -> Option<V>
    where
        V: Clone,
    {
        self.node.borrow().value.clone()
    }

    /// The top-level tokens of this node, in insertion order.
    ///
    /// When a value is stored at this node its terminal entry is yielded
    /// first, labeled with the terminal marker. A real token equal to the
    /// marker is therefore ambiguous here (and only here); match on
    /// [`Trie::items`] instead to distinguish the two by type.
    pub fn keys(&self) -> Keys<K> {
        Keys::new(self)
    }

    /// The top-level entries of this node: `(token, entry)` pairs where
    /// the entry is either the terminal value or a live child view. The
    /// terminal entry, when present, comes first; children follow in
    /// insertion order.
    pub fn items(&self) -> Items<K, V>
    where
        V: Clone,
    {
        Items::new(self)
    }

    /// Every path descending from this node, depth-first in insertion
    /// order, each yielded as a token sequence of length ≥ 1. Paths are
    /// included whether or not a complete key ends at them.
    pub fn prefixes(&self) -> Prefixes<K, V> {
        Prefixes::new(self)
    }

    /// The proper extensions of `prefix` within this trie, each yielded
    /// with `prefix` prepended. Fails with
    /// [`TrieError::PrefixNotFound`] if the prefix path is absent.
    pub fn prefixes_from(
        &self,
        prefix: impl IntoIterator<Item = K>,
    ) -> Result<Prefixes<K, V>, TrieError> {
        let base: Vec<K> = prefix.into_iter().collect();
        let sub = self.get_subtrie(base.iter().cloned())?;
        Ok(Prefixes::with_base(&sub, base))
    }

    /// The number of complete keys stored at or beneath this node.
    /// Walks the subtree.
    pub fn len(&self) -> usize {
        count_values(&self.node)
    }

    /// Whether this node stores no value and has no children.
    pub fn is_empty(&self) -> bool {
        self.node.borrow().is_empty()
    }

    /// The token labeling terminal entries in [`Trie::keys`] and
    /// [`Trie::items`] output.
    pub fn marker(&self) -> &K {
        &self.marker
    }

    /// Follows `key` one token at a time, returning the node reached, or
    /// `None` as soon as a token is absent.
    pub(crate) fn descend(&self, key: impl IntoIterator<Item = K>) -> Option<NodeRef<K, V>> {
        let mut node = Rc::clone(&self.node);
        for token in key {
            let next = node.borrow().child(&token)?;
            node = next;
        }
        Some(node)
    }
}

/// Follows `key` from `root`, creating any missing intermediate nodes,
/// and returns the final node reached.
pub(crate) fn descend_or_create<K, V>(
    root: &NodeRef<K, V>,
    key: impl IntoIterator<Item = K>,
) -> NodeRef<K, V>
where
    K: Eq + Hash,
{
    let mut node = Rc::clone(root);
    for token in key {
        let next = node.borrow_mut().child_or_insert(token);
        node = next;
    }
    node
}

fn count_values<K, V>(node: &NodeRef<K, V>) -> usize {
    let node = node.borrow();
    usize::from(node.value.is_some()) + node.children.values().map(count_values).sum::<usize>()
}
