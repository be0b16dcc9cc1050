//! In-place mutation over the shared node graph.

use std::hash::Hash;
use std::rc::Rc;

use crate::error::TrieError;
use crate::iter::{Items, Keys, Prefixes};
use crate::map::{descend_or_create, Trie};
use crate::node::NodeRef;

/// A [`Trie`] that can be modified after creation.
///
/// The read surface is identical to [`Trie`]; `set` and `delete` mutate
/// the shared graph in place. Subtrie views obtained from a
/// `MutableTrie` are themselves mutable, and a structural change made
/// through any view is visible through every other view sharing that
/// subgraph, the parent included.
///
/// Deleting the last key passing through an intermediate node prunes the
/// emptied nodes from their parents, up to but never including the root.
/// A view rooted at a pruned node keeps its (now detached) subgraph
/// alive and usable; pruning severs the edge, not the handle.
///
/// # Example
///
/// ```rust
/// use seqtrie::MutableTrie;
///
/// let mut trie = MutableTrie::new(0);
/// trie.set([1, 2], "a");
///
/// let mut sub = trie.get_subtrie([1]).unwrap();
/// sub.set([3], "b");
/// assert_eq!(trie.get([1, 3]), Some("b"));
///
/// trie.delete([1, 2]).unwrap();
/// assert_eq!(trie.get([1, 2]), None);
/// ```
#[derive(Debug)]
pub struct MutableTrie<K, V> {
    inner: Trie<K, V>,
}

impl<K: Clone, V> Clone for MutableTrie<K, V> {
    /// Clones the handle, not the graph: the clone is a mutable view of
    /// the same nodes.
    fn clone(&self) -> Self {
        MutableTrie {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> MutableTrie<K, V>
where
    K: Clone + Eq + Hash,
{
    /// An empty trie.
    pub fn new(terminal_marker: K) -> Self {
        MutableTrie {
            inner: Trie::from_items(terminal_marker, std::iter::empty::<(Vec<K>, V)>()),
        }
    }

    /// Builds a mutable trie from `(key, value)` pairs, with the same
    /// semantics as [`Trie::from_items`].
    pub fn from_items<I, T>(terminal_marker: K, items: I) -> Self
    where
        I: IntoIterator<Item = (T, V)>,
        T: IntoIterator<Item = K>,
    {
        MutableTrie {
            inner: Trie::from_items(terminal_marker, items),
        }
    }

    /// Stores `value` under `key`, creating any missing intermediate
    /// nodes, and returns the previous value at that slot. Never removes
    /// nodes. The empty key writes the root's terminal slot.
    pub fn set(&mut self, key: impl IntoIterator<Item = K>, value: V) -> Option<V> {
        let node = descend_or_create(&self.inner.node, key);
        let mut node = node.borrow_mut();
        node.value.replace(value)
    }

    /// Removes the value stored under `key` and returns it.
    ///
    /// Fails with [`TrieError::KeyNotFound`] if any token along the path
    /// is absent, or if the final node holds no value; the graph is
    /// inspected in full before any removal begins, so a failed delete
    /// mutates nothing. On success, nodes left with neither value nor
    /// children are unlinked from their parents, walking back up the
    /// path until a still-occupied node (or the root) is reached.
    pub fn delete(&mut self, key: impl IntoIterator<Item = K>) -> Result<V, TrieError> {
        // Record (parent, edge token) per step so pruning can walk back up.
        let mut path: Vec<(NodeRef<K, V>, K)> = Vec::new();
        let mut node = Rc::clone(&self.inner.node);
        for token in key {
            let next = node.borrow().child(&token).ok_or(TrieError::KeyNotFound)?;
            path.push((node, token));
            node = next;
        }
        let removed = node.borrow_mut().value.take().ok_or(TrieError::KeyNotFound)?;

        let mut doomed = node;
        while let Some((parent, token)) = path.pop() {
            if !doomed.borrow().is_empty() {
                break;
            }
            parent.borrow_mut().remove_child(&token);
            doomed = parent;
        }
        Ok(removed)
    }

    /// See [`Trie::get`].
    pub fn get(&self, key: impl IntoIterator<Item = K>) -> Option<V>
    where
        V: Clone,
    {
        self.inner.get(key)
    }

    /// See [`Trie::lookup`].
    pub fn lookup(&self, key: impl IntoIterator<Item = K>) -> Result<V, TrieError>
    where
        V: Clone,
    {
        self.inner.lookup(key)
    }

    /// See [`Trie::contains`].
    pub fn contains(&self, key: impl IntoIterator<Item = K>) -> bool {
        self.inner.contains(key)
    }

    /// Returns a mutable view of the subtrie rooted at `prefix`, sharing
    /// storage with `self`. See [`Trie::get_subtrie`].
    pub fn get_subtrie(&self, prefix: impl IntoIterator<Item = K>) -> Result<Self, TrieError> {
        self.inner.get_subtrie(prefix).map(|inner| MutableTrie { inner })
    }

    /// See [`Trie::value`].
    pub fn value(&self) -> Option<V>
    where
        V: Clone,
    {
        self.inner.value()
    }

    /// See [`Trie::keys`].
    pub fn keys(&self) -> Keys<K> {
        self.inner.keys()
    }

    /// See [`Trie::items`]. Child views are yielded read-only; use
    /// [`MutableTrie::get_subtrie`] to mutate through a child.
    pub fn items(&self) -> Items<K, V>
    where
        V: Clone,
    {
        self.inner.items()
    }

    /// See [`Trie::prefixes`].
    pub fn prefixes(&self) -> Prefixes<K, V> {
        self.inner.prefixes()
    }

    /// See [`Trie::prefixes_from`].
    pub fn prefixes_from(
        &self,
        prefix: impl IntoIterator<Item = K>,
    ) -> Result<Prefixes<K, V>, TrieError> {
        self.inner.prefixes_from(prefix)
    }

    /// See [`Trie::len`].
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// See [`Trie::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// See [`Trie::marker`].
    pub fn marker(&self) -> &K {
        self.inner.marker()
    }

    /// A read-only handle aliasing the same graph. Mutations made through
    /// `self` afterwards remain visible through it.
    pub fn view(&self) -> Trie<K, V> {
        self.inner.clone()
    }
}
