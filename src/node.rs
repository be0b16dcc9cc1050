//! The node primitive shared by every trie handle.
//!
//! Nodes are reference-counted with interior mutability so that a subtrie
//! view and its parent observably alias the same storage: cloning a
//! `NodeRef` aliases the node, it never copies it. The structure is a
//! strict tree, so the reference graph is acyclic and teardown is plain
//! refcounting.

use std::cell::RefCell;
use std::hash::Hash;
use std::rc::Rc;

use indexmap::IndexMap;

/// Shared handle to a node.
pub(crate) type NodeRef<K, V> = Rc<RefCell<Node<K, V>>>;

/// A single trie node: an optional terminal value plus the outgoing
/// edges, keyed by token in insertion order.
///
/// The terminal value lives in its own slot rather than under a reserved
/// token in the child map, so no token value can ever be confused with
/// "a complete key ends here".
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) value: Option<V>,
    pub(crate) children: IndexMap<K, NodeRef<K, V>>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new_ref() -> NodeRef<K, V> {
        Rc::new(RefCell::new(Node {
            value: None,
            children: IndexMap::new(),
        }))
    }

    /// A node with neither a value nor children is eligible for pruning.
    pub(crate) fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }
}

impl<K: Eq + Hash, V> Node<K, V> {
    pub(crate) fn child(&self, token: &K) -> Option<NodeRef<K, V>> {
        self.children.get(token).map(Rc::clone)
    }

    pub(crate) fn child_or_insert(&mut self, token: K) -> NodeRef<K, V> {
        Rc::clone(self.children.entry(token).or_insert_with(Node::new_ref))
    }

    /// Unlinks the child edge, keeping the remaining edges in order.
    /// The child node itself stays alive as long as any view holds it.
    pub(crate) fn remove_child(&mut self, token: &K) -> Option<NodeRef<K, V>> {
        self.children.shift_remove(token)
    }
}
