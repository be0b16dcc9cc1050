//! # `seqtrie` - Prefix-Tree Maps over Token Sequences
//!
//! Generic tries mapping sequences of discrete tokens to values, with
//! map-like lookup and iteration plus one capability flat maps cannot
//! offer: a live *subtrie view* rooted at an arbitrary prefix, sharing
//! structure with its parent rather than copying it.
//!
//! ## Capability tiers
//!
//! - [`Trie`]: the read-only core. Bulk construction, exact-key lookup,
//!   subtrie extraction, containment, top-level iteration and whole-tree
//!   prefix enumeration.
//! - [`MutableTrie`]: the same surface plus in-place `set` and `delete`,
//!   with automatic pruning of branches emptied by a deletion.
//! - [`TrieSet`]: membership-only storage with a prefix test.
//! - [`StringTrie`] / [`MutableStringTrie`]: the common case of string
//!   keys decomposed into characters, terminal marker pre-bound.
//!
//! ## Sharing model
//!
//! Nodes are reference-counted with interior mutability. Every handle
//! (a clone, a [`Trie::get_subtrie`] view, an [`Trie::items`] child) is
//! an alias of the same node graph, so a structural change made through
//! one mutable view is immediately visible through all the others.
//! Handles are therefore neither `Send` nor `Sync`: callers needing
//! cross-thread access must serialize it externally. Every operation is
//! a traversal bounded by its key's length, with no blocking and no
//! suspension points.
//!
//! Terminal values are stored in a dedicated slot per node, not under a
//! reserved token among the children, so no token value (including the
//! `terminal_marker` passed at construction) can ever corrupt a lookup.
//! The marker only labels terminal entries in [`Trie::keys`] /
//! [`Trie::items`] output.
//!
//! ## Example
//!
//! ```rust
//! use seqtrie::{MutableTrie, TrieEntry};
//!
//! let trie = MutableTrie::from_items(0, [
//!     (vec![1, 2, 3], "A"),
//!     (vec![1, 2, 4], "B"),
//! ]);
//!
//! let mut sub = trie.get_subtrie([1, 2]).unwrap();
//! assert_eq!(sub.keys().collect::<Vec<_>>(), vec![3, 4]);
//!
//! // The view aliases the parent: this insert is visible through `trie`.
//! sub.set([5], "C");
//! assert_eq!(trie.get([1, 2, 5]), Some("C"));
//!
//! for (token, entry) in trie.get_subtrie([1, 2]).unwrap().items() {
//!     match entry {
//!         TrieEntry::Value(v) => println!("complete key here: {v}"),
//!         TrieEntry::Subtrie(child) => println!("{token} -> {} keys", child.len()),
//!     }
//! }
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod iter;
pub mod map;
pub mod mutable;
mod node;
pub mod set;
pub mod string;

pub use error::TrieError;
pub use iter::{Items, Keys, Prefixes, TrieEntry};
pub use map::Trie;
pub use mutable::MutableTrie;
pub use set::TrieSet;
pub use string::{MutableStringTrie, StringTrie, STRING_MARKER};
