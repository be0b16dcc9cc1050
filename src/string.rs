//! String-keyed tries: keys decompose into characters, the marker is
//! fixed.

use crate::error::TrieError;
use crate::iter::{Items, Keys};
use crate::map::Trie;
use crate::mutable::MutableTrie;

/// The token labeling terminal entries in string-trie iteration output.
///
/// Terminal values live in a dedicated slot per node, so this is purely
/// a label: keys containing NUL characters remain unambiguous
/// structurally, only their [`StringTrie::keys`] output overlaps.
pub const STRING_MARKER: char = '\0';

/// A [`Trie`] whose keys are strings, decomposed into `char` tokens.
///
/// # Example
///
/// ```rust
/// use seqtrie::StringTrie;
///
/// let trie = StringTrie::from_items([("hello", 1), ("help", 2)]);
/// assert_eq!(trie.get("help"), Some(2));
/// assert_eq!(trie.get("hel"), None);
///
/// let sub = trie.get_subtrie("hel").unwrap();
/// assert_eq!(sub.get("p"), Some(2));
/// ```
#[derive(Debug)]
pub struct StringTrie<V> {
    inner: Trie<char, V>,
}

impl<V> Clone for StringTrie<V> {
    /// Clones the handle, not the graph.
    fn clone(&self) -> Self {
        StringTrie {
            inner: self.inner.clone(),
        }
    }
}

impl<V> StringTrie<V> {
    /// Builds a string trie from `(key, value)` pairs. Later pairs with
    /// a repeated key overwrite earlier ones.
    pub fn from_items<S, I>(items: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, V)>,
    {
        let items = items
            .into_iter()
            .map(|(key, value)| (key.as_ref().chars().collect::<Vec<char>>(), value));
        StringTrie {
            inner: Trie::from_items(STRING_MARKER, items),
        }
    }

    /// See [`Trie::get`].
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.inner.get(key.chars())
    }

    /// See [`Trie::lookup`].
    pub fn lookup(&self, key: &str) -> Result<V, TrieError>
    where
        V: Clone,
    {
        self.inner.lookup(key.chars())
    }

    /// See [`Trie::contains`].
    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains(key.chars())
    }

    /// See [`Trie::get_subtrie`].
    pub fn get_subtrie(&self, prefix: &str) -> Result<Self, TrieError> {
        self.inner
            .get_subtrie(prefix.chars())
            .map(|inner| StringTrie { inner })
    }

    /// See [`Trie::value`].
    pub fn value(&self) -> Option<V>
    where
        V: Clone,
    {
        self.inner.value()
    }

    /// The top-level characters, in insertion order, with
    /// [`STRING_MARKER`] labeling the terminal entry when present.
    pub fn keys(&self) -> Keys<char> {
        self.inner.keys()
    }

    /// See [`Trie::items`]. Child views are yielded as generic
    /// character tries.
    pub fn items(&self) -> Items<char, V>
    where
        V: Clone,
    {
        self.inner.items()
    }

    /// Every path descending from this node, as `String`s. See
    /// [`Trie::prefixes`].
    pub fn prefixes(&self) -> impl Iterator<Item = String> {
        self.inner.prefixes().map(String::from_iter)
    }

    /// The proper extensions of `prefix`, as `String`s. See
    /// [`Trie::prefixes_from`].
    pub fn prefixes_from(
        &self,
        prefix: &str,
    ) -> Result<impl Iterator<Item = String>, TrieError> {
        self.inner
            .prefixes_from(prefix.chars())
            .map(|paths| paths.map(String::from_iter))
    }

    /// See [`Trie::len`].
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// See [`Trie::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// A string-keyed trie that supports post-creation mutation.
///
/// # Example
///
/// ```rust
/// use seqtrie::MutableStringTrie;
///
/// let mut trie = MutableStringTrie::new();
/// trie.set("carp", 1);
/// trie.set("cart", 2);
/// assert_eq!(trie.delete("carp"), Ok(1));
/// assert_eq!(trie.get("cart"), Some(2));
/// ```
#[derive(Debug)]
pub struct MutableStringTrie<V> {
    inner: MutableTrie<char, V>,
}

impl<V> Clone for MutableStringTrie<V> {
    /// Clones the handle, not the graph.
    fn clone(&self) -> Self {
        MutableStringTrie {
            inner: self.inner.clone(),
        }
    }
}

impl<V> MutableStringTrie<V> {
    /// An empty mutable string trie.
    pub fn new() -> Self {
        MutableStringTrie {
            inner: MutableTrie::new(STRING_MARKER),
        }
    }

    /// Builds a mutable string trie from `(key, value)` pairs.
    pub fn from_items<S, I>(items: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, V)>,
    {
        let items = items
            .into_iter()
            .map(|(key, value)| (key.as_ref().chars().collect::<Vec<char>>(), value));
        MutableStringTrie {
            inner: MutableTrie::from_items(STRING_MARKER, items),
        }
    }

    /// See [`MutableTrie::set`].
    pub fn set(&mut self, key: &str, value: V) -> Option<V> {
        self.inner.set(key.chars(), value)
    }

    /// See [`MutableTrie::delete`].
    pub fn delete(&mut self, key: &str) -> Result<V, TrieError> {
        self.inner.delete(key.chars())
    }

    /// See [`Trie::get`].
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.inner.get(key.chars())
    }

    /// See [`Trie::lookup`].
    pub fn lookup(&self, key: &str) -> Result<V, TrieError>
    where
        V: Clone,
    {
        self.inner.lookup(key.chars())
    }

    /// See [`Trie::contains`].
    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains(key.chars())
    }

    /// Returns a mutable view of the subtrie rooted at `prefix`. See
    /// [`MutableTrie::get_subtrie`].
    pub fn get_subtrie(&self, prefix: &str) -> Result<Self, TrieError> {
        self.inner
            .get_subtrie(prefix.chars())
            .map(|inner| MutableStringTrie { inner })
    }

    /// See [`Trie::value`].
    pub fn value(&self) -> Option<V>
    where
        V: Clone,
    {
        self.inner.value()
    }

    /// See [`StringTrie::keys`].
    pub fn keys(&self) -> Keys<char> {
        self.inner.keys()
    }

    /// See [`StringTrie::items`].
    pub fn items(&self) -> Items<char, V>
    where
        V: Clone,
    {
        self.inner.items()
    }

    /// See [`StringTrie::prefixes`].
    pub fn prefixes(&self) -> impl Iterator<Item = String> {
        self.inner.prefixes().map(String::from_iter)
    }

    /// See [`StringTrie::prefixes_from`].
    pub fn prefixes_from(
        &self,
        prefix: &str,
    ) -> Result<impl Iterator<Item = String>, TrieError> {
        self.inner
            .prefixes_from(prefix.chars())
            .map(|paths| paths.map(String::from_iter))
    }

    /// See [`Trie::len`].
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// See [`Trie::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// A read-only handle aliasing the same graph.
    pub fn view(&self) -> StringTrie<V> {
        StringTrie {
            inner: self.inner.view(),
        }
    }
}

impl<V> Default for MutableStringTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}
