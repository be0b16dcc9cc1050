//! Error kinds surfaced by the failing (non-defaulting) accessors.

use thiserror::Error;

/// Failure conditions for trie lookups and mutations.
///
/// Both conditions are local, deterministic and non-retryable: they are
/// reported at the point of failure, and a failed operation never leaves
/// partial mutations behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrieError {
    /// The full key path, including its terminal slot, is absent.
    #[error("key not found")]
    KeyNotFound,
    /// Some token along the requested prefix path is absent.
    #[error("prefix not found")]
    PrefixNotFound,
}
