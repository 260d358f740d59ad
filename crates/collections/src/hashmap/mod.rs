use thiserror::Error;

mod hash_table;
mod hasher;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Capacity must be at least 1, got: {0}")]
    InvalidCapacity(usize),

    /// Empty key, or a value that was `None`
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Key not found: {0:?}")]
    KeyNotFound(String),

    /// Every slot is occupied, the table never grows
    #[error("Table is full (capacity: {capacity})")]
    TableFull { capacity: usize },

    #[error("Failed to compute hash: {0}")]
    HashComputationFailure(#[from] HashError),
}

/// Reported by a [`SlotHasher`] that could not produce a hash
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct HashError(pub String);

pub use hash_table::{DEFAULT_CAPACITY, HashTable, Iter, Slot};
pub use hasher::{Fnv1a, Fnv1aHasher, SlotHasher};
