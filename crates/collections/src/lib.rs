pub mod hashmap;

pub use hashmap::{
    DEFAULT_CAPACITY, Fnv1a, Fnv1aHasher, HashError, HashTable, Slot, SlotHasher, TableError,
};
