use std::hash::{BuildHasher, Hasher};

use super::HashError;

/// A 32-bit, non-cryptographic hash used to pick a key's home slot
///
/// Implementations must be deterministic: the same key always hashes
/// to the same value, otherwise stored keys can no longer be found.
pub trait SlotHasher {
    fn hash32(&self, key: &str) -> Result<u32, HashError>;
}

/// Streaming FNV-1a (32-bit) hasher
///
/// `finish` widens the 32-bit state to `u64`, use [`Fnv1aHasher::finish32`]
/// to get the hash itself.
#[derive(Debug, Clone, Copy)]
pub struct Fnv1aHasher {
    hash: u32,
}

impl Fnv1aHasher {
    pub const OFFSET_BASIS: u32 = 2166136261;
    pub const PRIME: u32 = 16777619;

    pub const fn new() -> Self {
        Self {
            hash: Self::OFFSET_BASIS,
        }
    }

    pub fn finish32(&self) -> u32 {
        self.hash
    }
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.hash as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.hash ^= *byte as u32;
            self.hash = self.hash.wrapping_mul(Self::PRIME);
        }
    }
}

/// Builder for [`Fnv1aHasher`], and the default [`SlotHasher`] of a [`HashTable`]
///
/// [`HashTable`]: super::HashTable
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv1a;

impl BuildHasher for Fnv1a {
    type Hasher = Fnv1aHasher;

    fn build_hasher(&self) -> Self::Hasher {
        Fnv1aHasher::new()
    }
}

impl SlotHasher for Fnv1a {
    fn hash32(&self, key: &str) -> Result<u32, HashError> {
        // fresh state per key, hashing in memory cannot fail
        let mut h = self.build_hasher();
        h.write(key.as_bytes());
        Ok(h.finish32())
    }
}

#[cfg(test)]
mod test {
    use std::hash::Hasher;

    use super::{Fnv1a, Fnv1aHasher, SlotHasher};

    #[test]
    fn known_vectors() {
        assert_eq!(Fnv1a.hash32(""), Ok(0x811c9dc5));
        assert_eq!(Fnv1a.hash32("a"), Ok(0xe40c292c));
        assert_eq!(Fnv1a.hash32("foobar"), Ok(0xbf9cf968));
    }

    #[test]
    fn deterministic() {
        let first = Fnv1a.hash32("hello").unwrap();
        for _ in 0..10 {
            assert_eq!(Fnv1a.hash32("hello"), Ok(first));
        }
    }

    #[test]
    fn order_sensitive() {
        assert_ne!(Fnv1a.hash32("ab"), Fnv1a.hash32("ba"));
    }

    #[test]
    fn streaming_matches_one_shot() {
        let mut h = Fnv1aHasher::default();
        h.write(b"foo");
        h.write(b"bar");

        assert_eq!(Ok(h.finish32()), Fnv1a.hash32("foobar"));
        assert_eq!(h.finish(), h.finish32() as u64);
    }
}
