use log::trace;

use super::{Fnv1a, SlotHasher, TableError};

pub const DEFAULT_CAPACITY: usize = 8;

/// One cell of the backing array
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<V> {
    Empty,
    Occupied { key: String, value: V },
    /// Tombstone left by a delete, it keeps probe chains intact
    /// and can be reused by a later insert
    Deleted,
}

/// Fixed-capacity hash table with string keys,
/// open addressing and linear probing
///
/// The number of slots is chosen once in [`HashTable::new`] and never changes,
/// inserting into a table with no free slot fails with [`TableError::TableFull`].
#[derive(Debug, Clone)]
pub struct HashTable<V, H = Fnv1a> {
    slots: Box<[Slot<V>]>,
    items: usize,
    hasher: H,
}

#[derive(Debug)]
pub struct Iter<'a, V> {
    slots: std::slice::Iter<'a, Slot<V>>,
}

/// Where a probe for a key stopped
#[derive(Debug, PartialEq, Eq)]
enum Probe {
    /// The key lives in this slot
    Found(usize),
    /// The key is absent, this is where it would go
    Vacant(usize),
    /// The key is absent and there is no free slot
    Full,
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::alloc(DEFAULT_CAPACITY, Fnv1a)
    }
}

impl<V> HashTable<V> {
    /// Creates a table with `capacity` empty slots, hashing keys with FNV-1a
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        Self::with_hasher(capacity, Fnv1a)
    }
}

impl<V, H: SlotHasher> HashTable<V, H> {
    /// Creates a table with `capacity` empty slots and a custom hasher
    pub fn with_hasher(capacity: usize, hasher: H) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity(capacity));
        }
        Ok(Self::alloc(capacity, hasher))
    }

    /// Returns the number of occupied slots
    pub fn len(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Shorthand for `self.len() == self.capacity()`
    pub fn is_full(&self) -> bool {
        self.items == self.capacity()
    }

    /// Returns the number of slots, fixed at creation
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the load factor of the table,
    /// computed as occupied slots / total slots
    pub fn load_factor(&self) -> f32 {
        // capacity is never 0 once constructed
        self.items as f32 / self.capacity() as f32
    }

    /// Inserts `value` under `key`.
    ///
    /// Returns `Ok(true)` if the pair was stored and `Ok(false)` if `key`
    /// is already present, in which case the stored value is left untouched.
    ///
    /// # Errors
    ///
    /// - [`TableError::InvalidArgument`] for an empty key or a `None` value
    /// - [`TableError::TableFull`] if no slot is free
    /// - [`TableError::HashComputationFailure`] if the hasher fails
    pub fn set(&mut self, key: &str, value: impl Into<Option<V>>) -> Result<bool, TableError> {
        check_key(key)?;
        let Some(value) = value.into() else {
            return Err(TableError::InvalidArgument("value must not be None"));
        };

        match self.probe(key)? {
            Probe::Found(i) => {
                trace!(target: "hash_table", "{key:?} already present at slot {i}");
                Ok(false)
            }
            Probe::Vacant(i) => {
                self.slots[i] = Slot::Occupied {
                    key: key.into(),
                    value,
                };
                self.items += 1;
                trace!(target: "hash_table", "{key:?} stored at slot {i}, {} items", self.items);
                Ok(true)
            }
            Probe::Full => Err(TableError::TableFull {
                capacity: self.capacity(),
            }),
        }
    }

    /// Looks up `key`, returning its value and the index of its slot
    pub fn get(&self, key: &str) -> Result<(&V, usize), TableError> {
        check_key(key)?;

        if let Probe::Found(i) = self.probe(key)? {
            if let Slot::Occupied { value, .. } = &self.slots[i] {
                return Ok((value, i));
            }
        }
        Err(TableError::KeyNotFound(key.into()))
    }

    pub fn contains_key(&self, key: &str) -> Result<bool, TableError> {
        match self.get(key) {
            Ok(_) => Ok(true),
            Err(TableError::KeyNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Removes `key`, leaving a tombstone in its slot,
    /// and returns the value it held
    pub fn delete(&mut self, key: &str) -> Result<V, TableError> {
        check_key(key)?;

        let Probe::Found(i) = self.probe(key)? else {
            return Err(TableError::KeyNotFound(key.into()));
        };

        match std::mem::replace(&mut self.slots[i], Slot::Deleted) {
            Slot::Occupied { value, .. } => {
                self.items -= 1;
                trace!(target: "hash_table", "{key:?} removed from slot {i}, {} items", self.items);
                Ok(value)
            }
            other => {
                self.slots[i] = other;
                Err(TableError::KeyNotFound(key.into()))
            }
        }
    }

    // [adapters]

    /// Iterates over the stored pairs in slot order
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
        }
    }

    /// The raw slot array, tombstones included
    pub fn slots(&self) -> &[Slot<V>] {
        &self.slots
    }

    // [private]

    /// Walks the probe sequence of `key`: its home slot, then every following
    /// slot (wrapping around) until the key, an empty slot,
    /// or the whole table has been seen.
    ///
    /// Tombstones never end the walk, but the first one met is
    /// handed back as the insertion point if the key turns out to be absent.
    fn probe(&self, key: &str) -> Result<Probe, TableError> {
        let cap = self.capacity();
        let home = self.hasher.hash32(key)? as usize % cap;
        let mut first_deleted = None;

        for offset in 0..cap {
            let i = (home + offset) % cap;
            match &self.slots[i] {
                Slot::Empty => {
                    trace!(target: "hash_table", "{key:?} probe from {home} hit empty slot {i}");
                    return Ok(Probe::Vacant(first_deleted.unwrap_or(i)));
                }
                Slot::Deleted => {
                    if first_deleted.is_none() {
                        first_deleted = Some(i);
                    }
                }
                Slot::Occupied { key: k, .. } if k == key => return Ok(Probe::Found(i)),
                Slot::Occupied { .. } => {}
            }
        }

        trace!(target: "hash_table", "{key:?} probe from {home} visited all {cap} slots");
        Ok(first_deleted.map_or(Probe::Full, Probe::Vacant))
    }

    fn alloc(capacity: usize, hasher: H) -> Self {
        Self {
            slots: (0..capacity).map(|_| Slot::Empty).collect(),
            items: 0,
            hasher,
        }
    }
}

fn check_key(key: &str) -> Result<(), TableError> {
    if key.is_empty() {
        return Err(TableError::InvalidArgument("key must not be empty"));
    }
    Ok(())
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((key.as_str(), value)),
            _ => None,
        })
    }
}

impl<'a, V, H: SlotHasher> IntoIterator for &'a HashTable<V, H> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
