use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collections::FxHashMap;

/// Tile that is defined by a single value, its *key*
///
/// Two key tiles are equal iff their keys are equal; whether they share an
/// allocation (see [`TileInterner`]) never affects equality.
#[derive(Clone)]
pub struct KeyTile<K> {
    key: Arc<K>,
}

impl<K> KeyTile<K> {
    pub fn from_key(key: K) -> Self {
        Self { key: Arc::new(key) }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// True when both tiles are the same canonical instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.key, &other.key)
    }
}

impl<K: PartialEq> PartialEq for KeyTile<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq> Eq for KeyTile<K> {}

impl<K: Hash> Hash for KeyTile<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<K: fmt::Debug> fmt::Debug for KeyTile<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyTile({:?})", self.key)
    }
}

impl<K: fmt::Display> fmt::Display for KeyTile<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key.fmt(f)
    }
}

impl<K> From<K> for KeyTile<K> {
    fn from(key: K) -> Self {
        Self::from_key(key)
    }
}

#[cfg(feature = "serde")]
impl<K: serde::Serialize> serde::Serialize for KeyTile<K> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.key.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K: serde::Deserialize<'de>> serde::Deserialize<'de> for KeyTile<K> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        K::deserialize(deserializer).map(Self::from_key)
    }
}


/// Owned cache mapping each key to its canonical [`KeyTile`]
///
/// Interning is purely a memory optimisation; the cache lives as long as its
/// owner and can be cleared at any time.
#[derive(Debug)]
pub struct TileInterner<K> {
    tiles: FxHashMap<K, KeyTile<K>>,
}

impl<K> Default for TileInterner<K> {
    fn default() -> Self {
        Self { tiles: FxHashMap::default() }
    }
}

impl<K: Eq + Hash + Clone> TileInterner<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical tile for `key`, created on first use
    pub fn intern(&mut self, key: K) -> KeyTile<K> {
        self.tiles
            .entry(key)
            .or_insert_with_key(|key| KeyTile::from_key(key.clone()))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}
