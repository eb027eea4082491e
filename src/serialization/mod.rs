//! Conversion between rectangular topologies and plain data.
//!
//! Two formats are supported: a separator-delimited character grid where
//! every character is the key of one tile, and a nested list of keys.

use std::marker::PhantomData;
use std::hash::Hash;

use tracing::debug;

use crate::errors::{Result, TopologyError};
use crate::primitives::{KeyTile, RectangularTopology, TileInterner};

/// Converts between a topology and some external representation
pub trait TopologySerializer {
    type Topology;
    type Input: ?Sized;
    type Output;

    fn deserialize(&self, data: &Self::Input) -> Result<Self::Topology>;

    fn serialize(&self, topology: &Self::Topology) -> Self::Output;
}


/// Character grid: one char per tile, rows joined by `sep`
///
/// Leading and trailing separators are ignored when reading, so `"..\n..\n"`
/// and `"..\n.."` describe the same topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangularCharSerializer {
    pub sep: char,
}

impl Default for RectangularCharSerializer {
    fn default() -> Self {
        Self { sep: '\n' }
    }
}

impl RectangularCharSerializer {
    pub fn new(sep: char) -> Self {
        Self { sep }
    }

    /// Like [`TopologySerializer::deserialize`] but sharing tiles through `interner`
    pub fn deserialize_interned(
        &self,
        data: &str,
        interner: &mut TileInterner<char>,
    ) -> Result<RectangularTopology<KeyTile<char>>> {
        self.deserialize_with(data, |key| interner.intern(key))
    }

    /// Read a character grid, creating each tile with `tile_factory`
    pub fn deserialize_with(
        &self,
        data: &str,
        mut tile_factory: impl FnMut(char) -> KeyTile<char>,
    ) -> Result<RectangularTopology<KeyTile<char>>> {
        let trimmed = data.trim_matches(self.sep);
        if trimmed.is_empty() {
            return Err(TopologyError::EmptyMatrix);
        }

        let matrix: Vec<Vec<KeyTile<char>>> = trimmed
            .split(self.sep)
            .map(|line| line.chars().map(&mut tile_factory).collect())
            .collect();

        debug!(rows = matrix.len(), "deserialized character grid");
        RectangularTopology::new(matrix)
    }
}

impl TopologySerializer for RectangularCharSerializer {
    type Topology = RectangularTopology<KeyTile<char>>;
    type Input = str;
    type Output = String;

    fn deserialize(&self, data: &str) -> Result<Self::Topology> {
        self.deserialize_with(data, KeyTile::from_key)
    }

    fn serialize(&self, topology: &Self::Topology) -> String {
        let mut sep = [0u8; 4];
        let sep: &str = self.sep.encode_utf8(&mut sep);
        topology
            .matrix()
            .iter()
            .map(|row| row.iter().map(|tile| *tile.key()).collect::<String>())
            .collect::<Vec<_>>()
            .join(sep)
    }
}


/// Nested list of keys, one inner list per row
#[derive(Debug, Clone, Copy)]
pub struct RectangularKeySerializer<K> {
    _key: PhantomData<K>,
}

impl<K> Default for RectangularKeySerializer<K> {
    fn default() -> Self {
        Self { _key: PhantomData }
    }
}

impl<K: Clone> RectangularKeySerializer<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a nested key list, creating each tile with `tile_factory`
    pub fn deserialize_with(
        &self,
        data: &[Vec<K>],
        mut tile_factory: impl FnMut(K) -> KeyTile<K>,
    ) -> Result<RectangularTopology<KeyTile<K>>> {
        let matrix = data
            .iter()
            .map(|row| row.iter().cloned().map(&mut tile_factory).collect())
            .collect();
        RectangularTopology::new(matrix)
    }
}

impl<K: Clone + Eq + Hash> RectangularKeySerializer<K> {
    /// Like [`TopologySerializer::deserialize`] but sharing tiles through `interner`
    pub fn deserialize_interned(
        &self,
        data: &[Vec<K>],
        interner: &mut TileInterner<K>,
    ) -> Result<RectangularTopology<KeyTile<K>>> {
        self.deserialize_with(data, |key| interner.intern(key))
    }
}

impl<K: Clone> TopologySerializer for RectangularKeySerializer<K> {
    type Topology = RectangularTopology<KeyTile<K>>;
    type Input = [Vec<K>];
    type Output = Vec<Vec<K>>;

    fn deserialize(&self, data: &[Vec<K>]) -> Result<Self::Topology> {
        self.deserialize_with(data, KeyTile::from_key)
    }

    fn serialize(&self, topology: &Self::Topology) -> Vec<Vec<K>> {
        topology
            .matrix()
            .iter()
            .map(|row| row.iter().map(|tile| tile.key().clone()).collect())
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn t<K>(key: K) -> KeyTile<K> {
        KeyTile::from_key(key)
    }

    #[test]
    fn test_char_deserialize() {
        let topo = RectangularCharSerializer::default().deserialize("..#\n.##\n...\n").unwrap();
        assert_eq!(topo.matrix(), &[
            vec![t('.'), t('.'), t('#')],
            vec![t('.'), t('#'), t('#')],
            vec![t('.'), t('.'), t('.')],
        ]);
    }

    #[test]
    fn test_char_serialize() {
        let topo = RectangularTopology::new(vec![
            vec![t('.'), t('.'), t('#')],
            vec![t('.'), t('#'), t('#')],
            vec![t('.'), t('.'), t('.')],
        ]).unwrap();
        assert_eq!(RectangularCharSerializer::default().serialize(&topo), "..#\n.##\n...");
    }

    #[test]
    fn test_char_custom_separator() {
        let serializer = RectangularCharSerializer::new('|');
        let topo = serializer.deserialize("|ab|cd|").unwrap();
        assert_eq!(topo.rows(), 2);
        assert_eq!(serializer.serialize(&topo), "ab|cd");
    }

    #[test]
    fn test_char_shape_errors() {
        let serializer = RectangularCharSerializer::default();
        assert_eq!(serializer.deserialize("\n\n").unwrap_err(), TopologyError::EmptyMatrix);
        assert!(matches!(
            serializer.deserialize("...\n..\n"),
            Err(TopologyError::RaggedRow { row: 1, expected: 3, found: 2 })
        ));
    }

    #[test]
    fn test_char_interned_tiles_are_shared() {
        let mut interner = TileInterner::new();
        let topo = RectangularCharSerializer::default()
            .deserialize_interned("..\n.#", &mut interner)
            .unwrap();
        let m = topo.matrix();
        assert!(m[0][0].ptr_eq(&m[1][0]));
        assert!(!m[0][0].ptr_eq(&m[1][1]));
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_char_custom_tile_factory() {
        let mut created = 0;
        let topo = RectangularCharSerializer::default()
            .deserialize_with("ab\nBA", |key| {
                created += 1;
                KeyTile::from_key(key.to_ascii_lowercase())
            })
            .unwrap();
        assert_eq!(created, 4);
        assert_eq!(topo.matrix(), &[vec![t('a'), t('b')], vec![t('b'), t('a')]]);
    }

    #[test]
    fn test_key_deserialize() {
        let topo = RectangularKeySerializer::<i32>::new()
            .deserialize(&[vec![0, 0, 1], vec![0, 1, 1], vec![0, 0, 0]])
            .unwrap();
        assert_eq!(topo.matrix(), &[
            vec![t(0), t(0), t(1)],
            vec![t(0), t(1), t(1)],
            vec![t(0), t(0), t(0)],
        ]);
    }

    #[test]
    fn test_key_serialize() {
        let topo = RectangularTopology::new(vec![
            vec![t("a"), t("b")],
            vec![t("c"), t("d")],
        ]).unwrap();
        assert_eq!(
            RectangularKeySerializer::<&str>::new().serialize(&topo),
            vec![vec!["a", "b"], vec!["c", "d"]]
        );
    }

    #[test]
    fn test_key_custom_tile_factory() {
        let shared = t(7u8);
        let topo = RectangularKeySerializer::<u8>::new()
            .deserialize_with(&[vec![1, 2], vec![3, 4]], |_| shared.clone())
            .unwrap();
        assert!(topo.matrix().iter().flatten().all(|tile| tile.ptr_eq(&shared)));
    }

    #[test]
    fn test_key_shape_errors() {
        let serializer = RectangularKeySerializer::<u8>::new();
        assert_eq!(serializer.deserialize(&[]).unwrap_err(), TopologyError::EmptyMatrix);
        assert!(serializer.deserialize(&[vec![1], vec![]]).unwrap_err().is_shape_error());
    }
}
