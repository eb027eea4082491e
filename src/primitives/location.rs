use std::fmt;

/// Immutable N-dimensional integer coordinate identifying a cell
///
/// Equality and hashing are component-wise, ordering is lexicographic over
/// the components. The arity is fixed by the topology that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Location(Box<[i64]>);

impl Location {
    pub fn new(coords: Vec<i64>) -> Self {
        Self(coords.into_boxed_slice())
    }

    /// 2D location in (row, column) order
    pub fn xy(x: i64, y: i64) -> Self {
        Self(Box::new([x, y]))
    }

    /// Number of axes
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    pub fn coords(&self) -> &[i64] {
        &self.0
    }

    /// Component on the given axis, `None` past the last axis
    pub fn get(&self, axis: usize) -> Option<i64> {
        self.0.get(axis).copied()
    }

    /// Count of axes on which two locations differ
    /// 0 = same cell, 1 = orthogonal step, 2 = planar diagonal, ...
    /// Axes missing from the shorter location count as differing.
    pub fn differing_axes(&self, other: &Location) -> usize {
        let shared = self
            .0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count();
        shared + self.0.len().abs_diff(other.0.len())
    }

    /// Chebyshev distance, the largest per-axis difference
    pub fn chebyshev(&self, other: &Location) -> u64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.abs_diff(*b))
            .max()
            .unwrap_or(0)
    }
}

impl From<(i64, i64)> for Location {
    fn from((x, y): (i64, i64)) -> Self {
        Self::xy(x, y)
    }
}

impl From<(i64, i64, i64)> for Location {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self(Box::new([x, y, z]))
    }
}

impl From<Vec<i64>> for Location {
    fn from(coords: Vec<i64>) -> Self {
        Self::new(coords)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}
