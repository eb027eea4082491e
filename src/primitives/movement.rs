use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::collections::FxHashMap;
use crate::errors::{Result, TopologyError};
use super::location::Location;
use super::tile::KeyTile;

const SQRT_2: f64 = std::f64::consts::SQRT_2;
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Base factor per number of differing axes, index = differing axes
const DIFF_FACTORS_DIAG: [Option<f64>; 4] = [None, Some(1.0), Some(SQRT_2), Some(SQRT_3)];
const DIFF_FACTORS_NO_DIAG: [Option<f64>; 4] = [None, Some(1.0), None, None];


/// Policy deciding what a single move between two tiles costs
///
/// Returns `None` when the move is not possible at all. Implementations must
/// be pure: the same arguments always produce the same answer, and any
/// returned weight is strictly positive.
pub trait MovementStrategy<T> {
    fn get_passability(
        &self,
        from_tile: &T,
        to_tile: &T,
        from_loc: &Location,
        to_loc: &Location,
    ) -> Option<f64>;
}

/// Closures can be used as ad-hoc movement rules
impl<T, F> MovementStrategy<T> for F
where
    F: Fn(&T, &T, &Location, &Location) -> Option<f64>,
{
    fn get_passability(
        &self,
        from_tile: &T,
        to_tile: &T,
        from_loc: &Location,
        to_loc: &Location,
    ) -> Option<f64> {
        self(from_tile, to_tile, from_loc, to_loc)
    }
}


/// Movement over [`KeyTile`]s on a rectangular lattice
///
/// The cost of a move is `factor * weight` where `factor` depends on how many
/// axes the move changes (1, √2, √3; diagonals only when enabled) and
/// `weight` comes from the `(from key, to key)` table. Moves whose key pair is
/// missing from the table are impassable.
#[derive(Debug, Clone)]
pub struct SimpleRectangularMovement<K> {
    diagonal: bool,
    weights: FxHashMap<K, FxHashMap<K, f64>>,
}

/// Reject weights that are not finite and strictly positive
fn check_weight(from: impl Debug, to: impl Debug, weight: f64) -> Result<()> {
    if weight.is_finite() && weight > 0.0 {
        return Ok(());
    }
    Err(TopologyError::InvalidWeight {
        from: format!("{from:?}"),
        to: format!("{to:?}"),
        weight,
    })
}


impl<K: Eq + Hash + Debug> SimpleRectangularMovement<K> {
    /// Build from a `(from key, to key) -> weight` table
    /// Fails with InvalidWeight on the first weight that is not finite and positive
    pub fn new(diagonal: bool, weight_map: impl IntoIterator<Item = ((K, K), f64)>) -> Result<Self> {
        let mut movement = Self {
            diagonal,
            weights: FxHashMap::default(),
        };
        for ((from, to), weight) in weight_map {
            movement = movement.with_weight(from, to, weight)?;
        }
        Ok(movement)
    }

    /// Add or replace the weight for moving from `from` tiles onto `to` tiles
    pub fn with_weight(mut self, from: K, to: K, weight: f64) -> Result<Self> {
        check_weight(&from, &to, weight)?;
        self.weights.entry(from).or_default().insert(to, weight);
        Ok(self)
    }
}

impl<K: Eq + Hash> SimpleRectangularMovement<K> {
    pub fn diagonal(&self) -> bool {
        self.diagonal
    }

    pub fn weight(&self, from: &K, to: &K) -> Option<f64> {
        self.weights.get(from)?.get(to).copied()
    }

    fn factor(&self, differing_axes: usize) -> Option<f64> {
        let table = if self.diagonal { &DIFF_FACTORS_DIAG } else { &DIFF_FACTORS_NO_DIAG };
        table.get(differing_axes).copied().flatten()
    }
}

impl<K: Eq + Hash> MovementStrategy<KeyTile<K>> for SimpleRectangularMovement<K> {
    fn get_passability(
        &self,
        from_tile: &KeyTile<K>,
        to_tile: &KeyTile<K>,
        from_loc: &Location,
        to_loc: &Location,
    ) -> Option<f64> {
        let factor = self.factor(from_loc.differing_axes(to_loc))?;
        let weight = self.weight(from_tile.key(), to_tile.key())?;
        Some(factor * weight)
    }
}


/// Single entry of a [`MovementConfig`] weight table
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightRule<K> {
    pub from: K,
    pub to: K,
    pub weight: f64,
}

/// Declarative description of a [`SimpleRectangularMovement`]
///
/// With the `serde` feature this can be loaded from any serde format, e.g.
/// `{"diagonal": true, "weights": [{"from": ".", "to": ".", "weight": 1.0}]}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementConfig<K> {
    #[cfg_attr(feature = "serde", serde(default))]
    pub diagonal: bool,
    pub weights: Vec<WeightRule<K>>,
}

impl<K> Default for MovementConfig<K> {
    fn default() -> Self {
        Self { diagonal: false, weights: Vec::new() }
    }
}

impl<K: Eq + Hash + Debug> MovementConfig<K> {
    /// Validate the weight table and build the movement policy
    pub fn build(self) -> Result<SimpleRectangularMovement<K>> {
        debug!(diagonal = self.diagonal, rules = self.weights.len(), "building rectangular movement");
        SimpleRectangularMovement::new(
            self.diagonal,
            self.weights.into_iter().map(|r| ((r.from, r.to), r.weight)),
        )
    }
}
