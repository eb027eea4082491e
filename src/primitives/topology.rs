use tracing::{debug, warn};

use crate::collections::FxIndexMap;
use crate::errors::{Result, TopologyError};
use super::location::Location;
use super::movement::MovementStrategy;
use super::strategy::Capability;

/// Location -> (neighbor -> edge weight)
///
/// Built fresh by every [`Graphable::to_graph`] call. Iteration order follows
/// the topology's location order, so identical inputs give identical graphs.
pub type WeightedGraph<C = f64> = FxIndexMap<Location, FxIndexMap<Location, C>>;


/// Candidate move between two cells along with both tiles
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedEdge<'a, T> {
    pub from_loc: Location,
    pub to_loc: Location,
    pub from_tile: &'a T,
    pub to_tile: &'a T,
}


/// Map structure owning the tile placed at each location
pub trait Topology {
    type Tile;

    /// Arity of the locations this topology accepts
    fn dimensions(&self) -> usize;

    fn get(&self, loc: &Location) -> Result<&Self::Tile>;

    /// Replace the tile at `loc`
    fn set(&mut self, loc: &Location, tile: Self::Tile) -> Result<()>;

    /// Graph view of this topology, `None` when it cannot produce one
    fn as_graphable(&self) -> Option<&dyn Graphable<Tile = Self::Tile>> {
        None
    }

    fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Graphable => self.as_graphable().is_some(),
        }
    }

    /// Capabilities this topology supports, in declaration order
    fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .iter()
            .copied()
            .filter(|c| self.supports(*c))
            .collect()
    }

    /// Reject locations whose arity differs from [`Topology::dimensions`]
    fn check_location(&self, loc: &Location) -> Result<()> {
        if loc.dimensions() != self.dimensions() {
            return Err(TopologyError::CoordinateType {
                expected: self.dimensions(),
                found: loc.dimensions(),
            });
        }
        Ok(())
    }
}


/// Topology that can be converted to a weighted graph
pub trait Graphable: Topology {
    /// Every possible move out of `loc`, before any movement rule is applied
    fn get_edges(&self, loc: &Location) -> Result<Vec<DirectedEdge<'_, Self::Tile>>>;

    /// Every location of the topology; each call restarts the enumeration
    fn all_locations(&self) -> Box<dyn Iterator<Item = Location> + '_>;

    /// Weighted graph of all moves `movement` allows
    ///
    /// Every location is a node, possibly with no outgoing edges. Moves the
    /// policy rejects are left out entirely, as are self-loops. A weight that
    /// is not finite and strictly positive fails with InvalidWeight.
    fn to_graph(&self, movement: &dyn MovementStrategy<Self::Tile>) -> Result<WeightedGraph> {
        let mut graph = WeightedGraph::default();
        let mut edge_count = 0;

        for loc in self.all_locations() {
            let mut neighbors = FxIndexMap::default();
            for edge in self.get_edges(&loc)? {
                if edge.from_loc == edge.to_loc {
                    continue;
                }
                let Some(weight) = movement.get_passability(
                    edge.from_tile,
                    edge.to_tile,
                    &edge.from_loc,
                    &edge.to_loc,
                ) else {
                    continue;
                };
                if !(weight > 0.0 && weight.is_finite()) {
                    warn!(from = %edge.from_loc, to = %edge.to_loc, weight, "movement rule produced an invalid weight");
                    return Err(TopologyError::InvalidWeight {
                        from: edge.from_loc.to_string(),
                        to: edge.to_loc.to_string(),
                        weight,
                    });
                }
                neighbors.insert(edge.to_loc, weight);
            }
            edge_count += neighbors.len();
            graph.insert(loc, neighbors);
        }

        debug!(nodes = graph.len(), edges = edge_count, "built weighted graph");
        Ok(graph)
    }
}
