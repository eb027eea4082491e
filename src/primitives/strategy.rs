use std::fmt;

use tracing::warn;

use crate::errors::{Result, TopologyError};
use crate::graph_algos::{PathResult, get_shortest_path};
use super::location::Location;
use super::movement::MovementStrategy;
use super::topology::Topology;

/// Interface a topology may or may not provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Convertible to a weighted graph, see [`super::topology::Graphable`]
    Graphable,
}

impl Capability {
    pub const ALL: [Capability; 1] = [Capability::Graphable];
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Graphable => write!(f, "Graphable"),
        }
    }
}


/// Something that runs against a topology and needs some of its capabilities
pub trait Strategy {
    fn name(&self) -> &'static str;

    fn required_capabilities(&self) -> &'static [Capability] {
        &[]
    }

    /// Fail with the first required capability `topology` does not support
    fn check_requirements<T: Topology + ?Sized>(&self, topology: &T) -> Result<()> {
        for &capability in self.required_capabilities() {
            if !topology.supports(capability) {
                warn!(strategy = self.name(), %capability, "topology lacks required capability");
                return Err(TopologyError::MissingCapability {
                    strategy: self.name(),
                    capability,
                });
            }
        }
        Ok(())
    }
}

/// Strategy resolving the cheapest path between two locations
pub trait DistanceStrategy: Strategy {
    fn get_path<T: Topology + ?Sized>(
        &self,
        topology: &T,
        movement: &dyn MovementStrategy<T::Tile>,
        src: &Location,
        dst: &Location,
    ) -> Result<PathResult>;
}


/// Builds the full weighted graph and runs Dijkstra over it
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraDistanceStrategy;

impl Strategy for DijkstraDistanceStrategy {
    fn name(&self) -> &'static str {
        "DijkstraDistanceStrategy"
    }

    fn required_capabilities(&self) -> &'static [Capability] {
        &[Capability::Graphable]
    }
}

impl DistanceStrategy for DijkstraDistanceStrategy {
    fn get_path<T: Topology + ?Sized>(
        &self,
        topology: &T,
        movement: &dyn MovementStrategy<T::Tile>,
        src: &Location,
        dst: &Location,
    ) -> Result<PathResult> {
        self.check_requirements(topology)?;
        let graphable = topology.as_graphable().ok_or(TopologyError::MissingCapability {
            strategy: self.name(),
            capability: Capability::Graphable,
        })?;

        // both endpoints must be valid cells
        topology.get(src)?;
        topology.get(dst)?;

        let graph = graphable.to_graph(movement)?;
        get_shortest_path(&graph, src, dst)
    }
}
