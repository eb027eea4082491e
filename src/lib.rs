//! Map topologies and shortest paths over them.
//!
//! A [`Topology`] owns the tile placed at each [`Location`]. Topologies that
//! are [`Graphable`] can be turned into a weighted directed graph by asking a
//! [`MovementStrategy`] what each move between neighboring cells costs, and a
//! [`DistanceStrategy`] resolves the cheapest path on that graph.
//!
//! ```
//! use topograph::{DijkstraDistanceStrategy, DistanceStrategy, Location, SimpleRectangularMovement};
//! use topograph::serialization::{RectangularCharSerializer, TopologySerializer};
//!
//! let topo = RectangularCharSerializer::default().deserialize("..#\n.##\n...").unwrap();
//! let movement = SimpleRectangularMovement::new(false, [(('.', '.'), 1.0)]).unwrap();
//! let result = DijkstraDistanceStrategy
//!     .get_path(&topo, &movement, &Location::xy(0, 0), &Location::xy(2, 2))
//!     .unwrap();
//! assert_eq!(result.distance, 4.0);
//! ```

pub mod collections;
pub mod errors;
pub mod graph_algos;
pub mod primitives;
pub mod serialization;

pub use errors::{Result, TopologyError};
pub use graph_algos::PathResult;
pub use primitives::{
    Capability, DijkstraDistanceStrategy, DirectedEdge, DistanceStrategy, Graphable, KeyTile,
    Location, MovementConfig, MovementStrategy, RectangularTopology, SimpleRectangularMovement,
    Strategy, TileInterner, Topology, WeightRule, WeightedGraph,
};
