pub mod location;
pub mod movement;
pub mod rectangular;
pub mod strategy;
pub mod tile;
pub mod topology;

pub use location::Location;
pub use movement::{MovementConfig, MovementStrategy, SimpleRectangularMovement, WeightRule};
pub use rectangular::RectangularTopology;
pub use strategy::{Capability, DijkstraDistanceStrategy, DistanceStrategy, Strategy};
pub use tile::{KeyTile, TileInterner};
pub use topology::{DirectedEdge, Graphable, Topology, WeightedGraph};
