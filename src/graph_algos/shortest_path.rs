use std::fmt::Debug;

use num_traits::Zero;
use tracing::debug;

use crate::collections::FxIndexMap;
use crate::errors::{Result, TopologyError};
use crate::primitives::location::Location;
use crate::primitives::topology::WeightedGraph;
use super::{GraphNodeMap, NO_PARENT, dijkstra, dijkstra_nodes_full};

/// Shortest path between two locations and its total cost
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<C = f64> {
    /// Sum of the weights of all traversed edges
    pub distance: C,
    /// Locations from source to destination, both inclusive
    pub path: Vec<Location>,
}

impl<C> PathResult<C> {
    pub fn into_parts(self) -> (C, Vec<Location>) {
        (self.distance, self.path)
    }
}


/// Construct the shortest path from the goal node to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
/// The start node carries NO_PARENT, so a goal equal to the start yields a single node path
pub fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Option<Vec<N>>
where
    N: Clone,
{
    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        // a well formed map never needs more steps than it has nodes
        if path.len() == node_map.len() {
            return None;
        }
        let (node, &(parent_index, _)) = node_map.get_index(current_index)?;
        path.push(node.clone());
        current_index = parent_index;
    }

    path.reverse();

    if path.is_empty() {
        return None;
    }

    Some(path)
}


/// Outgoing edges of `loc` in `graph`, nothing if `loc` is not a node
fn graph_neighbors<'a, C: Copy>(graph: &'a WeightedGraph<C>, loc: &Location) -> impl Iterator<Item = (Location, C)> + use<'a, C> {
    graph
        .get(loc)
        .into_iter()
        .flat_map(|edges| edges.iter().map(|(to, weight)| (to.clone(), *weight)))
}


/// Shortest path from `src` to `dst` over a weighted graph
/// Fails with PathNotFound when `dst` cannot be reached from `src`
pub fn get_shortest_path<C>(graph: &WeightedGraph<C>, src: &Location, dst: &Location) -> Result<PathResult<C>>
where
    C: Zero + PartialOrd + Copy + Debug,
{
    debug!(%src, %dst, nodes = graph.len(), "resolving shortest path");

    if src == dst {
        return Ok(PathResult {
            distance: C::zero(),
            path: vec![src.clone()],
        });
    }

    let (distance, path) = dijkstra(
        src.clone(),
        |loc: &Location| graph_neighbors(graph, loc),
        |loc| loc == dst,
    )
    .ok_or_else(|| TopologyError::PathNotFound {
        src: src.clone(),
        dst: dst.clone(),
    })?;

    debug!(%src, %dst, ?distance, steps = path.len() - 1, "path found");
    Ok(PathResult { distance, path })
}


/// Cost of the cheapest path from `src` to every reachable location
/// `src` itself is always present with cost zero
pub fn get_distances<C>(graph: &WeightedGraph<C>, src: &Location) -> FxIndexMap<Location, C>
where
    C: Zero + PartialOrd + Copy + Debug,
{
    dijkstra_nodes_full(src.clone(), |loc: &Location| graph_neighbors(graph, loc))
        .into_iter()
        .map(|(loc, (_, cost))| (loc, cost))
        .collect()
}
