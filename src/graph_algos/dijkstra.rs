use crate::collections::FxIndexMap;
use super::{GraphNodeMap, NO_PARENT, shortest_path};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::trace;



/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
/// Returns the total cost and the path from start to goal (both inclusive),
/// or None when no reachable node meets the goal criteria
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Option<(C, Vec<N>)>
where
    N: Ord + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + PartialOrd + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Build the graph - terminates when the goal is met
    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, goal);

    let goal_index = goal_index?;
    let (_, &(_, cost)) = node_map.get_index(goal_index)?;
    let path = shortest_path(&node_map, goal_index)?;
    Some((cost, path))
}


/// Returns a full map of the graph, includes all (reachable) nodes and costs
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, neighbors: NN) -> GraphNodeMap<N, C>
where
    N: Ord + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + PartialOrd + Copy + Debug,
    {

    let (node_map, _) = build_dijkstra_graph(start, neighbors, |_| false);
    node_map
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
/// Among frontier nodes of equal cost the smallest node is settled first
fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> (FxIndexMap<N, (usize, C)>, Option<usize>)
where
    N: Ord + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + PartialOrd + Copy + Debug,
    G: Fn(&N) -> bool // Returns true if goal is met
    {

    // Nodes to visit - binary heap pops the entry that orders highest,
    // NodeId reverses the ordering so the cheapest node comes out first
    let mut nodes_to_visit: BinaryHeap<NodeId<N, C>> = BinaryHeap::new();

    // usize is the index in the nodes_map
    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // for the start node, parent_index is set to NO_PARENT to indicate it has no parent
    let mut nodes_map: FxIndexMap<N, (usize, C)> = FxIndexMap::default();

    let start_index = nodes_map.insert_full(start.clone(), (NO_PARENT, Zero::zero())).0;
    nodes_to_visit.push(NodeId {
        index: start_index,
        cost: Zero::zero(),
        node: start,
    });

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId { cost, index, node }) = nodes_to_visit.pop() {

        let Some((_, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // If cost of new node from BinaryHeap is higher than the best cost, skip it
        // This implies we've already found a better path to this node
        if cost > c {
            continue;
        }

        trace!(?node, ?cost, "settled node");

        if goal_fn(&node) {
            return (nodes_map, Some(index));
        }

        for (neighbor, edge_cost) in neighbors(&node).into_iter() {

            // new cost to reach this node = edge cost + node cost
            let new_cost = edge_cost + c;

            let neighbor_index;
            match nodes_map.entry(neighbor.clone()) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    neighbor_index = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        // We've found a better path to this neighbor
                        neighbor_index = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            // Only add to the queue if we've found a better path
            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
                node: neighbor,
            });
        }
    }

    (nodes_map, None)
}


/// Frontier entry
/// - ordered by cost first, node second, both reversed for the max-heap
/// - costs that cannot be compared (NaN) are treated as equal
#[derive(Debug)]
struct NodeId<N, C> {
    index: usize,
    cost: C,
    node: N,
}

impl<N: Ord, C: PartialOrd> Ord for NodeId<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}
impl<N: Ord, C: PartialOrd> PartialOrd for NodeId<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N: Ord, C: PartialOrd> PartialEq for NodeId<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<N: Ord, C: PartialOrd> Eq for NodeId<N, C> {}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // Diamond-shaped graph: A -> B -> D and A -> C -> D
    fn create_test_graph() -> HashMap<String, Vec<(String, u32)>> {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![
            ("B".to_string(), 1),
            ("C".to_string(), 3),
        ]);
        graph.insert("B".to_string(), vec![("D".to_string(), 5)]);
        graph.insert("C".to_string(), vec![("D".to_string(), 1)]);
        graph.insert("D".to_string(), vec![]);
        graph
    }

    fn create_neighbor_fn(graph: &HashMap<String, Vec<(String, u32)>>) -> impl Fn(&String) -> Vec<(String, u32)> + '_ {
        move |node: &String| {
            graph.get(node).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn test_build_dijkstra_graph_simple() {
        let graph = create_test_graph();
        let (result, goal) = build_dijkstra_graph(
            "A".to_string(),
            create_neighbor_fn(&graph),
            |node| node == "D"
        );

        let costs: HashMap<_, _> = result.iter().map(|(node, (_, cost))| (node.clone(), *cost)).collect();
        assert_eq!(costs["A"], 0);
        assert_eq!(costs["B"], 1);
        assert_eq!(costs["C"], 3);
        assert_eq!(costs["D"], 4); // via A -> C -> D
        assert_eq!(result.get_index(goal.unwrap()).unwrap().0, "D");
    }

    #[test]
    fn test_dijkstra_with_cycle() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![("A".to_string(), 1), ("D".to_string(), 2)]);
        graph.insert("D".to_string(), vec![]);

        let (cost, path) = dijkstra("A".to_string(), create_neighbor_fn(&graph), |node| node == "D").unwrap();
        assert_eq!(cost, 4);
        assert_eq!(path, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_dijkstra_finds_optimal_path() {
        let graph = create_test_graph();
        let (cost, path) = dijkstra("A".to_string(), create_neighbor_fn(&graph), |node| node == "D").unwrap();
        assert_eq!(cost, 4);
        assert_eq!(path, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_dijkstra_handles_unreachable_goal() {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![]);
        graph.insert("D".to_string(), vec![]); // D is not connected

        let result = dijkstra("A".to_string(), create_neighbor_fn(&graph), |node| node == "D");
        assert!(result.is_none());
    }

    #[test]
    fn test_dijkstra_start_is_goal() {
        let graph = create_test_graph();
        let (cost, path) = dijkstra("B".to_string(), create_neighbor_fn(&graph), |node| node == "B").unwrap();
        assert_eq!(cost, 0);
        assert_eq!(path, vec!["B"]);
    }

    #[test]
    fn test_equal_costs_prefer_smaller_node() {
        // two equal-cost routes to D, through B and through C
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("C".to_string(), 1), ("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("D".to_string(), 1)]);
        graph.insert("C".to_string(), vec![("D".to_string(), 1)]);
        graph.insert("D".to_string(), vec![]);

        let (cost, path) = dijkstra("A".to_string(), create_neighbor_fn(&graph), |node| node == "D").unwrap();
        assert_eq!(cost, 2);
        assert_eq!(path, vec!["A", "B", "D"]);
    }

    #[test]
    fn test_dijkstra_float_costs() {
        let neighbors = |n: &i32| -> Vec<(i32, f64)> {
            match n {
                0 => vec![(1, 0.5), (2, 2.0)],
                1 => vec![(2, 0.25)],
                _ => vec![],
            }
        };
        let (cost, path) = dijkstra(0, neighbors, |n| *n == 2).unwrap();
        assert_eq!(cost, 0.75);
        assert_eq!(path, vec![0, 1, 2]);
    }

    #[test]
    fn test_dijkstra_nodes_full_reaches_everything() {
        let graph = create_test_graph();
        let nodes = dijkstra_nodes_full("A".to_string(), create_neighbor_fn(&graph));
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes["D"].1, 4);

        let nodes = dijkstra_nodes_full("C".to_string(), create_neighbor_fn(&graph));
        let mut reached: Vec<_> = nodes.keys().cloned().collect();
        reached.sort();
        assert_eq!(reached, vec!["C", "D"]);
    }
}
