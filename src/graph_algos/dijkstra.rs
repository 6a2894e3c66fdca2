use crate::cost::{Cost, Distance};
use crate::errors::PathPlannerError;
use crate::graph::{Graph, NodeId};
use super::{shortest_path, GraphNodeMap};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};


/// Dijkstra's Algorithm over a closure defined graph
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Relaxes every node reachable from start and returns their best costs and parents
/// Edge costs must be non-negative. Nodes whose every route overflows the cost type are left out
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, neighbors: NN) -> Result<GraphNodeMap<N, C>, PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Cost,
{
    // Nodes to visit - BinaryHeap is a max heap, Visit reverses the ordering
    // Entries are never updated in place, a better path pushes a fresh entry
    let mut nodes_to_visit: BinaryHeap<Visit<C>> = BinaryHeap::new();

    // (parent_index, cost) per discovered node, usize::MAX marks the start node
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    let start_index = nodes_map.insert_full(start, (usize::MAX, Zero::zero())).0;
    nodes_to_visit.push(Visit {
        index: start_index,
        cost: Zero::zero(),
    });

    while let Some(Visit { cost, index }) = nodes_to_visit.pop() {

        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            return Err(PathPlannerError::BrokenParentChain(index));
        };

        // A cheaper path was recorded after this entry was pushed
        if cost > c {
            log::trace!("dijkstra: skipping stale entry for {node:?} ({cost:?} > {c:?})");
            continue;
        }

        let node = node.clone();
        for (neighbor, edge_cost) in neighbors(&node) {

            // Past the top of the cost type this can never beat a recorded cost
            let Some(new_cost) = c.checked_add(&edge_cost) else {
                log::trace!("dijkstra: edge from {node:?} overflows the cost type, skipped");
                continue;
            };

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    let neighbor_index = e.index();
                    e.insert((index, new_cost));
                    neighbor_index
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        continue;
                    }
                }
            };

            nodes_to_visit.push(Visit {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    Ok(nodes_map)
}


/// Single source shortest distances over a `Graph`
/// Nodes the source cannot reach report `Distance::Unreachable`
#[derive(Debug, Clone)]
pub struct ShortestPathTree<C> {
    source: NodeId,
    node_count: usize,
    nodes: GraphNodeMap<NodeId, C>,
}

impl<C: Cost> ShortestPathTree<C> {

    pub fn from_source(graph: &Graph<C>, source: NodeId) -> Result<Self, PathPlannerError> {
        graph.check_node(source)?;

        let nodes = dijkstra_nodes_full(source, |node: &NodeId| graph.neighbors(*node))?;
        log::debug!("shortest path tree from {source}: reached {} of {} nodes", nodes.len(), graph.node_count());

        Ok(Self {
            source,
            node_count: graph.node_count(),
            nodes,
        })
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Number of nodes with a finite distance, the source included
    pub fn reached(&self) -> usize {
        self.nodes.len()
    }

    pub fn distance(&self, node: NodeId) -> Distance<C> {
        self.nodes.get(&node).map(|&(_, cost)| cost).into()
    }

    /// Distance of every node in the graph, in id order
    pub fn distances(&self) -> impl Iterator<Item = (NodeId, Distance<C>)> + '_ {
        (1..=self.node_count).map(|node| (node, self.distance(node)))
    }

    /// Cheapest route from the source, None when the node is unreachable
    pub fn path_to(&self, node: NodeId) -> Result<Option<Vec<NodeId>>, PathPlannerError> {
        match self.nodes.get_index_of(&node) {
            Some(index) => shortest_path(&self.nodes, index).map(Some),
            None => Ok(None),
        }
    }
}


/// Frontier entry
/// - for ordering we only need cost and a way to identify the node
#[derive(Debug)]
struct Visit<T> {
    index: usize,
    cost: T,
}

impl<T: Ord> Ord for Visit<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl<T: Ord> PartialOrd for Visit<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for Visit<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<T: PartialEq> Eq for Visit<T> {}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // Diamond-shaped graph: A -> B -> D and A -> C -> D
    fn create_test_graph() -> HashMap<String, Vec<(String, u32)>> {
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1), ("C".to_string(), 3)]);
        graph.insert("B".to_string(), vec![("D".to_string(), 5)]);
        graph.insert("C".to_string(), vec![("D".to_string(), 1)]);
        graph.insert("D".to_string(), vec![]);
        graph
    }

    fn create_neighbor_fn(graph: &HashMap<String, Vec<(String, u32)>>) -> impl Fn(&String) -> Vec<(String, u32)> + '_ {
        move |node: &String| graph.get(node).cloned().unwrap_or_default()
    }

    fn reference_graph() -> Graph<i64> {
        Graph::from_edges(5, [
            (1, 2, 2), (1, 3, 4), (2, 3, 1), (2, 4, 7), (3, 4, 3),
            (3, 5, 5), (4, 5, 1), (1, 5, 10), (2, 5, 8), (5, 4, 2),
        ]).unwrap()
    }

    #[test]
    fn test_dijkstra_nodes_full_simple() {
        let graph = create_test_graph();
        let result = dijkstra_nodes_full("A".to_string(), create_neighbor_fn(&graph)).unwrap();

        let costs: HashMap<_, _> = result.iter().map(|(node, (_, cost))| (node.as_str(), *cost)).collect();
        assert_eq!(costs, HashMap::from([("A", 0), ("B", 1), ("C", 3), ("D", 4)]));
    }

    #[test]
    fn test_dijkstra_nodes_full_with_cycle() {
        // A -> B -> C -> A, with C -> D leaving the cycle
        let mut graph = HashMap::new();
        graph.insert("A".to_string(), vec![("B".to_string(), 1)]);
        graph.insert("B".to_string(), vec![("C".to_string(), 1)]);
        graph.insert("C".to_string(), vec![("A".to_string(), 1), ("D".to_string(), 2)]);
        graph.insert("D".to_string(), vec![]);

        let result = dijkstra_nodes_full("A".to_string(), create_neighbor_fn(&graph)).unwrap();

        let costs: HashMap<_, _> = result.iter().map(|(node, (_, cost))| (node.as_str(), *cost)).collect();
        assert_eq!(costs, HashMap::from([("A", 0), ("B", 1), ("C", 2), ("D", 4)]));
    }

    #[test]
    fn test_tree_on_reference_graph() {
        let graph = reference_graph();
        let tree = ShortestPathTree::from_source(&graph, 1).unwrap();

        let distances: Vec<_> = tree.distances().collect();
        assert_eq!(distances, vec![
            (1, Distance::Finite(0)),
            (2, Distance::Finite(2)),
            (3, Distance::Finite(3)),
            (4, Distance::Finite(6)),
            (5, Distance::Finite(7)),
        ]);
        assert_eq!(tree.path_to(5).unwrap(), Some(vec![1, 2, 3, 4, 5]));
        assert_eq!(tree.path_to(1).unwrap(), Some(vec![1]));
    }

    #[test]
    fn test_unreached_nodes_stay_unreachable() {
        let graph = reference_graph();
        let tree = ShortestPathTree::from_source(&graph, 4).unwrap();

        assert_eq!(tree.reached(), 2);
        assert_eq!(tree.distance(5), Distance::Finite(1));
        for node in 1..=3 {
            assert_eq!(tree.distance(node), Distance::Unreachable);
            assert_eq!(tree.path_to(node).unwrap(), None);
        }
    }

    #[test]
    fn test_stale_entries_do_not_override_better_costs() {
        // 2 is first found at cost 10, then improved to 2 via 3
        // the stale (10, 2) entry must not push 4 to a worse cost
        let graph = Graph::from_edges(4, [(1, 2, 10u32), (1, 3, 1), (3, 2, 1), (2, 4, 1)]).unwrap();
        let tree = ShortestPathTree::from_source(&graph, 1).unwrap();

        assert_eq!(tree.distance(2), Distance::Finite(2));
        assert_eq!(tree.distance(4), Distance::Finite(3));
        assert_eq!(tree.path_to(4).unwrap(), Some(vec![1, 3, 2, 4]));
    }

    #[test]
    fn test_overflowing_routes_stay_unreachable() {
        let graph = Graph::from_edges(3, [(1, 2, 200u8), (2, 3, 100)]).unwrap();
        let tree = ShortestPathTree::from_source(&graph, 1).unwrap();

        assert_eq!(tree.source(), 1);
        assert_eq!(tree.distance(2), Distance::Finite(200));
        assert_eq!(tree.distance(3), Distance::Unreachable);
        assert_eq!(tree.path_to(3).unwrap(), None);
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let graph = reference_graph();
        let err = ShortestPathTree::from_source(&graph, 9).unwrap_err();
        assert!(matches!(err, PathPlannerError::Graph(crate::errors::GraphError::UnknownNode { node: 9, .. })));
    }
}
