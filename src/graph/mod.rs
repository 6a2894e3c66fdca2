use std::fmt::{self, Display};
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cost::Cost;
use crate::errors::GraphError;


/// Node identifier, valid ids run from 1 to the graph's node count
pub type NodeId = usize;


/// Outgoing edge, stored on its source node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge<C> {
    pub target: NodeId,
    pub cost: C,
}


/// Immutable directed weighted graph stored as adjacency lists
/// Parallel edges are kept, edge order is insertion order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<C> {
    adjacency: Vec<Vec<Edge<C>>>, // slot i holds the edges leaving node i + 1
    edge_count: usize,
}

impl<C: Cost> Graph<C> {

    /// Build a graph from (source, destination, cost) triples
    /// Every endpoint must lie in 1..=node_count and every cost must be non-negative
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (NodeId, NodeId, C)>,
    {
        let mut adjacency: Vec<Vec<Edge<C>>> = vec![Vec::new(); node_count];
        let mut edge_count = 0;

        for (edge, (from, to, cost)) in edges.into_iter().enumerate() {
            for node in [from, to] {
                if !(1..=node_count).contains(&node) {
                    return Err(GraphError::OutOfRangeNode { edge, node, node_count });
                }
            }
            if cost < C::zero() {
                return Err(GraphError::NegativeWeight { edge, from, to });
            }

            adjacency[from - 1].push(Edge { target: to, cost });
            edge_count += 1;
        }

        Ok(Self { adjacency, edge_count })
    }

    /// New graph with every edge flipped, costs kept
    /// Edges land on their new source in (old source, insertion) order
    pub fn reverse(&self) -> Graph<C> {
        let mut adjacency: Vec<Vec<Edge<C>>> = vec![Vec::new(); self.adjacency.len()];

        for (from, edge) in self.edges() {
            adjacency[edge.target - 1].push(Edge { target: from, cost: edge.cost });
        }

        Graph { adjacency, edge_count: self.edge_count }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn nodes(&self) -> RangeInclusive<NodeId> {
        1..=self.node_count()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes().contains(&node)
    }

    pub fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode { node, node_count: self.node_count() })
        }
    }

    /// Outgoing edges of a node, empty for ids outside the graph
    pub fn edges_from(&self, node: NodeId) -> &[Edge<C>] {
        node.checked_sub(1)
            .and_then(|slot| self.adjacency.get(slot))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// (neighbor, edge cost) pairs, the shape the search engines consume
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, C)> + '_ {
        self.edges_from(node).iter().map(|edge| (edge.target, edge.cost))
    }

    /// Every edge with its source, in node then insertion order
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, &Edge<C>)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(slot, edges)| edges.iter().map(move |edge| (slot + 1, edge)))
    }
}

impl<C: Cost + Display> Display for Graph<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------------------------")?;
        for (from, edge) in self.edges() {
            writeln!(f, "Node :-> [{}] --> [{}] Cost {}", from, edge.target, edge.cost)?;
        }
        writeln!(f, "----------------------------")
    }
}
