use std::fmt::{self, Display};

use crate::cost::{Cost, Distance};
use crate::errors::PathPlannerError;
use crate::graph::{Graph, NodeId};
use super::dijkstra::ShortestPathTree;


/// Estimated remaining cost from every node to one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicMap<C> {
    target: NodeId,
    values: Vec<Distance<C>>, // slot i holds node i + 1
}

impl<C: Cost> HeuristicMap<C> {

    /// Wrap caller supplied estimates, one per node in id order
    /// A* only stays optimal if none of them overestimates
    pub fn from_distances(target: NodeId, values: Vec<Distance<C>>) -> Self {
        Self { target, values }
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn node_count(&self) -> usize {
        self.values.len()
    }

    /// Estimate for a node, ids outside the map read as unreachable
    pub fn get(&self, node: NodeId) -> Distance<C> {
        node.checked_sub(1)
            .and_then(|slot| self.values.get(slot))
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Distance<C>)> + '_ {
        self.values.iter().enumerate().map(|(slot, value)| (slot + 1, *value))
    }
}

impl<C: Display> Display for HeuristicMap<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------------------------")?;
        writeln!(f, "Heuristic values:")?;
        for (slot, value) in self.values.iter().enumerate() {
            writeln!(f, "Node {} → {}", slot + 1, value)?;
        }
        writeln!(f, "----------------------------")
    }
}


/// Builds exact heuristics by running Dijkstra backwards from the target
/// The distance from target to v on the reversed graph is the cost of the
/// cheapest v -> target path on the original, so the estimate never overshoots
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicBuilder {}

impl HeuristicBuilder {

    pub fn build<C: Cost>(&self, graph: &Graph<C>, target: NodeId) -> Result<HeuristicMap<C>, PathPlannerError> {
        graph.check_node(target)?;

        let reversed = graph.reverse();
        let tree = ShortestPathTree::from_source(&reversed, target)?;
        log::debug!("heuristic for target {target}: {} of {} nodes can reach it", tree.reached(), graph.node_count());

        Ok(HeuristicMap {
            target: tree.source(),
            values: tree.distances().map(|(_, distance)| distance).collect(),
        })
    }
}
