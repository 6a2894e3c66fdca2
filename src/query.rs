use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cost::Cost;
use crate::errors::{GraphError, PathPlannerError};
use crate::graph::{Graph, NodeId};
use crate::graph_algos::a_star::{search, SearchOutcome};
use crate::graph_algos::heuristic::{HeuristicBuilder, HeuristicMap};


/// Build the exact heuristic for `target`, then search once
pub fn route<C: Cost>(graph: &Graph<C>, source: NodeId, target: NodeId) -> Result<SearchOutcome<C>, PathPlannerError> {
    let heuristic = HeuristicBuilder::default().build(graph, target)?;
    search(graph, &heuristic, source, target)
}


/// A graph plus the routes to compute on it
/// Each target is searched independently with its own heuristic
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QueryConfig<C> {
    pub node_count: usize,
    pub edges: Vec<(NodeId, NodeId, C)>, // (source, destination, cost)
    pub source: NodeId,
    pub targets: Vec<NodeId>,
}

impl QueryConfig<i64> {

    /// Five node demo graph with a 4 <-> 5 loop, routing 2 to 4
    pub fn reference() -> Self {
        Self {
            node_count: 5,
            edges: vec![
                (1, 2, 2),
                (1, 3, 4),
                (2, 3, 1),
                (2, 4, 7),
                (3, 4, 3),
                (3, 5, 5),
                (4, 5, 1),
                (1, 5, 10),
                (2, 5, 8),
                (5, 4, 2),
            ],
            source: 2,
            targets: vec![4],
        }
    }
}

impl<C: Cost> QueryConfig<C> {

    pub fn build_graph(&self) -> Result<Graph<C>, GraphError> {
        Graph::from_edges(self.node_count, self.edges.iter().copied())
    }

    /// Run every target in order, stopping at the first failing query
    pub fn run(&self) -> Result<Vec<QueryReport<C>>, PathPlannerError> {
        let graph = self.build_graph()?;
        self.run_on(&graph)
    }

    /// Same as `run` against a graph the caller already built from this config
    pub fn run_on(&self, graph: &Graph<C>) -> Result<Vec<QueryReport<C>>, PathPlannerError> {
        self.targets
            .iter()
            .map(|&target| QueryReport::compute(graph, self.source, target))
            .collect()
    }
}


/// One answered query, with the heuristic that guided it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryReport<C> {
    pub source: NodeId,
    pub target: NodeId,
    pub heuristic: HeuristicMap<C>,
    pub outcome: SearchOutcome<C>,
}

impl<C: Cost> QueryReport<C> {

    pub fn compute(graph: &Graph<C>, source: NodeId, target: NodeId) -> Result<Self, PathPlannerError> {
        let heuristic = HeuristicBuilder::default().build(graph, target)?;
        let outcome = search(graph, &heuristic, source, target)?;
        Ok(Self { source, target, heuristic, outcome })
    }
}

impl<C: Display> Display for QueryReport<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            SearchOutcome::Found(plan) => write!(
                f,
                "Target is Found from [{}] to [{}] Total Cost is {}",
                self.source, self.target, plan.cost
            ),
            SearchOutcome::NotFound => write!(f, "No path is found from {} to {}", self.source, self.target),
        }
    }
}
