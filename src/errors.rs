use thiserror::Error;

use crate::graph::NodeId;


/// Problems with the graph itself, caught when it is built or queried
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge #{edge} references node {node}, outside 1..={node_count}")]
    OutOfRangeNode { edge: usize, node: NodeId, node_count: usize },

    #[error("edge #{edge} ({from} -> {to}) has a negative cost")]
    NegativeWeight { edge: usize, from: NodeId, to: NodeId },

    #[error("node {node} is not in the graph (valid ids 1..={node_count})")]
    UnknownNode { node: NodeId, node_count: usize },
}


/// Failures of a single heuristic build or search
/// An unreachable goal is not one of these, searches report it as an outcome
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathPlannerError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("heuristic covers {heuristic} nodes but the graph has {graph}")]
    HeuristicMismatch { heuristic: usize, graph: usize },

    #[error("path cost overflowed the cost type")]
    CostOverflow,

    #[error("node map has no entry at index {0}")]
    BrokenParentChain(usize),
}
