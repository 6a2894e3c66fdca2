//! Shortest routes on weighted directed graphs with A*, where the heuristic
//! is not supplied but computed: Dijkstra runs on the reversed graph from the
//! target, giving every node its exact remaining cost.
//!
//! ```
//! use reverse_astar::{Graph, route};
//!
//! let graph = Graph::from_edges(3, [(1, 2, 4u32), (2, 3, 1), (1, 3, 9)]).unwrap();
//! let outcome = route(&graph, 1, 3).unwrap();
//! assert_eq!(outcome.cost(), Some(5));
//! ```

mod collections;
pub mod cost;
pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod query;

pub use cost::{Cost, Distance};
pub use errors::{GraphError, PathPlannerError};
pub use graph::{Edge, Graph, NodeId};
pub use graph_algos::a_star::{search, AStar, Plan, SearchOutcome};
pub use graph_algos::dijkstra::ShortestPathTree;
pub use graph_algos::heuristic::{HeuristicBuilder, HeuristicMap};
pub use query::{route, QueryConfig, QueryReport};
