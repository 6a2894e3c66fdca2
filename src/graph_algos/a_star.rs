use crate::cost::{Cost, Distance};
use crate::errors::PathPlannerError;
use crate::graph::{Graph, NodeId};
use super::heuristic::HeuristicMap;
use super::{shortest_path, GraphNodeMap};

use std::{
    collections::BinaryHeap,
    hash::Hash,
    fmt::{self, Debug, Display},
    cmp::Ordering
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};



/// Node on A* graph
#[derive(Debug)]
struct Node<T> {
    index: usize, // index in the closed_list - maps to the Id of the node
    cost: T, // Cost to reach this node
    f_cost: Distance<T>, // Total cost = cost + h(n) aka estimated cost
}

// Lowest f_cost first, ties go to the node furthest from the start
impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.cmp(&self.f_cost)
            .then_with(|| self.cost.cmp(&other.cost))
    }
}
impl<T: Ord> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.cost == other.cost
    }
}
impl<T: PartialEq> Eq for Node<T> {}


/// Route found by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<N, C> {
    pub path: Vec<N>, // start to goal, both included
    pub cost: C,
    pub expanded: usize, // nodes whose edges were relaxed before the goal surfaced
}


/// Result of a search between two graph nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<C> {
    Found(Plan<NodeId, C>),
    NotFound,
}

impl<C: Copy> SearchOutcome<C> {

    pub fn cost(&self) -> Option<C> {
        match self {
            SearchOutcome::Found(plan) => Some(plan.cost),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn path(&self) -> Option<&[NodeId]> {
        match self {
            SearchOutcome::Found(plan) => Some(plan.path.as_slice()),
            SearchOutcome::NotFound => None,
        }
    }
}

impl<C: Display> Display for SearchOutcome<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found(plan) => {
                let hops: Vec<String> = plan.path.iter().map(|node| node.to_string()).collect();
                write!(f, "cost {} via {}", plan.cost, hops.join(" -> "))
            }
            SearchOutcome::NotFound => f.write_str("no path"),
        }
    }
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar {}

impl AStar {

    /// From start Node, traverse through graph until node meets goal criteria
    /// The heuristic must be admissible (never overestimates the true cost to reach the goal)
    /// for the returned plan to be optimal. `Distance::Unreachable` estimates are allowed,
    /// such nodes sort behind every finite estimate
    /// Returns Ok(None) when the goal cannot be reached
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<Option<Plan<N, C>>, PathPlannerError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        H: Fn(&N) -> Distance<C>, // heuristic function
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Cost,
        G: Fn(&N) -> bool, // node qualifier for goal
    {
        let (node_map, goal_index, expanded) = self.build_graph(start, neighbors, heuristic_fn, goal_fn)?;

        match goal_index {
            Some(goal_index) => {
                let path = shortest_path(&node_map, goal_index)?;
                let cost = node_map
                    .get_index(goal_index)
                    .map(|(_, &(_, cost))| cost)
                    .ok_or(PathPlannerError::BrokenParentChain(goal_index))?;
                Ok(Some(Plan { path, cost, expanded }))
            }
            None => Ok(None),
        }
    }


    /// Traverses the graph using A* algorithm
    /// Returns the best known costs of every discovered node, the index of the goal
    /// node if it was popped, and the number of expanded nodes
    fn build_graph<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<(GraphNodeMap<N, C>, Option<usize>, usize), PathPlannerError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT,
        IT: IntoIterator<Item = (N, C)>,
        C: Cost,
        H: Fn(&N) -> Distance<C>,
        G: Fn(&N) -> bool,
    {
        // Open List
        // Nodes that need to be evaluated, ordered by f_cost (cost + heuristic)
        // A node can sit in here several times, only its cheapest entry is current
        let mut open_list: BinaryHeap<Node<C>> = BinaryHeap::new();

        // Best known (parent_index, cost) per discovered node, doubles as the g-score table
        let mut closed_list: GraphNodeMap<N, C> = GraphNodeMap::default();
        let mut expanded = 0;

        let start_f_cost = heuristic_fn(&start);
        let start_index = closed_list.insert_full(start, (usize::MAX, Zero::zero())).0;
        open_list.push(Node {
            index: start_index,
            cost: Zero::zero(),
            f_cost: start_f_cost,
        });

        while let Some(Node { index, cost, .. }) = open_list.pop() {

            let Some((node, &(_, c))) = closed_list.get_index(index) else {
                return Err(PathPlannerError::BrokenParentChain(index));
            };

            // A cheaper path to this node was pushed after this entry
            if cost > c {
                log::trace!("a*: skipping stale entry for {node:?} ({cost:?} > {c:?})");
                continue;
            }

            // The goal only counts once it is popped, not when first discovered
            if goal_fn(node) {
                return Ok((closed_list, Some(index), expanded));
            }

            expanded += 1;
            let node = node.clone();
            for (neighbor, edge_cost) in neighbors(&node) {

                // Confirmed cost, not heuristic
                let new_cost = c.checked_add(&edge_cost).ok_or(PathPlannerError::CostOverflow)?;
                let h_cost = heuristic_fn(&neighbor);

                let neighbor_index = match closed_list.entry(neighbor) {
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

                open_list.push(Node {
                    index: neighbor_index,
                    cost: new_cost,
                    f_cost: h_cost.offset(new_cost),
                });
            }
        }
        Ok((closed_list, None, expanded))
    }
}


/// Cheapest route from source to target on `graph`, guided by `heuristic`
/// The heuristic must cover exactly the graph's nodes. One built for another
/// target is accepted but may cost optimality
pub fn search<C: Cost>(graph: &Graph<C>, heuristic: &HeuristicMap<C>, source: NodeId, target: NodeId) -> Result<SearchOutcome<C>, PathPlannerError> {
    graph.check_node(source)?;
    graph.check_node(target)?;

    if heuristic.node_count() != graph.node_count() {
        return Err(PathPlannerError::HeuristicMismatch {
            heuristic: heuristic.node_count(),
            graph: graph.node_count(),
        });
    }
    if heuristic.target() != target {
        log::warn!("searching for {target} with a heuristic built for {}", heuristic.target());
    }
    match heuristic.get(source).finite() {
        Some(estimate) => log::debug!("a* {source} -> {target}: estimated cost {estimate:?}"),
        None => log::debug!("a* {source} -> {target}: no finite estimate from the source"),
    }

    let plan = AStar::default().plan(
        source,
        |node: &NodeId| graph.neighbors(*node),
        |node: &NodeId| heuristic.get(*node),
        |node: &NodeId| *node == target,
    )?;

    Ok(match plan {
        Some(plan) => {
            log::debug!("a* {source} -> {target}: cost {:?} after expanding {} nodes", plan.cost, plan.expanded);
            SearchOutcome::Found(plan)
        }
        None => {
            log::debug!("a* {source} -> {target}: no path");
            SearchOutcome::NotFound
        }
    })
}
