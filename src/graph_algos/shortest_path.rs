use crate::errors::PathPlannerError;
use super::GraphNodeMap;

/// Walk parent links from `goal_index` back to the start node
/// Returns the ordered path from start to goal
pub fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<N>, PathPlannerError>
where
    N: Clone,
{
    let mut path = Vec::new();
    let mut current_index = goal_index;

    while current_index != usize::MAX {
        let (node, &(parent_index, _)) = node_map
            .get_index(current_index)
            .ok_or(PathPlannerError::BrokenParentChain(current_index))?;
        path.push(node.clone());

        // a parent chain longer than the map can only be a cycle
        if path.len() > node_map.len() {
            return Err(PathPlannerError::BrokenParentChain(current_index));
        }
        current_index = parent_index;
    }

    path.reverse();
    Ok(path)
}
