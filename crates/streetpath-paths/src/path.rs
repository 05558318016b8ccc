use std::collections::HashMap;

use crate::graph::NodeId;

/// Walk a predecessor map back from `goal` to `origin`.
///
/// Returns the path in origin → goal order, or `None` if the chain breaks
/// (the goal was not reached) or loops. A node's path to itself has no hops
/// and is returned empty.
pub fn reconstruct_path(
    predecessors: &HashMap<NodeId, NodeId>,
    origin: NodeId,
    goal: NodeId,
) -> Option<Vec<NodeId>> {
    if origin == goal {
        return Some(Vec::new());
    }

    let mut path = vec![goal];
    let mut current = goal;
    while current != origin {
        current = *predecessors.get(&current)?;
        path.push(current);
        if path.len() > predecessors.len() + 1 {
            return None;
        }
    }
    path.reverse();
    Some(path)
}
