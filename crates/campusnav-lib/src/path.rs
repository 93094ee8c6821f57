use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::cost::{segment_cost, CostStrategy, TravelMode};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::map::SpotId;

/// Lowest-cost path found by the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSearch {
    /// Spots from start to goal inclusive.
    pub steps: Vec<SpotId>,
    /// Accumulated cost under the requested strategy.
    pub cost: f64,
}

/// Run Dijkstra's algorithm between `start` and `goal`.
///
/// Returns `Ok(None)` when the goal cannot be reached. Unknown spot ids are
/// reported as [`Error::UnknownSpot`].
pub fn find_shortest_path(
    graph: &Graph,
    start: SpotId,
    goal: SpotId,
    strategy: CostStrategy,
    mode: TravelMode,
) -> Result<Option<PathSearch>> {
    for id in [start, goal] {
        if !graph.contains(id) {
            return Err(Error::UnknownSpot { id });
        }
    }

    if start == goal {
        return Ok(Some(PathSearch {
            steps: vec![start],
            cost: 0.0,
        }));
    }

    let mut distances: HashMap<SpotId, f64> = HashMap::new();
    let mut parents: HashMap<SpotId, Option<SpotId>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let current_cost = match distances.get(&entry.node) {
            Some(best) if entry.cost.0 > *best => continue,
            Some(best) => *best,
            None => continue,
        };

        if entry.node == goal {
            return Ok(Some(PathSearch {
                steps: reconstruct_path(&parents, start, goal),
                cost: current_cost,
            }));
        }

        for segment in graph.neighbours(entry.node) {
            let next = segment.target;
            let next_cost = current_cost + segment_cost(segment, strategy, mode);
            if next_cost < *distances.get(&next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    Ok(None)
}

fn reconstruct_path(
    parents: &HashMap<SpotId, Option<SpotId>>,
    start: SpotId,
    goal: SpotId,
) -> Vec<SpotId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: SpotId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: SpotId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use crate::map::{Position, Spot};

    fn graph(spots: &[SpotId], segments: &[(SpotId, SpotId, f64, f64)]) -> Graph {
        let mut builder = GraphBuilder::new();
        for &id in spots {
            builder
                .add_spot(Spot {
                    id,
                    name: format!("S{id}"),
                    category: "sight".to_string(),
                    position: Position::new(0.0, 0.0),
                    description: None,
                })
                .unwrap();
        }
        for &(u, v, distance, crowding) in segments {
            builder.add_segment(u, v, distance, crowding).unwrap();
        }
        builder.build()
    }

    #[test]
    fn heap_pops_cheapest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry::new(1, 5.0));
        heap.push(QueueEntry::new(2, 1.0));
        heap.push(QueueEntry::new(3, 3.0));
        let order: Vec<SpotId> = std::iter::from_fn(|| heap.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn prefers_cheaper_detour() {
        let g = graph(&[1, 2, 3], &[(1, 3, 10.0, 1.0), (1, 2, 3.0, 1.0), (2, 3, 4.0, 1.0)]);
        let found = find_shortest_path(&g, 1, 3, CostStrategy::Distance, TravelMode::Walk)
            .unwrap()
            .unwrap();
        assert_eq!(found.steps, vec![1, 2, 3]);
        assert_eq!(found.cost, 7.0);
    }

    #[test]
    fn time_strategy_avoids_crowded_segment() {
        let g = graph(&[1, 2, 3], &[(1, 3, 10.0, 4.0), (1, 2, 6.0, 1.0), (2, 3, 6.0, 1.0)]);
        let by_distance = find_shortest_path(&g, 1, 3, CostStrategy::Distance, TravelMode::Walk)
            .unwrap()
            .unwrap();
        let by_time = find_shortest_path(&g, 1, 3, CostStrategy::Time, TravelMode::Walk)
            .unwrap()
            .unwrap();
        assert_eq!(by_distance.steps, vec![1, 3]);
        assert_eq!(by_time.steps, vec![1, 2, 3]);
        assert!((by_time.cost - 12.0 / 1.5).abs() < 1e-9);
    }

    #[test]
    fn same_start_and_goal_costs_nothing() {
        let g = graph(&[4], &[]);
        let found = find_shortest_path(&g, 4, 4, CostStrategy::Time, TravelMode::Bike)
            .unwrap()
            .unwrap();
        assert_eq!(found.steps, vec![4]);
        assert_eq!(found.cost, 0.0);
    }

    #[test]
    fn unreachable_goal_returns_none() {
        let g = graph(&[1, 2, 3], &[(1, 2, 1.0, 1.0)]);
        let found = find_shortest_path(&g, 1, 3, CostStrategy::Distance, TravelMode::Walk).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn unknown_spot_is_an_error() {
        let g = graph(&[1], &[]);
        let error = find_shortest_path(&g, 1, 42, CostStrategy::Distance, TravelMode::Walk)
            .expect_err("unknown goal");
        assert!(matches!(error, Error::UnknownSpot { id: 42 }));
    }
}
