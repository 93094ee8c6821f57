//! Route planning strategies.
//!
//! [`PointToPointPlanner`] hands a single origin/destination pair to the
//! solver. [`NearestNeighbourPlanner`] repeatedly walks to the cheapest
//! unvisited waypoint, which costs O(k²) solver runs for k waypoints.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::map::SpotId;
use crate::path::{find_shortest_path, PathSearch};

use super::{coordinates_for, ensure_known, PlanKind, RoutePlan, RouteRequest};

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// Kind of plan this planner produces.
    fn kind(&self) -> PlanKind;

    /// Compute a plan for the request on the given graph.
    fn plan(&self, graph: &Graph, request: &RouteRequest) -> Result<RoutePlan>;
}

/// Planner for a single origin/destination pair.
#[derive(Debug, Clone, Default)]
pub struct PointToPointPlanner;

impl RoutePlanner for PointToPointPlanner {
    fn kind(&self) -> PlanKind {
        PlanKind::PointToPoint
    }

    fn plan(&self, graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
        let start = request.start;
        let goal = request.end.ok_or(Error::MissingDestination)?;

        let found = find_shortest_path(graph, start, goal, request.strategy, request.mode)?
            .ok_or(Error::RouteNotFound { start, goal })?;
        debug!(start, goal, cost = found.cost, hops = found.steps.len() - 1, "found path");

        Ok(RoutePlan {
            kind: self.kind(),
            strategy: request.strategy,
            mode: request.mode,
            start,
            goal,
            coordinates: coordinates_for(graph, &found.steps)?,
            steps: found.steps,
            cost: found.cost,
            unit: request.strategy.unit(),
            visit_order: Vec::new(),
            skipped: Vec::new(),
        })
    }
}

/// Greedy nearest-neighbour tour over an unordered waypoint set.
///
/// Not an optimal travelling-salesperson solution. Ties between equally
/// cheap waypoints go to the lowest id.
#[derive(Debug, Clone, Default)]
pub struct NearestNeighbourPlanner;

impl RoutePlanner for NearestNeighbourPlanner {
    fn kind(&self) -> PlanKind {
        PlanKind::Tour
    }

    fn plan(&self, graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
        let start = request.start;
        if request.waypoints.is_empty() {
            return Err(Error::MissingDestination);
        }
        ensure_known(graph, start)?;
        for &waypoint in &request.waypoints {
            ensure_known(graph, waypoint)?;
        }

        let mut unvisited: BTreeSet<SpotId> = request
            .waypoints
            .iter()
            .copied()
            .filter(|&waypoint| waypoint != start)
            .collect();

        let mut current = start;
        let mut steps = vec![start];
        let mut cost = 0.0;
        let mut visit_order = Vec::with_capacity(unvisited.len());

        while !unvisited.is_empty() {
            let Some((next, leg)) = nearest_waypoint(graph, current, &unvisited, request)? else {
                break;
            };
            debug!(from = current, to = next, cost = leg.cost, "tour leg");

            steps.extend(leg.steps.into_iter().skip(1));
            cost += leg.cost;
            unvisited.remove(&next);
            visit_order.push(next);
            current = next;
        }

        let skipped: Vec<SpotId> = unvisited.into_iter().collect();
        if !skipped.is_empty() {
            warn!(start, ?skipped, "dropping unreachable waypoints from tour");
        }

        Ok(RoutePlan {
            kind: self.kind(),
            strategy: request.strategy,
            mode: request.mode,
            start,
            goal: current,
            coordinates: coordinates_for(graph, &steps)?,
            steps,
            cost,
            unit: request.strategy.unit(),
            visit_order,
            skipped,
        })
    }
}

/// Cheapest reachable waypoint from `current`, lowest id on ties.
fn nearest_waypoint(
    graph: &Graph,
    current: SpotId,
    unvisited: &BTreeSet<SpotId>,
    request: &RouteRequest,
) -> Result<Option<(SpotId, PathSearch)>> {
    let mut best: Option<(SpotId, PathSearch)> = None;
    for &candidate in unvisited {
        let Some(leg) =
            find_shortest_path(graph, current, candidate, request.strategy, request.mode)?
        else {
            continue;
        };
        let better = match &best {
            Some((_, incumbent)) => leg.cost < incumbent.cost,
            None => true,
        };
        if better {
            best = Some((candidate, leg));
        }
    }
    Ok(best)
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Result<Box<dyn RoutePlanner>> {
    if !request.waypoints.is_empty() {
        if let Some(end) = request.end {
            warn!(end, "request has waypoints; ignoring end spot");
        }
        return Ok(Box::new(NearestNeighbourPlanner));
    }
    match request.end {
        Some(_) => Ok(Box::new(PointToPointPlanner)),
        None => Err(Error::MissingDestination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use crate::map::{Position, Spot};

    fn line_graph() -> Graph {
        let mut builder = GraphBuilder::new();
        for id in 1..=4 {
            builder
                .add_spot(Spot {
                    id,
                    name: format!("S{id}"),
                    category: "sight".to_string(),
                    position: Position::new(id as f64, 0.0),
                    description: None,
                })
                .unwrap();
        }
        builder.add_segment(1, 2, 1.0, 1.0).unwrap();
        builder.add_segment(2, 3, 1.0, 1.0).unwrap();
        builder.add_segment(3, 4, 1.0, 1.0).unwrap();
        builder.build()
    }

    #[test]
    fn select_planner_chooses_by_request_shape() {
        let planner = select_planner(&RouteRequest::point_to_point(1, 2)).unwrap();
        assert_eq!(planner.kind(), PlanKind::PointToPoint);

        let planner = select_planner(&RouteRequest::tour(1, [3])).unwrap();
        assert_eq!(planner.kind(), PlanKind::Tour);

        let mut request = RouteRequest::tour(1, [3]);
        request.end = Some(2);
        assert_eq!(select_planner(&request).unwrap().kind(), PlanKind::Tour);
    }

    #[test]
    fn select_planner_requires_destination() {
        let request = RouteRequest {
            start: 1,
            ..RouteRequest::default()
        };
        assert!(matches!(
            select_planner(&request),
            Err(Error::MissingDestination)
        ));
    }

    #[test]
    fn equal_costs_break_towards_lowest_id() {
        // 2 and 4 are both one hop from 3.
        let graph = line_graph();
        let unvisited = BTreeSet::from([4, 2]);
        let request = RouteRequest::tour(3, [2, 4]);
        let (next, leg) = nearest_waypoint(&graph, 3, &unvisited, &request)
            .unwrap()
            .unwrap();
        assert_eq!(next, 2);
        assert_eq!(leg.cost, 1.0);
    }

    #[test]
    fn tour_visits_nearest_first() {
        let graph = line_graph();
        let plan = NearestNeighbourPlanner
            .plan(&graph, &RouteRequest::tour(2, [4, 1]))
            .unwrap();
        assert_eq!(plan.visit_order, vec![1, 4]);
        assert_eq!(plan.steps, vec![2, 1, 2, 3, 4]);
        assert_eq!(plan.cost, 4.0);
        assert_eq!(plan.goal, 4);
    }

    #[test]
    fn tour_ignores_start_in_waypoints() {
        let graph = line_graph();
        let plan = NearestNeighbourPlanner
            .plan(&graph, &RouteRequest::tour(1, [1]))
            .unwrap();
        assert_eq!(plan.steps, vec![1]);
        assert_eq!(plan.cost, 0.0);
        assert!(plan.visit_order.is_empty());
        assert!(plan.skipped.is_empty());
    }

    #[test]
    fn tour_without_waypoints_is_rejected() {
        let graph = line_graph();
        let error = NearestNeighbourPlanner
            .plan(&graph, &RouteRequest::tour(1, Vec::<SpotId>::new()))
            .expect_err("no waypoints");
        assert!(matches!(error, Error::MissingDestination));
    }

    #[test]
    fn tour_rejects_unknown_waypoint_before_searching() {
        let graph = line_graph();
        let error = NearestNeighbourPlanner
            .plan(&graph, &RouteRequest::tour(1, [3, 77]))
            .expect_err("unknown waypoint");
        assert!(matches!(error, Error::UnknownSpot { id: 77 }));
    }
}
