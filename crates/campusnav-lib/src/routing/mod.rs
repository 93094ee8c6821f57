//! Route planning on top of the shortest-path solver.
//!
//! This module provides:
//! - [`RouteRequest`] - start, optional end, waypoint set, strategy and mode
//! - [`RoutePlan`] - the stitched path with its coordinates and total cost
//! - [`shortest_path`] - point-to-point queries
//! - [`plan_tour`] - greedy nearest-neighbour ordering of required waypoints
//! - [`plan_route`] - dispatch for a full [`RouteRequest`]
//!
//! # Strategy Pattern
//!
//! Each kind of request is handled by a [`RoutePlanner`] implementation;
//! [`select_planner`] picks one from the request shape.
//!
//! # Example
//!
//! ```ignore
//! use campusnav_lib::{load_campus_map, plan_route, RouteRequest};
//!
//! let graph = load_campus_map("data/campus_map.json".as_ref())?;
//! let plan = plan_route(&graph, &RouteRequest::tour(1, [12, 40, 7]))?;
//! println!("{} hops, {:.1} {}", plan.hop_count(), plan.cost, plan.unit);
//! ```

mod planner;

pub use planner::{select_planner, NearestNeighbourPlanner, PointToPointPlanner, RoutePlanner};

use std::collections::BTreeSet;

use serde::Serialize;

use crate::cost::{CostStrategy, CostUnit, TravelMode};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::map::{Position, SpotId};

/// Shape of a computed plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    PointToPoint,
    Tour,
}

/// High-level route planning request.
///
/// A non-empty waypoint set makes this a tour request and `end` is ignored;
/// otherwise `end` is required.
#[derive(Debug, Clone, Default)]
pub struct RouteRequest {
    pub start: SpotId,
    pub end: Option<SpotId>,
    pub waypoints: BTreeSet<SpotId>,
    pub strategy: CostStrategy,
    pub mode: TravelMode,
}

impl RouteRequest {
    /// Shortest-distance walking request between two spots.
    pub fn point_to_point(start: SpotId, end: SpotId) -> Self {
        Self {
            start,
            end: Some(end),
            ..Self::default()
        }
    }

    /// Shortest-distance walking tour visiting every waypoint.
    pub fn tour(start: SpotId, waypoints: impl IntoIterator<Item = SpotId>) -> Self {
        Self {
            start,
            waypoints: waypoints.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: CostStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub kind: PlanKind,
    pub strategy: CostStrategy,
    pub mode: TravelMode,
    pub start: SpotId,
    pub goal: SpotId,
    pub steps: Vec<SpotId>,
    pub coordinates: Vec<Position>,
    pub cost: f64,
    pub unit: CostUnit,
    /// Waypoints in the order the tour reaches them.
    pub visit_order: Vec<SpotId>,
    /// Waypoints that could not be reached and were left out.
    pub skipped: Vec<SpotId>,
}

impl RoutePlan {
    /// Number of segments travelled.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Whether any requested waypoint was dropped.
    pub fn is_partial(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Compute the lowest-cost path between two spots.
///
/// Fails with [`Error::UnknownSpot`] for ids outside the graph and
/// [`Error::RouteNotFound`] when the spots are not connected.
pub fn shortest_path(
    graph: &Graph,
    start: SpotId,
    end: SpotId,
    strategy: CostStrategy,
    mode: TravelMode,
) -> Result<RoutePlan> {
    let request = RouteRequest::point_to_point(start, end)
        .with_strategy(strategy)
        .with_mode(mode);
    PointToPointPlanner.plan(graph, &request)
}

/// Visit every waypoint starting from `start`, choosing the nearest
/// unvisited waypoint at each step.
///
/// This is a heuristic: the visiting order is good but not guaranteed to be
/// optimal. Unreachable waypoints are dropped and listed in
/// [`RoutePlan::skipped`]. An empty waypoint set fails with
/// [`Error::MissingDestination`].
pub fn plan_tour(
    graph: &Graph,
    start: SpotId,
    waypoints: &BTreeSet<SpotId>,
    strategy: CostStrategy,
    mode: TravelMode,
) -> Result<RoutePlan> {
    let request = RouteRequest {
        start,
        end: None,
        waypoints: waypoints.clone(),
        strategy,
        mode,
    };
    NearestNeighbourPlanner.plan(graph, &request)
}

/// Compute a route for a full request, selecting the matching planner.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let planner = select_planner(request)?;
    planner.plan(graph, request)
}

fn ensure_known(graph: &Graph, id: SpotId) -> Result<()> {
    if graph.contains(id) {
        Ok(())
    } else {
        Err(Error::UnknownSpot { id })
    }
}

fn coordinates_for(graph: &Graph, steps: &[SpotId]) -> Result<Vec<Position>> {
    steps
        .iter()
        .map(|&id| graph.position(id).ok_or(Error::UnknownSpot { id }))
        .collect()
}
