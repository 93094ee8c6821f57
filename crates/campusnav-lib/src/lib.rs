//! Campus navigation library entry points.
//!
//! This crate loads a static campus map into an immutable routing graph and
//! answers two kinds of queries against it: shortest paths between two
//! spots, and greedy multi-stop tours over a set of required waypoints.
//! Higher-level consumers (CLI, HTTP handlers) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod cost;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod map;
pub mod output;
pub mod path;
pub mod routing;

pub use cost::{segment_cost, CostStrategy, CostUnit, TravelMode};
pub use dataset::{default_map_path, resolve_map_path};
pub use error::{Error, Result};
pub use graph::{Graph, GraphBuilder, Segment};
pub use map::{
    build_graph, load_campus_map, parse_campus_map, MapDescription, Position, Spot, SpotId,
};
pub use output::{RouteStep, RouteSummary};
pub use path::{find_shortest_path, PathSearch};
pub use routing::{plan_route, plan_tour, shortest_path, PlanKind, RoutePlan, RouteRequest};
