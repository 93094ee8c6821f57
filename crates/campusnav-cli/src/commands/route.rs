//! Route and tour command handlers.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use campusnav_cli::output::{print_summary, OutputFormat};
use campusnav_lib::{plan_route, RouteRequest, RouteSummary};

use super::load_graph;
use crate::{CostArgs, RouteArgs, TourArgs};

impl CostArgs {
    fn apply(self, request: RouteRequest) -> RouteRequest {
        request
            .with_strategy(self.strategy.into())
            .with_mode(self.mode.into())
    }
}

impl RouteArgs {
    /// Convert CLI args to a library request.
    pub fn to_request(&self) -> RouteRequest {
        self.cost.apply(RouteRequest::point_to_point(self.from, self.to))
    }
}

impl TourArgs {
    /// Convert CLI args to a library request.
    pub fn to_request(&self) -> RouteRequest {
        self.cost.apply(RouteRequest::tour(self.from, self.via.iter().copied()))
    }
}

/// Handle the `route` subcommand.
pub fn handle_route_command(
    map: Option<&Path>,
    format: OutputFormat,
    args: &RouteArgs,
) -> Result<()> {
    run_request(map, format, &args.to_request())
}

/// Handle the `tour` subcommand.
pub fn handle_tour_command(
    map: Option<&Path>,
    format: OutputFormat,
    args: &TourArgs,
) -> Result<()> {
    run_request(map, format, &args.to_request())
}

fn run_request(map: Option<&Path>, format: OutputFormat, request: &RouteRequest) -> Result<()> {
    let graph = load_graph(map)?;
    let plan = plan_route(&graph, request).context("failed to plan route")?;
    info!(
        kind = ?plan.kind,
        hops = plan.hop_count(),
        cost = plan.cost,
        skipped = plan.skipped.len(),
        "route planned"
    );
    let summary = RouteSummary::from_plan(&graph, &plan)?;
    print_summary(&summary, format)
}
