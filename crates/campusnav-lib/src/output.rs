use std::fmt::Write;

use serde::Serialize;

use crate::cost::{CostStrategy, CostUnit, TravelMode};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::map::SpotId;
use crate::routing::{PlanKind, RoutePlan};

/// Spot along a planned route with its display details resolved.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: SpotId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub x: f64,
    pub y: f64,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub kind: PlanKind,
    pub strategy: CostStrategy,
    pub mode: TravelMode,
    pub hops: usize,
    pub total_cost: f64,
    pub cost_unit: CostUnit,
    pub steps: Vec<RouteStep>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub visit_order: Vec<SpotId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SpotId>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved spot names.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let steps = plan
            .steps
            .iter()
            .zip(&plan.coordinates)
            .enumerate()
            .map(|(index, (&id, position))| {
                let spot = graph.spot(id);
                RouteStep {
                    index,
                    id,
                    name: spot.map(|spot| spot.name.clone()),
                    category: spot.map(|spot| spot.category.clone()),
                    x: position.x,
                    y: position.y,
                }
            })
            .collect();

        Ok(Self {
            kind: plan.kind,
            strategy: plan.strategy,
            mode: plan.mode,
            hops: plan.hop_count(),
            total_cost: plan.cost,
            cost_unit: plan.unit,
            steps,
            visit_order: plan.visit_order.clone(),
            skipped: plan.skipped.clone(),
        })
    }

    /// Spot names along the route, in order.
    pub fn path_names(&self) -> Vec<&str> {
        self.steps.iter().map(RouteStep::display_name).collect()
    }

    /// Render the summary as plain text.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let label = match self.kind {
            PlanKind::PointToPoint => "Route",
            PlanKind::Tour => "Tour",
        };
        let _ = writeln!(
            out,
            "{label} ({} hops, strategy: {}, mode: {})",
            self.hops, self.strategy, self.mode
        );
        for step in &self.steps {
            let marker = if step.index == 0 {
                '+'
            } else if step.index + 1 == self.steps.len() {
                '-'
            } else {
                '|'
            };
            let _ = writeln!(out, "{marker} {} [{}]", step.display_name(), step.id);
        }
        let _ = writeln!(out, "Total cost: {:.2} {}", self.total_cost, self.cost_unit);
        if !self.skipped.is_empty() {
            let ids: Vec<String> = self.skipped.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "Unreachable waypoints skipped: {}", ids.join(", "));
        }
        out
    }
}
