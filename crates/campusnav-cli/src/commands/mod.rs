// Module exports for CLI subcommands.
//
// Each module handles a specific subcommand; main.rs only parses arguments
// and dispatches here.

pub mod map;
pub mod route;
pub mod spots;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use campusnav_lib::{load_campus_map, resolve_map_path, Graph};

/// Resolve and load the campus map used by every subcommand.
pub fn load_graph(target: Option<&Path>) -> Result<Graph> {
    let path = resolve_map_path(target).context("failed to locate the campus map")?;
    let graph = load_campus_map(&path)
        .with_context(|| format!("failed to load campus map from {}", path.display()))?;
    debug!(
        spots = graph.spot_count(),
        segments = graph.segment_count(),
        "campus map ready"
    );
    Ok(graph)
}
