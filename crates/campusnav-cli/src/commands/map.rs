//! Map dump command handler.

use std::io;
use std::path::Path;

use anyhow::Result;

use campusnav_cli::output::{write_map, OutputFormat};
use campusnav_lib::MapDescription;

use super::load_graph;

/// Handle the `map` subcommand.
///
/// Dumps every spot and segment of the loaded graph, as used for drawing.
pub fn handle_map_command(map: Option<&Path>, format: OutputFormat) -> Result<()> {
    let graph = load_graph(map)?;
    let description = MapDescription::from(&graph);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_map(&mut handle, &description, format)
}
