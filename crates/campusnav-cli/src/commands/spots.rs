//! Spot listing command handler.

use std::io;
use std::path::Path;

use anyhow::Result;

use campusnav_cli::output::{write_spots, OutputFormat, SpotListing};

use super::load_graph;
use crate::SpotsArgs;

/// Handle the `spots` subcommand.
///
/// Lists destination-worthy spots, or every spot with `--all`.
pub fn handle_spots_command(
    map: Option<&Path>,
    format: OutputFormat,
    args: &SpotsArgs,
) -> Result<()> {
    let graph = load_graph(map)?;
    let spots = if args.all {
        graph.spots()
    } else {
        graph.destinations()
    };
    let listings: Vec<SpotListing> = spots.into_iter().map(SpotListing::from).collect();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_spots(&mut handle, &listings, format)
}
