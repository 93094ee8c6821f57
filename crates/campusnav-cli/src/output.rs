//! Output formatting for command results.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use campusnav_lib::{MapDescription, RouteSummary, Spot, SpotId};

/// Output format for command results written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Serialisable view of a spot for the `spots` command.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpotListing {
    pub id: SpotId,
    pub name: String,
    pub category: String,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl From<&Spot> for SpotListing {
    fn from(spot: &Spot) -> Self {
        Self {
            id: spot.id,
            name: spot.name.clone(),
            category: spot.category.clone(),
            x: spot.position.x,
            y: spot.position.y,
            desc: spot.description.clone(),
        }
    }
}

/// Write a route summary in the requested format.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => out.write_all(summary.render_text().as_bytes())?,
        OutputFormat::Json => write_json(out, summary)?,
    }
    Ok(())
}

/// Write a spot listing in the requested format.
pub fn write_spots<W: Write>(
    out: &mut W,
    spots: &[SpotListing],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for spot in spots {
                writeln!(out, "{:>5}  {:<24} {}", spot.id, spot.name, spot.category)?;
            }
        }
        OutputFormat::Json => write_json(out, spots)?,
    }
    Ok(())
}

/// Write the full map in the requested format.
pub fn write_map<W: Write>(
    out: &mut W,
    description: &MapDescription,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "{} spots, {} segments",
                description.spots.len(),
                description.segments.len()
            )?;
            for segment in &description.segments {
                writeln!(
                    out,
                    "{:>5} - {:<5} {:>10.2} m  crowding {:.2}",
                    segment.u,
                    segment.v,
                    segment.distance.unwrap_or_default(),
                    segment.crowding
                )?;
            }
        }
        OutputFormat::Json => write_json(out, description)?,
    }
    Ok(())
}

/// Print a route summary to stdout.
pub fn print_summary(summary: &RouteSummary, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_summary(&mut handle, summary, format)
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialise output")?;
    writeln!(out)?;
    Ok(())
}
