use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphBuilder, FREE_FLOW_CROWDING};

/// Numeric identifier for a spot.
pub type SpotId = i64;

/// Category tags that mark plain routing junctions rather than destinations.
const JUNCTION_CATEGORIES: &[&str] = &["junction", "crossing", "intersection", "road"];

/// Planar coordinates for a spot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A point of interest or routing junction on the campus map.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub id: SpotId,
    pub name: String,
    pub category: String,
    pub position: Position,
    pub description: Option<String>,
}

impl Spot {
    /// Whether the spot is worth offering as a destination.
    pub fn is_destination(&self) -> bool {
        !JUNCTION_CATEGORIES
            .iter()
            .any(|tag| self.category.eq_ignore_ascii_case(tag))
    }
}

/// Static description of a campus map, as read from JSON.
///
/// Both the `spots`/`segments` layout and the older `nodes`/`edges` layout
/// (with `category` and `dist` keys) are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapDescription {
    #[serde(alias = "nodes")]
    pub spots: Vec<SpotRecord>,
    #[serde(alias = "edges", default)]
    pub segments: Vec<SegmentRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotRecord {
    pub id: SpotId,
    pub name: String,
    #[serde(rename = "type", alias = "category")]
    pub category: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub u: SpotId,
    pub v: SpotId,
    /// Straight-line distance between the endpoints when omitted.
    #[serde(alias = "dist", default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default = "default_crowding")]
    pub crowding: f64,
}

fn default_crowding() -> f64 {
    FREE_FLOW_CROWDING
}

impl From<&Graph> for MapDescription {
    /// Export a graph back to its JSON layout, one record per undirected segment.
    fn from(graph: &Graph) -> Self {
        let spots = graph
            .spots()
            .into_iter()
            .map(|spot| SpotRecord {
                id: spot.id,
                name: spot.name.clone(),
                category: spot.category.clone(),
                x: spot.position.x,
                y: spot.position.y,
                desc: spot.description.clone(),
            })
            .collect();

        let mut segments = Vec::with_capacity(graph.segment_count());
        for spot in graph.spots() {
            for arc in graph.neighbours(spot.id) {
                // Arcs are mirrored; emit each segment from its lower id.
                if arc.target < spot.id {
                    continue;
                }
                segments.push(SegmentRecord {
                    u: spot.id,
                    v: arc.target,
                    distance: Some(arc.distance),
                    crowding: arc.crowding,
                });
            }
        }
        segments.sort_by_key(|segment| (segment.u, segment.v));

        Self { spots, segments }
    }
}

/// Load a campus map description from a JSON file and build its graph.
pub fn load_campus_map(path: &Path) -> Result<Graph> {
    if !path.exists() {
        return Err(Error::MapNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = raw.len(), "loading campus map");
    parse_campus_map(&raw)
}

/// Parse a JSON campus map description and build its graph.
pub fn parse_campus_map(json: &str) -> Result<Graph> {
    let description: MapDescription = serde_json::from_str(json)?;
    build_graph(&description)
}

/// Build a routing graph from a parsed description.
///
/// Segments that reference unknown spots, loop onto themselves, or carry an
/// invalid distance are skipped with a warning. Duplicate spot ids are
/// rejected.
pub fn build_graph(description: &MapDescription) -> Result<Graph> {
    let mut builder = GraphBuilder::new();
    for record in &description.spots {
        builder.add_spot(Spot {
            id: record.id,
            name: record.name.clone(),
            category: record.category.clone(),
            position: Position::new(record.x, record.y),
            description: record.desc.clone().filter(|desc| !desc.is_empty()),
        })?;
    }

    let mut skipped = 0usize;
    for record in &description.segments {
        // Unknown endpoints are reported by `add_segment` before the distance.
        let distance = record
            .distance
            .or_else(|| straight_line(&builder, record.u, record.v))
            .unwrap_or(f64::NAN);
        if let Err(reason) = builder.add_segment(record.u, record.v, distance, record.crowding) {
            warn!(u = record.u, v = record.v, %reason, "skipping malformed segment");
            skipped += 1;
        }
    }

    let graph = builder.build();
    debug!(
        spots = graph.spot_count(),
        segments = graph.segment_count(),
        skipped,
        "built campus graph"
    );
    Ok(graph)
}

fn straight_line(builder: &GraphBuilder, u: SpotId, v: SpotId) -> Option<f64> {
    let from = builder.position(u)?;
    let to = builder.position(v)?;
    Some(from.distance_to(&to))
}
