use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::error::{Error, Result};
use crate::map::{Position, Spot, SpotId};

/// Congestion coefficient for free-flowing segments.
pub const FREE_FLOW_CROWDING: f64 = 1.0;

/// Directed arc within the routing graph.
///
/// Every undirected segment is stored twice, once per direction, with the
/// same distance and crowding.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub target: SpotId,
    pub distance: f64,
    pub crowding: f64,
}

/// Read-only routing graph shared by all queries.
///
/// Built once through [`GraphBuilder`]; cloning only bumps reference counts.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    spots: Arc<HashMap<SpotId, Spot>>,
    adjacency: Arc<HashMap<SpotId, Vec<Segment>>>,
}

impl Graph {
    /// Lookup a spot by identifier.
    pub fn spot(&self, id: SpotId) -> Option<&Spot> {
        self.spots.get(&id)
    }

    /// Whether the identifier refers to a spot in this graph.
    pub fn contains(&self, id: SpotId) -> bool {
        self.spots.contains_key(&id)
    }

    /// Lookup a spot name by identifier.
    pub fn spot_name(&self, id: SpotId) -> Option<&str> {
        self.spot(id).map(|spot| spot.name.as_str())
    }

    /// Planar position of a spot.
    pub fn position(&self, id: SpotId) -> Option<Position> {
        self.spot(id).map(|spot| spot.position)
    }

    /// Return the outgoing arcs for a given spot identifier.
    pub fn neighbours(&self, id: SpotId) -> &[Segment] {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn spot_count(&self) -> usize {
        self.spots.len()
    }

    /// Number of undirected segments (each is stored as two arcs).
    pub fn segment_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// All spots, sorted by identifier.
    pub fn spots(&self) -> Vec<&Spot> {
        let mut spots: Vec<&Spot> = self.spots.values().collect();
        spots.sort_by_key(|spot| spot.id);
        spots
    }

    /// Destination-worthy spots (everything except routing junctions), sorted by identifier.
    pub fn destinations(&self) -> Vec<&Spot> {
        self.spots()
            .into_iter()
            .filter(|spot| spot.is_destination())
            .collect()
    }
}

/// Reason a segment was refused by the [`GraphBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidSegment {
    UnknownEndpoint(SpotId),
    SelfLoop(SpotId),
    BadDistance(f64),
}

impl fmt::Display for InvalidSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSegment::UnknownEndpoint(id) => write!(f, "endpoint {id} is not a known spot"),
            InvalidSegment::SelfLoop(id) => write!(f, "segment loops back onto spot {id}"),
            InvalidSegment::BadDistance(distance) => {
                write!(f, "distance {distance} is not a finite non-negative number")
            }
        }
    }
}

/// Mutable construction phase of a [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    spots: HashMap<SpotId, Spot>,
    adjacency: HashMap<SpotId, Vec<Segment>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spot. Identifiers must be unique.
    pub fn add_spot(&mut self, spot: Spot) -> Result<()> {
        if self.spots.contains_key(&spot.id) {
            return Err(Error::DuplicateSpot { id: spot.id });
        }
        self.adjacency.entry(spot.id).or_default();
        self.spots.insert(spot.id, spot);
        Ok(())
    }

    /// Position of a spot registered so far.
    pub fn position(&self, id: SpotId) -> Option<Position> {
        self.spots.get(&id).map(|spot| spot.position)
    }

    /// Insert an undirected segment between two registered spots.
    ///
    /// Non-positive or non-finite crowding is normalised to
    /// [`FREE_FLOW_CROWDING`].
    pub fn add_segment(
        &mut self,
        u: SpotId,
        v: SpotId,
        distance: f64,
        crowding: f64,
    ) -> std::result::Result<(), InvalidSegment> {
        for endpoint in [u, v] {
            if !self.spots.contains_key(&endpoint) {
                return Err(InvalidSegment::UnknownEndpoint(endpoint));
            }
        }
        if u == v {
            return Err(InvalidSegment::SelfLoop(u));
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(InvalidSegment::BadDistance(distance));
        }

        let crowding = if crowding.is_finite() && crowding > 0.0 {
            crowding
        } else {
            warn!(u, v, crowding, "normalising non-positive crowding to free flow");
            FREE_FLOW_CROWDING
        };

        self.adjacency.entry(u).or_default().push(Segment {
            target: v,
            distance,
            crowding,
        });
        self.adjacency.entry(v).or_default().push(Segment {
            target: u,
            distance,
            crowding,
        });
        Ok(())
    }

    /// Freeze the builder into an immutable graph.
    pub fn build(self) -> Graph {
        Graph {
            spots: Arc::new(self.spots),
            adjacency: Arc::new(self.adjacency),
        }
    }
}
