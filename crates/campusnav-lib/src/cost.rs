//! Segment traversal costs.
//!
//! A cost is either the physical length of a segment or the seconds needed
//! to traverse it at the travel mode's base speed slowed by crowding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::graph::{Segment, FREE_FLOW_CROWDING};

/// Base walking speed in map units per second.
pub const WALK_SPEED: f64 = 1.5;
/// Base cycling speed in map units per second.
pub const BIKE_SPEED: f64 = 5.0;

/// What a route minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostStrategy {
    /// Shortest physical distance.
    #[default]
    #[serde(alias = "dist")]
    Distance,
    /// Shortest travel time, accounting for crowding.
    Time,
}

impl CostStrategy {
    /// Unit that costs computed under this strategy are expressed in.
    pub fn unit(self) -> CostUnit {
        match self {
            CostStrategy::Distance => CostUnit::Meters,
            CostStrategy::Time => CostUnit::Seconds,
        }
    }
}

impl fmt::Display for CostStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CostStrategy::Distance => "distance",
            CostStrategy::Time => "time",
        };
        f.write_str(value)
    }
}

impl FromStr for CostStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" | "dist" => Ok(CostStrategy::Distance),
            "time" => Ok(CostStrategy::Time),
            _ => Err(Error::UnknownStrategy {
                value: s.to_string(),
            }),
        }
    }
}

/// How the traveller moves along segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Walk,
    Bike,
}

impl TravelMode {
    /// Free-flow speed in map units per second.
    pub fn base_speed(self) -> f64 {
        match self {
            TravelMode::Walk => WALK_SPEED,
            TravelMode::Bike => BIKE_SPEED,
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TravelMode::Walk => "walk",
            TravelMode::Bike => "bike",
        };
        f.write_str(value)
    }
}

impl FromStr for TravelMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walk" => Ok(TravelMode::Walk),
            "bike" => Ok(TravelMode::Bike),
            _ => Err(Error::UnknownMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Unit of an accumulated route cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostUnit {
    Meters,
    Seconds,
}

impl fmt::Display for CostUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CostUnit::Meters => "meters",
            CostUnit::Seconds => "seconds",
        };
        f.write_str(value)
    }
}

/// Cost of traversing `segment` under the given strategy and mode.
pub fn segment_cost(segment: &Segment, strategy: CostStrategy, mode: TravelMode) -> f64 {
    match strategy {
        CostStrategy::Distance => segment.distance,
        CostStrategy::Time => {
            let effective_speed = mode.base_speed() / effective_crowding(segment.crowding);
            segment.distance / effective_speed
        }
    }
}

fn effective_crowding(crowding: f64) -> f64 {
    if crowding.is_finite() && crowding > 0.0 {
        crowding
    } else {
        FREE_FLOW_CROWDING
    }
}
