use std::path::PathBuf;

use thiserror::Error;

use crate::map::SpotId;

/// Convenient result alias for the campus navigation library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Campus map file could not be located at the resolved path.
    #[error("campus map not found at {path}")]
    MapNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the campus map")]
    ProjectDirsUnavailable,

    /// Raised when a spot identifier is not present in the graph.
    #[error("unknown spot id: {id}")]
    UnknownSpot { id: SpotId },

    /// Raised when two spots in a map description share an identifier.
    #[error("duplicate spot id in map description: {id}")]
    DuplicateSpot { id: SpotId },

    /// Raised when no route could be found between two spots.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: SpotId, goal: SpotId },

    /// Raised when a request has neither an end spot nor any waypoints.
    #[error("route request needs an end spot or at least one waypoint")]
    MissingDestination,

    /// Raised when a computed route plan lacks any spots.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when a cost strategy name is not recognised.
    #[error("unknown cost strategy '{value}'; expected 'distance' or 'time'")]
    UnknownStrategy { value: String },

    /// Raised when a travel mode name is not recognised.
    #[error("unknown travel mode '{value}'; expected 'walk' or 'bike'")]
    UnknownMode { value: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
