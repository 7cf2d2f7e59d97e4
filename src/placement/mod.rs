//! Tooltip placement: pure geometry with a deterministic fallback search.

pub mod direction;
pub mod engine;

pub use direction::Direction;
pub use engine::{
    DirectionPositions, PlacementRequest, PlacementResult, positions_by_direction,
    resolve_placement,
};
