//! Common type aliases used throughout the engine.

/// Search depth.
pub type Depth = u32;

/// Search score from the point of view of the side to move.
pub type Score = i32;
