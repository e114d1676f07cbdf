//! Corner turns
//!
//! Reorients an actor through a fixed angle about a frozen frame while its
//! anchor point sweeps a quarter circle around an edge.

pub mod controller;
pub mod state;

pub use controller::CornerPivotController;
pub use state::{TurnSide, TurnState, TurnStep, ANGLE_EPSILON};
