//! # gravity-turn
//!
//! Foot-anchored corner turns for a character root, plus the frame-driven
//! locomotion around them.
//!
//! ## Features
//! - Corner turns that pitch an actor over an edge and yaw it to one side while
//!   its sole follows a quarter-circle arc around the edge
//! - Anchor correction so the sole lands exactly on its target
//! - Walking, an in-place about face and locomotion clip selection
//! - TOML-configurable tunables
//!
//! ## Example
//! ```rust,ignore
//! use gravity_turn::turn::{CornerPivotController, TurnSide};
//! use gravity_turn::math::RigidPose;
//! use glam::DVec3;
//!
//! let mut controller = CornerPivotController::new();
//! let pose = RigidPose::IDENTITY;
//! controller.begin(&pose, DVec3::NEG_Y, std::f64::consts::FRAC_PI_2, TurnSide::Left, 1.0)?;
//!
//! while let Some(step) = controller.step(std::f64::consts::FRAC_PI_2, 1.0 / 60.0) {
//!     // write step.pose back to the actor
//!     if step.done {
//!         controller.end();
//!     }
//! }
//! ```

pub mod anchor;
pub mod config;
pub mod error;
pub mod locomotion;
pub mod math;
pub mod turn;

pub use anchor::{rest_on_surface, SoleAnchor};
pub use config::SimulationConfig;
pub use error::{ConfigError, TurnError};
pub use locomotion::{
    AboutFace, ClipSelector, ClipTransition, FrameReport, InputSampler, InputState, Key,
    LocomotionClip, Phase, Simulation,
};
pub use math::{AxisFrame, RigidPose};
pub use turn::{CornerPivotController, TurnSide, TurnState, TurnStep};
