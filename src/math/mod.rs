//! Math utilities module
//!
//! Rigid poses and axis frames on top of glam's double-precision types.

mod frame;
mod pose;

pub use frame::{AxisFrame, UNIT_TOLERANCE};
pub use pose::{RigidPose, LOCAL_FORWARD, LOCAL_RIGHT, LOCAL_UP};

// Re-export commonly used glam types
pub use glam::{DQuat, DVec3};
