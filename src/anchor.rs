//! Anchor (sole) placement relative to an actor root.

use crate::math::RigidPose;
use glam::DVec3;

/// Sole point of a character, directly below its root.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SoleAnchor {
    height: f64,
}

impl SoleAnchor {
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    /// The sole sits at the bottom of the character's unscaled local bounds.
    pub fn from_bounds(min: DVec3, max: DVec3) -> Self {
        Self {
            height: min.y.min(max.y),
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Local offset of the sole for a uniformly scaled character.
    pub fn offset(&self, scale: f64) -> DVec3 {
        DVec3::new(0.0, self.height * scale, 0.0)
    }
}

/// Lifts or lowers `pose` so the anchor lies at world height `surface_y`.
pub fn rest_on_surface(pose: &RigidPose, anchor_local: DVec3, surface_y: f64) -> RigidPose {
    let anchor = pose.transform_point(anchor_local);
    let mut rested = *pose;
    rested.position.y += surface_y - anchor.y;
    rested
}
