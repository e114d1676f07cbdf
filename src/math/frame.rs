use super::pose::{LOCAL_FORWARD, LOCAL_RIGHT, LOCAL_UP};
use crate::error::TurnError;
use glam::{DQuat, DVec3};

/// Largest deviation from unit length an orientation may have before it is
/// considered unusable as a reference frame.
pub const UNIT_TOLERANCE: f64 = 1e-4;

/// Orthonormal world-space basis of an orientation at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFrame {
    pub right: DVec3,
    pub up: DVec3,
    pub forward: DVec3,
}

impl AxisFrame {
    /// Captures the frame of `orientation`, renormalising small drift.
    pub fn from_orientation(orientation: DQuat) -> Result<Self, TurnError> {
        let length = orientation.length();
        if !orientation.is_finite() || (length - 1.0).abs() > UNIT_TOLERANCE {
            return Err(TurnError::DegenerateFrame { length });
        }

        let q = orientation / length;
        Ok(Self {
            right: (q * LOCAL_RIGHT).normalize(),
            up: (q * LOCAL_UP).normalize(),
            forward: (q * LOCAL_FORWARD).normalize(),
        })
    }

    /// Maps frame-relative coordinates `(right, up, forward)` to a world direction.
    pub fn to_world(&self, local: DVec3) -> DVec3 {
        self.right * local.x + self.up * local.y + self.forward * local.z
    }

    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let unit = |v: DVec3| (v.length() - 1.0).abs() <= tolerance;
        unit(self.right)
            && unit(self.up)
            && unit(self.forward)
            && self.right.dot(self.up).abs() <= tolerance
            && self.up.dot(self.forward).abs() <= tolerance
            && self.forward.dot(self.right).abs() <= tolerance
    }
}
