use glam::{DQuat, DVec3};

/// Local axis convention shared by every actor: right = +X, up = +Y, forward = +Z.
pub const LOCAL_RIGHT: DVec3 = DVec3::X;
pub const LOCAL_UP: DVec3 = DVec3::Y;
pub const LOCAL_FORWARD: DVec3 = DVec3::Z;

/// World-space position and orientation of an actor root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidPose {
    pub position: DVec3,
    pub orientation: DQuat,
}

impl Default for RigidPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RigidPose {
    pub const IDENTITY: Self = Self {
        position: DVec3::ZERO,
        orientation: DQuat::IDENTITY,
    };

    pub fn new(position: DVec3, orientation: DQuat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    pub fn from_position(position: DVec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn forward(&self) -> DVec3 {
        self.orientation * LOCAL_FORWARD
    }

    pub fn up(&self) -> DVec3 {
        self.orientation * LOCAL_UP
    }

    pub fn right(&self) -> DVec3 {
        self.orientation * LOCAL_RIGHT
    }

    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.orientation * point + self.position
    }

    pub fn transform_direction(&self, direction: DVec3) -> DVec3 {
        self.orientation * direction
    }

    /// Moves along the current forward axis.
    pub fn advance(&mut self, distance: f64) {
        self.position += self.forward() * distance;
    }

    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f64) -> bool {
        self.position.abs_diff_eq(other.position, max_abs_diff)
            && (self.orientation.abs_diff_eq(other.orientation, max_abs_diff)
                || self.orientation.abs_diff_eq(-other.orientation, max_abs_diff))
    }
}
