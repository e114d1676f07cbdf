use glam::DQuat;
use std::f64::consts::PI;

/// In-place half turn about the actor's own up axis, timed like the clip that
/// accompanies it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AboutFace {
    start: DQuat,
    end: DQuat,
    elapsed: f64,
    duration: f64,
}

impl AboutFace {
    pub fn new(orientation: DQuat, duration: f64) -> Self {
        Self {
            start: orientation,
            end: (orientation * DQuat::from_rotation_y(PI)).normalize(),
            elapsed: 0.0,
            duration,
        }
    }

    pub fn end_orientation(&self) -> DQuat {
        self.end
    }

    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Returns the orientation for this frame and whether the turn finished.
    /// A finished turn lands exactly on the end orientation.
    pub fn advance(&mut self, dt: f64) -> (DQuat, bool) {
        self.elapsed += dt.max(0.0);
        let t = self.progress();
        if t >= 1.0 {
            (self.end, true)
        } else {
            (self.start.slerp(self.end, t), false)
        }
    }
}
