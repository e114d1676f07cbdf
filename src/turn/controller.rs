use super::state::{TurnSide, TurnState, TurnStep};
use crate::error::TurnError;
use crate::math::RigidPose;
use glam::DVec3;

/// Drives one actor through at most one corner turn at a time.
#[derive(Debug, Clone, Default)]
pub struct CornerPivotController {
    active: Option<TurnState>,
}

impl CornerPivotController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn state(&self) -> Option<&TurnState> {
        self.active.as_ref()
    }

    /// Starts a turn from `pose`. While a turn is running the call is a no-op
    /// and returns `Ok(None)`.
    pub fn begin(
        &mut self,
        pose: &RigidPose,
        anchor_local: DVec3,
        target_angle: f64,
        side: TurnSide,
        distance: f64,
    ) -> Result<Option<&TurnState>, TurnError> {
        if self.active.is_some() {
            log::debug!("ignoring corner turn request: a turn is already active");
            return Ok(None);
        }
        self.try_begin(pose, anchor_local, target_angle, side, distance).map(Some)
    }

    /// Like [`begin`](Self::begin), but reports an active turn as an error.
    pub fn try_begin(
        &mut self,
        pose: &RigidPose,
        anchor_local: DVec3,
        target_angle: f64,
        side: TurnSide,
        distance: f64,
    ) -> Result<&TurnState, TurnError> {
        if self.active.is_some() {
            return Err(TurnError::AlreadyActive);
        }

        let state = TurnState::new(pose, anchor_local, target_angle, side, distance)?;
        log::debug!(
            "corner turn begins: side={:?} target={:.4} rad distance={} pivot={}",
            side,
            state.target_angle(),
            distance,
            state.pivot_world()
        );
        let state: &TurnState = self.active.insert(state);
        Ok(state)
    }

    /// Advances the active turn. Returns `None` while idle.
    pub fn step(&mut self, angular_speed: f64, dt: f64) -> Option<TurnStep> {
        self.active
            .as_mut()
            .map(|state| state.advance(angular_speed, dt))
    }

    /// Clears the active turn once its last step reported `done`.
    pub fn end(&mut self) -> Option<TurnState> {
        let finished = self.active.take();
        if let Some(state) = &finished {
            log::debug!(
                "corner turn ends: angle={:.4} anchor={}",
                state.angle_accumulated(),
                state.target_anchor_world()
            );
        }
        finished
    }

    /// Drops the active turn without snapping the pose to its end.
    pub fn abort(&mut self) -> Option<TurnState> {
        let aborted = self.active.take();
        if let Some(state) = &aborted {
            log::debug!("corner turn aborted at {:.1}%", state.progress() * 100.0);
        }
        aborted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DQuat;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn idle_controller_does_not_step() {
        let mut controller = CornerPivotController::new();
        assert!(!controller.is_active());
        assert!(controller.step(1.0, 0.1).is_none());
        assert!(controller.end().is_none());
    }

    #[test]
    fn begin_while_active_is_a_no_op() {
        let mut controller = CornerPivotController::new();
        let pose = RigidPose::IDENTITY;
        controller
            .begin(&pose, DVec3::NEG_Y, FRAC_PI_2, TurnSide::Left, 1.0)
            .unwrap();
        controller.step(1.0, 0.25);
        let before = controller.state().cloned();

        let other = RigidPose::from_position(DVec3::splat(5.0));
        let result = controller
            .begin(&other, DVec3::ZERO, 1.0, TurnSide::Right, 3.0)
            .unwrap();
        assert!(result.is_none());
        assert_eq!(controller.state().cloned(), before);
    }

    #[test]
    fn try_begin_reports_active_turn() {
        let mut controller = CornerPivotController::new();
        let pose = RigidPose::IDENTITY;
        controller
            .try_begin(&pose, DVec3::ZERO, FRAC_PI_2, TurnSide::Left, 1.0)
            .unwrap();
        assert!(matches!(
            controller.try_begin(&pose, DVec3::ZERO, FRAC_PI_2, TurnSide::Left, 1.0),
            Err(TurnError::AlreadyActive)
        ));
    }

    #[test]
    fn degenerate_orientation_propagates() {
        let mut controller = CornerPivotController::new();
        let pose = RigidPose::new(DVec3::ZERO, DQuat::from_xyzw(0.0, 0.0, 0.0, 0.0));
        let result = controller.begin(&pose, DVec3::ZERO, FRAC_PI_2, TurnSide::Left, 1.0);
        assert!(matches!(result, Err(TurnError::DegenerateFrame { .. })));
        assert!(!controller.is_active());
    }

    #[test]
    fn end_returns_to_idle() {
        let mut controller = CornerPivotController::new();
        controller
            .begin(&RigidPose::IDENTITY, DVec3::ZERO, FRAC_PI_2, TurnSide::Left, 1.0)
            .unwrap();
        let step = controller.step(FRAC_PI_2, 1.0).unwrap();
        assert!(step.done);
        let finished = controller.end().unwrap();
        assert_eq!(finished.angle_accumulated(), FRAC_PI_2);
        assert!(!controller.is_active());
    }

    #[test]
    fn abort_keeps_last_pose() {
        let mut controller = CornerPivotController::new();
        controller
            .begin(&RigidPose::IDENTITY, DVec3::NEG_Y, FRAC_PI_2, TurnSide::Left, 1.0)
            .unwrap();
        let step = controller.step(1.0, 0.5).unwrap();
        assert!(!step.done);
        let aborted = controller.abort().unwrap();
        assert_eq!(aborted.angle_accumulated(), 0.5);
        assert!(!controller.is_active());
        assert!(!step.pose.abs_diff_eq(&aborted.pose_at(FRAC_PI_2), 1e-6));
    }
}
