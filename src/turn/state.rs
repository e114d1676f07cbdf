use crate::error::TurnError;
use crate::math::{AxisFrame, RigidPose};
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Tolerance under which the accumulated angle counts as having reached the target.
pub const ANGLE_EPSILON: f64 = 1e-9;

/// Handedness of a corner turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnSide {
    #[default]
    Left,
    Right,
}

impl TurnSide {
    /// Lateral sign: +1 for `Left`, -1 for `Right`.
    pub fn sign(self) -> f64 {
        match self {
            TurnSide::Left => 1.0,
            TurnSide::Right => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            TurnSide::Left => TurnSide::Right,
            TurnSide::Right => TurnSide::Left,
        }
    }
}

/// Result of advancing a turn by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnStep {
    pub pose: RigidPose,
    pub angle: f64,
    pub done: bool,
}

/// Everything a corner turn needs, frozen at the moment it begins.
///
/// The orientation sweep pitches about the frozen right axis and then yaws
/// about the frozen forward axis (which is the body's up once it has pitched
/// over the edge). The anchor follows a quarter circle of radius `distance`
/// around `pivot_world`, pushed sideways by `distance * sin(angle)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnState {
    pub(crate) angle_accumulated: f64,
    pub(crate) target_angle: f64,
    pub(crate) side: TurnSide,
    pub(crate) distance: f64,
    pub(crate) anchor_local: DVec3,
    pub(crate) start_pose: RigidPose,
    pub(crate) start_frame: AxisFrame,
    pub(crate) pivot_world: DVec3,
    pub(crate) start_anchor_world: DVec3,
    pub(crate) target_anchor_world: DVec3,
}

impl TurnState {
    pub fn new(
        pose: &RigidPose,
        anchor_local: DVec3,
        target_angle: f64,
        side: TurnSide,
        distance: f64,
    ) -> Result<Self, TurnError> {
        let start_frame = AxisFrame::from_orientation(pose.orientation)?;
        let start_pose = RigidPose::new(pose.position, pose.orientation.normalize());
        let start_anchor_world = start_pose.transform_point(anchor_local);
        let pivot_world = start_anchor_world - start_frame.up * distance;

        let mut state = Self {
            angle_accumulated: 0.0,
            target_angle: target_angle.max(0.0),
            side,
            distance,
            anchor_local,
            start_pose,
            start_frame,
            pivot_world,
            start_anchor_world,
            target_anchor_world: start_anchor_world,
        };
        state.target_anchor_world = state.anchor_at(state.target_angle);
        Ok(state)
    }

    pub fn angle_accumulated(&self) -> f64 {
        self.angle_accumulated
    }

    pub fn target_angle(&self) -> f64 {
        self.target_angle
    }

    pub fn side(&self) -> TurnSide {
        self.side
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn anchor_local(&self) -> DVec3 {
        self.anchor_local
    }

    pub fn start_pose(&self) -> &RigidPose {
        &self.start_pose
    }

    pub fn start_frame(&self) -> &AxisFrame {
        &self.start_frame
    }

    pub fn pivot_world(&self) -> DVec3 {
        self.pivot_world
    }

    pub fn start_anchor_world(&self) -> DVec3 {
        self.start_anchor_world
    }

    pub fn target_anchor_world(&self) -> DVec3 {
        self.target_anchor_world
    }

    pub fn progress(&self) -> f64 {
        if self.target_angle > 0.0 {
            self.angle_accumulated / self.target_angle
        } else {
            1.0
        }
    }

    pub fn is_done(&self) -> bool {
        self.angle_accumulated >= self.target_angle - ANGLE_EPSILON
    }

    /// Orientation after sweeping `angle` radians from the start orientation.
    /// `Left` yaws about `-forward0`, so the body ends facing away from its anchor's lateral shift.
    pub fn orientation_at(&self, angle: f64) -> DQuat {
        let frame = &self.start_frame;
        let pitch = DQuat::from_axis_angle(frame.right, angle);
        let yaw = DQuat::from_axis_angle(frame.forward, -self.side.sign() * angle);
        (yaw * pitch * self.start_pose.orientation).normalize()
    }

    /// Where the anchor should be after sweeping `angle` radians.
    pub fn anchor_at(&self, angle: f64) -> DVec3 {
        let frame = &self.start_frame;
        let radius = DQuat::from_axis_angle(frame.right, angle) * (frame.up * self.distance);
        let lateral = frame.right * (self.side.sign() * self.distance * angle.sin());
        self.pivot_world + radius + lateral
    }

    /// Pose at `angle` with the anchor placed exactly on its arc.
    pub fn pose_at(&self, angle: f64) -> RigidPose {
        let orientation = self.orientation_at(angle);
        let start_position = self.start_pose.position;
        let actual = start_position + orientation * self.anchor_local;
        let desired = self.anchor_at(angle);
        RigidPose::new(start_position + (desired - actual), orientation)
    }

    /// Integrates `angular_speed * dt` into the turn and returns the new pose.
    pub fn advance(&mut self, angular_speed: f64, dt: f64) -> TurnStep {
        let increment = (angular_speed * dt).max(0.0);
        self.angle_accumulated = (self.angle_accumulated + increment).min(self.target_angle);

        let done = self.is_done();
        if done {
            self.angle_accumulated = self.target_angle;
        }

        TurnStep {
            pose: self.pose_at(self.angle_accumulated),
            angle: self.angle_accumulated,
            done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: DVec3, b: DVec3) {
        assert!(a.abs_diff_eq(b, EPSILON), "{a} != {b}");
    }

    fn standing_state(side: TurnSide) -> TurnState {
        TurnState::new(&RigidPose::IDENTITY, DVec3::NEG_Y, FRAC_PI_2, side, 1.0).unwrap()
    }

    #[test]
    fn side_sign_and_flip() {
        assert_eq!(TurnSide::Left.sign(), 1.0);
        assert_eq!(TurnSide::Right.sign(), -1.0);
        assert_eq!(TurnSide::Left.flipped(), TurnSide::Right);
        assert_eq!(TurnSide::Right.flipped().flipped(), TurnSide::Right);
    }

    #[test]
    fn new_places_pivot_below_anchor() {
        let state = standing_state(TurnSide::Left);
        approx_eq(state.start_anchor_world(), DVec3::new(0.0, -1.0, 0.0));
        approx_eq(state.pivot_world(), DVec3::new(0.0, -2.0, 0.0));
        approx_eq(state.target_anchor_world(), DVec3::new(1.0, -2.0, 1.0));
    }

    #[test]
    fn pose_at_zero_is_start_pose() {
        let state = standing_state(TurnSide::Right);
        assert!(state.pose_at(0.0).abs_diff_eq(&RigidPose::IDENTITY, EPSILON));
        approx_eq(state.anchor_at(0.0), state.start_anchor_world());
    }

    #[test]
    fn left_turn_ends_standing_on_forward_face() {
        let state = standing_state(TurnSide::Left);
        let end = state.pose_at(FRAC_PI_2);
        approx_eq(end.up(), DVec3::Z);
        approx_eq(end.forward(), DVec3::NEG_X);
        approx_eq(end.right(), DVec3::NEG_Y);
    }

    #[test]
    fn right_turn_ends_facing_the_other_way() {
        let state = standing_state(TurnSide::Right);
        let end = state.pose_at(FRAC_PI_2);
        approx_eq(end.up(), DVec3::Z);
        approx_eq(end.forward(), DVec3::X);
        approx_eq(end.right(), DVec3::Y);
    }

    #[test]
    fn anchor_stays_on_arc_radius_in_pitch_plane() {
        let state = standing_state(TurnSide::Left);
        for i in 0..=10 {
            let angle = FRAC_PI_2 * i as f64 / 10.0;
            let offset = state.anchor_at(angle) - state.pivot_world();
            let in_plane = offset - DVec3::X * offset.x;
            assert!((in_plane.length() - 1.0).abs() < EPSILON);
            assert!((offset.x - angle.sin()).abs() < EPSILON);
        }
    }

    #[test]
    fn negative_increments_do_not_rewind() {
        let mut state = standing_state(TurnSide::Left);
        state.advance(1.0, 0.5);
        let step = state.advance(-1.0, 0.5);
        assert_eq!(step.angle, 0.5);
        let step = state.advance(f64::NAN, 0.5);
        assert_eq!(step.angle, 0.5);
    }

    #[test]
    fn negative_target_angle_finishes_immediately() {
        let mut state =
            TurnState::new(&RigidPose::IDENTITY, DVec3::NEG_Y, -1.0, TurnSide::Left, 1.0).unwrap();
        assert_eq!(state.target_angle(), 0.0);
        let step = state.advance(0.0, 0.0);
        assert!(step.done);
        assert_eq!(step.angle, 0.0);
        assert_eq!(state.progress(), 1.0);
    }
}
