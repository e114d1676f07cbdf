use super::about_face::AboutFace;
use super::clip::{ClipSelector, ClipTransition, LocomotionClip};
use super::input::InputState;
use crate::anchor::SoleAnchor;
use crate::config::SimulationConfig;
use crate::error::TurnError;
use crate::math::RigidPose;
use crate::turn::{CornerPivotController, TurnSide};
use glam::DVec3;

/// What the actor spent the frame doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Walking,
    AboutFace,
    CornerTurn,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub pose: RigidPose,
    pub phase: Phase,
    pub transition: Option<ClipTransition>,
}

/// One actor's locomotion: pose, pending turns and clip choice.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    pose: RigidPose,
    sole: SoleAnchor,
    side: TurnSide,
    corner: CornerPivotController,
    about_face: Option<AboutFace>,
    clips: ClipSelector,
    corner_armed: bool,
}

impl Simulation {
    pub fn new(config: SimulationConfig, pose: RigidPose) -> Self {
        let sole = SoleAnchor::new(config.sole_height);
        let clips = ClipSelector::new(config.crossfade);
        Self {
            side: config.initial_side,
            config,
            pose,
            sole,
            corner: CornerPivotController::new(),
            about_face: None,
            clips,
            corner_armed: false,
        }
    }

    pub fn with_sole(mut self, sole: SoleAnchor) -> Self {
        self.sole = sole;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn pose(&self) -> &RigidPose {
        &self.pose
    }

    pub fn side(&self) -> TurnSide {
        self.side
    }

    pub fn corner(&self) -> &CornerPivotController {
        &self.corner
    }

    pub fn is_corner_armed(&self) -> bool {
        self.corner_armed
    }

    pub fn is_about_facing(&self) -> bool {
        self.about_face.is_some()
    }

    pub fn current_clip(&self) -> Option<LocomotionClip> {
        self.clips.current()
    }

    /// Local anchor offset at the configured character scale.
    pub fn anchor_local(&self) -> DVec3 {
        self.sole.offset(self.config.character_scale)
    }

    pub fn anchor_world(&self) -> DVec3 {
        self.pose.transform_point(self.anchor_local())
    }

    pub fn update(&mut self, input: InputState, dt: f64) -> Result<FrameReport, TurnError> {
        if input.about_face_requested && self.about_face.is_none() && !self.corner.is_active() {
            self.side = self.side.flipped();
            self.about_face = Some(AboutFace::new(
                self.pose.orientation,
                self.config.about_face_duration,
            ));
            log::info!("about face, next corner turn goes {:?}", self.side);
        }

        if input.turn_requested && !self.corner_armed {
            self.corner_armed = true;
            log::info!("corner turn armed ({:?})", self.side);
        }

        let desired = if self.about_face.is_some() {
            LocomotionClip::AboutFace
        } else if input.forward_held {
            LocomotionClip::Walk
        } else {
            LocomotionClip::Idle
        };
        let transition = self.clips.request(desired);

        if let Some(about_face) = self.about_face.as_mut() {
            let (orientation, done) = about_face.advance(dt);
            self.pose.orientation = orientation;
            if done {
                self.about_face = None;
            }
            return Ok(self.report(Phase::AboutFace, transition));
        }

        let walking = input.forward_held && self.clips.current() == Some(LocomotionClip::Walk);
        if !walking {
            let phase = if self.corner.is_active() {
                Phase::CornerTurn
            } else {
                Phase::Idle
            };
            return Ok(self.report(phase, transition));
        }

        if !self.corner.is_active() && self.corner_armed {
            let anchor_local = self.anchor_local();
            let begun = self.corner.begin(
                &self.pose,
                anchor_local,
                self.config.corner_angle(),
                self.side,
                self.config.distance,
            );
            if let Err(err) = begun {
                self.corner_armed = false;
                log::warn!("corner turn disarmed: {err}");
                return Err(err);
            }
        }

        match self.corner.step(self.config.angular_speed(), dt) {
            Some(step) => {
                self.pose = step.pose;
                if step.done {
                    self.corner.end();
                    self.corner_armed = false;
                    log::info!("corner turn finished, anchor at {}", self.anchor_world());
                }
                Ok(self.report(Phase::CornerTurn, transition))
            }
            None => {
                self.pose.advance(self.config.scaled_walk_speed() * dt);
                Ok(self.report(Phase::Walking, transition))
            }
        }
    }

    fn report(&self, phase: Phase, transition: Option<ClipTransition>) -> FrameReport {
        FrameReport {
            pose: self.pose,
            phase,
            transition,
        }
    }
}
