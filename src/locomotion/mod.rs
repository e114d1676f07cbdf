//! Frame-driven locomotion
//!
//! Input sampling, walking, the about-face turn, clip selection and the
//! per-actor simulation context that ties them to the corner turn.

pub mod about_face;
pub mod clip;
pub mod input;
pub mod simulation;

pub use about_face::AboutFace;
pub use clip::{ClipSelector, ClipTransition, LocomotionClip};
pub use input::{InputSampler, InputState, Key};
pub use simulation::{FrameReport, Phase, Simulation};
