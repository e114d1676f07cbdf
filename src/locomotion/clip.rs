/// Locomotion clips the external animation blender is asked to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionClip {
    Idle,
    Walk,
    AboutFace,
}

/// A request to cross-fade from one clip to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipTransition {
    pub from: Option<LocomotionClip>,
    pub to: LocomotionClip,
    pub fade: f64,
}

#[derive(Debug, Clone)]
pub struct ClipSelector {
    current: Option<LocomotionClip>,
    fade: f64,
}

impl ClipSelector {
    pub fn new(fade: f64) -> Self {
        Self {
            current: None,
            fade,
        }
    }

    pub fn current(&self) -> Option<LocomotionClip> {
        self.current
    }

    /// Switches to `next`. The very first clip fades in instantly.
    pub fn request(&mut self, next: LocomotionClip) -> Option<ClipTransition> {
        let fade = if self.current.is_some() { self.fade } else { 0.0 };
        self.request_with_fade(next, fade)
    }

    pub fn request_with_fade(&mut self, next: LocomotionClip, fade: f64) -> Option<ClipTransition> {
        if self.current == Some(next) {
            return None;
        }
        let transition = ClipTransition {
            from: self.current,
            to: next,
            fade,
        };
        log::debug!("clip {:?} -> {:?} over {}s", transition.from, next, fade);
        self.current = Some(next);
        Some(transition)
    }
}
