/// Keys the locomotion layer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Walk forward while held.
    W,
    /// About face.
    T,
    /// Arm a corner turn.
    C,
}

/// Input sampled once per frame by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub forward_held: bool,
    pub turn_requested: bool,
    pub about_face_requested: bool,
}

/// Collects key events between frames and turns presses into one-shot requests.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    keys_pressed: [bool; 3],
    turn_edge: bool,
    about_face_edge: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key(&mut self, key: Key, pressed: bool) {
        let idx = match key {
            Key::W => 0,
            Key::T => 1,
            Key::C => 2,
        };
        let was_pressed = self.keys_pressed[idx];
        self.keys_pressed[idx] = pressed;

        // key repeat delivers `pressed` again without a release in between
        if pressed && !was_pressed {
            match key {
                Key::T => self.about_face_edge = true,
                Key::C => self.turn_edge = true,
                Key::W => {}
            }
        }
    }

    /// Window lost focus: releases are never delivered, so drop held keys.
    pub fn on_focus_lost(&mut self) {
        self.keys_pressed = [false; 3];
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::W => self.keys_pressed[0],
            Key::T => self.keys_pressed[1],
            Key::C => self.keys_pressed[2],
        }
    }

    /// Snapshot for this frame. Press edges are consumed.
    pub fn sample(&mut self) -> InputState {
        let state = InputState {
            forward_held: self.keys_pressed[0],
            turn_requested: self.turn_edge,
            about_face_requested: self.about_face_edge,
        };
        self.turn_edge = false;
        self.about_face_edge = false;
        state
    }
}
