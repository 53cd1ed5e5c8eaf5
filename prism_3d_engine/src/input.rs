//! Input aggregation — the only shared mutable state in the system.
//!
//! Host input callbacks write into an [`InputState`]; the update loop
//! reads it once per simulation step. Button flags are last-writer-wins.
//! Pointer deltas accumulate (several motion events can fire between two
//! steps) and are drained exactly once per step.

use bitflags::bitflags;
use crate::math::Vec3;

/// Logical input actions the host maps device events onto.
/// Unrecognized keys are simply never mapped; there is no error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
}

bitflags! {
    /// Currently-held button set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct Buttons: u8 {
        const QUIT     = 1 << 0;
        const FORWARD  = 1 << 1;
        const BACKWARD = 1 << 2;
        const LEFT     = 1 << 3;
        const RIGHT    = 1 << 4;
    }
}

impl Action {
    fn button(self) -> Buttons {
        match self {
            Action::Quit => Buttons::QUIT,
            Action::MoveForward => Buttons::FORWARD,
            Action::MoveBackward => Buttons::BACKWARD,
            Action::MoveLeft => Buttons::LEFT,
            Action::MoveRight => Buttons::RIGHT,
        }
    }
}

/// Snapshot of held buttons plus the pending pointer delta.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    buttons: Buttons,
    pointer_dx: f32,
    pointer_dy: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down for an action.
    pub fn press(&mut self, action: Action) {
        self.buttons.insert(action.button());
    }

    /// Record a key-up for an action.
    pub fn release(&mut self, action: Action) {
        self.buttons.remove(action.button());
    }

    /// Whether an action's button is currently held.
    pub fn is_held(&self, action: Action) -> bool {
        self.buttons.contains(action.button())
    }

    /// Whether quit has been requested.
    pub fn quit_requested(&self) -> bool {
        self.buttons.contains(Buttons::QUIT)
    }

    /// Add a pointer-motion delta to the pending accumulator.
    pub fn accumulate_pointer(&mut self, dx: f32, dy: f32) {
        self.pointer_dx += dx;
        self.pointer_dy += dy;
    }

    /// Drain the pending pointer delta, resetting it to zero.
    /// Each delta unit is consumed exactly once.
    pub fn take_pointer_delta(&mut self) -> (f32, f32) {
        let delta = (self.pointer_dx, self.pointer_dy);
        self.pointer_dx = 0.0;
        self.pointer_dy = 0.0;
        delta
    }

    /// Camera-space movement direction from the held movement buttons
    /// (forward = -z, right = +x). Unnormalized; the zero vector when
    /// nothing is held, so callers must check `length_squared` before
    /// normalizing.
    pub fn movement_dir(&self) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if self.buttons.contains(Buttons::FORWARD) {
            dir.z -= 1.0;
        }
        if self.buttons.contains(Buttons::BACKWARD) {
            dir.z += 1.0;
        }
        if self.buttons.contains(Buttons::LEFT) {
            dir.x -= 1.0;
        }
        if self.buttons.contains(Buttons::RIGHT) {
            dir.x += 1.0;
        }
        dir
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
