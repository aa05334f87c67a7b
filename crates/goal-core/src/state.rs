//! Interaction state toggled by the keyboard and read by the frame tick.
//!
//! The type avoids platform APIs so both frontends share it. It is mutated
//! only through `input::apply` and read by `frame::tick`.

use crate::constants::{INITIAL_SPEED_FACTOR, SPEED_STEP};

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionState {
    pub orbit_enabled: bool,
    pub wireframe: bool,
    pub animation_1: bool,
    pub animation_2: bool,
    /// Multiplier on per-tick animation deltas. Unbounded, may go negative.
    pub speed_factor: f64,
    /// Number of shrink triggers so far; only ever increases.
    pub shrink_presses: u32,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            orbit_enabled: true,
            wireframe: false,
            animation_1: false,
            animation_2: false,
            speed_factor: INITIAL_SPEED_FACTOR,
            shrink_presses: 0,
        }
    }
}

impl InteractionState {
    pub fn speed_up(&mut self) {
        self.speed_factor += SPEED_STEP;
    }

    pub fn slow_down(&mut self) {
        self.speed_factor -= SPEED_STEP;
    }

    /// True when at least one ball animation runs.
    #[inline]
    pub fn animating(&self) -> bool {
        self.animation_1 || self.animation_2
    }

    /// One-line summary for on-screen hints and logs.
    pub fn status_line(&self) -> String {
        let on_off = |b: bool| if b { "on" } else { "off" };
        format!(
            "Orbit: {} • Wireframe: {} • Anim 1: {} • Anim 2: {} • Speed: {:.1} • Shrinks: {}",
            on_off(self.orbit_enabled),
            on_off(self.wireframe),
            on_off(self.animation_1),
            on_off(self.animation_2),
            self.speed_factor,
            self.shrink_presses
        )
    }
}
