//! Keyboard dispatch: one command per key, each with a single effect.

use crate::constants::SHRINK_FACTOR;
use crate::scene::Scene;
use crate::state::InteractionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    ToggleOrbit,
    ToggleWireframe,
    ToggleAnimation1,
    ToggleAnimation2,
    SpeedUp,
    SlowDown,
    Shrink,
}

/// Map a key name (`KeyboardEvent.key` on the web, the logical character on
/// native) to its command.
#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "o" | "O" => Some(KeyCommand::ToggleOrbit),
        "w" | "W" => Some(KeyCommand::ToggleWireframe),
        "1" => Some(KeyCommand::ToggleAnimation1),
        "2" => Some(KeyCommand::ToggleAnimation2),
        "+" => Some(KeyCommand::SpeedUp),
        "-" => Some(KeyCommand::SlowDown),
        "3" => Some(KeyCommand::Shrink),
        _ => None,
    }
}

/// Apply `cmd` to the interaction state and, for wireframe and shrink, to
/// the scene.
pub fn apply(cmd: KeyCommand, state: &mut InteractionState, scene: &mut Scene) {
    match cmd {
        KeyCommand::ToggleOrbit => {
            state.orbit_enabled = !state.orbit_enabled;
            log::info!("[keys] orbit={}", state.orbit_enabled);
        }
        KeyCommand::ToggleWireframe => {
            state.wireframe = !state.wireframe;
            scene.toggle_wireframe();
            log::info!("[keys] wireframe={}", state.wireframe);
        }
        KeyCommand::ToggleAnimation1 => {
            state.animation_1 = !state.animation_1;
            log::info!("[keys] animation_1={}", state.animation_1);
        }
        KeyCommand::ToggleAnimation2 => {
            state.animation_2 = !state.animation_2;
            log::info!("[keys] animation_2={}", state.animation_2);
        }
        KeyCommand::SpeedUp => {
            state.speed_up();
            log::info!("[keys] speed={:.2}", state.speed_factor);
        }
        KeyCommand::SlowDown => {
            state.slow_down();
            log::info!("[keys] speed={:.2}", state.speed_factor);
        }
        KeyCommand::Shrink => {
            let scaled = scene.shrink(SHRINK_FACTOR);
            state.shrink_presses += 1;
            log::info!(
                "[keys] shrink #{} scaled {} nodes",
                state.shrink_presses,
                scaled
            );
        }
    }
}

/// Look up and apply the command bound to `key`, if any.
pub fn handle_key(key: &str, state: &mut InteractionState, scene: &mut Scene) -> Option<KeyCommand> {
    let cmd = command_for_key(key)?;
    apply(cmd, state, scene);
    Some(cmd)
}
