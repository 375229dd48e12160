//! Player domain: the pure state transition table.

use crate::player::components::PlayerState;

/// Everything the transition table is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensors {
    pub grounded: bool,
    /// Horizontal velocity is nonzero this frame.
    pub moving: bool,
    pub dead: bool,
}

/// Transition table, evaluated once per frame before integration.
/// The dead flag forces `Dead` from any state, and `Dead` has no exits.
pub fn next_state(state: PlayerState, sensors: Sensors) -> PlayerState {
    if sensors.dead {
        return PlayerState::Dead;
    }

    match state {
        PlayerState::Dead => PlayerState::Dead,
        PlayerState::Idle => {
            if !sensors.grounded {
                PlayerState::Jumping
            } else if sensors.moving {
                PlayerState::Walking
            } else {
                PlayerState::Idle
            }
        }
        PlayerState::Walking => {
            if !sensors.grounded {
                PlayerState::Jumping
            } else if !sensors.moving {
                PlayerState::Idle
            } else {
                PlayerState::Walking
            }
        }
        PlayerState::Jumping => {
            if sensors.grounded {
                if sensors.moving {
                    PlayerState::Walking
                } else {
                    PlayerState::Idle
                }
            } else {
                PlayerState::Jumping
            }
        }
    }
}
