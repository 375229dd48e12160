//! Player domain: input sampling into the per-frame snapshot.

use bevy::prelude::*;

use crate::player::MovementInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut axis = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }

    input.axis = axis;
    // Jump fires on hold, so keeping the button down re-jumps on landing
    input.jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyW);
    input.dash_just_pressed =
        keyboard.just_pressed(KeyCode::KeyF) || keyboard.just_pressed(KeyCode::ShiftLeft);
    input.bullet_time_just_pressed = keyboard.just_pressed(KeyCode::KeyQ);
}
