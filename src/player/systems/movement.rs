//! Player domain: state transitions and velocity integration.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::state::{Sensors, next_state};
use crate::player::{
    ActiveDash, Facing, MovementInput, MovementState, MovementTuning, Player, StateMachine,
    TimeDilation,
};

/// One horizontal velocity step.
///
/// With input held, ramp toward the dilated speed cap and clamp to it; a
/// dash in flight suppresses this branch so the impulse is not clamped away.
/// With no input, ramp back toward zero and stop exactly there — the
/// min/max pair keeps the sign from flipping on a large dt.
pub(crate) fn step_horizontal(
    vx: f32,
    axis: f32,
    dt: f32,
    time_scale: f32,
    dashing: bool,
    tuning: &MovementTuning,
) -> f32 {
    if axis != 0.0 {
        if dashing {
            return vx;
        }
        let cap = tuning.max_speed * time_scale;
        (vx + tuning.acceleration_rate() * axis * dt * time_scale).clamp(-cap, cap)
    } else if vx > 0.0 {
        (vx - tuning.deceleration_rate() * dt).max(0.0)
    } else if vx < 0.0 {
        (vx + tuning.deceleration_rate() * dt).min(0.0)
    } else {
        0.0
    }
}

/// One vertical velocity step. Grounded bodies fall at exactly zero;
/// airborne ones integrate gravity, stretched by the time scale.
pub(crate) fn step_vertical(
    vy: f32,
    grounded: bool,
    dt: f32,
    time_scale: f32,
    gravity: f32,
) -> f32 {
    if grounded {
        0.0
    } else {
        vy + gravity * dt / time_scale
    }
}

/// Evaluate the transition table once, before any integration this frame.
pub(crate) fn apply_transitions(
    mut query: Query<(&mut StateMachine, &MovementState, &LinearVelocity), With<Player>>,
) {
    for (mut machine, state, velocity) in &mut query {
        let sensors = Sensors {
            grounded: state.grounded,
            moving: velocity.x != 0.0,
            dead: state.dead,
        };

        let next = next_state(machine.current, sensors);
        machine.previous = machine.current;
        if next != machine.current {
            debug!("Player state {:?} -> {:?}", machine.current, next);
            machine.current = next;
        }
    }
}

pub(crate) fn apply_horizontal(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut LinearVelocity,
            &mut MovementState,
            &TimeDilation,
            Option<&ActiveDash>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut velocity, mut state, dilation, dash) in &mut query {
        if input.axis < 0.0 {
            state.facing = Facing::Left;
        } else if input.axis > 0.0 {
            state.facing = Facing::Right;
        }

        velocity.x = step_horizontal(
            velocity.x,
            input.axis,
            dt,
            dilation.0,
            dash.is_some(),
            &tuning,
        );
    }
}

/// Swap the collider footprint when the moving flag flips: narrow while
/// walking, wide at rest.
pub(crate) fn resize_collider(
    mut commands: Commands,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &mut MovementState), With<Player>>,
) {
    for (entity, mut state) in &mut query {
        let narrow = input.axis != 0.0;
        if narrow == state.narrow_collider {
            continue;
        }
        state.narrow_collider = narrow;

        let width = if narrow {
            tuning.collider_walk_width
        } else {
            tuning.collider_stand_width
        };
        commands
            .entity(entity)
            .insert(Collider::rectangle(width, tuning.collider_height));
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut LinearVelocity, &mut MovementState), With<Player>>,
) {
    for (mut velocity, mut state) in &mut query {
        if state.grounded && input.jump_held {
            velocity.y = tuning.initial_jump_speed();
            // Flag airborne immediately so the gravity step below does not
            // zero the impulse back out.
            state.grounded = false;
            debug!("Jump: v0={:.1}", velocity.y);
        }
    }
}

pub(crate) fn apply_vertical(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut LinearVelocity, &MovementState, &TimeDilation), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut velocity, state, dilation) in &mut query {
        velocity.y = step_vertical(velocity.y, state.grounded, dt, dilation.0, tuning.gravity());
    }
}
