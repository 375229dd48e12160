//! Player domain: dash and bullet-time, each on its own clock.
//!
//! Every timed effect is its own component with its own timer. Expiry
//! removes that component and nothing else, so a dash finishing mid
//! bullet-time leaves the bullet-time clock running.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{
    ActiveBulletTime, ActiveDash, Facing, MovementInput, MovementState, MovementTuning, Player,
    TimeDilation,
};

/// One-shot impulse in the facing direction. The `Without<ActiveDash>`
/// filter is the re-entrancy gate: no new dash until the current timer runs
/// out.
pub(crate) fn start_dash(
    mut commands: Commands,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (Entity, &mut LinearVelocity, &MovementState, &TimeDilation),
        (With<Player>, Without<ActiveDash>),
    >,
) {
    if !input.dash_just_pressed {
        return;
    }

    for (entity, mut velocity, state, dilation) in &mut query {
        let direction = match state.facing {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        };
        velocity.x += direction * tuning.dash_impulse * dilation.0;

        commands.entity(entity).insert(ActiveDash {
            remaining: tuning.dash_duration,
        });
        debug!(
            "Dash {:?}: impulse {:.1}",
            state.facing,
            tuning.dash_impulse * dilation.0
        );
    }
}

pub(crate) fn start_bullet_time(
    mut commands: Commands,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &mut TimeDilation), (With<Player>, Without<ActiveBulletTime>)>,
) {
    if !input.bullet_time_just_pressed {
        return;
    }

    for (entity, mut dilation) in &mut query {
        dilation.0 = tuning.bullet_time_factor;
        commands.entity(entity).insert(ActiveBulletTime {
            remaining: tuning.bullet_time_duration,
        });
        info!(
            "Bullet time x{} for {:.1}s",
            tuning.bullet_time_factor, tuning.bullet_time_duration
        );
    }
}

/// Advance every running effect independently. Each expiry removes only its
/// own component; bullet-time expiry additionally restores normal dilation.
pub(crate) fn tick_effects(
    time: Res<Time>,
    mut commands: Commands,
    mut dashes: Query<(Entity, &mut ActiveDash)>,
    mut bullet_times: Query<(Entity, &mut ActiveBulletTime, &mut TimeDilation)>,
) {
    let dt = time.delta_secs();

    for (entity, mut dash) in &mut dashes {
        if dash.tick(dt) {
            commands.entity(entity).remove::<ActiveDash>();
            debug!("Dash finished");
        }
    }

    for (entity, mut bullet_time, mut dilation) in &mut bullet_times {
        if bullet_time.tick(dt) {
            dilation.0 = 1.0;
            commands.entity(entity).remove::<ActiveBulletTime>();
            info!("Bullet time over");
        }
    }
}
