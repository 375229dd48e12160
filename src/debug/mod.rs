//! Dev tools: info overlay, effect hotkeys, and trail ghosts.
//!
//! Hotkeys:
//! - F1 toggles the info overlay
//! - E shakes the camera
//! - K sets the dead flag
//! - P (held) drops trail ghosts at the player position

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::camera::ShakeRequest;
use crate::player::{
    ActiveBulletTime, ActiveDash, MovementState, Player, StateMachine, TimeDilation,
};

const TRAIL_LIFETIME: f32 = 0.4;

/// Marker for the overlay text node.
#[derive(Component, Debug)]
pub struct DebugOverlay;

/// A fading copy of the player sprite left behind while the trail key is held.
#[derive(Component, Debug)]
pub struct TrailGhost {
    pub remaining: f32,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                toggle_overlay,
                update_overlay,
                handle_hotkeys,
                spawn_trail_ghosts,
                fade_trail_ghosts,
            ),
        );
    }
}

fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    existing: Query<Entity, With<DebugOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    if existing.is_empty() {
        commands.spawn((
            DebugOverlay,
            Text::new("..."),
            TextFont {
                font_size: 12.0,
                ..default()
            },
            TextColor(Color::srgb(0.8, 0.9, 0.8)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(20.0),
                bottom: Val::Px(20.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ZIndex(500),
        ));
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

fn update_overlay(
    player: Query<
        (
            &Transform,
            &StateMachine,
            &MovementState,
            &TimeDilation,
            Option<&ActiveDash>,
            Option<&ActiveBulletTime>,
        ),
        With<Player>,
    >,
    mut overlay: Query<&mut Text, With<DebugOverlay>>,
) {
    let Ok(mut text) = overlay.single_mut() else {
        return;
    };
    let Ok((transform, machine, state, dilation, dash, bullet_time)) = player.single() else {
        return;
    };

    **text = format!(
        "Pos: ({:.0}, {:.0})\nState: {:?} (was {:?})\nGrounded: {}\nFacing: {:?}\nDilation: x{}\nDash: {}\nBullet time: {}",
        transform.translation.x,
        transform.translation.y,
        machine.current,
        machine.previous,
        state.grounded,
        state.facing,
        dilation.0,
        dash.map_or("-".to_string(), |d| format!("{:.2}s", d.remaining)),
        bullet_time.map_or("-".to_string(), |b| format!("{:.2}s", b.remaining)),
    );
}

fn handle_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut shake_requests: MessageWriter<ShakeRequest>,
    mut player: Query<&mut MovementState, With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::KeyE) {
        shake_requests.write(ShakeRequest {
            intensity: 3.0,
            duration: 2.0,
        });
    }

    if keyboard.just_pressed(KeyCode::KeyK) {
        for mut state in &mut player {
            if !state.dead {
                state.dead = true;
                info!("[DEBUG] Player marked dead");
            }
        }
    }
}

fn spawn_trail_ghosts(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    player: Query<(&Transform, &Sprite), With<Player>>,
) {
    if !keyboard.pressed(KeyCode::KeyP) {
        return;
    }

    for (transform, sprite) in &player {
        commands.spawn((
            TrailGhost {
                remaining: TRAIL_LIFETIME,
            },
            Sprite {
                color: sprite.color.with_alpha(0.5),
                custom_size: sprite.custom_size,
                ..default()
            },
            Transform::from_translation(transform.translation - Vec3::Z * 0.1),
        ));
    }
}

fn fade_trail_ghosts(
    time: Res<Time>,
    mut commands: Commands,
    mut ghosts: Query<(Entity, &mut TrailGhost, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut ghost, mut sprite) in &mut ghosts {
        ghost.remaining -= dt;
        if ghost.remaining <= 0.0 {
            commands.entity(entity).despawn();
        } else {
            let alpha = 0.5 * ghost.remaining / TRAIL_LIFETIME;
            sprite.color.set_alpha(alpha);
        }
    }
}
