//! Camera domain: follow, clamp, and shake systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use rand::Rng;

use crate::camera::bounds::{CameraBounds, smoothing_factor, viewport_half_size};
use crate::camera::components::{ActiveShake, FollowCamera, ShakeRequest};
use crate::camera::resources::{CameraTuning, ShakeRng};
use crate::level::LevelBounds;
use crate::player::Player;

pub(crate) fn setup_camera(mut commands: Commands, tuning: Res<CameraTuning>) {
    commands.spawn((
        Camera2d,
        FollowCamera {
            offset: tuning.offset,
            smoothing: tuning.smoothing,
        },
    ));
}

fn current_viewport_half(window: &Window, projection: &Projection) -> Vec2 {
    let scale = match projection {
        Projection::Orthographic(ortho) => ortho.scale,
        _ => 1.0,
    };
    viewport_half_size(
        Vec2::new(window.resolution.width(), window.resolution.height()),
        scale,
    )
}

/// Derive the clamp rectangle once the level bounds and window exist.
pub(crate) fn compute_camera_bounds(
    mut commands: Commands,
    level: Res<LevelBounds>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<&Projection, With<FollowCamera>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok(projection) = cameras.single() else {
        return;
    };

    let bounds = CameraBounds::from_level(
        level.origin,
        level.size,
        current_viewport_half(window, projection),
    );
    info!(
        "Camera bounds: x in [{:.0}, {:.0}], y >= {:.0}",
        bounds.left, bounds.right, bounds.bottom
    );
    commands.insert_resource(bounds);
}

/// The clamp rectangle depends on the viewport size, so a resize rederives it.
pub(crate) fn refresh_bounds_on_resize(
    mut resized: MessageReader<WindowResized>,
    mut bounds: ResMut<CameraBounds>,
    level: Res<LevelBounds>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<&Projection, With<FollowCamera>>,
) {
    if resized.read().next().is_none() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok(projection) = cameras.single() else {
        return;
    };

    *bounds = CameraBounds::from_level(
        level.origin,
        level.size,
        current_viewport_half(window, projection),
    );
}

/// Start (or restart) the shake from the latest request this frame.
pub(crate) fn begin_shake(
    mut commands: Commands,
    mut requests: MessageReader<ShakeRequest>,
    cameras: Query<Entity, With<FollowCamera>>,
) {
    let Some(request) = requests.read().last() else {
        return;
    };
    let Ok(camera) = cameras.single() else {
        return;
    };

    info!(
        "Camera shake: intensity {:.1} for {:.1}s",
        request.intensity, request.duration
    );
    // Inserting over an existing ActiveShake restarts it; there is never a
    // second timer racing the first.
    commands.entity(camera).insert(ActiveShake {
        intensity: request.intensity,
        remaining: request.duration,
        offset: Vec2::ZERO,
    });
}

/// Re-roll the shake offset every frame while active; expiry removes the
/// component, which is what "offset resets to zero" means here.
pub(crate) fn tick_shake(
    time: Res<Time>,
    mut commands: Commands,
    mut rng: ResMut<ShakeRng>,
    mut shakes: Query<(Entity, &mut ActiveShake)>,
) {
    let dt = time.delta_secs();

    for (entity, mut shake) in &mut shakes {
        shake.offset = sample_in_unit_disk(&mut rng.0) * shake.intensity;
        if shake.tick(dt) {
            commands.entity(entity).remove::<ActiveShake>();
            debug!("Camera shake finished");
        }
    }
}

/// Uniform point inside the unit disk, by rejection from the enclosing square.
pub(crate) fn sample_in_unit_disk(rng: &mut impl Rng) -> Vec2 {
    loop {
        let point = Vec2::new(
            rng.random_range(-1.0_f32..=1.0),
            rng.random_range(-1.0_f32..=1.0),
        );
        if point.length_squared() <= 1.0 {
            return point;
        }
    }
}

/// Ease toward the target each frame, then clamp into the level rectangle.
/// Runs after the player has moved so the camera sees this frame's transform.
pub(crate) fn follow_target(
    time: Res<Time>,
    bounds: Res<CameraBounds>,
    target: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut cameras: Query<(&mut Transform, &FollowCamera, Option<&ActiveShake>)>,
) {
    let Ok(target_transform) = target.single() else {
        return;
    };
    let Ok((mut camera_transform, follow, shake)) = cameras.single_mut() else {
        return;
    };

    let shake_offset = shake.map(|s| s.offset).unwrap_or(Vec2::ZERO);
    let desired = target_transform.translation.truncate() + follow.offset + shake_offset;

    let t = smoothing_factor(follow.smoothing, time.delta_secs());
    let smoothed = camera_transform.translation.truncate().lerp(desired, t);
    let clamped = bounds.clamp(smoothed);

    camera_transform.translation.x = clamped.x;
    camera_transform.translation.y = clamped.y;
}
