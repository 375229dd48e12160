//! Level domain: test level spawning, world bounds, and the kill plane.

mod map;

#[cfg(test)]
mod tests;

pub use map::{LevelBounds, TILE_SIZE};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameSet;
use crate::player::{GameLayer, MovementState, Player};

/// Bottom-left corner of the tile map in world space, chosen so the map is
/// centered horizontally and the floor sits near the bottom of the view.
const MAP_ORIGIN: Vec2 = Vec2::new(-976.0, -224.0);

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level)
            // The dead flag must be in place before the state machine runs.
            .add_systems(Update, apply_kill_plane.before(GameSet::Player));
    }
}

pub(crate) fn spawn_level(mut commands: Commands) {
    let rows = map::LEVEL_MAP;
    let total_rows = rows.len();

    let Some(tiles) = map::compressed_bounds(rows) else {
        warn!("Level map has no solid tiles; skipping spawn");
        return;
    };

    let bounds = LevelBounds::from_tiles(MAP_ORIGIN, total_rows, tiles);
    info!(
        "Level bounds: origin ({:.0}, {:.0}), size ({:.0}, {:.0})",
        bounds.origin.x, bounds.origin.y, bounds.size.x, bounds.size.y
    );
    commands.insert_resource(bounds);

    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    for run in map::solid_runs(rows) {
        let size = Vec2::new(run.len as f32 * TILE_SIZE, TILE_SIZE);
        let center = map::run_center(MAP_ORIGIN, total_rows, &run);
        let (color, layers) = if run.glyph == map::WALL_GLYPH {
            (wall_color, wall_layers)
        } else {
            (ground_color, ground_layers)
        };

        commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            layers,
        ));
    }
}

/// Falling out of the level is fatal. The flag is only ever set, never
/// cleared: `Dead` is terminal.
fn apply_kill_plane(
    bounds: Option<Res<LevelBounds>>,
    mut query: Query<(&Transform, &mut MovementState), With<Player>>,
) {
    let Some(bounds) = bounds else {
        return;
    };

    for (transform, mut state) in &mut query {
        if !state.dead && transform.translation.y < bounds.kill_y() {
            state.dead = true;
            info!(
                "Player fell out of the level at y={:.1}",
                transform.translation.y
            );
        }
    }
}
