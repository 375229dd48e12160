//! Player domain: plugin wiring and public exports.

mod components;
mod resources;
mod state;
mod systems;


pub use components::{
    ActiveBulletTime, ActiveDash, Facing, GameLayer, MovementState, Player, PlayerState,
    StateMachine, TimeDilation,
};
pub use resources::{MovementInput, MovementTuning};
pub use state::{Sensors, next_state};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::config::TuningConfig;
use crate::core::GameSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, (apply_tuning_config, spawn_player).chain())
            .add_systems(Update, systems::read_input.in_set(GameSet::Input))
            .add_systems(
                Update,
                (
                    systems::detect_ground,
                    systems::apply_transitions,
                    systems::apply_horizontal,
                    systems::resize_collider,
                    systems::apply_jump,
                    systems::apply_vertical,
                    systems::start_dash,
                    systems::start_bullet_time,
                    systems::tick_effects,
                )
                    .chain()
                    .in_set(GameSet::Player),
            );
    }
}

fn apply_tuning_config(config: Res<TuningConfig>, mut tuning: ResMut<MovementTuning>) {
    if let Some(file) = &config.0 {
        *tuning = MovementTuning::from_def(&file.movement);
    }
}

fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    commands.spawn((
        (
            Player,
            StateMachine::default(),
            MovementState::default(),
            TimeDilation::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(
                tuning.collider_stand_width,
                tuning.collider_height,
            )),
            ..default()
        },
        Transform::from_xyz(0.0, 60.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(tuning.collider_stand_width, tuning.collider_height),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // gravity is integrated manually from the apex tuning
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
