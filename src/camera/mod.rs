//! Camera domain: plugin wiring and public exports.

mod bounds;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use bounds::CameraBounds;
pub use components::{ActiveShake, FollowCamera, ShakeRequest};
pub use resources::{CameraTuning, ShakeRng};

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::TuningConfig;
use crate::core::{GameSet, RunSeed};
use crate::level::LevelBounds;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .add_message::<ShakeRequest>()
            .add_systems(
                Startup,
                (apply_tuning_config, systems::setup_camera).chain(),
            )
            // PostStartup so the level bounds and run seed from Startup are in.
            .add_systems(
                PostStartup,
                (
                    seed_shake_rng,
                    systems::compute_camera_bounds.run_if(resource_exists::<LevelBounds>),
                ),
            )
            .add_systems(
                Update,
                (
                    systems::begin_shake,
                    systems::tick_shake,
                    systems::follow_target.run_if(resource_exists::<CameraBounds>),
                    systems::refresh_bounds_on_resize.run_if(resource_exists::<CameraBounds>),
                )
                    .chain()
                    .in_set(GameSet::Camera),
            );
    }
}

fn apply_tuning_config(config: Res<TuningConfig>, mut tuning: ResMut<CameraTuning>) {
    if let Some(file) = &config.0 {
        *tuning = CameraTuning::from_def(&file.camera);
    }
}

fn seed_shake_rng(mut commands: Commands, seed: Res<RunSeed>) {
    commands.insert_resource(ShakeRng(ChaCha8Rng::seed_from_u64(seed.0)));
}
