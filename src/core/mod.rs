//! Core domain: frame ordering across domains and the per-run seed.

use bevy::prelude::*;
use rand::Rng;

/// Update-schedule ordering. Input is sampled first, the player integrates
/// against that snapshot, and the camera reads the resulting transforms last.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameSet {
    Input,
    Player,
    Camera,
}

/// Seed for everything randomized during a run (currently camera shake).
/// Logged at startup so a run can be replayed.
#[derive(Resource, Debug, Default)]
pub struct RunSeed(pub u64);

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunSeed>()
            .configure_sets(
                Update,
                (GameSet::Input, GameSet::Player, GameSet::Camera).chain(),
            )
            .add_systems(Startup, initialize_seed);
    }
}

fn initialize_seed(mut seed: ResMut<RunSeed>) {
    seed.0 = rand::rng().random();
    info!("Run seed: {}", seed.0);
}
