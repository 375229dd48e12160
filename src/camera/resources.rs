//! Camera domain: tuning and RNG resources.

use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::config::CameraTuningDef;

#[derive(Resource, Debug, Clone)]
pub struct CameraTuning {
    pub offset: Vec2,
    pub smoothing: f32,
}

impl CameraTuning {
    pub fn from_def(def: &CameraTuningDef) -> Self {
        Self {
            offset: Vec2::new(def.offset.0, def.offset.1),
            smoothing: def.smoothing,
        }
    }
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self::from_def(&CameraTuningDef::default())
    }
}

/// Shake offsets are drawn from this stream, seeded from the run seed so a
/// replayed seed reproduces them.
#[derive(Resource, Debug)]
pub struct ShakeRng(pub ChaCha8Rng);
