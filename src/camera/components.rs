//! Camera domain: follow rig and shake effect components.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// The camera that tracks the player, with its follow parameters.
#[derive(Component, Debug)]
pub struct FollowCamera {
    /// Offset from the follow target, world units.
    pub offset: Vec2,
    /// Exponential follow rate; higher snaps harder.
    pub smoothing: f32,
}

/// A shake in flight on the camera. There is exactly one: requesting a new
/// shake while one is active restarts it rather than racing a second timer.
/// Expiry removes the component; no component means no offset.
#[derive(Component, Debug)]
pub struct ActiveShake {
    pub intensity: f32,
    pub remaining: f32,
    /// This frame's sampled offset, re-rolled every tick while active.
    pub offset: Vec2,
}

impl ActiveShake {
    /// Advance the timer. Returns true once the shake has run its course.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}

/// Ask the camera to shake. Anything may send this; the camera domain owns
/// the effect's lifecycle.
#[derive(Debug, Clone, Copy)]
pub struct ShakeRequest {
    pub intensity: f32,
    pub duration: f32,
}

impl Message for ShakeRequest {}
