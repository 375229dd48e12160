//! Player domain: identity, state machine, and timed-effect components.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// The four mutually exclusive player states. `Dead` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Walking,
    Jumping,
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Current and previous state labels. Previous is kept for observers
/// (debug overlay, transition logs); the table itself only reads current.
#[derive(Component, Debug, Default)]
pub struct StateMachine {
    pub current: PlayerState,
    pub previous: PlayerState,
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub grounded: bool,
    pub dead: bool,
    pub facing: Facing,
    /// Narrow footprint while moving eases wall contact.
    pub narrow_collider: bool,
}

/// Simulation speed multiplier for this body: scales the horizontal speed
/// cap and ramp, divides gravity. 1.0 outside bullet-time.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct TimeDilation(pub f32);

impl Default for TimeDilation {
    fn default() -> Self {
        Self(1.0)
    }
}

/// A dash in flight. Presence blocks re-entry; expiry removes only this
/// component and leaves every other running effect alone.
#[derive(Component, Debug)]
pub struct ActiveDash {
    pub remaining: f32,
}

/// Bullet-time in flight. Presence blocks re-entry; expiry restores normal
/// time dilation and removes only this component.
#[derive(Component, Debug)]
pub struct ActiveBulletTime {
    pub remaining: f32,
}

impl ActiveDash {
    /// Advance the timer. Returns true once the dash has run its course.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}

impl ActiveBulletTime {
    /// Advance the timer. Returns true once the effect has run its course.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}
