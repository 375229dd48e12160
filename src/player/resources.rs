//! Player domain: tuning and input snapshot resources.

use bevy::prelude::*;

use crate::config::MovementTuningDef;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub acceleration_time: f32,
    pub deceleration_time: f32,
    pub dash_impulse: f32,
    pub dash_duration: f32,
    pub apex_height: f32,
    pub apex_time: f32,
    pub bullet_time_factor: f32,
    pub bullet_time_duration: f32,
    pub ground_check_offset: f32,
    pub ground_check_size: Vec2,
    pub collider_stand_width: f32,
    pub collider_walk_width: f32,
    pub collider_height: f32,
}

impl MovementTuning {
    pub fn from_def(def: &MovementTuningDef) -> Self {
        Self {
            max_speed: def.max_speed,
            acceleration_time: def.acceleration_time,
            deceleration_time: def.deceleration_time,
            dash_impulse: def.dash_impulse,
            dash_duration: def.dash_duration,
            apex_height: def.apex_height,
            apex_time: def.apex_time,
            bullet_time_factor: def.bullet_time_factor,
            bullet_time_duration: def.bullet_time_duration,
            ground_check_offset: def.ground_check_offset,
            ground_check_size: Vec2::new(def.ground_check_size.0, def.ground_check_size.1),
            collider_stand_width: def.collider_stand_width,
            collider_walk_width: def.collider_walk_width,
            collider_height: def.collider_height,
        }
    }

    /// Ramp rate toward the speed cap while input is held.
    pub fn acceleration_rate(&self) -> f32 {
        self.max_speed / self.acceleration_time
    }

    /// Ramp rate back toward rest once input is released.
    pub fn deceleration_rate(&self) -> f32 {
        self.max_speed / self.deceleration_time
    }

    /// Constant gravity derived from the desired jump apex: g = -2h / t².
    pub fn gravity(&self) -> f32 {
        -2.0 * self.apex_height / (self.apex_time * self.apex_time)
    }

    /// Launch speed that peaks at `apex_height` after `apex_time`: v0 = 2h / t.
    pub fn initial_jump_speed(&self) -> f32 {
        2.0 * self.apex_height / self.apex_time
    }
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from_def(&MovementTuningDef::default())
    }
}

/// Per-frame input snapshot. Sampled once at the top of the frame; every
/// downstream system reads this instead of polling the keyboard itself.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Raw horizontal axis: -1, 0, or +1.
    pub axis: f32,
    pub jump_held: bool,
    pub dash_just_pressed: bool,
    pub bullet_time_just_pressed: bool,
}
