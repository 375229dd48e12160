//! Data definitions for the tuning RON file.
//!
//! These structs mirror the structure in assets/config/tuning.ron. The
//! camera and player domains convert them into their runtime resources;
//! the defaults here are the single source of the shipped numbers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TuningFile {
    pub schema_version: u32,
    pub camera: CameraTuningDef,
    pub movement: MovementTuningDef,
}

impl Default for TuningFile {
    fn default() -> Self {
        Self {
            schema_version: 1,
            camera: CameraTuningDef::default(),
            movement: MovementTuningDef::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CameraTuningDef {
    /// Offset from the follow target, world units.
    pub offset: (f32, f32),
    /// Exponential follow rate; higher snaps harder.
    pub smoothing: f32,
}

impl Default for CameraTuningDef {
    fn default() -> Self {
        Self {
            offset: (0.0, 48.0),
            smoothing: 5.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementTuningDef {
    pub max_speed: f32,
    /// Seconds to ramp from rest to max_speed.
    pub acceleration_time: f32,
    /// Seconds to ramp from max_speed to rest.
    pub deceleration_time: f32,
    pub dash_impulse: f32,
    pub dash_duration: f32,
    /// Desired jump peak height, world units.
    pub apex_height: f32,
    /// Seconds to reach the jump peak.
    pub apex_time: f32,
    pub bullet_time_factor: f32,
    pub bullet_time_duration: f32,
    /// Distance below the body center of the ground probe.
    pub ground_check_offset: f32,
    pub ground_check_size: (f32, f32),
    pub collider_stand_width: f32,
    pub collider_walk_width: f32,
    pub collider_height: f32,
}

impl Default for MovementTuningDef {
    fn default() -> Self {
        Self {
            max_speed: 320.0,
            acceleration_time: 0.25,
            deceleration_time: 0.15,
            dash_impulse: 640.0,
            dash_duration: 1.0,
            apex_height: 120.0,
            apex_time: 0.45,
            bullet_time_factor: 2.0,
            bullet_time_duration: 3.0,
            ground_check_offset: 26.0,
            ground_check_size: (20.0, 6.0),
            collider_stand_width: 24.0,
            collider_walk_width: 20.0,
            collider_height: 48.0,
        }
    }
}
