//! Player domain: system modules for the per-frame update.

pub(crate) mod effects;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod sensors;

pub(crate) use effects::{start_bullet_time, start_dash, tick_effects};
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_horizontal, apply_jump, apply_transitions, apply_vertical, resize_collider,
};
pub(crate) use sensors::detect_ground;
