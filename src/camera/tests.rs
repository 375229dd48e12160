//! Camera domain: tests for smoothing, clamping, and the shake lifecycle.

use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::bounds::{CameraBounds, smoothing_factor, viewport_half_size};
use super::components::ActiveShake;
use super::resources::ShakeRng;
use super::systems::{sample_in_unit_disk, tick_shake};

// -----------------------------------------------------------------------------
// Smoothing tests
// -----------------------------------------------------------------------------

#[test]
fn test_smoothing_factor_stays_inside_unit_interval() {
    for smoothing in [0.1, 1.0, 5.0, 50.0, 500.0] {
        for dt in [0.0001, 0.008, 0.016, 0.1, 1.0, 10.0] {
            let t = smoothing_factor(smoothing, dt);
            assert!(
                t > 0.0 && t < 1.0,
                "factor {} out of (0,1) for s={}, dt={}",
                t,
                smoothing,
                dt
            );
        }
    }
}

#[test]
fn test_smoothing_never_overshoots_in_one_tick() {
    let current = 0.0_f32;
    let desired = 100.0_f32;
    let t = smoothing_factor(5.0, 0.016);
    let next = current + (desired - current) * t;
    assert!(next > current && next < desired);
}

// -----------------------------------------------------------------------------
// Bounds tests
// -----------------------------------------------------------------------------

#[test]
fn test_viewport_half_size() {
    assert_eq!(
        viewport_half_size(Vec2::new(1280.0, 720.0), 1.0),
        Vec2::new(640.0, 360.0)
    );
    assert_eq!(
        viewport_half_size(Vec2::new(1280.0, 720.0), 0.5),
        Vec2::new(320.0, 180.0)
    );
}

#[test]
fn test_bounds_from_level() {
    let bounds = CameraBounds::from_level(
        Vec2::new(-976.0, -224.0),
        Vec2::new(1952.0, 384.0),
        Vec2::new(640.0, 360.0),
    );

    assert_eq!(bounds.left, -336.0);
    assert_eq!(bounds.right, 336.0);
    assert_eq!(bounds.bottom, 136.0);
}

#[test]
fn test_narrow_level_pins_camera_to_center() {
    // Level half as wide as the viewport: left would exceed right
    let bounds = CameraBounds::from_level(
        Vec2::new(-100.0, 0.0),
        Vec2::new(200.0, 400.0),
        Vec2::new(640.0, 360.0),
    );

    assert_eq!(bounds.left, bounds.right);
    assert_eq!(bounds.left, 0.0);
}

#[test]
fn test_clamp_keeps_interior_points() {
    let bounds = CameraBounds {
        left: -336.0,
        right: 336.0,
        bottom: 136.0,
    };
    let p = Vec2::new(10.0, 200.0);
    assert_eq!(bounds.clamp(p), p);
}

#[test]
fn test_clamp_pulls_in_horizontal_overshoot() {
    let bounds = CameraBounds {
        left: -336.0,
        right: 336.0,
        bottom: 136.0,
    };
    assert_eq!(bounds.clamp(Vec2::new(1000.0, 200.0)).x, 336.0);
    assert_eq!(bounds.clamp(Vec2::new(-1000.0, 200.0)).x, -336.0);
}

#[test]
fn test_clamp_has_no_top_bound() {
    let bounds = CameraBounds {
        left: -336.0,
        right: 336.0,
        bottom: 136.0,
    };
    assert_eq!(bounds.clamp(Vec2::new(0.0, 1.0e6)).y, 1.0e6);
    assert_eq!(bounds.clamp(Vec2::new(0.0, -1.0e6)).y, 136.0);
}

// -----------------------------------------------------------------------------
// Shake tests
// -----------------------------------------------------------------------------

#[test]
fn test_unit_disk_samples_stay_inside() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..1000 {
        let p = sample_in_unit_disk(&mut rng);
        assert!(p.length_squared() <= 1.0);
    }
}

#[test]
fn test_seeded_sampling_is_reproducible() {
    let mut a = ChaCha8Rng::seed_from_u64(42);
    let mut b = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..32 {
        assert_eq!(sample_in_unit_disk(&mut a), sample_in_unit_disk(&mut b));
    }
}

fn shake_world(dt: f32) -> World {
    let mut world = World::new();
    let mut time = Time::<()>::default();
    time.advance_by(Duration::from_secs_f32(dt));
    world.insert_resource(time);
    world.insert_resource(ShakeRng(ChaCha8Rng::seed_from_u64(7)));
    world
}

#[test]
fn test_shake_offset_is_bounded_by_intensity() {
    let mut world = shake_world(0.016);
    let camera = world
        .spawn(ActiveShake {
            intensity: 3.0,
            remaining: 2.0,
            offset: Vec2::ZERO,
        })
        .id();

    world.run_system_once(tick_shake).unwrap();

    let shake = world.get::<ActiveShake>(camera).unwrap();
    assert!(shake.offset.length() <= 3.0);
    assert!(shake.remaining < 2.0);
}

#[test]
fn test_shake_expires_and_is_removed() {
    let mut world = shake_world(0.1);
    let camera = world
        .spawn(ActiveShake {
            intensity: 3.0,
            remaining: 0.05,
            offset: Vec2::ZERO,
        })
        .id();

    world.run_system_once(tick_shake).unwrap();

    // Component gone means the follow system reads a zero offset again
    assert!(world.get::<ActiveShake>(camera).is_none());
}
