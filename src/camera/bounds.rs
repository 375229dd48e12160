//! Camera domain: clamp rectangle derivation.

use bevy::prelude::*;

/// Horizontal and bottom clamp for the follow camera, world units. There is
/// deliberately no top field: the camera may travel upward without limit.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}

impl CameraBounds {
    /// Derive the clamp rectangle from the level's compressed bounds, pulled
    /// inward by the viewport half-extents. A level narrower than the
    /// viewport pins the camera to the level's horizontal center.
    pub fn from_level(origin: Vec2, size: Vec2, viewport_half: Vec2) -> Self {
        let mut left = origin.x + viewport_half.x;
        let mut right = origin.x + size.x - viewport_half.x;
        if left > right {
            let center = origin.x + size.x * 0.5;
            left = center;
            right = center;
        }

        Self {
            left,
            right,
            bottom: origin.y + viewport_half.y,
        }
    }

    /// Clamp a desired camera position into the rectangle. Only the bottom
    /// is clamped vertically.
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x.clamp(self.left, self.right),
            position.y.max(self.bottom),
        )
    }
}

/// World-space viewport half-extents of an orthographic camera.
pub fn viewport_half_size(resolution: Vec2, ortho_scale: f32) -> Vec2 {
    resolution * 0.5 * ortho_scale
}

/// Frame-rate independent interpolation factor `1 - e^(-smoothing * dt)`.
/// Strictly inside (0, 1) for positive smoothing and dt, so a tick moves
/// toward the desired position but can never overshoot it.
pub fn smoothing_factor(smoothing: f32, dt: f32) -> f32 {
    1.0 - (-smoothing * dt).exp()
}
