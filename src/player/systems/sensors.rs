//! Player domain: ground sensing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{GameLayer, MovementState, MovementTuning, Player};

/// Box overlap test a fixed distance below the body center, filtered to the
/// Ground layer. The result feeds both the state machine and the vertical
/// velocity reset in the same frame.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut MovementState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let probe = Collider::rectangle(tuning.ground_check_size.x, tuning.ground_check_size.y);

    for (transform, mut state) in &mut query {
        let was_grounded = state.grounded;

        let probe_center =
            transform.translation.truncate() - Vec2::new(0.0, tuning.ground_check_offset);
        let hits = spatial_query.shape_intersections(&probe, probe_center, 0.0, &ground_filter);

        state.grounded = !hits.is_empty();

        if state.grounded && !was_grounded {
            debug!("Landed at y={:.1}", transform.translation.y);
        } else if !state.grounded && was_grounded {
            debug!("Left ground at y={:.1}", transform.translation.y);
        }
    }
}
