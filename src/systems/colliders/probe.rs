use glam::{Vec2, Vec3};
use tracing::trace;

use crate::core::local_to_world;
use crate::domain::{DeskObject, InteractionConfig};

use super::types::{CollisionResult, CollisionVolume, PointProbe};

/// World-space center of a collider, with `y` at its bottom.
///
/// Uses the owner's current yaw, never the yaw stored on the volume.
#[inline]
fn collider_world_position(target: &DeskObject, collider: &CollisionVolume) -> Vec3 {
    let (wx, wz) = local_to_world(collider.x, collider.z, target.yaw);
    Vec3::new(
        target.position.x + wx,
        target.position.y + collider.base_y,
        target.position.z + wz,
    )
}

pub fn collider_world_positions(target: &DeskObject, colliders: &[CollisionVolume]) -> Vec<Vec3> {
    colliders
        .iter()
        .map(|c| collider_world_position(target, c))
        .collect()
}

/// First collider of `target` overlapping the probe cylinder, if any.
///
/// Horizontal overlap needs `probe_epsilon < distance < probe.radius + collider.radius`,
/// so a probe sitting exactly on a collider center does not count. Vertical overlap
/// compares `[probe.y, probe.y + probe.height]` with the collider's world span.
pub fn test_point(
    config: &InteractionConfig,
    probe: &PointProbe,
    target: &DeskObject,
    colliders: &[CollisionVolume],
) -> Option<CollisionResult> {
    for (index, collider) in colliders.iter().enumerate() {
        let center = collider_world_position(target, collider);

        let delta = Vec2::new(probe.x - center.x, probe.z - center.z);
        let distance = delta.length();
        let min_distance = probe.radius + collider.radius;
        if distance >= min_distance || distance <= config.probe_epsilon {
            continue;
        }

        let collider_bottom = center.y;
        let collider_top = center.y + collider.height;
        let probe_top = probe.y + probe.height;
        if probe.y > collider_top || probe_top < collider_bottom {
            continue;
        }

        trace!(target = target.id, collider = index, distance, "probe hit compound collider");
        return Some(CollisionResult {
            delta,
            distance,
            min_distance,
            collider_position: center,
            collider_index: index,
        });
    }
    None
}
