//! Local frame transform
//!
//! Objects on the desk rotate only about the vertical axis, so converting between
//! world space and an object's own frame is a planar rotation of the (x, z) offset.
//! Colliders, the pen canvas and the speaker panning all go through these two calls.

/// Rotate a world-space planar offset into the object's yaw-rotated local frame.
///
/// Equivalent to applying the rotation matrix for `-yaw`.
#[inline]
pub fn world_to_local(world_x: f32, world_z: f32, yaw: f32) -> (f32, f32) {
    let (sin, cos) = (-yaw).sin_cos();
    let lx = world_x * cos - world_z * sin;
    let lz = world_x * sin + world_z * cos;
    (lx, lz)
}

/// Rotate a local planar offset back into world space (rotation by `+yaw`).
#[inline]
pub fn local_to_world(local_x: f32, local_z: f32, yaw: f32) -> (f32, f32) {
    let (sin, cos) = yaw.sin_cos();
    let wx = local_x * cos - local_z * sin;
    let wz = local_x * sin + local_z * cos;
    (wx, wz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    const EPS: f32 = 1e-5;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS
    }

    #[test]
    fn zero_yaw_is_identity() {
        assert!(close(world_to_local(0.3, -0.7, 0.0), (0.3, -0.7)));
        assert!(close(local_to_world(0.3, -0.7, 0.0), (0.3, -0.7)));
    }

    #[test]
    fn quarter_turn_maps_x_onto_z() {
        assert!(close(local_to_world(1.0, 0.0, FRAC_PI_2), (0.0, 1.0)));
        assert!(close(world_to_local(0.0, 1.0, FRAC_PI_2), (1.0, 0.0)));
    }

    #[test]
    fn local_and_world_are_inverses() {
        for &yaw in &[-3.0, -0.4, 0.0, 0.9, PI, 5.5, 13.0] {
            let (lx, lz) = world_to_local(0.42, -1.3, yaw);
            assert!(close(local_to_world(lx, lz, yaw), (0.42, -1.3)), "yaw={yaw}");
        }
    }

    #[test]
    fn yaw_is_periodic() {
        let a = local_to_world(0.25, 0.6, 0.8);
        let b = local_to_world(0.25, 0.6, 0.8 + TAU);
        let c = local_to_world(0.25, 0.6, 0.8 - 2.0 * TAU);
        assert!(close(a, b));
        assert!(close(a, c));
    }
}
