//! Open laptop: the keyboard deck is covered by the outer bounding primitive, the
//! tilted screen is not. A row of thin cylinders stands in for the screen.

use crate::domain::DeskObject;

use super::types::CollisionVolume;

/// Screen lean back from vertical (radians)
pub const SCREEN_TILT: f32 = 0.26;
pub const SCREEN_WIDTH: f32 = 0.9;
pub const SCREEN_HEIGHT: f32 = 0.55;
/// Hinge position along local z (behind the laptop origin)
pub const SCREEN_HINGE_Z: f32 = -0.28;
/// Top of the keyboard deck, where the screen starts
pub const KEYBOARD_HEIGHT: f32 = 0.04;
/// Kept clear at each side of the screen
pub const SCREEN_MARGIN: f32 = 0.1;
pub const COLLIDER_RADIUS: f32 = 0.08;
pub const COLLIDER_COUNT: usize = 5;

pub fn screen_colliders(object: &DeskObject) -> Vec<CollisionVolume> {
    let s = object.scale;
    let (sin_tilt, cos_tilt) = SCREEN_TILT.sin_cos();

    let bottom_z = SCREEN_HINGE_Z;
    let top_z = SCREEN_HINGE_Z - sin_tilt * SCREEN_HEIGHT;
    let mid_z = (bottom_z + top_z) * 0.5;
    let screen_top_y = KEYBOARD_HEIGHT + cos_tilt * SCREEN_HEIGHT;

    let span = SCREEN_WIDTH - SCREEN_MARGIN;
    let last = (COLLIDER_COUNT - 1) as f32;

    (0..COLLIDER_COUNT)
        .map(|i| {
            let t = i as f32 / last - 0.5;
            CollisionVolume {
                x: t * span * s,
                z: mid_z * s,
                radius: COLLIDER_RADIUS * s,
                height: (screen_top_y - KEYBOARD_HEIGHT) * s,
                base_y: KEYBOARD_HEIGHT * s,
                yaw: object.yaw,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn colliders_span_the_screen_evenly() {
        let laptop = DeskObject::new(1, "laptop", Vec3::ZERO);
        let cs = screen_colliders(&laptop);
        assert_eq!(cs.len(), COLLIDER_COUNT);
        assert!((cs[0].x + 0.4).abs() < 1e-6);
        assert!(cs[2].x.abs() < 1e-6);
        assert!((cs[4].x - 0.4).abs() < 1e-6);
        for c in cs.iter() {
            assert_eq!(c.z, cs[0].z);
            assert!(c.z < SCREEN_HINGE_Z);
            assert_eq!(c.base_y, KEYBOARD_HEIGHT);
            assert!(c.height > 0.5 && c.height < SCREEN_HEIGHT);
        }
    }

    #[test]
    fn everything_scales_uniformly() {
        let small = screen_colliders(&DeskObject::new(1, "laptop", Vec3::ZERO));
        let big = screen_colliders(&DeskObject::new(1, "laptop", Vec3::ZERO).with_scale(2.0));
        for (a, b) in small.iter().zip(big.iter()) {
            assert!((b.x - a.x * 2.0).abs() < 1e-6);
            assert!((b.z - a.z * 2.0).abs() < 1e-6);
            assert!((b.radius - a.radius * 2.0).abs() < 1e-6);
            assert!((b.height - a.height * 2.0).abs() < 1e-6);
            assert!((b.base_y - a.base_y * 2.0).abs() < 1e-6);
        }
    }
}
