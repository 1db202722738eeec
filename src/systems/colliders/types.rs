use glam::{Vec2, Vec3};
use serde::Serialize;

/// One vertical cylinder in its owner's local frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionVolume {
    /// Local planar offset from the owner's origin
    pub x: f32,
    pub z: f32,
    pub radius: f32,
    pub height: f32,
    /// Bottom of the cylinder, relative to the owner's Y
    pub base_y: f32,
    /// Owner yaw when the volume was generated. Informational only: probes
    /// re-read the owner's current yaw.
    pub yaw: f32,
}

/// First collider hit by a point probe.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionResult {
    /// Probe position minus collider center, on the (x, z) plane
    pub delta: Vec2,
    pub distance: f32,
    /// Sum of probe and collider radii
    pub min_distance: f32,
    /// Collider center in world space; `y` is the collider's bottom
    pub collider_position: Vec3,
    /// Index of the collider within the owner's set
    pub collider_index: usize,
}

/// Vertical test cylinder of a probe (cursor ray hit, another moving object's bounds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointProbe {
    pub x: f32,
    pub z: f32,
    pub radius: f32,
    pub y: f32,
    pub height: f32,
}

impl PointProbe {
    pub fn new(x: f32, z: f32, radius: f32, y: f32, height: f32) -> Self {
        Self { x, z, radius, y, height }
    }
}
